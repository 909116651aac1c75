use crate::menu::Course;
use serde::{Deserialize, Serialize};

// User preferences saved to JSON. Menu items themselves are never saved.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigData {
    #[serde(default)] // Course preselected when adding a dish
    pub default_course: Course,
    #[serde(default)] // Last course chosen on the filter screen
    pub filter_course: Course,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_currency_code")] // Shown in the price input hint
    pub currency_code: String,
}

fn default_currency_symbol() -> String {
    "R".to_string() // South African rand
}

fn default_currency_code() -> String {
    "ZAR".to_string()
}

// Default values for a new configuration
impl Default for ConfigData {
    fn default() -> Self {
        Self {
            default_course: Course::Starters,
            filter_course: Course::Starters,
            currency_symbol: default_currency_symbol(),
            currency_code: default_currency_code(),
        }
    }
}
