use crate::menu::Price;
use log::warn;
use std::path::PathBuf;

// Default preferences file name
pub const CONFIG_FILE_NAME: &str = "chef_menu.json";

// Formats `price` with the configured currency symbol, e.g. `R25.00`
pub fn format_price(symbol: &str, price: Price) -> String {
    format!("{}{}", symbol, price)
}

// Picks the preferences file: the command line override if given, otherwise
// `chef_menu.json` in the platform config directory (or the current
// directory when the platform has none).
pub fn resolve_config_path(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }
    match dirs::config_dir() {
        Some(dir) => dir.join(CONFIG_FILE_NAME),
        None => {
            warn!("No platform config directory, using the current directory.");
            PathBuf::from(".").join(CONFIG_FILE_NAME)
        }
    }
}
