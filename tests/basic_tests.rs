use chef_menu::about;
use chef_menu::config::ConfigData;
use chef_menu::menu::Course;
use chef_menu::state::State;
use chef_menu::util::{format_price, resolve_config_path, CONFIG_FILE_NAME};
use chef_menu::Price;
use std::path::PathBuf;

#[test]
fn test_config_data_default() {
    let config = ConfigData::default();

    assert_eq!(config.default_course, Course::Starters);
    assert_eq!(config.filter_course, Course::Starters);
    assert_eq!(config.currency_symbol, "R");
    assert_eq!(config.currency_code, "ZAR");
}

#[test]
fn test_course_display() {
    assert_eq!(format!("{}", Course::Starters), "Starters");
    assert_eq!(format!("{}", Course::Mains), "Mains");
    assert_eq!(format!("{}", Course::Dessert), "Dessert");
}

#[test]
fn test_course_order_and_default() {
    assert_eq!(Course::ALL, [Course::Starters, Course::Mains, Course::Dessert]);
    // The add form preselects Starters
    assert_eq!(Course::default(), Course::Starters);
}

#[test]
fn test_state_enum() {
    let screens = [
        State::Initialising,
        State::Home,
        State::ManageMenu,
        State::FilterMenu,
        State::About,
    ];

    for (i, a) in screens.iter().enumerate() {
        for (j, b) in screens.iter().enumerate() {
            assert_eq!(i == j, a == b, "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_format_price() {
    assert_eq!(format_price("R", Price::from_cents(2500)), "R25.00");
    assert_eq!(format_price("R", Price::from_cents(7)), "R0.07");
    assert_eq!(format_price("$", Price::ZERO), "$0.00");
}

#[test]
fn test_resolve_config_path() {
    // An explicit path always wins
    let custom = PathBuf::from("/tmp/my_menu_prefs.json");
    assert_eq!(resolve_config_path(Some(custom.clone())), custom);

    let default = resolve_config_path(None);
    assert_eq!(
        default.file_name().and_then(|name| name.to_str()),
        Some(CONFIG_FILE_NAME)
    );
}

#[test]
fn test_about_text() {
    let lines = about::about();
    assert!(!lines.is_empty());
    assert!(lines.iter().any(|line| line.contains(env!("CARGO_PKG_VERSION"))));
}
