use chef_menu::menu::{Course, Field, MenuError, MenuItemDraft};
use chef_menu::{ChefMenu, Config, ConfigData, State};
use std::path::PathBuf;

// Preferences file unique to one test so parallel tests don't share it
fn temp_config_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "chef_menu_{}_{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn app_with(path: &PathBuf, data: ConfigData) -> ChefMenu {
    let path = path.to_string_lossy().into_owned();
    let config = Config::new(&path, data).unwrap();
    ChefMenu::new(config)
}

#[test]
fn test_init_applies_default_course() {
    let path = temp_config_path("init");
    let mut app = app_with(
        &path,
        ConfigData {
            default_course: Course::Dessert,
            filter_course: Course::Mains,
            ..ConfigData::default()
        },
    );
    assert_eq!(app.state, State::Initialising);

    app.init();

    assert_eq!(app.state, State::Home);
    assert_eq!(app.form.course, Course::Dessert);
    assert_eq!(app.filter_course, Course::Mains);

    let item = app
        .store
        .add(MenuItemDraft {
            dish_name: "Koeksister".to_string(),
            description: "Syrup-soaked".to_string(),
            course: None,
            price: "15".to_string(),
        })
        .unwrap();
    assert_eq!(item.course, Course::Dessert);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_navigation() {
    let path = temp_config_path("navigate");
    let mut app = app_with(&path, ConfigData::default());
    app.init();

    app.navigate(State::ManageMenu);
    assert_eq!(app.state, State::ManageMenu);
    app.navigate(State::Home);
    assert_eq!(app.state, State::Home);
    app.navigate(State::FilterMenu);
    assert_eq!(app.state, State::FilterMenu);
    app.navigate(State::Home);
    assert_eq!(app.state, State::Home);
    app.navigate(State::About);
    assert_eq!(app.state, State::About);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_rejected_add_opens_alert() {
    let path = temp_config_path("alert");
    let mut app = app_with(&path, ConfigData::default());
    app.init();
    app.navigate(State::ManageMenu);

    app.form.dish_name = "Bobotie".to_string();
    app.form.price = "95".to_string();
    app.handle_add_item();

    assert_eq!(
        app.alert.as_deref(),
        Some(MenuError::MissingField(Field::Description).to_string().as_str())
    );
    assert!(app.store.is_empty());
    // Inputs survive so the chef can fix them
    assert_eq!(app.form.dish_name, "Bobotie");
    assert_eq!(app.state, State::ManageMenu);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_accepted_add_shows_on_home() {
    let path = temp_config_path("add");
    let mut app = app_with(&path, ConfigData::default());
    app.init();
    app.navigate(State::ManageMenu);

    app.form.dish_name = "Soup".to_string();
    app.form.description = "Butternut".to_string();
    app.form.price = "25.00".to_string();
    app.handle_add_item();
    assert!(app.alert.is_none());

    app.navigate(State::Home);
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.average_price(Course::Starters).to_string(), "25.00");

    let id = app.store.iter().next().unwrap().id;
    app.handle_remove_item(&id);
    assert!(app.store.is_empty());
    // A second removal is ignored
    app.handle_remove_item(&id);
    assert!(app.store.is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_shutdown_saves_filter_course() {
    let path = temp_config_path("shutdown");
    let mut app = app_with(&path, ConfigData::default());
    app.init();

    app.filter_course = Course::Mains;
    app.shutdown_app();
    assert_eq!(app.config.data.filter_course, Course::Mains);

    // A later run picks the saved course up again
    let mut reopened = app_with(&path, ConfigData::default());
    reopened.init();
    assert_eq!(reopened.filter_course, Course::Mains);

    let _ = std::fs::remove_file(&path);
}
