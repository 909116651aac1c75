pub mod about;
pub mod config;
pub mod form;
pub mod menu;
pub mod state;
pub mod ui;
pub mod util;

pub use crate::config::ConfigData;
pub use crate::form::MenuForm;
pub use crate::menu::{Course, MenuItem, MenuStore, Price};
pub use crate::state::State;

use clap::Parser;
use eframe::{egui, glow};
use std::path::PathBuf;

// Constants
pub const PROGRAM_TITLE: &str = "Chef's Menu";
pub const INITIAL_WIDTH: f32 = 480.0;
pub const INITIAL_HEIGHT: f32 = 640.0;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Preferences file to use instead of the platform default
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub use fast_config::Config;

// The main application struct
pub struct ChefMenu {
    // Navigation
    pub state: State,
    pub alert: Option<String>, // Message of the open modal, if any

    // The one menu every screen reads and edits
    pub store: MenuStore,
    pub form: MenuForm,
    pub filter_course: Course,

    // Configuration
    pub config: Config<ConfigData>,
}

impl ChefMenu {
    pub fn new(config: Config<ConfigData>) -> Self {
        Self {
            state: State::Initialising,
            alert: None,
            store: MenuStore::default(),
            form: MenuForm::default(),
            filter_course: Course::default(),
            config,
        }
    }

    // Apply saved preferences, called once on the first frame
    pub fn init(&mut self) {
        let prefs = &self.config.data;
        self.store.set_default_course(prefs.default_course);
        self.form = MenuForm::new(prefs.default_course);
        self.filter_course = prefs.filter_course;

        self.state = State::Home;
        log::info!("Initialization complete. State set to Home.");
    }

    pub fn navigate(&mut self, to: State) {
        log::debug!("Navigating from {:?} to {:?}", self.state, to);
        self.state = to;
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.data.currency_symbol
    }

    // Remember the filter course and write preferences back to disk
    pub fn shutdown_app(&mut self) {
        log::info!("Shutdown requested.");
        self.config.data.filter_course = self.filter_course;

        if let Err(e) = self.config.save() {
            log::error!("Failed to save configuration on exit: {}", e);
        } else {
            log::info!("Configuration saved.");
        }
        log::info!(
            "Shutdown complete, discarding {} menu item(s).",
            self.store.len()
        );
    }
}

impl eframe::App for ChefMenu {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let modal_open = self.alert.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| match self.state {
                State::Initialising => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Initialising...");
                    });
                    self.init();
                }
                State::Home => ui::draw_home_screen(self, ui, ctx),
                State::ManageMenu => ui::draw_manage_screen(self, ui),
                State::FilterMenu => ui::draw_filter_screen(self, ui),
                State::About => ui::draw_about_screen(self, ui),
            });
        });

        ui::draw_alert(self, ctx);
    }

    // Called when the application is about to close
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.shutdown_app();
    }
}
