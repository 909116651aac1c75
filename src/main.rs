#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::process::exit;

use chef_menu::{
    util, Args, ChefMenu, Config, ConfigData, INITIAL_HEIGHT, INITIAL_WIDTH, PROGRAM_TITLE,
};
use clap::Parser;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::info!("Starting {}", PROGRAM_TITLE);

    let config_path = util::resolve_config_path(args.config)
        .to_string_lossy()
        .into_owned();
    let config = match Config::new(&config_path, ConfigData::default()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Error loading config file at {}: {}", config_path, e);
            exit(1)
        }
    };
    log::debug!("Using config file {}", config_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WIDTH, INITIAL_HEIGHT])
            .with_title(PROGRAM_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        PROGRAM_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ChefMenu::new(config)))),
    )
}
