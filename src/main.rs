#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::Path;

use procwatch::config::MonitorConfig;

const CONFIG_FILE: &str = "procwatch.toml";

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = MonitorConfig::load_or_default(Path::new(CONFIG_FILE));
    log::info!("Starting with {:?}", config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Real Time Process Monitoring System")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "procwatch",
        native_options,
        Box::new(|cc| Ok(Box::new(procwatch::ProcessMonitorApp::new(cc, config)))),
    )
}
