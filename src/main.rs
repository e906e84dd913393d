mod app;
mod color;
mod state;
mod ui;

use anyhow::{Result, anyhow};
use app::VisionDashApp;
use eframe::egui;
use state::AppState;
use vision_dash::config::DashboardConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env()?;
    log::info!("Reading indicator tables from {}", config.data_dir.display());
    let state = AppState::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let arabic_font = config.arabic_font.clone();
    eframe::run_native(
        "Qatar Vision 2030 Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(VisionDashApp::new(cc, state, arabic_font.as_deref())))),
    )
    .map_err(|e| anyhow!("window closed with an error: {e}"))
}
