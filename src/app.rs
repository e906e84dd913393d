use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct VisionDashApp {
    pub state: AppState,
}

impl VisionDashApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, arabic_font: Option<&Path>) -> Self {
        if let Some(path) = arabic_font {
            match install_fallback_font(&cc.egui_ctx, path) {
                Ok(()) => log::info!("Installed fallback font {}", path.display()),
                Err(e) => log::warn!("Arabic labels may not render: {e:#}"),
            }
        }
        Self { state }
    }
}

/// Append the font at `path` to both families so glyphs missing from the
/// built-in fonts resolve to it.
fn install_fallback_font(ctx: &egui::Context, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    let name = "arabic_fallback".to_string();

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(name.clone(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(name.clone());
    }
    ctx.set_fonts(fonts);
    Ok(())
}

impl eframe::App for VisionDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: year range and tabs ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::tab_view(ui, &self.state);
        });
    }
}
