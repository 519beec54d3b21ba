// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use skillmap::{config, export::heatmap, gui};

fn app_icon() -> IconData {
    let rgba = heatmap::icon(64);
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    skillmap::log::init(false, true);

    let state = match config::load(None) {
        Ok(opts) => config::AppState::new(opts),
        Err(e) => {
            tracing::warn!(error = %e, "config not loaded, using defaults");
            config::AppState::default()
        }
    };

    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(state, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
