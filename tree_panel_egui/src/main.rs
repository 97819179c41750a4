use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use tree_panel_core::{Document, RangePolicy};
use tree_panel_egui::app::{PanelConfig, TreePanelApp};
use tree_panel_egui::{cli, logging};

fn main() -> ExitCode {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    if logging::init(level).is_err() {
        eprintln!("Logging failed to start.");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    log::debug!("Starting main");

    let path = cli::options_path(std::env::args_os().skip(1))?;

    let document = Document::load(&path)
        .with_context(|| format!("Failed to load options file {}", path.display()))?;
    log::info!(
        "loaded {} with {} editable values",
        document.path().display(),
        document.leaf_count()
    );

    let config = PanelConfig::default();
    let options = eframe::NativeOptions {
        viewport: config.viewport(),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    let title = config.title.clone();
    let app = TreePanelApp::new(document, RangePolicy::default(), config);

    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow!("window closed with an error: {e}"))
}
