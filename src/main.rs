mod app;
mod args;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::DashboardApp;
use args::Args;
use clap::Parser;
use eframe::egui;

use crate::chart::render::render;
use crate::data::filter::Year;
use crate::data::loader::load_file;
use crate::state::AppState;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let dataset = load_file(&args.data)
        .inspect_err(|e| log::error!("Failed to load dataset: {e}"))
        .with_context(|| format!("loading {}", args.data.display()))?;
    log::info!(
        "Loaded {} records with columns {:?}",
        dataset.len(),
        dataset.columns()
    );

    let year = args.year.as_deref().and_then(Year::parse);
    if year.is_none() && args.year.as_deref().is_some_and(|y| !y.trim().is_empty()) {
        log::warn!("--year is not a number, showing all years");
    }

    if args.print {
        let charts = render(&dataset, year);
        let json = serde_json::to_string_pretty(&charts).context("serializing charts")?;
        println!("{json}");
        return Ok(());
    }

    let state = AppState::new(dataset, args.data.display().to_string(), year);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Social Media Usage",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
