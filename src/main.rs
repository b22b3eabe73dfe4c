//! Expense Tracker - Monthly Expense & Income Tracker
//!
//! A Rust application for recording monthly expenses against a shared income
//! and displaying totals, savings and an interactive overview chart.

mod charts;
mod export;
mod gui;
mod ledger;
mod summary;
mod theme;

use eframe::egui;
use gui::ExpenseApp;
use tracing_subscriber::EnvFilter;

const APP_NAME: &str = "Expense Tracker";
const DEFAULT_LOG_FILTER: &str = "expense_tracker=info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([480.0, 600.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    tracing::info!("starting {}", APP_NAME);

    // Run the application
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(ExpenseApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run {}: {}", APP_NAME, e))
}
