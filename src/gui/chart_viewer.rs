//! Chart Viewer Widget
//! Full-width section below the two cards showing the overview chart and
//! its export controls.

use crate::charts::ChartPlotter;
use crate::summary::ChartSeries;
use crate::theme::Palette;
use egui::{RichText, Ui};
use std::path::PathBuf;

const CHART_HEIGHT: f32 = 320.0;

/// Actions triggered from the chart section
#[derive(Debug, Clone, PartialEq)]
pub enum ChartViewerAction {
    None,
    ExportPng,
    ExportJson,
    OpenExport(PathBuf),
}

/// Chart card plus the result of the latest export.
#[derive(Default)]
pub struct ChartViewer {
    pub last_export: Option<PathBuf>,
    pub status: Option<String>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn show(&mut self, ui: &mut Ui, series: &ChartSeries, palette: &Palette) -> ChartViewerAction {
        let mut action = ChartViewerAction::None;

        ChartPlotter::draw_overview(ui, series, palette, CHART_HEIGHT);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("🖼 Export PNG").clicked() {
                action = ChartViewerAction::ExportPng;
            }
            if ui.button("📄 Export JSON").clicked() {
                action = ChartViewerAction::ExportJson;
            }
            if let Some(path) = &self.last_export {
                if ui.button("📂 Open").clicked() {
                    action = ChartViewerAction::OpenExport(path.clone());
                }
            }
            if let Some(status) = &self.status {
                ui.label(RichText::new(status).size(11.0).color(palette.text_secondary));
            }
        });

        action
    }
}
