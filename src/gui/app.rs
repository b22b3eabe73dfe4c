//! Expense Tracker Main Application
//! Header with theme toggle, form and summary cards, full-width chart section.

use crate::charts::ChartExporter;
use crate::export::{ExportKind, SummaryExporter};
use crate::gui::{ChartViewer, ChartViewerAction, ControlPanel, ControlPanelAction, SummaryPanel};
use crate::ledger::TrackerState;
use crate::summary::SummaryCalculator;
use crate::theme::{Palette, ThemeController, ThemeMode};
use egui::{RichText, ScrollArea};

const CARD_SPACING: f32 = 24.0;
const EXPORT_SIZE: (u32, u32) = (1400, 800);

/// Main application window.
pub struct ExpenseApp {
    state: TrackerState,
    theme: ThemeController,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl ExpenseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = ThemeController::load(cc.storage);
        theme.apply(&cc.egui_ctx);

        Self {
            state: TrackerState::new(),
            theme,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
        }
    }

    fn handle_control_action(&mut self, action: ControlPanelAction) {
        match action {
            ControlPanelAction::IncomeChanged(text) => self.state.set_income(&text),
            ControlPanelAction::MonthSelected(month) => self.state.select_month(month),
            ControlPanelAction::AddExpense(input) => self.state.add_expense(input),
            ControlPanelAction::None => {}
        }
    }

    fn handle_chart_action(&mut self, action: ChartViewerAction) {
        match action {
            ChartViewerAction::ExportPng => self.handle_export(ExportKind::ChartPng),
            ChartViewerAction::ExportJson => self.handle_export(ExportKind::SummaryJson),
            ChartViewerAction::OpenExport(path) => {
                if let Err(e) = open::that(&path) {
                    tracing::warn!(path = %path.display(), error = %e, "could not open export");
                    self.chart_viewer.set_status(format!("Open error: {}", e));
                }
            }
            ChartViewerAction::None => {}
        }
    }

    /// Ask for a destination and write the chosen export
    fn handle_export(&mut self, kind: ExportKind) {
        let Some(path) = kind.pick_destination() else {
            return; // User cancelled
        };

        let result = match kind {
            ExportKind::ChartPng => {
                let series = SummaryCalculator::chart_series(&self.state.ledger, self.state.income);
                ChartExporter::export_png(&path, &series, self.theme.palette(), EXPORT_SIZE)
            }
            ExportKind::SummaryJson => {
                let summary = SummaryCalculator::summarize(
                    &self.state.ledger,
                    self.state.income,
                    self.state.selected_month,
                );
                SummaryExporter::export_json(&path, &summary)
            }
        };

        match result {
            Ok(()) => {
                self.chart_viewer
                    .set_status(format!("Exported to {}", path.display()));
                self.chart_viewer.last_export = Some(path);
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.chart_viewer.set_status(format!("Error: {}", e));
            }
        }
    }

    fn card<R>(ui: &mut egui::Ui, palette: &Palette, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
        egui::Frame::none()
            .fill(palette.card)
            .rounding(8.0)
            .inner_margin(20.0)
            .show(ui, add)
            .inner
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        let palette = self.theme.palette();
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Expense Calculator")
                    .size(24.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (icon, hint) = match self.theme.mode() {
                    ThemeMode::Dark => ("☀", "Switch to light mode"),
                    ThemeMode::Light => ("🌙", "Switch to dark mode"),
                };
                let toggle = egui::Button::new(
                    RichText::new(icon).size(20.0).color(palette.toggle_icon),
                )
                .frame(false);
                if ui.add(toggle).on_hover_text(hint).clicked() {
                    self.theme.toggle();
                    self.theme.apply(ui.ctx());
                }
            });
        });
    }
}

impl eframe::App for ExpenseApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    self.show_header(ui);
                    ui.add_space(CARD_SPACING);

                    let palette = self.theme.palette();
                    let summary = SummaryCalculator::summarize(
                        &self.state.ledger,
                        self.state.income,
                        self.state.selected_month,
                    );

                    // Two cards side by side, stacked when narrow
                    let mut control_action = ControlPanelAction::None;
                    let mut remove = None;
                    let wide = ui.available_width() >= 720.0;
                    let card_width = if wide {
                        (ui.available_width() - CARD_SPACING) / 2.0 - 40.0
                    } else {
                        ui.available_width() - 40.0
                    };

                    let layout = if wide {
                        egui::Layout::left_to_right(egui::Align::Min)
                    } else {
                        egui::Layout::top_down(egui::Align::Min)
                    };
                    ui.with_layout(layout, |ui| {
                        Self::card(ui, palette, |ui| {
                            ui.set_width(card_width);
                            control_action =
                                self.control_panel
                                    .show(ui, self.state.selected_month, palette);
                        });
                        ui.add_space(CARD_SPACING);
                        Self::card(ui, palette, |ui| {
                            ui.set_width(card_width);
                            remove = SummaryPanel::show(
                                ui,
                                &summary,
                                self.state.selected_expenses(),
                                palette,
                            );
                        });
                    });

                    if control_action != ControlPanelAction::None || remove.is_some() {
                        ui.ctx().request_repaint();
                    }
                    self.handle_control_action(control_action);
                    if let Some(index) = remove {
                        self.state.remove_expense(index);
                    }

                    ui.add_space(CARD_SPACING);

                    // Full-width chart section
                    let series =
                        SummaryCalculator::chart_series(&self.state.ledger, self.state.income);
                    let chart_action = Self::card(ui, palette, |ui| {
                        ui.set_width(ui.available_width());
                        self.chart_viewer.show(ui, &series, palette)
                    });
                    self.handle_chart_action(chart_action);
                    ui.add_space(8.0);
                });
        });

        if let Some(storage) = frame.storage_mut() {
            self.theme.persist(storage);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.theme.persist(storage);
    }
}
