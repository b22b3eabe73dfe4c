//! Summary Panel Widget
//! Right card with the selected month's totals, yearly totals and itemized list.

use crate::ledger::Expense;
use crate::summary::{format_currency, Summary};
use crate::theme::Palette;
use egui::{RichText, ScrollArea};

const LIST_MAX_HEIGHT: f32 = 180.0;

/// Draws the textual summary; returns the index of an expense to remove.
pub struct SummaryPanel;

impl SummaryPanel {
    pub fn show(
        ui: &mut egui::Ui,
        summary: &Summary,
        expenses: &[Expense],
        palette: &Palette,
    ) -> Option<usize> {
        let mut remove = None;
        let month = summary.selected.month;

        ui.label(
            RichText::new("Summary")
                .size(18.0)
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(12.0);

        Self::row(ui, "Selected Month:", month.name());
        Self::row(
            ui,
            "Total Monthly Expenses:",
            &format_currency(summary.selected.total_expenses),
        );
        Self::row(
            ui,
            &format!("Savings for {}:", month),
            &format_currency(summary.selected.displayed_savings()),
        );
        ui.add_space(10.0);

        Self::row(
            ui,
            "Yearly Total Expenses:",
            &format_currency(summary.yearly.total_expenses),
        );
        Self::row(
            ui,
            "Yearly Total Savings:",
            &format_currency(summary.yearly.total_savings),
        );

        ui.add_space(14.0);
        ui.separator();
        ui.add_space(6.0);

        ui.label(
            RichText::new(format!("Expenses for {}", month))
                .size(14.0)
                .strong(),
        );
        ui.add_space(6.0);

        if expenses.is_empty() {
            ui.label(
                RichText::new("No expenses recorded for this month.")
                    .size(12.0)
                    .color(palette.text_secondary),
            );
            return None;
        }

        ScrollArea::vertical()
            .id_salt("expense_list")
            .max_height(LIST_MAX_HEIGHT)
            .show(ui, |ui| {
                egui::Grid::new("expense_list_grid")
                    .striped(true)
                    .num_columns(3)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for (i, expense) in expenses.iter().enumerate() {
                            ui.label(RichText::new(&expense.name).size(12.0));
                            ui.label(RichText::new(format_currency(expense.amount)).size(12.0));
                            let delete = ui
                                .small_button(RichText::new("✖").color(palette.danger))
                                .on_hover_text("Remove expense");
                            if delete.clicked() {
                                remove = Some(i);
                            }
                            ui.end_row();
                        }
                    });
            });

        remove
    }

    fn row(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(label).size(13.0));
            ui.label(RichText::new(value).size(13.0).strong());
        });
    }
}
