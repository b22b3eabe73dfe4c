//! Control Panel Widget
//! Left card with income, month selector and the add-expense form.

use crate::ledger::{ExpenseForm, ExpenseInput, LedgerError, Month};
use crate::theme::Palette;
use egui::{Button, ComboBox, RichText, TextEdit};

/// Left card holding the bound input buffers.
#[derive(Default)]
pub struct ControlPanel {
    pub income_text: String,
    pub form: ExpenseForm,
    pub form_error: Option<LedgerError>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            income_text: "0".to_string(),
            ..Self::default()
        }
    }

    /// Submit the expense form; errors stay on the panel until the next success.
    pub fn submit_form(&mut self) -> ControlPanelAction {
        match self.form.submit() {
            Ok(input) => {
                self.form_error = None;
                ControlPanelAction::AddExpense(input)
            }
            Err(err) => {
                tracing::debug!(error = %err, "expense form blocked");
                self.form_error = Some(err);
                ControlPanelAction::None
            }
        }
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        selected_month: Month,
        palette: &Palette,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.label(
            RichText::new("Add Income & Expenses")
                .size(18.0)
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(12.0);

        let field_width = ui.available_width();

        // ===== Income =====
        ui.label(RichText::new("Monthly Income").size(12.0));
        let income = ui.add(
            TextEdit::singleline(&mut self.income_text)
                .desired_width(field_width)
                .hint_text("0"),
        );
        if income.changed() {
            action = ControlPanelAction::IncomeChanged(self.income_text.clone());
        }
        ui.add_space(10.0);

        // ===== Month =====
        ui.label(RichText::new("Select Month").size(12.0));
        ComboBox::from_id_salt("selected_month")
            .width(field_width)
            .selected_text(selected_month.name())
            .show_ui(ui, |ui| {
                for month in Month::ALL {
                    if ui
                        .selectable_label(month == selected_month, month.name())
                        .clicked()
                    {
                        action = ControlPanelAction::MonthSelected(month);
                    }
                }
            });
        ui.add_space(10.0);

        // ===== Expense form =====
        ui.label(RichText::new("Expense Name").size(12.0));
        let name = ui.add(
            TextEdit::singleline(&mut self.form.name)
                .desired_width(field_width)
                .hint_text("e.g. Rent"),
        );
        ui.add_space(10.0);

        ui.label(RichText::new("Expense Amount").size(12.0));
        let amount = ui.add(
            TextEdit::singleline(&mut self.form.amount)
                .desired_width(field_width)
                .hint_text("0.00"),
        );
        ui.add_space(12.0);

        let submitted_by_enter = (name.lost_focus() || amount.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let button = ui
            .scope(|ui| {
                let widgets = &mut ui.visuals_mut().widgets;
                widgets.inactive.weak_bg_fill = palette.button;
                widgets.hovered.weak_bg_fill = palette.button_hover;
                widgets.active.weak_bg_fill = palette.button_hover;
                ui.add(
                    Button::new(
                        RichText::new("Add Expense")
                            .size(15.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    )
                    .min_size(egui::vec2(field_width, 34.0)),
                )
            })
            .inner
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if button.clicked() || submitted_by_enter {
            action = self.submit_form();
        }

        if let Some(err) = &self.form_error {
            ui.add_space(6.0);
            ui.label(RichText::new(err.to_string()).size(11.0).color(palette.danger));
        }

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    IncomeChanged(String),
    MonthSelected(Month),
    AddExpense(ExpenseInput),
}
