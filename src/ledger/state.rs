//! Tracker State Module
//! Session state (ledger, income, selected month) and the bound expense form.

use crate::ledger::{coerce_number, Expense, ExpenseInput, Ledger, Month};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Expense name is required")]
    NameRequired,
    #[error("Expense amount is required")]
    AmountRequired,
}

/// Everything the summary and chart are derived from.
#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    pub ledger: Ledger,
    pub income: f64,
    pub selected_month: Month,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the shared monthly income from raw field text.
    pub fn set_income(&mut self, text: &str) {
        self.income = coerce_number(text);
    }

    pub fn select_month(&mut self, month: Month) {
        self.selected_month = month;
    }

    /// Append to the currently selected month.
    pub fn add_expense(&mut self, input: ExpenseInput) {
        tracing::debug!(
            month = %self.selected_month,
            name = %input.name,
            amount = input.amount,
            "expense added"
        );
        self.ledger.add_expense(self.selected_month, input);
    }

    /// Remove from the currently selected month.
    pub fn remove_expense(&mut self, index: usize) -> Option<Expense> {
        let removed = self.ledger.remove_expense(self.selected_month, index);
        if let Some(expense) = &removed {
            tracing::debug!(month = %self.selected_month, name = %expense.name, "expense removed");
        }
        removed
    }

    pub fn selected_expenses(&self) -> &[Expense] {
        self.ledger.expenses(self.selected_month)
    }
}

/// Text buffers bound to the expense name and amount fields.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
}

impl ExpenseForm {
    /// Validate required fields, build the input and reset the buffers.
    ///
    /// On error the buffers are left untouched.
    pub fn submit(&mut self) -> Result<ExpenseInput, LedgerError> {
        if self.name.trim().is_empty() {
            return Err(LedgerError::NameRequired);
        }
        if self.amount.trim().is_empty() {
            return Err(LedgerError::AmountRequired);
        }

        let input = ExpenseInput {
            name: self.name.trim().to_string(),
            amount: coerce_number(&self.amount),
        };
        self.name.clear();
        self.amount.clear();
        Ok(input)
    }
}
