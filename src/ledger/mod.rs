//! Ledger module - Months, expenses and session state

mod book;
mod month;
mod state;

pub use book::{coerce_number, Expense, ExpenseInput, Ledger};
pub use month::Month;
pub use state::{ExpenseForm, LedgerError, TrackerState};
