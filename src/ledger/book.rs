//! Expense Ledger Module
//! In-memory month -> expenses mapping and numeric input coercion.

use crate::ledger::Month;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    pub name: String,
    pub amount: f64,
}

/// Typed payload produced by the expense form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub name: String,
    pub amount: f64,
}

/// Expenses grouped by month, insertion ordered within each month.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: BTreeMap<Month, Vec<Expense>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense to the given month.
    pub fn add_expense(&mut self, month: Month, input: ExpenseInput) {
        self.entries.entry(month).or_default().push(Expense {
            name: input.name,
            amount: input.amount,
        });
    }

    /// Expenses recorded for a month; empty when none were added.
    pub fn expenses(&self, month: Month) -> &[Expense] {
        self.entries.get(&month).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove the expense at `index` for a month.
    pub fn remove_expense(&mut self, month: Month, index: usize) -> Option<Expense> {
        let list = self.entries.get_mut(&month)?;
        if index >= list.len() {
            return None;
        }
        let removed = list.remove(index);
        if list.is_empty() {
            self.entries.remove(&month);
        }
        Some(removed)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

/// Largest magnitude accepted from a numeric field.
pub const MAX_AMOUNT: f64 = 1e12;

/// Parse numeric text the way a numeric form field does.
///
/// Blank text is zero. Anything unparsable, non-finite or larger than
/// [`MAX_AMOUNT`] also becomes zero so sums stay finite and NaN never reaches
/// the totals.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= MAX_AMOUNT => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, amount: f64) -> ExpenseInput {
        ExpenseInput {
            name: name.to_string(),
            amount,
        }
    }

    #[test]
    fn empty_month_has_no_expenses() {
        let ledger = Ledger::new();
        assert!(ledger.expenses(Month::July).is_empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn keeps_insertion_order_per_month() {
        let mut ledger = Ledger::new();
        ledger.add_expense(Month::January, input("Rent", 1200.0));
        ledger.add_expense(Month::February, input("Rent", 1100.0));
        ledger.add_expense(Month::January, input("Food", 300.0));

        let names: Vec<&str> = ledger
            .expenses(Month::January)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rent", "Food"]);
        assert_eq!(ledger.expenses(Month::February).len(), 1);
    }

    #[test]
    fn duplicates_and_negative_amounts_are_accepted() {
        let mut ledger = Ledger::new();
        ledger.add_expense(Month::March, input("Refund", -50.0));
        ledger.add_expense(Month::March, input("Refund", -50.0));
        assert_eq!(ledger.expenses(Month::March).len(), 2);
    }

    #[test]
    fn remove_expense_by_index() {
        let mut ledger = Ledger::new();
        ledger.add_expense(Month::April, input("A", 1.0));
        ledger.add_expense(Month::April, input("B", 2.0));

        assert_eq!(ledger.remove_expense(Month::April, 5), None);
        assert_eq!(ledger.remove_expense(Month::May, 0), None);

        let removed = ledger.remove_expense(Month::April, 0);
        assert_eq!(removed.map(|e| e.name), Some("A".to_string()));
        assert_eq!(ledger.expenses(Month::April)[0].name, "B");

        ledger.remove_expense(Month::April, 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn coerces_numeric_text() {
        assert_eq!(coerce_number("3000"), 3000.0);
        assert_eq!(coerce_number("  12.5 "), 12.5);
        assert_eq!(coerce_number("-40"), -40.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
    }

    #[test]
    fn invalid_numeric_text_becomes_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("12abc"), 0.0);
    }

    #[test]
    fn oversized_numeric_text_becomes_zero() {
        assert_eq!(coerce_number("1e308"), 0.0);
        assert_eq!(coerce_number("-1e13"), 0.0);
        assert_eq!(coerce_number("1e12"), MAX_AMOUNT);
        assert_eq!(coerce_number("-1e12"), -MAX_AMOUNT);
    }
}
