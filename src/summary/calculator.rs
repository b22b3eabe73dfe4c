//! Summary Calculator Module
//! Monthly and yearly totals, savings and chart series derived from the ledger.

use crate::ledger::{Expense, Ledger, Month};
use serde::Serialize;

/// Totals for the selected month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthSummary {
    pub month: Month,
    pub total_expenses: f64,
    /// income - total_expenses, may be negative.
    pub savings: f64,
}

impl MonthSummary {
    /// Savings as shown in the summary block, never below zero.
    pub fn displayed_savings(&self) -> f64 {
        self.savings.max(0.0)
    }
}

/// Totals across all twelve months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyTotals {
    pub total_expenses: f64,
    pub total_savings: f64,
}

/// One point per month for each chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub expenses: [f64; 12],
    pub income: [f64; 12],
    pub savings: [f64; 12],
}

impl ChartSeries {
    /// Lowest and highest value across all series, always spanning zero.
    pub fn value_range(&self) -> (f64, f64) {
        self.expenses
            .iter()
            .chain(self.income.iter())
            .chain(self.savings.iter())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthRow {
    pub month: Month,
    pub expenses: Vec<Expense>,
    pub total_expenses: f64,
    pub savings: f64,
}

/// Full snapshot of the tracker, used for JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub income: f64,
    pub selected: MonthSummary,
    pub yearly: YearlyTotals,
    pub months: Vec<MonthRow>,
}

/// Keep a derived value finite: NaN becomes 0 and overflow saturates.
fn finite(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// Pure derivations over (ledger, income, selected month).
pub struct SummaryCalculator;

impl SummaryCalculator {
    pub fn monthly_total(ledger: &Ledger, month: Month) -> f64 {
        finite(ledger.expenses(month).iter().map(|e| finite(e.amount)).sum())
    }

    /// Totals for every month in calendar order.
    pub fn monthly_totals(ledger: &Ledger) -> [f64; 12] {
        Month::ALL.map(|m| Self::monthly_total(ledger, m))
    }

    /// Yearly expenses are always the sum of the twelve monthly totals.
    pub fn yearly_totals(ledger: &Ledger, income: f64) -> YearlyTotals {
        let total_expenses = finite(Self::monthly_totals(ledger).iter().sum());
        YearlyTotals {
            total_expenses,
            total_savings: finite(finite(income * 12.0) - total_expenses),
        }
    }

    pub fn month_summary(ledger: &Ledger, income: f64, month: Month) -> MonthSummary {
        let total_expenses = Self::monthly_total(ledger, month);
        MonthSummary {
            month,
            total_expenses,
            savings: finite(income - total_expenses),
        }
    }

    pub fn chart_series(ledger: &Ledger, income: f64) -> ChartSeries {
        let expenses = Self::monthly_totals(ledger);
        let income = finite(income);
        ChartSeries {
            expenses,
            income: [income; 12],
            savings: expenses.map(|total| finite(income - total)),
        }
    }

    pub fn summarize(ledger: &Ledger, income: f64, selected: Month) -> Summary {
        let months = Month::ALL
            .iter()
            .map(|&month| {
                let total_expenses = Self::monthly_total(ledger, month);
                MonthRow {
                    month,
                    expenses: ledger.expenses(month).to_vec(),
                    total_expenses,
                    savings: finite(income - total_expenses),
                }
            })
            .collect();

        Summary {
            income,
            selected: Self::month_summary(ledger, income, selected),
            yearly: Self::yearly_totals(ledger, income),
            months,
        }
    }
}

/// Format an amount as dollars with two decimals.
///
/// Rounds to cents before picking the sign, so nothing prints as `-$0.00`.
pub fn format_currency(value: f64) -> String {
    let cents = (value * 100.0).round();
    if cents < 0.0 {
        format!("-${:.2}", -cents / 100.0)
    } else {
        format!("${:.2}", cents.abs() / 100.0)
    }
}
