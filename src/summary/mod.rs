//! Summary module - Totals, savings and chart series

mod calculator;

pub use calculator::{format_currency, ChartSeries, Summary, SummaryCalculator};
