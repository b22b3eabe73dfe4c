//! Static Chart Renderer
//! Renders the monthly overview chart to a PNG file with plotters.
//!
//! Layout:
//! 1. Title: "Monthly Financial Overview" centered
//! 2. Line chart with one point per month for Expenses, Income and Savings
//! 3. Series legend in the upper right corner

use crate::charts::plotter::{ChartPlotter, CHART_TITLE};
use crate::export::ExportError;
use crate::summary::ChartSeries;
use crate::theme::Palette;
use egui::Color32;
use plotters::prelude::*;
use std::path::Path;

/// Headroom added above and below the plotted values.
const Y_PADDING_RATIO: f64 = 0.1;
/// Axis bounds are clamped to this magnitude so plotters gets a finite range.
const Y_AXIS_LIMIT: f64 = 1e15;

fn axis_bound(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-Y_AXIS_LIMIT, Y_AXIS_LIMIT)
    }
}

fn rgb(color: Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

/// Writes the overview chart to disk as a PNG image.
pub struct ChartExporter;

impl ChartExporter {
    /// Y axis bounds with padding; a flat chart still gets a visible range.
    /// Bounds are always finite.
    pub fn y_range(series: &ChartSeries) -> (f64, f64) {
        let (lo, hi) = series.value_range();
        let (lo, hi) = (axis_bound(lo), axis_bound(hi));
        let span = hi - lo;
        if span <= f64::EPSILON {
            return (lo - 1.0, hi + 1.0);
        }
        let pad = span * Y_PADDING_RATIO;
        (lo - pad, hi + pad)
    }

    pub fn export_png(
        path: &Path,
        series: &ChartSeries,
        palette: &Palette,
        size: (u32, u32),
    ) -> Result<(), ExportError> {
        Self::draw(path, series, palette, size).map_err(|e| ExportError::Render(e.to_string()))?;
        tracing::info!(path = %path.display(), "chart exported");
        Ok(())
    }

    fn draw(
        path: &Path,
        series: &ChartSeries,
        palette: &Palette,
        size: (u32, u32),
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&rgb(palette.background))?;

        let text_color = rgb(palette.text_primary);
        let (y_min, y_max) = Self::y_range(series);

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 28).into_font().color(&text_color))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.25f64..11.25f64, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_labels(12)
            .x_label_formatter(&|x: &f64| ChartPlotter::month_label(*x))
            .y_label_formatter(&|y: &f64| format!("{:.0}", y))
            .label_style(("sans-serif", 14).into_font().color(&text_color))
            .axis_style(text_color)
            .light_line_style(rgb(palette.card))
            .bold_line_style(rgb(palette.input_border))
            .draw()?;

        for line in ChartPlotter::lines(series, palette) {
            let color = rgb(line.color);
            let points: Vec<(f64, f64)> = line
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect();

            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
                .label(line.label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(rgb(palette.card).mix(0.9))
            .border_style(rgb(palette.input_border))
            .label_font(("sans-serif", 14).into_font().color(&text_color))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ExpenseInput, Ledger, Month};
    use crate::summary::SummaryCalculator;

    #[test]
    fn flat_chart_gets_unit_range() {
        let series = SummaryCalculator::chart_series(&Ledger::new(), 0.0);
        assert_eq!(ChartExporter::y_range(&series), (-1.0, 1.0));
    }

    #[test]
    fn range_is_padded_around_values() {
        let mut ledger = Ledger::new();
        ledger.add_expense(
            Month::March,
            ExpenseInput {
                name: "Laptop".into(),
                amount: 200.0,
            },
        );
        let series = SummaryCalculator::chart_series(&ledger, 100.0);
        // values span -100..200
        let (lo, hi) = ChartExporter::y_range(&series);
        assert!((lo - -130.0).abs() < 1e-9);
        assert!((hi - 230.0).abs() < 1e-9);
    }

    #[test]
    fn infinite_values_still_give_finite_range() {
        let series = ChartSeries {
            expenses: [f64::INFINITY; 12],
            income: [0.0; 12],
            savings: [f64::NEG_INFINITY; 12],
        };
        let (lo, hi) = ChartExporter::y_range(&series);
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo < hi);
    }

    #[test]
    fn overflowing_ledger_gives_finite_range() {
        let mut ledger = Ledger::new();
        for _ in 0..2 {
            ledger.add_expense(
                Month::January,
                ExpenseInput {
                    name: "Overflow".into(),
                    amount: 1e308,
                },
            );
        }
        let series = SummaryCalculator::chart_series(&ledger, 0.0);
        let (lo, hi) = ChartExporter::y_range(&series);
        assert!(lo.is_finite() && hi.is_finite());
        assert!(hi <= Y_AXIS_LIMIT * (1.0 + Y_PADDING_RATIO * 2.0) + 1.0);
    }
}
