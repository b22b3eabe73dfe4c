//! Chart Plotter Module
//! Draws the monthly overview line chart using egui_plot.

use crate::ledger::Month;
use crate::summary::ChartSeries;
use crate::theme::Palette;
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

pub const CHART_TITLE: &str = "Monthly Financial Overview";

/// One labelled line of the overview chart.
pub struct SeriesLine<'a> {
    pub label: &'static str,
    pub values: &'a [f64; 12],
    pub color: Color32,
}

/// Draws the Expenses / Income / Savings chart.
pub struct ChartPlotter;

impl ChartPlotter {
    /// The three chart lines in legend order.
    pub fn lines<'a>(series: &'a ChartSeries, palette: &Palette) -> [SeriesLine<'a>; 3] {
        [
            SeriesLine {
                label: "Expenses",
                values: &series.expenses,
                color: palette.expenses,
            },
            SeriesLine {
                label: "Income",
                values: &series.income,
                color: palette.income,
            },
            SeriesLine {
                label: "Savings",
                values: &series.savings,
                color: palette.savings,
            },
        ]
    }

    /// Axis label for an x position; blank between months.
    pub fn month_label(x: f64) -> String {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        Month::from_index(rounded as usize)
            .map(|m| m.short_name().to_string())
            .unwrap_or_default()
    }

    /// Draw the overview chart filling the available width.
    pub fn draw_overview(ui: &mut egui::Ui, series: &ChartSeries, palette: &Palette, height: f32) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(CHART_TITLE)
                    .size(16.0)
                    .strong()
                    .color(palette.text_primary),
            );
        });
        ui.add_space(6.0);

        Plot::new("monthly_overview")
            .height(height)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(0.0)
            .include_x(11.0)
            .include_y(0.0)
            .x_grid_spacer(|_input| {
                (0..12)
                    .map(|i| egui_plot::GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(|mark, _range| Self::month_label(mark.value))
            .label_formatter(|name, value| {
                let month = Self::month_label(value.x);
                if name.is_empty() {
                    month
                } else {
                    format!("{}\n{}: {:.2}", month, name, value.y)
                }
            })
            .show(ui, |plot_ui| {
                for line in Self::lines(series, palette) {
                    let points: Vec<[f64; 2]> = line
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| [i as f64, v])
                        .collect();

                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points.iter().copied()))
                            .color(line.color)
                            .width(2.0)
                            .name(line.label),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points.iter().copied()))
                            .radius(3.0)
                            .color(line.color)
                            .name(line.label),
                    );
                }
            });
    }
}
