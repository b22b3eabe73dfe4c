//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod summary_panel;

pub use app::ExpenseApp;
pub use chart_viewer::{ChartViewer, ChartViewerAction};
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use summary_panel::SummaryPanel;
