//! Display models for CLI output

pub mod display;

pub use display::{PanelView, StatRow, panel_rows};
