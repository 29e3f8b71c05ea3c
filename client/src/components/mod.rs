//! Reusable UI components.

mod json_panel;

pub use json_panel::JsonPanel;
