//! # pulse-components
//!
//! Leptos UI components for the Pulse Metrics Dashboard.

pub mod controls;
pub mod dashboard;
pub mod summary_bar;

pub use controls::*;
pub use dashboard::*;
pub use summary_bar::*;
