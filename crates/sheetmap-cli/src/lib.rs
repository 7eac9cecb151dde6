//! CLI library components for sheetmap.

pub mod cli;
pub mod commands;
pub mod display;
pub mod logging;
