//! CLI library components for formsweep.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
