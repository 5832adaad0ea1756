//! CLI library components for the MDR comparison.

pub mod config;
pub mod logging;
pub mod pipeline;
