//! Command implementations.

pub mod chart;
pub mod clean;
pub mod stats;
