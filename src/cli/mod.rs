//! Command line interface module
//!
//! This module provides argument parsing and the runner that wires the
//! registry client, the aggregation and the report together.

pub mod args;
pub mod runner;

pub use args::Args;
pub use runner::Runner;
