//! Harbor artifact size library
//!
//! This file serves as the library root for the hartisize crate, organizing
//! and exposing the modules that list a Harbor project, aggregate artifact
//! sizes per repository and render the report.

pub mod aggregate;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pagination;
pub mod registry;

pub use aggregate::{RepositorySizeSummary, aggregate};
pub use common::human_size;
pub use config::AppConfig;
pub use error::{HartisizeError, Result};
pub use pagination::{page_count, paginate};
