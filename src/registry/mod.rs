//! Registry module for Harbor interactions
//!
//! This module provides the listing operations the size report consumes, the
//! wire models they return, and a reqwest-backed Harbor v2.0 client.

pub mod api;
pub mod client;
pub mod models;

pub use api::RegistryApi;
pub use client::{HarborClient, HarborClientBuilder};
pub use models::{ArtifactRecord, Page, PageQuery, RepositoryRef};
