//! # pagelinks-core
//!
//! Core types and utilities shared by the pagelinks crates.
//!
//! This crate provides the link and pagination types, error handling, query-string
//! encoding and configuration used to build paginated HTTP API responses.
//!
//! ## Modules
//!
//! - [`error`] - Error types and structured error responses
//! - [`types`] - Links, link collections and pagination options
//! - [`query`] - Deterministic query-string builder
//! - [`config`] - Pagination defaults and parameter names

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use config::PaginationConfig;
pub use error::{Error, Result};
pub use query::QueryParams;
pub use types::{Link, Links, Options};
