//! Configuration for pagination defaults.
//!
//! [`PaginationConfig`] holds the window used when a request carries no valid
//! `page`/`limit` values, and the query parameter names to read them from.

use crate::types::{Options, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::Error;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default query parameter carrying the page number.
pub const DEFAULT_PAGE_PARAM: &str = "page";
/// Default query parameter carrying the page size.
pub const DEFAULT_LIMIT_PARAM: &str = "limit";

/// Pagination defaults and parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PaginationConfig {
    /// Page used when the request has no valid page value
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub default_page: u64,

    /// Page size used when the request has no valid limit value
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub default_limit: u64,

    /// Query parameter carrying the page number
    #[validate(length(min = 1))]
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// Query parameter carrying the page size
    #[validate(length(min = 1))]
    #[serde(default = "default_limit_param")]
    pub limit_param: String,
}

const fn default_page() -> u64 {
    DEFAULT_PAGE
}

const fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn default_page_param() -> String {
    DEFAULT_PAGE_PARAM.to_string()
}

fn default_limit_param() -> String {
    DEFAULT_LIMIT_PARAM.to_string()
}

impl PaginationConfig {
    /// Create a configuration with the given default page size.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (e.g. a zero limit).
    pub fn new(default_limit: u64) -> Result<Self, Error> {
        let config = Self {
            default_limit,
            ..Self::default()
        };

        config.validate().map_err(|e| {
            Error::ConfigError(format!("Invalid pagination configuration: {e}"))
        })?;

        Ok(config)
    }

    /// Set the default page.
    #[must_use]
    pub const fn with_default_page(mut self, page: u64) -> Self {
        self.default_page = page;
        self
    }

    /// Set the default page size.
    #[must_use]
    pub const fn with_default_limit(mut self, limit: u64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the page parameter name.
    #[must_use]
    pub fn with_page_param(mut self, name: impl Into<String>) -> Self {
        self.page_param = name.into();
        self
    }

    /// Set the limit parameter name.
    #[must_use]
    pub fn with_limit_param(mut self, name: impl Into<String>) -> Self {
        self.limit_param = name.into();
        self
    }

    /// Default pagination window for a new request.
    #[must_use]
    pub const fn options(&self) -> Options {
        Options::new(self.default_page, self.default_limit)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            default_limit: default_limit(),
            page_param: default_page_param(),
            limit_param: default_limit_param(),
        }
    }
}
