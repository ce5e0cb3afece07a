//! Pagination metadata and HAL-style navigation links for HTTP API responses.
//!
//! A [`Paginator`] reads `page` and `limit` from an incoming request, exposes the
//! resulting offset and page counts, and appends `self`/`prev`/`next` links to a
//! caller-owned [`Links`] collection. [`parse_order`] validates `field,direction`
//! ordering expressions against an allow-list.
//!
//! ```
//! use pagelinks::{Links, Options, Paginator};
//!
//! let uri: http::Uri = "/items?page=2&limit=10".parse().unwrap();
//! let mut links = Links::new();
//! let mut options = Options::default();
//!
//! let mut paginator = Paginator::new(&uri, &mut links, &mut options);
//! assert_eq!(paginator.offset(), 10);
//! paginator.set_page_links(25);
//! drop(paginator);
//!
//! assert_eq!(links.href("prev"), Some("/items?limit=10&page=1"));
//! assert_eq!(links.href("next"), Some("/items?limit=10&page=3"));
//! ```

#![deny(missing_docs)]

pub mod order;
pub mod paginator;
pub mod request;

pub use order::{parse_order, Direction, Order};
pub use paginator::Paginator;
pub use request::PageRequest;

pub use pagelinks_core::{Error, Link, Links, Options, PaginationConfig, QueryParams};

/// Convenient result alias that reuses the shared pagelinks error type.
pub type Result<T> = pagelinks_core::Result<T>;
