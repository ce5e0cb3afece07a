//! Link and pagination types.
//!
//! [`Link`] and [`Links`] are the hypermedia part of a response body, [`Options`] is the
//! requested pagination window.

use serde::{Deserialize, Serialize};

/// Default first page.
pub const DEFAULT_PAGE: u64 = 1;
/// Default number of items per page.
pub const DEFAULT_LIMIT: u64 = 20;

/// Relation name of the link to the current resource.
pub const REL_SELF: &str = "self";
/// Relation name of the link to the previous page.
pub const REL_PREV: &str = "prev";
/// Relation name of the link to the next page.
pub const REL_NEXT: &str = "next";

/// A single HAL-style navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Relation name (e.g. `self`, `next`).
    pub rel: String,
    /// Target of the link.
    pub href: String,
}

impl Link {
    /// Create a new link.
    #[must_use]
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// Ordered, append-only collection of links.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(Vec<Link>);

impl Links {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a link.
    pub fn push(&mut self, link: Link) {
        self.0.push(link);
    }

    /// First link with the given relation, if any.
    #[must_use]
    pub fn find(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|link| link.rel == rel)
    }

    /// Href of the first link with the given relation, if any.
    #[must_use]
    pub fn href(&self, rel: &str) -> Option<&str> {
        self.find(rel).map(|link| link.href.as_str())
    }

    /// Iterate over links in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.0.iter()
    }

    /// Number of links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no links have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the links as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Link] {
        &self.0
    }

    /// Consume the collection, returning the links.
    #[must_use]
    pub fn into_inner(self) -> Vec<Link> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Links {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Links {
    type Item = Link;
    type IntoIter = std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Requested pagination window.
///
/// Values set before a paginator is constructed act as defaults; valid request
/// parameters override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Options {
    /// 1-indexed page number.
    pub page: u64,
    /// Items per page.
    pub limit: u64,
}

impl Options {
    /// Create options with the given defaults.
    #[must_use]
    pub const fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}
