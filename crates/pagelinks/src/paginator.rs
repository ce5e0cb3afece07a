//! Per-request paginator.
//!
//! A [`Paginator`] borrows the caller's [`Options`] and [`Links`] for the duration of a
//! request. Construction resolves the pagination window from the request and appends
//! the `self` link; [`Paginator::set_page_links`] adds `prev`/`next` once the total
//! number of items is known.

use http::Uri;
use pagelinks_core::config::{DEFAULT_LIMIT_PARAM, DEFAULT_PAGE_PARAM};
use pagelinks_core::types::{REL_NEXT, REL_PREV, REL_SELF};
use pagelinks_core::{Link, Links, Options, PaginationConfig, QueryParams};
use tracing::{debug, trace};

use crate::request::PageRequest;

/// Builds pagination state and navigation links for one request.
#[derive(Debug)]
pub struct Paginator<'a> {
    target: &'a Uri,
    links: &'a mut Links,
    options: &'a mut Options,
    page_param: &'a str,
    limit_param: &'a str,
}

impl<'a> Paginator<'a> {
    /// Create a paginator reading the `page` and `limit` parameters.
    ///
    /// Values already in `options` are kept unless the request carries a positive
    /// integer for them. The `self` link is appended to `links` immediately.
    pub fn new<R>(request: &'a R, links: &'a mut Links, options: &'a mut Options) -> Self
    where
        R: PageRequest + ?Sized,
    {
        Self::build(
            request,
            links,
            options,
            DEFAULT_PAGE_PARAM,
            DEFAULT_LIMIT_PARAM,
        )
    }

    /// Create a paginator reading the parameter names from `config`.
    ///
    /// `options` is typically seeded from [`PaginationConfig::options`].
    pub fn with_config<R>(
        request: &'a R,
        links: &'a mut Links,
        options: &'a mut Options,
        config: &'a PaginationConfig,
    ) -> Self
    where
        R: PageRequest + ?Sized,
    {
        Self::build(
            request,
            links,
            options,
            &config.page_param,
            &config.limit_param,
        )
    }

    fn build<R>(
        request: &'a R,
        links: &'a mut Links,
        options: &'a mut Options,
        page_param: &'a str,
        limit_param: &'a str,
    ) -> Self
    where
        R: PageRequest + ?Sized,
    {
        if let Some(page) = positive_value(request, page_param) {
            options.page = page;
        }
        if let Some(limit) = positive_value(request, limit_param) {
            options.limit = limit;
        }

        if options.page == 0 || options.limit == 0 {
            debug!(
                page = options.page,
                limit = options.limit,
                "raising zero pagination defaults to 1"
            );
            options.page = options.page.max(1);
            options.limit = options.limit.max(1);
        }

        let mut paginator = Self {
            target: request.target(),
            links,
            options,
            page_param,
            limit_param,
        };
        paginator.set_self_link();
        paginator
    }

    /// Append `prev`/`next` links given the total number of items.
    ///
    /// `prev` is added when the current page is 2 or later, `next` when items remain
    /// past the current page.
    pub fn set_page_links(&mut self, max: u64) {
        let Options { page, limit } = *self.options;

        if page >= 2 {
            self.set_page_link(REL_PREV, page - 1, limit);
        }
        if page.saturating_mul(limit) < max {
            self.set_page_link(REL_NEXT, page + 1, limit);
        }
    }

    /// Append a link with an arbitrary relation.
    pub fn set_link(&mut self, rel: impl Into<String>, href: impl Into<String>) {
        let link = Link::new(rel, href);
        trace!(rel = %link.rel, href = %link.href, "appending link");
        self.links.push(link);
    }

    /// Index of the first item on the current page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        (self.options.page - 1).saturating_mul(self.options.limit)
    }

    /// Items per page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.options.limit
    }

    /// Current 1-indexed page.
    #[must_use]
    pub fn page(&self) -> u64 {
        self.options.page
    }

    /// Number of pages needed for `max` items; at least 1.
    #[must_use]
    pub fn total_page_count(&self, max: u64) -> u64 {
        let limit = self.limit();
        if max < limit {
            1
        } else {
            max.div_ceil(limit)
        }
    }

    /// Links appended so far.
    #[must_use]
    pub fn links(&self) -> &Links {
        &*self.links
    }

    fn set_self_link(&mut self) {
        let href = self.target.to_string();
        self.set_link(REL_SELF, href);
    }

    fn set_page_link(&mut self, rel: &str, page: u64, limit: u64) {
        let mut query = self
            .target
            .query()
            .map(QueryParams::parse)
            .unwrap_or_default();
        query.set(self.page_param, page);
        query.set(self.limit_param, limit);

        let href = with_query(self.target, &query.encode());
        self.set_link(rel, href);
    }
}

/// Positive integer value of `key`, if the request carries one.
fn positive_value<R>(request: &R, key: &str) -> Option<u64>
where
    R: PageRequest + ?Sized,
{
    let raw = request.form_value(key)?;
    match raw.parse::<u64>() {
        Ok(n) if n >= 1 => Some(n),
        _ => {
            debug!(param = key, value = %raw, "ignoring invalid pagination value");
            None
        }
    }
}

/// `uri` with its query string replaced by `query`, written without escaping.
fn with_query(uri: &Uri, query: &str) -> String {
    let mut href = String::new();
    if let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) {
        href.push_str(scheme);
        href.push_str("://");
        href.push_str(authority.as_str());
    }
    href.push_str(uri.path());
    if !query.is_empty() {
        href.push('?');
        href.push_str(query);
    }
    href
}
