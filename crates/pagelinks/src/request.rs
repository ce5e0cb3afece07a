//! Request abstraction read by the paginator.

use http::request::Parts;
use http::{Request, Uri};
use pagelinks_core::QueryParams;

/// An incoming request the paginator can read pagination values from.
pub trait PageRequest {
    /// Request target, used verbatim for the `self` link and as the base of page links.
    ///
    /// [`Uri`] normalizes an absolute target with an empty path to `/`, so
    /// `https://example.com?page=2` is written back as `https://example.com/?page=2`.
    /// Origin-form targets (`/items?page=2`) are kept exactly.
    fn target(&self) -> &Uri;

    /// First decoded value of the form parameter `key`, if present.
    ///
    /// The default implementation reads the query string of [`PageRequest::target`].
    fn form_value(&self, key: &str) -> Option<String> {
        let query = QueryParams::parse(self.target().query()?);
        query.get(key).map(str::to_owned)
    }
}

impl PageRequest for Uri {
    fn target(&self) -> &Uri {
        self
    }
}

impl<B> PageRequest for Request<B> {
    fn target(&self) -> &Uri {
        self.uri()
    }
}

impl PageRequest for Parts {
    fn target(&self) -> &Uri {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_value_reads_first_query_value() {
        let uri: Uri = "/items?page=3&page=9&q=a+b".parse().unwrap();
        assert_eq!(uri.form_value("page").as_deref(), Some("3"));
        assert_eq!(uri.form_value("q").as_deref(), Some("a b"));
        assert_eq!(uri.form_value("limit"), None);
    }

    #[test]
    fn form_value_without_query() {
        let uri: Uri = "/items".parse().unwrap();
        assert_eq!(uri.form_value("page"), None);
    }

    #[test]
    fn request_and_parts_expose_uri() {
        let request = Request::builder()
            .uri("https://api.example.com/items?limit=5")
            .body(())
            .unwrap();
        assert_eq!(request.form_value("limit").as_deref(), Some("5"));

        let (parts, ()) = request.into_parts();
        assert_eq!(parts.target().path(), "/items");
        assert_eq!(parts.form_value("limit").as_deref(), Some("5"));
    }
}
