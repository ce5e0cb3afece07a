//! End-to-end tests building a paginated JSON response from an HTTP request.

use http::Request;
use pagelinks::{parse_order, Direction, Error, Links, PaginationConfig, Paginator};
use serde_json::json;

const ALLOWED_ORDER: &[&str] = &["name", "created_at"];

/// Builds a response body the way a list handler would.
fn list_items(request: &Request<()>, total: u64) -> serde_json::Value {
    let config = PaginationConfig::new(10).unwrap();
    let mut links = Links::new();
    let mut options = config.options();

    let mut paginator = Paginator::with_config(request, &mut links, &mut options, &config);
    paginator.set_page_links(total);
    let offset = paginator.offset();
    let pages = paginator.total_page_count(total);
    drop(paginator);

    json!({
        "offset": offset,
        "page": options.page,
        "limit": options.limit,
        "pages": pages,
        "links": links,
    })
}

fn get(uri: &str) -> Request<()> {
    Request::builder().uri(uri).body(()).unwrap()
}

#[test]
fn test_first_page_has_only_next() {
    let body = list_items(&get("/v1/items?q=lamp"), 25);

    assert_eq!(body["offset"], 0);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["pages"], 3);
    assert_eq!(
        body["links"],
        json!([
            { "rel": "self", "href": "/v1/items?q=lamp" },
            { "rel": "next", "href": "/v1/items?limit=10&page=2&q=lamp" },
        ])
    );
}

#[test]
fn test_middle_page_has_prev_and_next() {
    let body = list_items(&get("/v1/items?page=2&limit=10"), 25);

    assert_eq!(body["offset"], 10);
    assert_eq!(
        body["links"],
        json!([
            { "rel": "self", "href": "/v1/items?page=2&limit=10" },
            { "rel": "prev", "href": "/v1/items?limit=10&page=1" },
            { "rel": "next", "href": "/v1/items?limit=10&page=3" },
        ])
    );
}

#[test]
fn test_last_page_has_only_prev() {
    let body = list_items(&get("/v1/items?page=3&limit=10"), 25);

    assert_eq!(body["offset"], 20);
    let rels: Vec<&str> = body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["rel"].as_str().unwrap())
        .collect();
    assert_eq!(rels, vec!["self", "prev"]);
}

#[test]
fn test_invalid_params_fall_back_to_config_defaults() {
    let body = list_items(&get("/v1/items?page=zero&limit=-5"), 0);

    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["pages"], 1);
    assert_eq!(body["links"].as_array().unwrap().len(), 1);
}

#[test]
fn test_absolute_request_uri() {
    let body = list_items(&get("https://api.example.com/v1/items?limit=5&page=4"), 100);

    assert_eq!(
        body["links"][1]["href"],
        "https://api.example.com/v1/items?limit=5&page=3"
    );
    assert_eq!(
        body["links"][2]["href"],
        "https://api.example.com/v1/items?limit=5&page=5"
    );
}

#[test]
fn test_order_param_from_request() {
    let request = get("/v1/items?order=created_at,desc");
    let raw = pagelinks::PageRequest::form_value(&request, "order").unwrap();

    let order = parse_order(&raw, ALLOWED_ORDER).unwrap();
    assert_eq!(order.field, "created_at");
    assert_eq!(order.direction, Direction::Desc);
}

#[test]
fn test_rejected_order_becomes_error_body() {
    let err = parse_order("password,asc", ALLOWED_ORDER).unwrap_err();
    assert!(err.is_client_error());

    let body = serde_json::to_value(err.into_error_response()).unwrap();
    assert_eq!(body["error"]["code"], "INVALID_FIELD");
    assert_eq!(body["error"]["details"]["value"], "password");
    assert!(matches!(
        parse_order("name", ALLOWED_ORDER),
        Err(Error::MalformedInput(_))
    ));
}
