//! Integration tests for shopview
//!
//! These tests run the HTTP catalog source against a local stub server and
//! drive the fetch, filter and view-state workflow end to end.

use shopview::catalog::{
    CatalogError, CatalogLoader, CatalogSource, Category, CategoryFilter, FilterCriteria,
    HttpCatalogSource,
};
use shopview::commands::list;
use shopview::config::LoadingPolicy;
use shopview::tui::{Placeholder, ViewState};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

const CATALOG_JSON: &str = r#"[
  {
    "id": 1,
    "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
    "price": 109.95,
    "description": "Your perfect pack for everyday use.",
    "category": "men's clothing",
    "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
    "rating": { "rate": 3.9, "count": 120 }
  },
  {
    "id": 5,
    "title": "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet",
    "price": 695,
    "description": "From our Legends Collection.",
    "category": "jewelery",
    "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
    "rating": { "rate": 4.6, "count": 400 }
  },
  {
    "id": 9,
    "title": "WD 2TB Elements Portable External Hard Drive - USB 3.0",
    "price": 64,
    "description": "USB 3.0 and USB 2.0 compatibility.",
    "category": "electronics",
    "image": "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg",
    "rating": { "rate": 3.3, "count": 203 }
  },
  {
    "id": 21,
    "title": "Oak Side Table",
    "price": 80.5,
    "category": "furniture"
  }
]"#;

/// Serve a single HTTP response on a random local port
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}/products")
}

fn source(endpoint: &str) -> Arc<dyn CatalogSource> {
    Arc::new(HttpCatalogSource::new(endpoint).unwrap())
}

#[tokio::test]
async fn test_fetch_catalog_over_http() {
    let endpoint = serve_once("200 OK", CATALOG_JSON).await;

    let catalog = source(&endpoint).fetch_catalog().await.unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog[0].id, 1);
    assert_eq!(catalog[0].display_price(), "$109.95");
    assert_eq!(catalog[1].category, Category::Jewelery);
    assert_eq!(catalog[1].display_price(), "$695.00");
    assert_eq!(catalog[2].available_quantity(), 203);
    assert_eq!(catalog[3].category, Category::Other("furniture".into()));
    assert!(catalog[3].description.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let endpoint = serve_once("404 Not Found", r#"{"error":"not found"}"#).await;

    let err = source(&endpoint).fetch_catalog().await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 404 }));
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let endpoint = serve_once("200 OK", r#"{"products": "#).await;

    let err = source(&endpoint).fetch_catalog().await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_an_error() {
    // Bind and immediately release a port so nothing is listening on it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(&format!("http://{addr}/products"))
        .fetch_catalog()
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Request(_)));
}

#[tokio::test]
async fn test_view_state_filters_loaded_catalog() {
    let endpoint = serve_once("200 OK", CATALOG_JSON).await;
    let outcome = CatalogLoader::spawn(&tokio::runtime::Handle::current(), source(&endpoint))
        .finish()
        .await;

    let mut state = ViewState::new(LoadingPolicy::Clear);
    state.activate();
    state.apply_load(outcome);
    assert!(!state.is_loading());
    assert_eq!(state.visible_len(), 4);

    state.set_search("usb");
    assert_eq!(state.visible_len(), 1);
    assert!(state.open_current());
    assert_eq!(state.selected().map(|p| p.id), Some(9));
    state.close_details();

    state.set_search("");
    state.set_category(CategoryFilter::Only(Category::Jewelery));
    let ids: Vec<u64> = state.visible_products().map(|p| p.id).collect();
    assert_eq!(ids, vec![5]);

    // Unknown categories only show under "all"
    state.set_search("oak");
    assert_eq!(state.placeholder(), Some(Placeholder::Empty));
    state.set_category(CategoryFilter::All);
    assert_eq!(state.visible_len(), 1);
}

#[tokio::test]
async fn test_failed_fetch_follows_loading_policy() {
    for (policy, still_loading) in [(LoadingPolicy::Clear, false), (LoadingPolicy::Keep, true)] {
        let endpoint = serve_once("500 Internal Server Error", "").await;
        let outcome = CatalogLoader::spawn(&tokio::runtime::Handle::current(), source(&endpoint))
            .finish()
            .await;

        let mut state = ViewState::new(policy);
        state.activate();
        state.apply_load(outcome);

        assert!(state.catalog().is_empty());
        assert_eq!(state.visible_len(), 0);
        assert_eq!(state.is_loading(), still_loading, "policy {policy:?}");
    }
}

#[test]
fn test_list_end_to_end() {
    let runtime = Runtime::new().unwrap();
    let endpoint = runtime.block_on(serve_once("200 OK", CATALOG_JSON));

    let catalog = list::fetch_catalog(&runtime, source(&endpoint)).unwrap();

    let criteria = FilterCriteria::new("", CategoryFilter::Only(Category::MensClothing));
    let lines = list::render(&catalog, &criteria, false, true).unwrap();
    assert_eq!(
        lines,
        vec!["Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops"]
    );

    let criteria = FilterCriteria::new("DRIVE", CategoryFilter::All);
    let json = list::render(&catalog, &criteria, true, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json[0]).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["id"], 9);
}

#[test]
fn test_list_reports_fetch_failure() {
    let runtime = Runtime::new().unwrap();
    let endpoint = runtime.block_on(serve_once("503 Service Unavailable", ""));

    let result = list::fetch_catalog(&runtime, source(&endpoint));
    assert!(matches!(
        result,
        Err(shopview::ShopviewError::Catalog(CatalogError::Status { status: 503 }))
    ));
}
