use fusecraft::core::catalog::{LoadError, LoadOptions};
use fusecraft::core::source::{CatalogSource, HttpSource, SourceError, load_catalog, source_for};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const GAMEDATA: &str = r#"{
    "meta": { "topic": "Kitchen" },
    "library": [
        { "id": "flour", "name": "Flour", "tier": 0 },
        { "id": "water", "name": "Water", "tier": 0 },
        { "id": "dough", "name": "Dough", "tier": 1, "recipes": [["flour", "water"]] }
    ]
}"#;

/// Serves `body` with `status` at `/gamedata.json` and returns the server.
async fn serve(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gamedata.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;
    mock_server
}

fn url(server: &MockServer) -> String {
    format!("{}/gamedata.json", server.uri())
}

// ============================================================================
// HTTP Source Tests
// ============================================================================

#[tokio::test]
async fn test_http_source_loads_catalog() {
    let mock_server = serve(200, GAMEDATA).await;
    let source = source_for(&url(&mock_server));

    let catalog = load_catalog(source.as_ref(), LoadOptions::default())
        .await
        .expect("catalog should load");

    assert_eq!(catalog.topic(), "Kitchen");
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.base_elements().count(), 2);
}

#[tokio::test]
async fn test_http_source_reports_status() {
    let mock_server = serve(404, "not found").await;
    let source = HttpSource::new(url(&mock_server));

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::Http { status: 404 }));
    assert_eq!(err.to_string(), "HTTP error! Status: 404");
}

#[tokio::test]
async fn test_http_error_is_a_load_error() {
    let mock_server = serve(500, "").await;
    let source = HttpSource::new(url(&mock_server));

    let err = load_catalog(&source, LoadOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::Source(SourceError::Http { status: 500 })
    ));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let mock_server = serve(200, "<html>definitely not json</html>").await;
    let source = HttpSource::new(url(&mock_server));

    let err = load_catalog(&source, LoadOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
}

// ============================================================================
// Bundled Data
// ============================================================================

#[tokio::test]
async fn test_bundled_gamedata_is_valid() {
    let source = source_for(concat!(env!("CARGO_MANIFEST_DIR"), "/data/gamedata.json"));

    let catalog = load_catalog(source.as_ref(), LoadOptions::default())
        .await
        .expect("bundled catalog should validate in strict mode");

    assert!(catalog.base_elements().count() > 0);
    assert!(catalog.discoverable_count() > 0);
}
