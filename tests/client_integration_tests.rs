use pokenav::api::{ApiError, PokeApi, PokeApiClient, page_url};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// List envelope with two entries and a server-supplied next link.
fn first_page_body(base: &str) -> serde_json::Value {
    json!({
        "count": 1302,
        "next": format!("{base}/pokemon?offset=2&limit=2"),
        "previous": null,
        "results": [
            {"name": "bulbasaur", "url": format!("{base}/pokemon/1/")},
            {"name": "ivysaur", "url": format!("{base}/pokemon/2/")}
        ]
    })
}

// ============================================================================
// Page Fetching
// ============================================================================

#[tokio::test]
async fn test_fetch_first_page_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first_page_body(&mock_server.uri())))
        .mount(&mock_server)
        .await;

    let client = PokeApiClient::new();
    let page = client
        .fetch_page(&page_url(&mock_server.uri(), 0, 2))
        .await
        .unwrap();

    assert_eq!(page.count, 1302);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "bulbasaur");
    assert_eq!(page.results[1].name, "ivysaur");
    assert_eq!(
        page.next,
        Some(format!("{}/pokemon?offset=2&limit=2", mock_server.uri()))
    );
    assert_eq!(page.previous, None);
}

/// The second request must hit the server-supplied `next` link verbatim,
/// query string included.
#[tokio::test]
async fn test_next_link_followed_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first_page_body(&mock_server.uri())))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("offset", "2"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "next": null,
            "previous": format!("{}/pokemon?offset=0&limit=2", mock_server.uri()),
            "results": [
                {"name": "venusaur", "url": format!("{}/pokemon/3/", mock_server.uri())}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = PokeApiClient::new();
    let first = client
        .fetch_page(&page_url(&mock_server.uri(), 0, 2))
        .await
        .unwrap();

    let second = client.fetch_page(first.next.as_deref().unwrap()).await.unwrap();

    assert_eq!(second.results.len(), 1);
    assert_eq!(second.results[0].name, "venusaur");
    assert_eq!(second.next, None);
}

#[tokio::test]
async fn test_fetch_page_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = PokeApiClient::new();
    let result = client
        .fetch_page(&page_url(&mock_server.uri(), 0, 2))
        .await;

    assert!(matches!(result, Err(ApiError::Api { status: 404, .. })));
}

#[tokio::test]
async fn test_fetch_page_undecodable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&mock_server)
        .await;

    let client = PokeApiClient::new();
    let result = client
        .fetch_page(&page_url(&mock_server.uri(), 0, 2))
        .await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

// ============================================================================
// Profile Fetching
// ============================================================================

#[tokio::test]
async fn test_fetch_profile_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/25/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = PokeApiClient::new();
    let body = client
        .fetch_profile(&format!("{}/pokemon/25/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body.name, "pikachu");
    assert_eq!(body.base_experience, Some(112));
    assert_eq!(body.height, 4);
    let stat_names: Vec<&str> = body.stats.iter().map(|s| s.stat.name.as_str()).collect();
    assert_eq!(stat_names, vec!["hp", "attack", "speed"]);
    assert_eq!(body.stats[2].base_stat, 90);
}

#[tokio::test]
async fn test_fetch_profile_null_base_experience() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/1009/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "walking-wake",
            "base_experience": null,
            "height": 35,
            "stats": []
        })))
        .mount(&mock_server)
        .await;

    let client = PokeApiClient::new();
    let body = client
        .fetch_profile(&format!("{}/pokemon/1009/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body.base_experience, None);
}

#[tokio::test]
async fn test_fetch_profile_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/25/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = PokeApiClient::new();
    let result = client
        .fetch_profile(&format!("{}/pokemon/25/", mock_server.uri()))
        .await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}
