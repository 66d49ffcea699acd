use anyhow::Result;
use hbnb_front::core::place_page::load_place_page;
use hbnb_front::core::reconciler::{LOGIN_LINK, LOGOUT_LINK, PLACES_LIST};
use hbnb_front::domain::model::SessionToken;
use hbnb_front::domain::ports::SessionStore;
use hbnb_front::{CookieFileStore, Document, FrontEngine, HttpApiClient, SessionContext};
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn engine_for(server: &MockServer, dir: &TempDir) -> Result<(FrontEngine, CookieFileStore)> {
    let api = HttpApiClient::new(&server.url("/api/v1"), Duration::from_secs(5))?;
    let store = CookieFileStore::new(dir.path().join("cookie"), chrono::Duration::hours(1));
    let engine = FrontEngine::new(Arc::new(api), SessionContext::from_store(store.clone()))
        .with_redirect_delay(Duration::ZERO);
    Ok((engine, store))
}

/// 登入 -> 存 token -> 首頁帶 Bearer 取得 places
#[tokio::test]
async fn test_login_then_landing_uses_bearer_token() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, store) = engine_for(&server, &dir)?;

    let login_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth/login")
            .json_body(serde_json::json!({"email": "a@b.com", "password": "x"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"access_token": "tok1"}));
    });
    let places_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/places/")
            .header("Authorization", "Bearer tok1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "p1", "title": "Loft", "price": 80.0, "latitude": 1.0, "longitude": 2.0},
                {"id": "p2", "title": "Villa", "price": 250.0, "latitude": 3.0, "longitude": 4.0}
            ]));
    });

    let login_page = engine.login("a@b.com", "x").await;
    login_mock.assert();
    assert_eq!(login_page.last_navigation(), Some("index.html"));
    assert_eq!(store.get_token(), Some(SessionToken::new("tok1")));

    let landing = engine.index(None).await;
    places_mock.assert();
    assert_eq!(landing.is_visible(LOGIN_LINK), Some(false));
    assert_eq!(landing.is_visible(LOGOUT_LINK), Some(true));

    let html = landing.html(PLACES_LIST).unwrap();
    assert_eq!(html.matches("class=\"place-card\"").count(), 2);
    assert!(html.find("Loft").unwrap() < html.find("Villa").unwrap());
    Ok(())
}

#[tokio::test]
async fn test_landing_with_server_error_shows_placeholder() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, store) = engine_for(&server, &dir)?;
    store.set_token(&SessionToken::new("tok1"))?;

    let places_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/places/");
        then.status(500);
    });

    let landing = engine.index(None).await;

    places_mock.assert();
    assert_eq!(landing.html(PLACES_LIST), Some("<p>No places available</p>"));
    assert!(landing.alerts().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_logged_out_landing_does_not_fetch() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, _store) = engine_for(&server, &dir)?;

    let places_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/places/");
        then.status(200).json_body(serde_json::json!([]));
    });

    let landing = engine.index(Some("100")).await;

    places_mock.assert_hits(0);
    assert_eq!(landing.is_visible(LOGIN_LINK), Some(true));
    assert_eq!(landing.is_visible(LOGOUT_LINK), Some(false));
    assert!(landing.html(PLACES_LIST).is_none());
    Ok(())
}

#[tokio::test]
async fn test_max_price_filter_on_landing() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, store) = engine_for(&server, &dir)?;
    store.set_token(&SessionToken::new("tok1"))?;

    let places_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/places/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "cheap", "title": "Hostel", "price": 30.0},
                {"id": "pricey", "title": "Castle", "price": 900.0},
                {"id": "free", "title": "Tent"}
            ]));
    });

    let landing = engine.index(Some("100")).await;

    // 過濾不重新抓資料
    places_mock.assert_hits(1);
    assert_eq!(landing.text("price-display"), Some("€100"));
    let html = landing.html(PLACES_LIST).unwrap();
    assert!(html.contains("data-place-id=\"pricey\" style=\"display: none\""));
    assert!(html.contains("data-place-id=\"cheap\">"));
    assert!(html.contains("data-place-id=\"free\">"));
    Ok(())
}

#[tokio::test]
async fn test_login_wrong_credentials_shows_message() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, store) = engine_for(&server, &dir)?;

    server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/login");
        then.status(401)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "Invalid credentials"}));
    });

    let page = engine.login("a@b.com", "nope").await;

    assert_eq!(page.text("error-message"), Some("Wrong email or password"));
    assert_eq!(page.is_visible("error-message"), Some(true));
    assert!(page.navigations().is_empty());
    assert!(store.get_token().is_none());
    Ok(())
}

#[tokio::test]
async fn test_login_unreachable_backend_alerts() -> Result<()> {
    let dir = TempDir::new()?;
    let api = HttpApiClient::new("http://127.0.0.1:1/api/v1", Duration::from_secs(2))?;
    let store = CookieFileStore::new(dir.path().join("cookie"), chrono::Duration::hours(1));
    let engine = FrontEngine::new(Arc::new(api), SessionContext::from_store(store));

    let page = engine.login("a@b.com", "x").await;

    assert_eq!(page.alerts(), ["Network error - please try again"]);
    assert!(page.navigations().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_logout_clears_cookie() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, store) = engine_for(&server, &dir)?;
    store.set_token(&SessionToken::new("tok1"))?;

    let page = engine.logout()?;

    assert!(store.get_token().is_none());
    assert_eq!(page.alerts(), ["Logged out successfully!"]);
    assert_eq!(page.last_navigation(), Some("index.html"));
    Ok(())
}

#[tokio::test]
async fn test_place_detail_without_reviews() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, store) = engine_for(&server, &dir)?;
    store.set_token(&SessionToken::new("tok1"))?;

    let detail_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/places/p1")
            .header("Authorization", "Bearer tok1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "p1",
                "title": "Loft",
                "description": "Bright",
                "price": 80.0,
                "latitude": 1.0,
                "longitude": 2.0,
                "owner": {"id": "u1", "first_name": "Ada", "last_name": "Lovelace"},
                "amenities": [{"id": "a1", "name": "WiFi"}],
                "reviews": []
            }));
    });

    let page = engine.place("p1").await;

    detail_mock.assert();
    let reviews = page.html("reviews").unwrap();
    assert!(reviews.contains("No reviews yet"));
    assert_eq!(reviews.matches("review-card").count(), 0);
    assert!(page.html("place-details").unwrap().contains("Ada Lovelace"));
    Ok(())
}

#[tokio::test]
async fn test_place_detail_fetch_failure_alerts() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, _store) = engine_for(&server, &dir)?;

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/places/gone");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "Place not found"}));
    });

    let page = engine.place("gone").await;

    assert_eq!(page.alerts(), ["Failed to load place details"]);
    assert!(page.html("place-details").is_none());
    Ok(())
}

#[tokio::test]
async fn test_place_page_without_id_is_not_found() -> Result<()> {
    let server = MockServer::start();
    let api = HttpApiClient::new(&server.url("/api/v1"), Duration::from_secs(5))?;
    let session = SessionContext::from_store(hbnb_front::MemorySessionStore::new());
    let mut page = Document::new("place.html");

    let result = load_place_page(&api, &session, &mut page, "place.html").await;

    assert!(matches!(
        result,
        Err(hbnb_front::FrontError::NotFoundError { .. })
    ));
    assert_eq!(page.alerts(), ["Invalid place information"]);
    Ok(())
}

#[tokio::test]
async fn test_open_routes_by_location() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, _store) = engine_for(&server, &dir)?;

    // 沒有 place_id 的詳細頁
    let page = engine.open("place.html").await;
    assert_eq!(page.alerts(), ["Invalid place information"]);

    let page = engine.open("login.html").await;
    assert_eq!(page.is_visible(LOGIN_LINK), Some(true));
    assert!(page.alerts().is_empty());

    let page = engine.open("/").await;
    assert_eq!(page.is_visible(LOGOUT_LINK), Some(false));
    Ok(())
}

#[tokio::test]
async fn test_review_redirect_keeps_reserved_characters_in_place_id() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let (engine, store) = engine_for(&server, &dir)?;
    store.set_token(&SessionToken::new("tok1"))?;

    let review_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/reviews/")
            .json_body(serde_json::json!({"place_id": "a&b #1+2", "text": "Cosy", "rating": 4}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "r1"}));
    });

    let (page, _form) = engine.review("a&b #1+2", "Cosy", "4").await;

    review_mock.assert_hits(1);
    let target = page.last_navigation().unwrap();
    assert_eq!(target, "place.html?place_id=a%26b+%231%2B2");
    assert_eq!(
        hbnb_front::core::router::place_id_from_location(target),
        Some("a&b #1+2".to_string())
    );
    Ok(())
}
