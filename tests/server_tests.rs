//! Router-level tests for the REST API.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use doing::config::BasicAuth;
use doing::models::entry::EntryRecord;
use doing::server::router;
use doing::store::{EntryStore, SqliteStore};
use std::sync::Arc;
use tower::ServiceExt;

fn test_router() -> (Router, Arc<SqliteStore>) {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    (router(store.clone(), None), store)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, rec: &EntryRecord) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(rec).unwrap()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn message_only(message: &str) -> EntryRecord {
    EntryRecord {
        message: message.to_string(),
        ..EntryRecord::default()
    }
}

#[tokio::test]
async fn post_with_message_only_defaults_start_and_shows_up_as_latest() {
    let (app, _) = test_router();

    let resp = app
        .clone()
        .oneshot(with_json("POST", "/entries", &message_only("writing spec")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let saved: EntryRecord = body_json(resp).await;
    assert!(saved.id > 0);
    assert!(saved.start_time > 0);
    assert_eq!(saved.end_time, 0);
    assert_eq!(saved.message, "writing spec");

    let resp = app.oneshot(get("/entries/latest")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let latest: Option<EntryRecord> = body_json(resp).await;
    let latest = latest.unwrap();
    assert_eq!(latest.id, saved.id);
    assert_eq!(latest.end_time, 0);
}

#[tokio::test]
async fn latest_on_empty_store_is_null() {
    let (app, _) = test_router();

    let resp = app.oneshot(get("/entries/latest")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let latest: Option<EntryRecord> = body_json(resp).await;
    assert!(latest.is_none());
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let (app, _) = test_router();

    let resp = app.oneshot(get("/entries/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_unknown_id_is_404_and_creates_nothing() {
    let (app, store) = test_router();

    let rec = EntryRecord {
        start_time: 10,
        end_time: 20,
        message: "ghost".to_string(),
        ..EntryRecord::default()
    };
    let resp = app.oneshot(with_json("PUT", "/entries/42", &rec)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(store.all().unwrap().is_empty());
}

#[tokio::test]
async fn put_replaces_an_existing_entry() {
    let (app, _) = test_router();

    let rec = EntryRecord {
        start_time: 100,
        end_time: 200,
        message: "before".to_string(),
        ..EntryRecord::default()
    };
    let resp = app
        .clone()
        .oneshot(with_json("POST", "/entries", &rec))
        .await
        .unwrap();
    let saved: EntryRecord = body_json(resp).await;

    let updated = EntryRecord {
        start_time: 100,
        end_time: 300,
        message: "after".to_string(),
        ..EntryRecord::default()
    };
    let uri = format!("/entries/{}", saved.id);
    let resp = app
        .clone()
        .oneshot(with_json("PUT", &uri, &updated))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: EntryRecord = body_json(resp).await;
    assert_eq!(body.end_time, 300);
    assert_eq!(body.message, "after");

    let resp = app.oneshot(get(&uri)).await.unwrap();
    let fetched: EntryRecord = body_json(resp).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn delete_all_empties_the_store_with_202() {
    let (app, _) = test_router();

    app.clone()
        .oneshot(with_json("POST", "/entries", &message_only("a")))
        .await
        .unwrap();

    let resp = app.clone().oneshot(delete("/entries")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let resp = app.oneshot(get("/entries")).await.unwrap();
    let entries: Vec<EntryRecord> = body_json(resp).await;
    assert!(entries.is_empty());
}

#[tokio::test]
async fn delete_by_id_is_204_then_404() {
    let (app, _) = test_router();

    let resp = app
        .clone()
        .oneshot(with_json("POST", "/entries", &message_only("ephemeral")))
        .await
        .unwrap();
    let saved: EntryRecord = body_json(resp).await;
    let uri = format!("/entries/{}", saved.id);

    let resp = app.clone().oneshot(delete(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.oneshot(delete(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_open_entry_is_a_conflict() {
    let (app, _) = test_router();

    let resp = app
        .clone()
        .oneshot(with_json("POST", "/entries", &message_only("one")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(with_json("POST", "/entries", &message_only("two")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn basic_auth_guards_every_route() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let auth = BasicAuth {
        username: "ray".to_string(),
        password: "secret".to_string(),
    };
    let app = router(store, Some(auth));

    let resp = app.clone().oneshot(get("/entries")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key(header::WWW_AUTHENTICATE));

    let credentials = STANDARD.encode("ray:secret");
    let req = Request::builder()
        .uri("/entries")
        .header(header::AUTHORIZATION, format!("Basic {credentials}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bad = STANDARD.encode("ray:wrong");
    let req = Request::builder()
        .uri("/entries")
        .header(header::AUTHORIZATION, format!("Basic {bad}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
