// End-to-end tests against the fully assembled router.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use contacts::adapters::in_memory::InMemoryContactStore;
use contacts::core::contact::{Contact, Contacts};
use contacts::shell::http::router;
use contacts::shell::state::SharedContactStore;

fn app() -> Router {
    let mut contacts = Contacts::new();
    contacts.insert(
        "ada".into(),
        Contact {
            id: "ada".into(),
            name: "Ada Lovelace".into(),
            department: "Engineering".into(),
            company: "Analytical Engines Ltd".into(),
        },
    );
    let memory: SharedContactStore = Arc::new(InMemoryContactStore::with_contacts(contacts));
    // A second memory store stands in for the database branch so the route
    // layout can be exercised without Postgres.
    let database: SharedContactStore = Arc::new(InMemoryContactStore::new());
    router(memory, Some(database), "test-instance".into())
}

fn memory_only_app() -> Router {
    let memory: SharedContactStore = Arc::new(InMemoryContactStore::new());
    router(memory, None, "test-instance".into())
}

#[tokio::test]
async fn it_should_list_the_seeded_contacts_under_the_memory_prefix() {
    let response = app()
        .oneshot(Request::get("/memory/contacts").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let contacts: Contacts = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(contacts.len(), 1);
    assert!(contacts.contains_key("ada"));
}

#[tokio::test]
async fn it_should_create_and_then_serve_a_contact() {
    let app = app();
    let body = r#"{"id":"grace","name":"Grace Hopper","department":"Navy","company":"UNIVAC"}"#;
    let response = app
        .clone()
        .oneshot(
            Request::post("/memory/contacts")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::get("/memory/contacts/grace")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let contact: Contact = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(contact.name, "Grace Hopper");
}

#[tokio::test]
async fn it_should_keep_the_backends_separate() {
    // The seeded contact lives in the memory store only.
    let response = app()
        .oneshot(
            Request::get("/database/contacts/ada")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_not_register_database_routes_without_a_database_store() {
    let response = memory_only_app()
        .oneshot(Request::get("/database/contacts").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_delete_with_no_content_and_forget_the_contact() {
    let app = app();
    let response = app
        .clone()
        .oneshot(
            Request::delete("/memory/contacts/ada")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::get("/memory/contacts/ada")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_serve_the_pi_approximation() {
    let response = app()
        .oneshot(Request::get("/pi?n=1000").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let pi = json["pi"].as_f64().unwrap();
    assert!((pi - std::f64::consts::PI).abs() < 1e-2);
}

#[tokio::test]
async fn it_should_serve_the_instance_id() {
    let response = app()
        .oneshot(Request::get("/info").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"test-instance");
}
