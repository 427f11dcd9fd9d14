#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use key_registry_server::{app::build_router, db::DbPool};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(pool: DbPool) -> Self {
        Self {
            router: build_router(pool),
        }
    }

    /// Send one request and return the status with the decoded JSON body
    /// (`Value::Null` when the body is empty or not JSON).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create a staff member and return its id.
    pub async fn create_staff(&self, name: &str, role: &str) -> i64 {
        let (status, body) = self
            .post("/staff", serde_json::json!({ "name": name, "role": role }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create staff: {body}");
        body["id"].as_i64().unwrap()
    }

    /// Create a key and return its id.
    pub async fn create_key(&self, name: &str, staff_id: Option<i64>) -> i64 {
        let (status, body) = self
            .post(
                "/keys",
                serde_json::json!({ "name": name, "description": "", "staff_id": staff_id }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create key: {body}");
        body["id"].as_i64().unwrap()
    }

    /// Create a key copy and return its id.
    pub async fn create_key_copy(&self, key_id: i64, staff_id: Option<i64>) -> i64 {
        let (status, body) = self
            .post(
                "/key-copies",
                serde_json::json!({ "key_id": key_id, "staff_id": staff_id }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create key copy: {body}");
        body["id"].as_i64().unwrap()
    }
}

pub async fn count_rows(pool: &DbPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
