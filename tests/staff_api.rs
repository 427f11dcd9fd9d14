mod common;

use axum::http::StatusCode;
use common::TestApp;
use key_registry_server::db::DbPool;
use serde_json::json;

#[sqlx::test(migrations = "./migrations")]
async fn staff_crud(pool: DbPool) {
    let app = TestApp::new(pool);

    let (status, staff) = app
        .post("/staff", json!({ "name": "Alice", "role": "guard" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = staff["id"].as_i64().unwrap();
    assert_eq!(staff["role"], "guard");

    let (status, staff) = app
        .put(&format!("/staff/{id}"), json!({ "name": "Alice", "role": "supervisor" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(staff["role"], "supervisor");

    let (status, staff) = app.get(&format!("/staff/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(staff["name"], "Alice");

    let (status, body) = app.delete(&format!("/staff/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Staff deleted successfully");

    let (status, body) = app.get(&format!("/staff/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Staff not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_staff_unassigns_their_keys(pool: DbPool) {
    let app = TestApp::new(pool);
    let alice = app.create_staff("Alice", "guard").await;
    let key_id = app.create_key("Front Door", Some(alice)).await;
    let copy_id = app.create_key_copy(key_id, Some(alice)).await;

    let (status, _) = app.delete(&format!("/staff/{alice}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, key) = app.get(&format!("/keys/{key_id}")).await;
    assert!(key["staff_id"].is_null());
    assert!(key["staff_name"].is_null());

    let (_, copy) = app.get(&format!("/key-copies/{copy_id}")).await;
    assert!(copy["staff_id"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn nul_in_name_or_role_is_a_client_error(pool: DbPool) {
    let app = TestApp::new(pool);

    let (status, body) = app
        .post("/staff", json!({ "name": "Al\u{0}ice", "role": "guard" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");

    let (status, _) = app
        .post("/staff", json!({ "name": "Alice", "role": "gu\u{0}ard" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, page) = app.get("/staff").await;
    assert_eq!(page["total"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_staff_operations_are_404(pool: DbPool) {
    let app = TestApp::new(pool);

    let (status, _) = app.put("/staff/12", json!({ "name": "Nobody" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/staff/12").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
