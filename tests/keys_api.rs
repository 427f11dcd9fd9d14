mod common;

use axum::http::StatusCode;
use common::{TestApp, count_rows};
use key_registry_server::db::DbPool;
use serde_json::json;

#[sqlx::test(migrations = "./migrations")]
async fn staff_then_key_then_list(pool: DbPool) {
    let app = TestApp::new(pool);

    let (status, staff) = app
        .post("/staff", json!({ "name": "Alice", "role": "guard" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let staff_id = staff["id"].as_i64().expect("generated staff id");

    let (status, key) = app
        .post("/keys", json!({ "name": "Front Door", "staff_id": staff_id }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(key["name"], "Front Door");
    assert_eq!(key["staff_id"], staff_id);
    assert!(key["id"].as_i64().is_some());

    let (status, page) = app.get("/keys?page=1&pageSize=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 1);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["page"], 1);
    assert_eq!(page["pageSize"], 3);
    assert_eq!(page["data"][0]["id"], key["id"]);
    assert_eq!(page["data"][0]["staff_name"], "Alice");
}

#[sqlx::test(migrations = "./migrations")]
async fn get_key_includes_staff_name(pool: DbPool) {
    let app = TestApp::new(pool);
    let staff_id = app.create_staff("Bob", "janitor").await;
    let key_id = app.create_key("Boiler Room", Some(staff_id)).await;

    let (status, key) = app.get(&format!("/keys/{key_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(key["name"], "Boiler Room");
    assert_eq!(key["staff_name"], "Bob");
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_key_is_404(pool: DbPool) {
    let app = TestApp::new(pool);

    let (status, body) = app.get("/keys/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "Key not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn non_numeric_id_is_400(pool: DbPool) {
    let app = TestApp::new(pool);

    let (status, body) = app.get("/keys/front-door").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[sqlx::test(migrations = "./migrations")]
async fn create_key_with_unknown_staff_is_rejected(pool: DbPool) {
    let app = TestApp::new(pool.clone());

    let (status, body) = app
        .post("/keys", json!({ "name": "Front Door", "staff_id": 4242 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Staff ID does not exist");
    assert_eq!(count_rows(&pool, "keys").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_key_with_zero_staff_is_unassigned(pool: DbPool) {
    let app = TestApp::new(pool);

    let (status, key) = app
        .post("/keys", json!({ "name": "Shed", "staff_id": 0 }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(key["staff_id"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn malformed_body_is_400(pool: DbPool) {
    let app = TestApp::new(pool);

    let (status, body) = app.post("/keys", json!({ "description": "no name" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");

    let (status, _) = app.post("/keys", json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn nul_in_text_is_a_client_error(pool: DbPool) {
    let app = TestApp::new(pool.clone());

    let (status, body) = app.post("/keys", json!({ "name": "a\u{0}b" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");

    let (status, _) = app
        .post("/keys", json!({ "name": "Front Door", "description": "\u{0}" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(count_rows(&pool, "keys").await, 0);

    let key_id = app.create_key("Front Door", None).await;
    let (status, _) = app
        .put(&format!("/keys/{key_id}"), json!({ "name": "Front\u{0}Door" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, key) = app.get(&format!("/keys/{key_id}")).await;
    assert_eq!(key["name"], "Front Door");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_key_replaces_fields(pool: DbPool) {
    let app = TestApp::new(pool);
    let alice = app.create_staff("Alice", "guard").await;
    let key_id = app.create_key("Front Door", Some(alice)).await;

    let (status, key) = app
        .put(
            &format!("/keys/{key_id}"),
            json!({ "name": "Front Door (new lock)", "description": "rekeyed" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(key["id"], key_id);
    assert_eq!(key["name"], "Front Door (new lock)");
    assert_eq!(key["description"], "rekeyed");
    assert!(key["staff_id"].is_null(), "omitted staff_id unassigns: {key}");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_key_is_404_and_bad_staff_is_400(pool: DbPool) {
    let app = TestApp::new(pool);

    let (status, _) = app.put("/keys/77", json!({ "name": "Ghost" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let key_id = app.create_key("Front Door", None).await;
    let (status, body) = app
        .put(&format!("/keys/{key_id}"), json!({ "name": "Front Door", "staff_id": 5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_reference");
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_key_with_copies_is_blocked(pool: DbPool) {
    let app = TestApp::new(pool);
    let key_id = app.create_key("Front Door", None).await;
    app.create_key_copy(key_id, None).await;

    let (status, body) = app.delete(&format!("/keys/{key_id}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "delete_blocked");

    let (status, _) = app.get(&format!("/keys/{key_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_key_without_copies_removes_it(pool: DbPool) {
    let app = TestApp::new(pool);
    let key_id = app.create_key("Front Door", None).await;

    let (status, body) = app.delete(&format!("/keys/{key_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Key deleted successfully");

    let (status, _) = app.get(&format!("/keys/{key_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/keys/{key_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
