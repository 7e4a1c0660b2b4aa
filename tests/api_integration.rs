//! Integration tests for the REST surface of the shopping list

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use shopping_list_rust::list::AppState;
use shopping_list_rust::router::create_app_router;

fn create_test_app() -> axum::Router {
    create_app_router(Arc::new(AppState::new()))
}

/// Sends a request with an optional JSON body and decodes the response body
async fn send_rest_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, body)
}

async fn add(app: &axum::Router, name: &str, notes: Option<&str>) -> String {
    let (status, body) = send_rest_request(
        app,
        "POST",
        "/lists/home/items",
        Some(json!({ "name": name, "quantity": 1, "notes": notes })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect()
}

// --- list / search ---

#[tokio::test]
async fn list_items_of_unknown_list_is_empty() {
    let app = create_test_app();
    let (status, body) = send_rest_request(&app, "GET", "/lists/home/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn search_by_query_string() {
    let app = create_test_app();
    add(&app, "Milk", Some("Lactose-free")).await;
    add(&app, "Bread", Some("Whole grain")).await;
    add(&app, "Juice", Some("Orange juice")).await;

    let (_, all) = send_rest_request(&app, "GET", "/lists/home/items", None).await;
    assert_eq!(names(&all), ["Milk", "Bread", "Juice"]);

    let (_, hits) = send_rest_request(&app, "GET", "/lists/home/items?q=JUICE", None).await;
    assert_eq!(names(&hits), ["Juice"]);

    let (_, empty_q) = send_rest_request(&app, "GET", "/lists/home/items?q=", None).await;
    assert_eq!(names(&empty_q), ["Milk", "Bread", "Juice"]);
}

// --- add / get ---

#[tokio::test]
async fn add_item_returns_201_and_defaults() {
    let app = create_test_app();
    let (status, body) = send_rest_request(
        &app,
        "POST",
        "/lists/home/items",
        Some(json!({ "name": "Eggs" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Eggs");
    assert_eq!(body["quantity"], 1);
    assert_eq!(body["isPurchased"], false);
    assert!(body["notes"].is_null());
}

#[tokio::test]
async fn add_item_without_name_is_rejected() {
    let app = create_test_app();
    let (status, _) = send_rest_request(
        &app,
        "POST",
        "/lists/home/items",
        Some(json!({ "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_item_by_id() {
    let app = create_test_app();
    let id = add(&app, "Smör", Some("extra saltat")).await;

    let (status, body) =
        send_rest_request(&app, "GET", &format!("/lists/home/items/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());

    let (status, body) = send_rest_request(&app, "GET", "/lists/home/items/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Item not found: nope");
}

// --- update ---

#[tokio::test]
async fn update_item_keeps_id_and_purchased() {
    let app = create_test_app();
    let id = add(&app, "Milk", None).await;
    send_rest_request(&app, "POST", &format!("/lists/home/items/{id}/toggle"), None).await;

    let (status, body) = send_rest_request(
        &app,
        "PUT",
        &format!("/lists/home/items/{id}"),
        Some(json!({ "name": "Oat milk", "quantity": 2, "notes": "Barista" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], "Oat milk");
    assert_eq!(body["notes"], "Barista");
    assert_eq!(body["isPurchased"], true);
}

#[tokio::test]
async fn update_without_quantity_is_rejected_and_keeps_item() {
    let app = create_test_app();
    let (_, created) = send_rest_request(
        &app,
        "POST",
        "/lists/home/items",
        Some(json!({ "name": "Eggs", "quantity": 12 })),
    )
    .await;
    let uri = format!("/lists/home/items/{}", created["id"].as_str().unwrap());

    let (status, _) =
        send_rest_request(&app, "PUT", &uri, Some(json!({ "name": "Eggs" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = send_rest_request(&app, "GET", &uri, None).await;
    assert_eq!(body["quantity"], 12);
}

#[tokio::test]
async fn update_unknown_item_returns_404() {
    let app = create_test_app();
    add(&app, "Milk", None).await;

    let (status, _) = send_rest_request(
        &app,
        "PUT",
        "/lists/home/items/ghost",
        Some(json!({ "name": "X", "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send_rest_request(&app, "GET", "/lists/home/items", None).await;
    assert_eq!(names(&all), ["Milk"]);
}

// --- delete ---

#[tokio::test]
async fn delete_item_then_get_is_404() {
    let app = create_test_app();
    let id = add(&app, "Apples", None).await;
    add(&app, "Pears", None).await;

    let uri = format!("/lists/home/items/{id}");
    let (status, _) = send_rest_request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_rest_request(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_rest_request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send_rest_request(&app, "GET", "/lists/home/items", None).await;
    assert_eq!(names(&all), ["Pears"]);
}

// --- toggle / clear ---

#[tokio::test]
async fn toggle_and_clear_purchased() {
    let app = create_test_app();
    let a = add(&app, "a", None).await;
    add(&app, "b", None).await;

    let (status, body) =
        send_rest_request(&app, "POST", &format!("/lists/home/items/{a}/toggle"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isPurchased"], true);

    let (status, body) =
        send_rest_request(&app, "POST", "/lists/home/clear_purchased", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], 1);
    assert_eq!(names(&body["items"]), ["b"]);
}

#[tokio::test]
async fn toggle_unknown_item_returns_404() {
    let app = create_test_app();
    let (status, _) =
        send_rest_request(&app, "POST", "/lists/home/items/ghost/toggle", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- reorder ---

#[tokio::test]
async fn reorder_applies_valid_permutation() {
    let app = create_test_app();
    let a = add(&app, "a", None).await;
    let b = add(&app, "b", None).await;
    let c = add(&app, "c", None).await;

    let (status, body) = send_rest_request(
        &app,
        "PUT",
        "/lists/home/order",
        Some(json!({ "ids": [b, c, a] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["b", "c", "a"]);
}

#[tokio::test]
async fn reorder_rejects_bad_permutations() {
    let app = create_test_app();
    let a = add(&app, "a", None).await;
    let b = add(&app, "b", None).await;

    for ids in [json!([a]), json!([a, a]), json!([a, "ghost"]), json!([])] {
        let (status, body) = send_rest_request(
            &app,
            "PUT",
            "/lists/home/order",
            Some(json!({ "ids": ids })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid order"));
    }

    let (_, all) = send_rest_request(&app, "GET", "/lists/home/items", None).await;
    assert_eq!(names(&all), ["a", "b"]);
    assert_eq!(all[0]["id"], a.as_str());
    assert_eq!(all[1]["id"], b.as_str());
}

#[tokio::test]
async fn reorder_and_clear_on_unknown_list_leave_state_alone() {
    let state = Arc::new(AppState::new());
    let app = create_app_router(state.clone());

    let (status, _) = send_rest_request(
        &app,
        "PUT",
        "/lists/ghost/order",
        Some(json!({ "ids": ["x"] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send_rest_request(
        &app,
        "PUT",
        "/lists/ghost/order",
        Some(json!({ "ids": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) =
        send_rest_request(&app, "POST", "/lists/ghost2/clear_purchased", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], 0);

    assert_eq!(state.lists.len(), 0);
}
