mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use common::{TempDb, seeded_service};
use menu_schema::{Code, Dish, FullMenuResponse, ListCategoriesResponse, RpcErrorBody};
use menu_service::server::{MenuState, menu_router};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

async fn app(prefix: &str) -> (TempDb, Router) {
    let (db, service) = seeded_service(prefix).await;
    let app = menu_router(MenuState::new(service), &[]);
    (db, app)
}

fn rpc(method: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/menu.MenuService/{method}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn read_json<T: DeserializeOwned>(resp: axum::response::Response) -> T {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not the expected JSON")
}

#[tokio::test]
async fn get_full_menu_returns_nested_json() {
    let (_db, app) = app("rpc-full-menu").await;

    let resp = app
        .oneshot(rpc("GetFullMenu", "{}"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let menu: FullMenuResponse = read_json(resp).await;
    assert_eq!(menu.restaurant_info.name, "The Gourmet Kitchen");
    assert_eq!(menu.categories.len(), 4);
    assert_eq!(menu.categories[3].category_info.name, "Beverages");
}

#[tokio::test]
async fn create_then_list_categories_over_http() {
    let (_db, app) = app("rpc-categories").await;

    let resp = app
        .clone()
        .oneshot(rpc("CreateCategory", r#"{"name":"Specials","order":5}"#))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(rpc("ListCategories", ""))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let list: ListCategoriesResponse = read_json(resp).await;
    assert_eq!(list.categories.len(), 5);
    assert_eq!(
        list.categories.last().map(|c| c.name.as_str()),
        Some("Specials")
    );
}

#[tokio::test]
async fn update_of_missing_dish_is_not_found_envelope() {
    let (_db, app) = app("rpc-not-found").await;

    let resp = app
        .oneshot(rpc(
            "UpdateDish",
            r#"{"id":424242,"name":"Nope","price":1.0,"category_id":1}"#,
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: RpcErrorBody = read_json(resp).await;
    assert_eq!(body.inner.code, Code::NotFound);
    assert!(body.inner.message.starts_with("dish not found"));
}

#[tokio::test]
async fn create_dish_with_dangling_category_is_precondition_failed() {
    let (_db, app) = app("rpc-dangling").await;

    let resp = app
        .oneshot(rpc(
            "CreateDish",
            r#"{"name":"Ghost","price":1.0,"is_available":true,"category_id":999}"#,
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED);

    let body: RpcErrorBody = read_json(resp).await;
    assert_eq!(body.inner.code, Code::FailedPrecondition);
}

#[tokio::test]
async fn create_dish_echoes_assigned_id() {
    let (_db, app) = app("rpc-create-dish").await;

    let resp = app
        .oneshot(rpc(
            "CreateDish",
            r#"{"name":"Soup of the Day","description":"Ask your server","price":6.0,"is_available":true,"category_id":1}"#,
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let dish: Dish = read_json(resp).await;
    assert!(dish.id > 13);
    assert_eq!(dish.name, "Soup of the Day");
    assert_eq!(dish.category_id, 1);
}

#[tokio::test]
async fn delete_of_missing_id_returns_empty_message() {
    let (_db, app) = app("rpc-delete").await;

    let resp = app
        .oneshot(rpc("DeleteDish", r#"{"id":9999}"#))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"{}");
}

#[tokio::test]
async fn malformed_json_is_invalid_argument() {
    let (_db, app) = app("rpc-bad-json").await;

    let resp = app
        .oneshot(rpc("CreateCategory", "not-json"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: RpcErrorBody = read_json(resp).await;
    assert_eq!(body.inner.code, Code::InvalidArgument);
}

#[tokio::test]
async fn unknown_method_is_404_and_request_id_is_echoed() {
    let (_db, app) = app("rpc-unknown").await;

    let resp = app
        .clone()
        .oneshot(rpc("DropAllTables", "{}"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key("x-request-id"));

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/menu.MenuService/GetRestaurantInfo")
                .header("x-request-id", "trace-me-123")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-me-123")
    );
}

#[tokio::test]
async fn create_dish_without_availability_shows_up_in_full_menu() {
    let (_db, app) = app("rpc-default-available").await;

    let resp = app
        .clone()
        .oneshot(rpc(
            "CreateDish",
            r#"{"name":"Soup","description":"d","price":4.5,"category_id":1}"#,
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let dish: Dish = read_json(resp).await;
    assert!(dish.is_available);

    let resp = app
        .oneshot(rpc("GetFullMenu", "{}"))
        .await
        .expect("request failed");
    let menu: FullMenuResponse = read_json(resp).await;
    let appetizers = menu
        .categories
        .iter()
        .find(|c| c.category_info.id == 1)
        .expect("seeded category");
    assert!(appetizers.dishes.iter().any(|d| d.id == dish.id));
}

async fn preflight_allow_origin(allowed: &[String], origin: &str) -> Option<String> {
    let (_db, service) = seeded_service("rpc-cors").await;
    let app = menu_router(MenuState::new(service), allowed);

    let resp = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/menu.MenuService/GetFullMenu")
                .header("origin", origin)
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    resp.headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn wildcard_cors_origin_allows_any_browser_origin() {
    let allowed = vec!["*".to_string()];
    assert_eq!(
        preflight_allow_origin(&allowed, "https://anywhere.example").await,
        Some("*".to_string())
    );

    let allowed = vec!["https://menu.example".to_string(), "*".to_string()];
    assert_eq!(
        preflight_allow_origin(&allowed, "https://anywhere.example").await,
        Some("*".to_string())
    );
}

#[tokio::test]
async fn listed_cors_origins_are_matched_exactly() {
    let allowed = vec!["https://menu.example".to_string()];
    assert_eq!(
        preflight_allow_origin(&allowed, "https://menu.example").await,
        Some("https://menu.example".to_string())
    );
    assert_eq!(
        preflight_allow_origin(&allowed, "https://evil.example").await,
        None
    );
}
