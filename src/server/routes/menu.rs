use crate::error::MenuError;
use crate::server::extract::RpcRequest;
use crate::server::router::MenuState;
use axum::{Json, Router, extract::State, routing::post};
use menu_schema::{
    Category, CategoryId, Dish, DishId, Empty, FullMenuResponse, ListCategoriesResponse,
    ListDishesResponse, RestaurantInfo,
};

/// Fully-qualified service name; each method is served at `/{SERVICE}/{Method}`.
pub const SERVICE: &str = "menu.MenuService";

/// Route path of one RPC method, e.g. `/menu.MenuService/GetFullMenu`.
pub fn method_path(method: &str) -> String {
    format!("/{SERVICE}/{method}")
}

pub fn router() -> Router<MenuState> {
    Router::new()
        .route(&method_path("GetFullMenu"), post(get_full_menu))
        .route(&method_path("GetRestaurantInfo"), post(get_restaurant_info))
        .route(
            &method_path("UpdateRestaurantInfo"),
            post(update_restaurant_info),
        )
        .route(&method_path("CreateCategory"), post(create_category))
        .route(&method_path("ListCategories"), post(list_categories))
        .route(&method_path("UpdateCategory"), post(update_category))
        .route(&method_path("DeleteCategory"), post(delete_category))
        .route(&method_path("CreateDish"), post(create_dish))
        .route(
            &method_path("ListDishesByCategory"),
            post(list_dishes_by_category),
        )
        .route(&method_path("UpdateDish"), post(update_dish))
        .route(&method_path("DeleteDish"), post(delete_dish))
}

async fn get_full_menu(
    State(state): State<MenuState>,
) -> Result<Json<FullMenuResponse>, MenuError> {
    Ok(Json(state.service.get_full_menu().await?))
}

async fn get_restaurant_info(
    State(state): State<MenuState>,
) -> Result<Json<RestaurantInfo>, MenuError> {
    Ok(Json(state.service.get_restaurant_info().await?))
}

async fn update_restaurant_info(
    State(state): State<MenuState>,
    RpcRequest(req): RpcRequest<RestaurantInfo>,
) -> Result<Json<RestaurantInfo>, MenuError> {
    Ok(Json(state.service.update_restaurant_info(req).await?))
}

async fn create_category(
    State(state): State<MenuState>,
    RpcRequest(req): RpcRequest<Category>,
) -> Result<Json<Category>, MenuError> {
    Ok(Json(state.service.create_category(req).await?))
}

async fn list_categories(
    State(state): State<MenuState>,
) -> Result<Json<ListCategoriesResponse>, MenuError> {
    Ok(Json(state.service.list_categories().await?))
}

async fn update_category(
    State(state): State<MenuState>,
    RpcRequest(req): RpcRequest<Category>,
) -> Result<Json<Category>, MenuError> {
    Ok(Json(state.service.update_category(req).await?))
}

async fn delete_category(
    State(state): State<MenuState>,
    RpcRequest(req): RpcRequest<CategoryId>,
) -> Result<Json<Empty>, MenuError> {
    Ok(Json(state.service.delete_category(req).await?))
}

async fn create_dish(
    State(state): State<MenuState>,
    RpcRequest(req): RpcRequest<Dish>,
) -> Result<Json<Dish>, MenuError> {
    Ok(Json(state.service.create_dish(req).await?))
}

async fn list_dishes_by_category(
    State(state): State<MenuState>,
    RpcRequest(req): RpcRequest<CategoryId>,
) -> Result<Json<ListDishesResponse>, MenuError> {
    Ok(Json(state.service.list_dishes_by_category(req).await?))
}

async fn update_dish(
    State(state): State<MenuState>,
    RpcRequest(req): RpcRequest<Dish>,
) -> Result<Json<Dish>, MenuError> {
    Ok(Json(state.service.update_dish(req).await?))
}

async fn delete_dish(
    State(state): State<MenuState>,
    RpcRequest(req): RpcRequest<DishId>,
) -> Result<Json<Empty>, MenuError> {
    Ok(Json(state.service.delete_dish(req).await?))
}
