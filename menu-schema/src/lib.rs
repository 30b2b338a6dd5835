//! Wire records for the menu RPC surface.
//!
//! Every message follows proto3 decoding rules: a field missing from the
//! request body decodes to its zero value.

pub mod menu;
pub mod status;

pub use menu::{
    Category, CategoryId, CategoryWithDishes, Dish, DishId, Empty, FullMenuResponse,
    ListCategoriesResponse, ListDishesResponse, RestaurantInfo,
};
pub use status::{Code, RpcErrorBody, RpcErrorObject};
