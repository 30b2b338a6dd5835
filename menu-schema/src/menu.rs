use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RestaurantInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Display position; lower sorts first, duplicates allowed.
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Omitted on the wire means available; only an explicit `false` hides the dish.
    #[serde(default = "default_available")]
    pub is_available: bool,
    pub category_id: i64,
}

impl Default for Dish {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: String::new(),
            price: 0.0,
            is_available: default_available(),
            category_id: 0,
        }
    }
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CategoryWithDishes {
    pub category_info: Category,
    pub dishes: Vec<Dish>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FullMenuResponse {
    pub restaurant_info: RestaurantInfo,
    pub categories: Vec<CategoryWithDishes>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListCategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListDishesResponse {
    pub dishes: Vec<Dish>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CategoryId {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DishId {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let dish: Dish = serde_json::from_str(r#"{"name":"Soup"}"#).unwrap();
        assert_eq!(dish.name, "Soup");
        assert_eq!(dish.id, 0);
        assert_eq!(dish.description, "");
        assert!(dish.is_available, "omitted is_available defaults to true");

        let hidden: Dish = serde_json::from_str(r#"{"name":"Soup","is_available":false}"#).unwrap();
        assert!(!hidden.is_available);

        let empty: Empty = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Empty {});
    }

    #[test]
    fn full_menu_uses_snake_case_keys() {
        let menu = FullMenuResponse {
            restaurant_info: RestaurantInfo {
                name: "Bistro".to_string(),
                ..Default::default()
            },
            categories: vec![CategoryWithDishes {
                category_info: Category {
                    id: 7,
                    name: "Soups".to_string(),
                    order: 1,
                },
                dishes: Vec::new(),
            }],
        };

        let value = serde_json::to_value(&menu).unwrap();
        assert_eq!(value["restaurant_info"]["name"], "Bistro");
        assert_eq!(value["categories"][0]["category_info"]["id"], 7);
        assert!(value["categories"][0]["dishes"].as_array().unwrap().is_empty());
    }
}
