use menu_schema::{Category, Dish, RestaurantInfo};

use crate::db::{CategoryCreate, DbCategory, DbDish, DbRestaurant, DishCreate};

impl From<DbRestaurant> for RestaurantInfo {
    fn from(row: DbRestaurant) -> Self {
        Self {
            name: row.name,
            address: row.address,
            phone: row.phone,
        }
    }
}

impl From<DbCategory> for Category {
    fn from(row: DbCategory) -> Self {
        Self {
            id: row.id,
            name: row.name,
            order: row.order,
        }
    }
}

impl From<DbDish> for Dish {
    fn from(row: DbDish) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            is_available: row.is_available,
            category_id: row.category_id,
        }
    }
}

impl From<Category> for CategoryCreate {
    fn from(req: Category) -> Self {
        Self {
            name: req.name,
            order: req.order,
        }
    }
}

impl From<Dish> for DishCreate {
    fn from(req: Dish) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            is_available: req.is_available,
            category_id: req.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn dish_row_maps_every_wire_field() {
        let now = Utc::now();
        let row = DbDish {
            id: 3,
            name: "Coffee".to_string(),
            description: "Freshly brewed coffee".to_string(),
            price: 2.49,
            is_available: false,
            category_id: 4,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let dish = Dish::from(row);
        assert_eq!(
            dish,
            Dish {
                id: 3,
                name: "Coffee".to_string(),
                description: "Freshly brewed coffee".to_string(),
                price: 2.49,
                is_available: false,
                category_id: 4,
            }
        );
    }

    #[test]
    fn create_payload_ignores_request_id() {
        let create = CategoryCreate::from(Category {
            id: 99,
            name: "Specials".to_string(),
            order: 5,
        });
        assert_eq!(create.name, "Specials");
        assert_eq!(create.order, 5);
    }
}
