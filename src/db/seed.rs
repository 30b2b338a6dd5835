//! Default data written on the first start against an empty database.

use sqlx::SqliteConnection;

use super::records::{CategoryCreate, DishCreate, RestaurantCreate};
use super::traits::Insertable;
use crate::error::MenuError;

const RESTAURANT_NAME: &str = "The Gourmet Kitchen";
const RESTAURANT_ADDRESS: &str = "123 Main Street, Foodville, FV 12345";
const RESTAURANT_PHONE: &str = "(555) 123-4567";

/// (category name, order, [(dish name, description, price)])
type SeedCategory = (
    &'static str,
    i32,
    &'static [(&'static str, &'static str, f64)],
);

const SEED_MENU: &[SeedCategory] = &[
    (
        "Appetizers",
        1,
        &[
            (
                "Caesar Salad",
                "Crisp romaine lettuce with parmesan cheese and croutons",
                8.99,
            ),
            (
                "Bruschetta",
                "Toasted bread with fresh tomatoes, garlic, and basil",
                7.99,
            ),
            (
                "Garlic Bread",
                "Homemade bread with garlic butter and herbs",
                5.99,
            ),
        ],
    ),
    (
        "Main Courses",
        2,
        &[
            (
                "Grilled Salmon",
                "Fresh Atlantic salmon with lemon butter sauce",
                24.99,
            ),
            (
                "Ribeye Steak",
                "12oz premium ribeye cooked to perfection",
                32.99,
            ),
            (
                "Chicken Alfredo",
                "Creamy alfredo pasta with grilled chicken",
                18.99,
            ),
            (
                "Vegetarian Lasagna",
                "Layers of pasta with vegetables and cheese",
                16.99,
            ),
        ],
    ),
    (
        "Desserts",
        3,
        &[
            (
                "Tiramisu",
                "Classic Italian dessert with espresso and mascarpone",
                8.99,
            ),
            (
                "Chocolate Lava Cake",
                "Warm chocolate cake with molten center",
                9.99,
            ),
            (
                "Cheesecake",
                "New York style cheesecake with berry compote",
                7.99,
            ),
        ],
    ),
    (
        "Beverages",
        4,
        &[
            ("Fresh Lemonade", "Homemade lemonade with fresh lemons", 3.99),
            ("Iced Tea", "Refreshing iced tea with mint", 2.99),
            ("Coffee", "Freshly brewed coffee", 2.49),
        ],
    ),
];

pub(super) async fn seed_defaults(conn: &mut SqliteConnection) -> Result<(), MenuError> {
    RestaurantCreate {
        name: RESTAURANT_NAME.to_string(),
        address: RESTAURANT_ADDRESS.to_string(),
        phone: RESTAURANT_PHONE.to_string(),
    }
    .insert(&mut *conn)
    .await?;

    for (name, order, dishes) in SEED_MENU {
        let category = CategoryCreate {
            name: name.to_string(),
            order: *order,
        }
        .insert(&mut *conn)
        .await?;

        for (dish_name, description, price) in dishes.iter() {
            DishCreate {
                name: dish_name.to_string(),
                description: description.to_string(),
                price: *price,
                is_available: true,
                category_id: category.id,
            }
            .insert(&mut *conn)
            .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::SEED_MENU;

    #[test]
    fn seed_menu_has_four_ordered_categories_and_thirteen_dishes() {
        let orders: Vec<i32> = SEED_MENU.iter().map(|(_, order, _)| *order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);

        let dish_count: usize = SEED_MENU.iter().map(|(_, _, dishes)| dishes.len()).sum();
        assert_eq!(dish_count, 13);
    }
}
