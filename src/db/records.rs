#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub order: i32,
}

#[derive(Debug, Clone)]
pub struct DishCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub is_available: bool,
    /// Validated by `MenuService` before insert; the `dishes.category_id`
    /// foreign key rejects anything that slips past it.
    pub category_id: i64,
}
