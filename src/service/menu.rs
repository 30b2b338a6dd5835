use menu_schema::{
    Category, CategoryId, CategoryWithDishes, Dish, DishId, Empty, FullMenuResponse,
    ListCategoriesResponse, ListDishesResponse, RestaurantInfo,
};
use tracing::{debug, info};

use crate::db::{
    CategoryCreate, DbCategory, DbDish, DbRestaurant, DishCreate, Filter, MenuStore, OrderBy,
    RESTAURANT_ID,
};
use crate::error::MenuError;

const CATEGORY_ORDER: OrderBy = OrderBy::Asc(r#""order""#);

/// Stateless handlers over a shared `MenuStore`.
///
/// Each call performs at most one logical mutation; nothing is retried and no
/// transaction spans two calls.
#[derive(Clone, Debug)]
pub struct MenuService {
    store: MenuStore,
}

impl MenuService {
    pub fn new(store: MenuStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Restaurant profile plus every category (ascending `order`) with only its
    /// available dishes.
    pub async fn get_full_menu(&self) -> Result<FullMenuResponse, MenuError> {
        info!("GetFullMenu called");

        let restaurant = self.load_restaurant().await?;
        let categories = self
            .store
            .categories_with_dishes()
            .await
            .map_err(|e| e.context("failed to fetch categories"))?;

        let categories = categories
            .into_iter()
            .map(|(category, dishes)| CategoryWithDishes {
                category_info: category.into(),
                dishes: dishes
                    .into_iter()
                    .filter(|dish| dish.is_available)
                    .map(Dish::from)
                    .collect(),
            })
            .collect();

        Ok(FullMenuResponse {
            restaurant_info: restaurant.into(),
            categories,
        })
    }

    pub async fn get_restaurant_info(&self) -> Result<RestaurantInfo, MenuError> {
        info!("GetRestaurantInfo called");
        Ok(self.load_restaurant().await?.into())
    }

    /// Overwrites all three fields; empty strings are written as-is.
    pub async fn update_restaurant_info(
        &self,
        req: RestaurantInfo,
    ) -> Result<RestaurantInfo, MenuError> {
        info!(name = %req.name, "UpdateRestaurantInfo called");

        let mut restaurant = self.load_restaurant().await?;
        restaurant.name = req.name;
        restaurant.address = req.address;
        restaurant.phone = req.phone;

        self.store
            .save(&mut restaurant)
            .await
            .map_err(|e| internal(e).context("failed to update restaurant info"))?;

        Ok(restaurant.into())
    }

    pub async fn create_category(&self, req: Category) -> Result<Category, MenuError> {
        info!(name = %req.name, order = req.order, "CreateCategory called");

        let category = self
            .store
            .create(&CategoryCreate::from(req))
            .await
            .map_err(|e| e.context("failed to create category"))?;

        Ok(category.into())
    }

    pub async fn list_categories(&self) -> Result<ListCategoriesResponse, MenuError> {
        info!("ListCategories called");

        let categories: Vec<DbCategory> = self
            .store
            .find_all(Filter::All, CATEGORY_ORDER)
            .await
            .map_err(|e| e.context("failed to fetch categories"))?;

        Ok(ListCategoriesResponse {
            categories: categories.into_iter().map(Category::from).collect(),
        })
    }

    pub async fn update_category(&self, req: Category) -> Result<Category, MenuError> {
        info!(id = req.id, name = %req.name, order = req.order, "UpdateCategory called");

        let mut category: DbCategory = self
            .store
            .find_by_id(req.id)
            .await
            .map_err(|e| e.context("category not found"))?;

        category.name = req.name;
        category.order = req.order;

        self.store
            .save(&mut category)
            .await
            .map_err(|e| e.context("failed to update category"))?;

        Ok(category.into())
    }

    /// Also removes the category's dishes. An unknown id succeeds silently.
    pub async fn delete_category(&self, req: CategoryId) -> Result<Empty, MenuError> {
        info!(id = req.id, "DeleteCategory called");

        let affected = self
            .store
            .delete::<DbCategory>(req.id)
            .await
            .map_err(|e| e.context("failed to delete category"))?;

        debug!(id = req.id, affected, "DeleteCategory finished");
        Ok(Empty {})
    }

    pub async fn create_dish(&self, req: Dish) -> Result<Dish, MenuError> {
        info!(
            name = %req.name,
            category_id = req.category_id,
            "CreateDish called"
        );

        self.ensure_category(req.category_id).await?;

        let dish = self
            .store
            .create(&DishCreate::from(req))
            .await
            .map_err(|e| e.context("failed to create dish"))?;

        Ok(dish.into())
    }

    /// Every dish of the category, available or not, in insertion order.
    pub async fn list_dishes_by_category(
        &self,
        req: CategoryId,
    ) -> Result<ListDishesResponse, MenuError> {
        info!(category_id = req.id, "ListDishesByCategory called");

        let dishes: Vec<DbDish> = self
            .store
            .find_all(
                Filter::Eq {
                    column: "category_id",
                    value: req.id,
                },
                OrderBy::Id,
            )
            .await
            .map_err(|e| e.context("failed to fetch dishes"))?;

        Ok(ListDishesResponse {
            dishes: dishes.into_iter().map(Dish::from).collect(),
        })
    }

    /// Overwrites every field, `category_id` included.
    pub async fn update_dish(&self, req: Dish) -> Result<Dish, MenuError> {
        info!(
            id = req.id,
            name = %req.name,
            category_id = req.category_id,
            "UpdateDish called"
        );

        let mut dish: DbDish = self
            .store
            .find_by_id(req.id)
            .await
            .map_err(|e| e.context("dish not found"))?;

        self.ensure_category(req.category_id).await?;

        dish.name = req.name;
        dish.description = req.description;
        dish.price = req.price;
        dish.is_available = req.is_available;
        dish.category_id = req.category_id;

        self.store
            .save(&mut dish)
            .await
            .map_err(|e| e.context("failed to update dish"))?;

        Ok(dish.into())
    }

    /// An unknown id succeeds silently.
    pub async fn delete_dish(&self, req: DishId) -> Result<Empty, MenuError> {
        info!(id = req.id, "DeleteDish called");

        let affected = self
            .store
            .delete::<DbDish>(req.id)
            .await
            .map_err(|e| e.context("failed to delete dish"))?;

        debug!(id = req.id, affected, "DeleteDish finished");
        Ok(Empty {})
    }

    /// The singleton restaurant row. Its absence is a store failure, not NOT_FOUND.
    async fn load_restaurant(&self) -> Result<DbRestaurant, MenuError> {
        self.store
            .find_by_id::<DbRestaurant>(RESTAURANT_ID)
            .await
            .map_err(|e| internal(e).context("failed to fetch restaurant info"))
    }

    async fn ensure_category(&self, category_id: i64) -> Result<(), MenuError> {
        match self.store.find_by_id::<DbCategory>(category_id).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Err(MenuError::InvalidReference { category_id }),
            Err(e) => Err(e.context("failed to fetch category")),
        }
    }
}

fn internal(err: MenuError) -> MenuError {
    if err.is_not_found() {
        MenuError::UnexpectedError(err.to_string())
    } else {
        err
    }
}
