//! Record / Insertable / Persistable implementations.
//!
//! This sits in the `db` module because it contains SQL/table knowledge.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use tracing::debug;

use super::models::{DbCategory, DbDish, DbRestaurant};
use super::records::{CategoryCreate, DishCreate, RestaurantCreate};
use super::schema::RESTAURANT_ID;
use super::traits::{Insertable, Persistable, Record, RecordKind};
use crate::error::MenuError;

/// Foreign-key violations on `dishes.category_id` become `InvalidReference`;
/// everything else stays a plain database failure.
fn classify_dish_write(err: sqlx::Error, category_id: i64) -> MenuError {
    let dangling = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation());
    if dangling {
        MenuError::InvalidReference { category_id }
    } else {
        MenuError::DatabaseError(err)
    }
}

#[async_trait]
impl Record for DbRestaurant {
    const KIND: RecordKind = RecordKind::Restaurant;
    const TABLE: &'static str = "restaurants";
    const COLUMNS: &'static str = "id, name, address, phone, created_at, updated_at, deleted_at";

    fn id(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl Record for DbCategory {
    const KIND: RecordKind = RecordKind::Category;
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = r#"id, name, "order", created_at, updated_at, deleted_at"#;

    fn id(&self) -> i64 {
        self.id
    }

    async fn delete_dependents(
        conn: &mut SqliteConnection,
        id: i64,
        deleted_at: DateTime<Utc>,
    ) -> Result<u64, MenuError> {
        let res = sqlx::query(
            r#"
            UPDATE dishes
            SET deleted_at = ?, updated_at = ?
            WHERE category_id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(deleted_at)
        .bind(deleted_at)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(res.rows_affected())
    }
}

#[async_trait]
impl Record for DbDish {
    const KIND: RecordKind = RecordKind::Dish;
    const TABLE: &'static str = "dishes";
    const COLUMNS: &'static str =
        "id, name, description, price, is_available, category_id, created_at, updated_at, deleted_at";

    fn id(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl Insertable for RestaurantCreate {
    type Output = DbRestaurant;

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<DbRestaurant, MenuError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbRestaurant>(
            r#"
            INSERT INTO restaurants (id, name, address, phone, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, address, phone, created_at, updated_at, deleted_at
            "#,
        )
        .bind(RESTAURANT_ID)
        .bind(&self.name)
        .bind(&self.address)
        .bind(&self.phone)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *conn)
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl Insertable for CategoryCreate {
    type Output = DbCategory;

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<DbCategory, MenuError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbCategory>(
            r#"
            INSERT INTO categories (name, "order", created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, "order", created_at, updated_at, deleted_at
            "#,
        )
        .bind(&self.name)
        .bind(self.order)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *conn)
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl Insertable for DishCreate {
    type Output = DbDish;

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<DbDish, MenuError> {
        let now = Utc::now();
        sqlx::query_as::<_, DbDish>(
            r#"
            INSERT INTO dishes (
                name, description, price, is_available, category_id, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, description, price, is_available, category_id,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.price)
        .bind(self.is_available)
        .bind(self.category_id)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| classify_dish_write(e, self.category_id))
    }
}

#[async_trait]
impl Persistable for DbRestaurant {
    async fn persist(&mut self, conn: &mut SqliteConnection) -> Result<(), MenuError> {
        let updated_at = Utc::now();
        let res = sqlx::query(
            r#"
            UPDATE restaurants
            SET name = ?, address = ?, phone = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&self.name)
        .bind(&self.address)
        .bind(&self.phone)
        .bind(updated_at)
        .bind(self.id)
        .execute(&mut *conn)
        .await?;

        finish_persist(Self::KIND, self.id, res.rows_affected(), updated_at)?;
        self.updated_at = updated_at;
        Ok(())
    }
}

#[async_trait]
impl Persistable for DbCategory {
    async fn persist(&mut self, conn: &mut SqliteConnection) -> Result<(), MenuError> {
        let updated_at = Utc::now();
        let res = sqlx::query(
            r#"
            UPDATE categories
            SET name = ?, "order" = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&self.name)
        .bind(self.order)
        .bind(updated_at)
        .bind(self.id)
        .execute(&mut *conn)
        .await?;

        finish_persist(Self::KIND, self.id, res.rows_affected(), updated_at)?;
        self.updated_at = updated_at;
        Ok(())
    }
}

#[async_trait]
impl Persistable for DbDish {
    async fn persist(&mut self, conn: &mut SqliteConnection) -> Result<(), MenuError> {
        let updated_at = Utc::now();
        let res = sqlx::query(
            r#"
            UPDATE dishes
            SET
                name = ?,
                description = ?,
                price = ?,
                is_available = ?,
                category_id = ?,
                updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.price)
        .bind(self.is_available)
        .bind(self.category_id)
        .bind(updated_at)
        .bind(self.id)
        .execute(&mut *conn)
        .await
        .map_err(|e| classify_dish_write(e, self.category_id))?;

        finish_persist(Self::KIND, self.id, res.rows_affected(), updated_at)?;
        self.updated_at = updated_at;
        Ok(())
    }
}

fn finish_persist(
    kind: RecordKind,
    id: i64,
    affected: u64,
    updated_at: DateTime<Utc>,
) -> Result<(), MenuError> {
    debug!(
        table = %kind,
        id,
        affected,
        updated_at = %updated_at,
        "db save applied"
    );

    if affected == 0 {
        return Err(MenuError::NotFound { kind, id });
    }
    Ok(())
}
