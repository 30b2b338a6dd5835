use crate::db::models::{DbCategory, DbDish, DbRestaurant};
use crate::db::schema::SQLITE_INIT;
use crate::db::seed;
use crate::db::traits::{Insertable, Persistable, Record};
use crate::error::MenuError;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::collections::HashMap;
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

/// Row filter for `MenuStore::find_all`. Column names are compile-time
/// constants, never caller input.
#[derive(Debug, Clone, Copy, Default)]
pub enum Filter {
    #[default]
    All,
    Eq {
        column: &'static str,
        value: i64,
    },
}

/// Result ordering for `MenuStore::find_all`.
#[derive(Debug, Clone, Copy, Default)]
pub enum OrderBy {
    /// Insertion order.
    #[default]
    Id,
    /// Ascending by the given column, ties broken by insertion order.
    Asc(&'static str),
}

impl OrderBy {
    fn clause(&self) -> String {
        match self {
            OrderBy::Id => " ORDER BY id".to_string(),
            OrderBy::Asc(column) => format!(" ORDER BY {column} ASC, id ASC"),
        }
    }
}

/// Shared handle to the menu database.
///
/// Cloning is cheap; all clones share one connection pool and rely on SQLite's
/// own locking for concurrent callers.
#[derive(Clone, Debug)]
pub struct MenuStore {
    pool: SqlitePool,
}

impl MenuStore {
    /// Opens (creating if missing) the database at `database_url` and applies the schema.
    pub async fn connect(database_url: &str) -> Result<Self, MenuError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

        apply_schema(&pool).await?;

        info!(database_url, "MenuStore initialized");
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Inserts the default restaurant, categories and dishes when no
    /// restaurant row exists yet. Returns whether anything was written.
    pub async fn seed_if_empty(&self) -> Result<bool, MenuError> {
        let restaurants = self.count::<DbRestaurant>().await?;
        if restaurants > 0 {
            debug!(restaurants, "seed skipped, store already populated");
            return Ok(false);
        }

        info!("Seeding database with initial data...");
        let mut tx = self.pool.begin().await?;
        seed::seed_defaults(&mut *tx).await?;
        tx.commit().await?;
        info!("Database seeded successfully");
        Ok(true)
    }

    /// Live (not soft-deleted) rows of `R`.
    pub async fn count<R: Record>(&self) -> Result<i64, MenuError> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL",
            R::TABLE
        );
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    pub async fn create<C: Insertable>(&self, payload: &C) -> Result<C::Output, MenuError> {
        let mut conn = self.pool.acquire().await?;
        let row = payload.insert(&mut *conn).await?;
        debug!(
            table = <C::Output as Record>::TABLE,
            id = row.id(),
            "db row created"
        );
        Ok(row)
    }

    pub async fn find_by_id<R: Record>(&self, id: i64) -> Result<R, MenuError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ? AND deleted_at IS NULL",
            R::COLUMNS,
            R::TABLE
        );
        sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(MenuError::NotFound { kind: R::KIND, id })
    }

    pub async fn find_all<R: Record>(
        &self,
        filter: Filter,
        order: OrderBy,
    ) -> Result<Vec<R>, MenuError> {
        let mut sql = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL",
            R::COLUMNS,
            R::TABLE
        );
        if let Filter::Eq { column, .. } = filter {
            sql.push_str(&format!(" AND {column} = ?"));
        }
        sql.push_str(&order.clause());

        let mut query = sqlx::query_as::<_, R>(&sql);
        if let Filter::Eq { value, .. } = filter {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Writes every mutable column of `record`; `NotFound` when the row is gone.
    pub async fn save<R: Persistable>(&self, record: &mut R) -> Result<(), MenuError> {
        let mut conn = self.pool.acquire().await?;
        record.persist(&mut *conn).await
    }

    /// Soft-deletes `id` together with its dependent rows in one transaction.
    /// An absent id is not an error; the returned count is the number of rows
    /// stamped (dependents included).
    pub async fn delete<R: Record>(&self, id: i64) -> Result<u64, MenuError> {
        let deleted_at = Utc::now();
        let mut tx = self.pool.begin().await?;

        let dependents = R::delete_dependents(&mut *tx, id, deleted_at).await?;

        let sql = format!(
            "UPDATE {} SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
            R::TABLE
        );
        let res = sqlx::query(&sql)
            .bind(deleted_at)
            .bind(deleted_at)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let affected = res.rows_affected();
        debug!(
            table = R::TABLE,
            id,
            affected,
            dependents,
            "db soft delete applied"
        );
        Ok(affected + dependents)
    }

    /// Categories ascending by `order`, each paired with its live dishes in
    /// insertion order. Two independent reads; no snapshot across them.
    pub async fn categories_with_dishes(
        &self,
    ) -> Result<Vec<(DbCategory, Vec<DbDish>)>, MenuError> {
        let categories: Vec<DbCategory> = self
            .find_all(Filter::All, OrderBy::Asc(r#""order""#))
            .await?;
        let dishes: Vec<DbDish> = self.find_all(Filter::All, OrderBy::Id).await?;

        let mut by_category: HashMap<i64, Vec<DbDish>> = HashMap::new();
        for dish in dishes {
            by_category.entry(dish.category_id).or_default().push(dish);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let dishes = by_category.remove(&category.id).unwrap_or_default();
                (category, dishes)
            })
            .collect())
    }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), MenuError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
