//! Contracts between the store and the per-table SQL in `record_impl.rs`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, sqlite::SqliteRow};
use std::fmt;

use crate::error::MenuError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Restaurant,
    Category,
    Dish,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Restaurant => "restaurant",
            RecordKind::Category => "category",
            RecordKind::Dish => "dish",
        })
    }
}

/// A persisted row kind the generic store primitives can read and delete.
#[async_trait]
pub trait Record: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    const KIND: RecordKind;
    const TABLE: &'static str;
    /// Comma-separated select list, in `FromRow` field order.
    const COLUMNS: &'static str;

    fn id(&self) -> i64;

    /// Soft-deletes rows owned by the record `id` before the record itself is
    /// stamped. Runs in the same transaction as the owning delete.
    async fn delete_dependents(
        _conn: &mut SqliteConnection,
        _id: i64,
        _deleted_at: DateTime<Utc>,
    ) -> Result<u64, MenuError> {
        Ok(0)
    }
}

/// Abstraction for inserting a create payload and returning the stored row.
#[async_trait]
pub trait Insertable: Send + Sync {
    type Output: Record;

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<Self::Output, MenuError>;
}

/// Abstraction for writing every mutable column of a loaded row back.
#[async_trait]
pub trait Persistable: Record {
    async fn persist(&mut self, conn: &mut SqliteConnection) -> Result<(), MenuError>;
}
