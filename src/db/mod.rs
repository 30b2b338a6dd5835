//! Database module: models, schema and typed persistence for the menu store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `records.rs`: insert payloads for new rows
//! - `record_impl.rs`: per-table SQL behind the `traits.rs` contracts
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `seed.rs`: first-run bootstrap data
//! - `store.rs`: the shared `MenuStore` handle

pub mod models;
pub mod records;
pub mod schema;
pub mod store;
pub mod traits;

mod record_impl;
mod seed;

pub use models::{DbCategory, DbDish, DbRestaurant};
pub use records::{CategoryCreate, DishCreate, RestaurantCreate};
pub use schema::{RESTAURANT_ID, SQLITE_INIT};
pub use store::{Filter, MenuStore, OrderBy};
pub use traits::{Insertable, Persistable, Record, RecordKind};
