//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// Well-known identity of the single restaurant row, written at seed time.
pub const RESTAURANT_ID: i64 = 1;

/// SQLite schema includes:
/// - `restaurants` table (one row in practice, id = `RESTAURANT_ID`)
/// - `categories` table (menu sections, sorted by `order`)
/// - `dishes` table (menu items, one category per row)
///
/// `deleted_at` is the soft-delete marker; live rows have it NULL.
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Restaurant profile
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS restaurants (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    address TEXT NOT NULL DEFAULT '',
    phone TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL, -- RFC3339
    deleted_at TEXT NULL -- RFC3339
);

-- ---------------------------------------------------------------------------
-- Menu categories
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    "order" INTEGER NOT NULL,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL, -- RFC3339
    deleted_at TEXT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_categories_order ON categories("order");

-- ---------------------------------------------------------------------------
-- Dishes (physical deletes of a category cascade here)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS dishes (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    price REAL NOT NULL,
    is_available INTEGER NOT NULL DEFAULT 1,
    category_id INTEGER NOT NULL
        REFERENCES categories(id) ON UPDATE CASCADE ON DELETE CASCADE,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL, -- RFC3339
    deleted_at TEXT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_dishes_category_id ON dishes(category_id);
"#;
