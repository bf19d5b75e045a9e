//! SQLite pool setup and schema bootstrap.

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    first_name TEXT NOT NULL DEFAULT '',
    last_name TEXT NOT NULL DEFAULT '',
    date_joined TEXT NOT NULL,
    last_login TEXT
);

CREATE TABLE IF NOT EXISTS auth_sessions (
    token TEXT PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS extended_users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
    role TEXT NOT NULL,
    phone_number TEXT NOT NULL DEFAULT '',
    address TEXT NOT NULL DEFAULT '',
    city TEXT NOT NULL DEFAULT '',
    state TEXT NOT NULL DEFAULT '',
    pincode TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS farmer_details (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    extended_user_id INTEGER NOT NULL UNIQUE REFERENCES extended_users(id) ON DELETE CASCADE,
    farm_size_acres REAL NOT NULL DEFAULT 0,
    experience_years INTEGER NOT NULL DEFAULT 0,
    preferred_crops TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS lands (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    extended_user_id INTEGER NOT NULL REFERENCES extended_users(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    location TEXT NOT NULL,
    area_acres REAL NOT NULL,
    soil_type TEXT NOT NULL DEFAULT '',
    water_source TEXT NOT NULL DEFAULT '',
    expected_rent REAL NOT NULL DEFAULT 0,
    description TEXT NOT NULL DEFAULT '',
    is_available INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS images (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    land_id INTEGER REFERENCES lands(id) ON DELETE SET NULL,
    file_path TEXT NOT NULL,
    uploaded_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS land_applications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    land_id INTEGER NOT NULL REFERENCES lands(id) ON DELETE CASCADE,
    farmer_id INTEGER NOT NULL REFERENCES extended_users(id) ON DELETE CASCADE,
    proposed_rent REAL NOT NULL DEFAULT 0,
    duration_months INTEGER NOT NULL DEFAULT 0,
    message TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT 'pending',
    applied_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS land_agreements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    land_id INTEGER NOT NULL REFERENCES lands(id) ON DELETE CASCADE,
    landowner_id INTEGER NOT NULL REFERENCES extended_users(id) ON DELETE CASCADE,
    farmer_id INTEGER NOT NULL REFERENCES extended_users(id) ON DELETE CASCADE,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    rent_amount REAL NOT NULL DEFAULT 0,
    terms TEXT NOT NULL DEFAULT '',
    signed_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS storages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    extended_user_id INTEGER NOT NULL REFERENCES extended_users(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    location TEXT NOT NULL,
    capacity_tons REAL NOT NULL DEFAULT 0,
    price_per_ton REAL NOT NULL DEFAULT 0,
    storage_type TEXT NOT NULL DEFAULT '',
    is_available INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS storage_applications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    storage_id INTEGER NOT NULL REFERENCES storages(id) ON DELETE CASCADE,
    farmer_id INTEGER NOT NULL REFERENCES extended_users(id) ON DELETE CASCADE,
    crop_type TEXT NOT NULL DEFAULT '',
    quantity_tons REAL NOT NULL DEFAULT 0,
    duration_months INTEGER NOT NULL DEFAULT 0,
    status TEXT NOT NULL DEFAULT 'pending',
    applied_at TEXT NOT NULL
);
"#;

/// Open the pool and make sure the schema exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to open SQLite pool")?;

    init_schema(&pool).await?;
    info!("Database ready at {database_url}");

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .context("Failed to bootstrap schema")?;
    Ok(())
}

// A pooled in-memory database must stay on one connection; every new
// connection would otherwise see a fresh empty database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    init_schema(&pool).await.expect("schema bootstrap");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_bootstrap_is_idempotent() {
        let pool = test_pool().await;
        init_schema(&pool).await.expect("second bootstrap");

        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'lands'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count.0, 1);
    }
}
