use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use super::setup::ensure_schema;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Opens (or creates) the store at `database_path` and makes sure the
/// schema exists before handing out connections
pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(database_path);
    let pool = build_pool(manager)?;

    let conn = get_connection(&pool)?;
    ensure_schema(&conn)?;
    log::info!("Opened match store at {}", database_path);
    Ok(pool)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path)
        .with_init(|conn| conn.busy_timeout(std::time::Duration::from_secs(5)))
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
