// Database module - the store behind every endpoint

use std::str::FromStr;

use color_eyre::{
    eyre::{ensure, OptionExt},
    Result,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub mod models;
pub use models::*;

mod category;
mod question;
mod schema;

// Main database handle
#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let one: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_optional(&pool)
            .await?
            .ok_or_eyre("connection check failed")?;
        ensure!(one == 1, "connection check failed");

        schema::create_schema(&pool).await?;
        schema::seed_categories(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }

    /// Waits for in-flight queries and closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}
