// Database schema initialization

use color_eyre::Result;
use sqlx::SqlitePool;

const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // category is deliberately unconstrained: inserts never check that it exists
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Categories are seed data owned by the store; only an empty table is filled.
pub async fn seed_categories(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (idx, name) in DEFAULT_CATEGORIES.iter().enumerate() {
        sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
            .bind(idx as i64 + 1)
            .bind(*name)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!("seeded {} default categories", DEFAULT_CATEGORIES.len());
    Ok(())
}
