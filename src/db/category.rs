use std::collections::BTreeMap;

use color_eyre::Result;

use super::models::Category;
use super::Db;

impl Db {
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    /// Categories keyed by id, the shape every endpoint reports them in.
    pub async fn category_map(&self) -> Result<BTreeMap<i64, String>> {
        Ok(self
            .categories()
            .await?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect())
    }

    pub async fn categories_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
