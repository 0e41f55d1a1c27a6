use color_eyre::Result;

use super::models::{NewQuestion, Question};
use super::Db;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

impl Db {
    /// Every question, ordered by ascending id so pages stay stable across calls.
    pub async fn questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn question(&self, question_id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?"
        ))
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Candidate questions for quiz play: one category, or all of them for `None`.
    pub async fn quiz_pool(&self, category_id: Option<i64>) -> Result<Vec<Question>> {
        match category_id {
            Some(id) => self.questions_in_category(id).await,
            None => self.questions().await,
        }
    }

    /// Returns the id the store assigned to the new row.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<i64> {
        let id = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::info!("new question created with id: {id}");
        Ok(id)
    }

    /// Returns whether a row was actually removed.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let affected = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(question_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!("question {question_id} deleted: {}", affected > 0);
        Ok(affected > 0)
    }
}
