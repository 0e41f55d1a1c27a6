use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{
    db::Question,
    extractors::Payload,
    names, quiz,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZZES_URL, post(next_question))
}

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(default, deserialize_with = "super::deserialize_optional_i64")]
    id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizBody {
    #[serde(default, alias = "quiz_category")]
    quiz_category: Option<QuizCategory>,
    #[serde(default, alias = "previous_questions")]
    previous_questions: Option<Vec<i64>>,
}

impl QuizBody {
    /// `quizCategory` may be null (every category) but, when given, must carry
    /// an id. `previousQuestions` is required, possibly empty.
    fn category(&self) -> Result<Option<i64>, AppError> {
        match &self.quiz_category {
            None => Ok(None),
            Some(QuizCategory { id: Some(id) }) => Ok(Some(*id)),
            Some(QuizCategory { id: None }) => {
                Err(AppError::Unprocessable("quizCategory.id is required"))
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    success: bool,
    question: Option<Question>,
    previous_questions: Vec<i64>,
}

async fn next_question(
    State(state): State<AppState>,
    Payload(body): Payload<QuizBody>,
) -> Result<Json<QuizResponse>, AppError> {
    let category = quiz::category_filter(body.category()?);
    let previous_questions = body
        .previous_questions
        .ok_or(AppError::Unprocessable("previousQuestions is required"))?;
    let seen: HashSet<i64> = previous_questions.iter().copied().collect();

    let pool = state
        .db
        .quiz_pool(category)
        .await
        .reject("could not get quiz questions")?;

    let question = quiz::select_next(category, &seen, pool, state.picker.as_ref());
    if question.is_none() {
        tracing::debug!("quiz pool exhausted for category {category:?}");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
        previous_questions,
    }))
}
