use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    db::Question,
    extractors::PathId,
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories))
        .route(names::CATEGORY_QUESTIONS_URL, get(questions_by_category))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_categories: i64,
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state
        .db
        .category_map()
        .await
        .reject("could not get categories")?;
    let total_categories = state
        .db
        .categories_count()
        .await
        .reject("could not count categories")?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
        total_categories,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

// An unknown category is not an error here: it simply has no questions.
async fn questions_by_category(
    State(state): State<AppState>,
    PathId(category_id): PathId,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let questions = state
        .db
        .questions_in_category(category_id)
        .await
        .reject("could not get questions for category")?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}
