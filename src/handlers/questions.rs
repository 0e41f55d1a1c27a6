use std::collections::{BTreeMap, HashMap};

use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{NewQuestion, Question},
    extractors::{PathId, Payload},
    names, pagination,
    rejections::{AppError, ResultExt},
    search, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions).post(create_question),
        )
        .route(names::QUESTION_URL, delete(delete_question))
        .route(names::SEARCH_QUESTIONS_URL, post(search_questions))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsPageResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
}

async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<QuestionsPageResponse>, AppError> {
    let page = pagination::extract_page(&params);

    let all = state
        .db
        .questions()
        .await
        .reject("could not get questions")?;
    let questions = pagination::paginate(page, &all).to_vec();

    if questions.is_empty() {
        return Err(AppError::NotFound("page not found"));
    }

    let categories = state
        .db
        .category_map()
        .await
        .reject("could not get categories")?;

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions,
        total_questions: all.len(),
        categories,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    success: bool,
    deleted: i64,
    total_questions: i64,
}

async fn delete_question(
    State(state): State<AppState>,
    PathId(question_id): PathId,
) -> Result<Json<DeletedResponse>, AppError> {
    state
        .db
        .question(question_id)
        .await
        .reject("could not look up question")?
        .ok_or(AppError::NotFound("question not found"))?;

    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject_unprocessable("could not delete question")?;

    // lost a race with another delete of the same row
    if !deleted {
        return Err(AppError::NotFound("question not found"));
    }

    let total_questions = state
        .db
        .questions_count()
        .await
        .reject("could not count questions")?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
        total_questions,
    }))
}

#[derive(Deserialize)]
struct CreateQuestionBody {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_optional_i64")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "super::deserialize_optional_i64")]
    difficulty: Option<i64>,
}

impl CreateQuestionBody {
    /// Category existence is not checked; difficulty is stored as given.
    fn validate(self) -> Result<NewQuestion, AppError> {
        let question =
            non_empty(self.question).ok_or(AppError::Unprocessable("question is required"))?;
        let answer =
            non_empty(self.answer).ok_or(AppError::Unprocessable("answer is required"))?;
        let category = self
            .category
            .ok_or(AppError::Unprocessable("category is required"))?;
        let difficulty = self
            .difficulty
            .ok_or(AppError::Unprocessable("difficulty is required"))?;
        let difficulty = i32::try_from(difficulty)
            .map_err(|_| AppError::Unprocessable("difficulty is out of range"))?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    success: bool,
    created: i64,
    total_questions: i64,
}

async fn create_question(
    State(state): State<AppState>,
    Payload(body): Payload<CreateQuestionBody>,
) -> Result<Json<CreatedResponse>, AppError> {
    let new = body.validate()?;

    let created = state
        .db
        .insert_question(&new)
        .await
        .reject_unprocessable("could not create question")?;

    let total_questions = state
        .db
        .questions_count()
        .await
        .reject("could not count questions")?;

    Ok(Json(CreatedResponse {
        success: true,
        created,
        total_questions,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody {
    #[serde(default, alias = "search_term")]
    search_term: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn search_questions(
    State(state): State<AppState>,
    body: Result<Payload<SearchBody>, AppError>,
) -> Result<Json<SearchResponse>, AppError> {
    // any body this endpoint cannot read is a bad request, whatever its shape
    let Payload(body) = body.reject_input("malformed request body")?;
    let term = body
        .search_term
        .ok_or(AppError::BadRequest("searchTerm is required"))?;

    let all = state
        .db
        .questions()
        .await
        .reject("could not get questions")?;
    let questions = search::search(&term, all);

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}
