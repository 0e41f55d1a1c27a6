pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{category_id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{question_id}";
pub const SEARCH_QUESTIONS_URL: &str = "/questions/search";
pub const QUIZZES_URL: &str = "/quizzes";

pub const QUESTIONS_PER_PAGE: usize = 10;

// CORS policy, sent on every response
pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

pub fn question_url(question_id: i64) -> String {
    format!("/questions/{question_id}")
}

pub fn category_questions_url(category_id: i64) -> String {
    format!("/categories/{category_id}/questions")
}
