use crate::db::Question;

/// Keeps the questions whose text contains `term`, ignoring case. An empty
/// term matches every question. Input order is preserved.
pub fn search(term: &str, questions: Vec<Question>) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}
