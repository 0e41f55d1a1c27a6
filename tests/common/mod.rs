use trivia_api::db::{Db, NewQuestion};

pub async fn create_test_db() -> Db {
    create_test_db_with_url().await.0
}

/// Like [`create_test_db`], also returning the URL so a test can open its
/// own connection to the same file.
pub async fn create_test_db_with_url() -> (Db, String) {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("trivia_api_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    let db = Db::new(&url).await.expect("failed to create test database");
    (db, url)
}

#[allow(dead_code)]
pub fn new_question(question: &str, answer: &str, category: i64, difficulty: i32) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

/// Inserts `n` questions spread over categories 1..=3, returning their ids in order.
#[allow(dead_code)]
pub async fn seed_questions(db: &Db, n: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let q = new_question(
            &format!("Question {}", i + 1),
            &format!("Answer {}", i + 1),
            (i % 3) as i64 + 1,
            (i % 5) as i32 + 1,
        );
        ids.push(db.insert_question(&q).await.expect("insert question"));
    }
    ids
}
