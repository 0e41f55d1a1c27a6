use std::collections::HashSet;

use rand::Rng;

use crate::db::Question;

/// Source of randomness for quiz play.
pub trait Picker: Send + Sync {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl Picker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Category id that selects questions from every category.
pub const ALL_CATEGORIES: i64 = 0;

/// Normalizes a requested quiz category: absent or `0` means every category.
pub fn category_filter(requested: Option<i64>) -> Option<i64> {
    requested.filter(|&id| id != ALL_CATEGORIES)
}

/// Picks one question the player has not seen yet. `None` means the pool is
/// exhausted, which is a normal end of quiz rather than an error.
pub fn select_next(
    category: Option<i64>,
    previous: &HashSet<i64>,
    questions: Vec<Question>,
    picker: &dyn Picker,
) -> Option<Question> {
    let category = category_filter(category);
    let mut pool: Vec<Question> = questions
        .into_iter()
        .filter(|q| category.is_none_or(|c| q.category == c))
        .filter(|q| !previous.contains(&q.id))
        .collect();

    if pool.is_empty() {
        return None;
    }

    let idx = picker.pick(pool.len()).min(pool.len() - 1);
    Some(pool.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl Picker for Fixed {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    struct Last;

    impl Picker for Last {
        fn pick(&self, len: usize) -> usize {
            len - 1
        }
    }

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            answer: format!("Answer {id}"),
            category,
            difficulty: 1,
        }
    }

    fn sample() -> Vec<Question> {
        vec![
            question(1, 1),
            question(2, 1),
            question(3, 2),
            question(4, 2),
            question(5, 3),
        ]
    }

    #[test]
    fn zero_and_absent_mean_all_categories() {
        assert_eq!(category_filter(None), None);
        assert_eq!(category_filter(Some(0)), None);
        assert_eq!(category_filter(Some(4)), Some(4));
    }

    #[test]
    fn picks_from_the_whole_pool_without_a_filter() {
        let picked = select_next(None, &HashSet::new(), sample(), &Last).unwrap();
        assert_eq!(picked.id, 5);

        let picked = select_next(Some(0), &HashSet::new(), sample(), &Fixed(0)).unwrap();
        assert_eq!(picked.id, 1);
    }

    #[test]
    fn respects_category_and_previous_questions() {
        let previous = HashSet::from([3]);
        for _ in 0..50 {
            let picked = select_next(Some(2), &previous, sample(), &ThreadRngPicker).unwrap();
            assert_eq!(picked.id, 4);
        }
    }

    #[test]
    fn never_returns_a_previous_question() {
        let previous = HashSet::from([1, 2, 5]);
        for _ in 0..50 {
            let picked = select_next(None, &previous, sample(), &ThreadRngPicker).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let previous = HashSet::from([1, 2]);
        assert_eq!(select_next(Some(1), &previous, sample(), &Fixed(0)), None);
        assert_eq!(select_next(Some(9), &HashSet::new(), sample(), &Fixed(0)), None);
        assert_eq!(select_next(None, &HashSet::new(), Vec::new(), &Fixed(0)), None);
    }

    #[test]
    fn out_of_range_pick_is_clamped() {
        let picked = select_next(Some(1), &HashSet::new(), sample(), &Fixed(42)).unwrap();
        assert_eq!(picked.category, 1);
    }
}
