//! Weighted priority scoring.
//!
//! A project's priority score is the weighted sum
//!
//! ```text
//! deadline_score * 9 + payment_score * 7 + difficulty_score * 5
//! ```
//!
//! over deadline scores `1..=5`, payment scores `1..=3` and (inverted)
//! difficulty scores `1..=3`. The attainable range is therefore `21..=81`.
//! Both bounds are derived from the weight and range constants, so the
//! normalization divisor can never drift from the scoring formula.

mod weights;

pub use weights::{
    normalize_score, priority_score, DEADLINE_SCORE_RANGE, DEADLINE_WEIGHT,
    DIFFICULTY_SCORE_RANGE, DIFFICULTY_WEIGHT, MAX_PRIORITY_SCORE, MIN_PRIORITY_SCORE,
    PAYMENT_SCORE_RANGE, PAYMENT_WEIGHT,
};
