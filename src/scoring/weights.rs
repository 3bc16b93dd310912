//! Score weights, ranges, and the derived bounds.

use std::ops::RangeInclusive;

/// Weight of the deadline urgency score.
pub const DEADLINE_WEIGHT: u32 = 9;

/// Weight of the payment score.
pub const PAYMENT_WEIGHT: u32 = 7;

/// Weight of the (inverted) difficulty score.
pub const DIFFICULTY_WEIGHT: u32 = 5;

/// Deadline urgency: 1 = planned, 5 = due tomorrow.
pub const DEADLINE_SCORE_RANGE: RangeInclusive<u32> = 1..=5;

/// Payment tier: Low = 1, Medium = 2, High = 3.
pub const PAYMENT_SCORE_RANGE: RangeInclusive<u32> = 1..=3;

/// Difficulty, inverted: High = 1, Medium = 2, Low = 3.
pub const DIFFICULTY_SCORE_RANGE: RangeInclusive<u32> = 1..=3;

/// Largest attainable priority score (81 with the default weights).
pub const MAX_PRIORITY_SCORE: u32 = DEADLINE_WEIGHT * *DEADLINE_SCORE_RANGE.end()
    + PAYMENT_WEIGHT * *PAYMENT_SCORE_RANGE.end()
    + DIFFICULTY_WEIGHT * *DIFFICULTY_SCORE_RANGE.end();

/// Smallest attainable priority score (21 with the default weights).
pub const MIN_PRIORITY_SCORE: u32 = DEADLINE_WEIGHT * *DEADLINE_SCORE_RANGE.start()
    + PAYMENT_WEIGHT * *PAYMENT_SCORE_RANGE.start()
    + DIFFICULTY_WEIGHT * *DIFFICULTY_SCORE_RANGE.start();

/// Computes the weighted priority score.
///
/// Callers are expected to pass in-range component scores; this is checked
/// in debug builds only.
///
/// # Examples
///
/// ```
/// use u_dss::scoring::{priority_score, MAX_PRIORITY_SCORE};
///
/// assert_eq!(priority_score(5, 3, 3), MAX_PRIORITY_SCORE);
/// assert_eq!(priority_score(3, 2, 1), 46);
/// ```
pub fn priority_score(deadline_score: u32, payment_score: u32, difficulty_score: u32) -> u32 {
    debug_assert!(DEADLINE_SCORE_RANGE.contains(&deadline_score));
    debug_assert!(PAYMENT_SCORE_RANGE.contains(&payment_score));
    debug_assert!(DIFFICULTY_SCORE_RANGE.contains(&difficulty_score));

    deadline_score * DEADLINE_WEIGHT
        + payment_score * PAYMENT_WEIGHT
        + difficulty_score * DIFFICULTY_WEIGHT
}

/// Rescales a raw priority score to a `0..=100` display value.
///
/// Computes `round(score / MAX_PRIORITY_SCORE * 100)` with halves rounded
/// toward positive infinity. Integer arithmetic keeps exact halves exact:
/// `floor((200 * score + MAX) / (2 * MAX))`.
///
/// Any integer is accepted; only `MIN_PRIORITY_SCORE..=MAX_PRIORITY_SCORE`
/// maps into `26..=100`. Results beyond the `i64` range saturate.
///
/// # Examples
///
/// ```
/// use u_dss::scoring::normalize_score;
///
/// assert_eq!(normalize_score(81), 100);
/// assert_eq!(normalize_score(21), 26);
/// ```
pub fn normalize_score(priority_score: i64) -> i64 {
    let max = i128::from(MAX_PRIORITY_SCORE);
    let scaled = (200 * i128::from(priority_score) + max).div_euclid(2 * max);
    i64::try_from(scaled).unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX })
}
