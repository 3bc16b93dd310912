//! The project prioritization rules, in cascade order.
//!
//! 1. priority score, highest first
//! 2. within the lowest deadline tier: fewest days left first
//! 3. within the top payment tier: largest amount first
//! 4. deadline score, highest first
//! 5. payment score, highest first
//! 6. difficulty score, highest (easiest) first
//! 7. name, case-insensitive ascending
//! 8. id ascending
//!
//! With the 9/7/5 weights, two different score triples share a priority
//! score only when they differ by `(±1, ∓2, ±1)`. Rules 2 and 3 therefore
//! only ever compare projects with identical triples, and the cascade is a
//! lexicographic order.

use std::cmp::Ordering;

use crate::ordering::{RuleEngine, TieBreakRule, TieBreaker};
use crate::project::ProjectCandidate;
use crate::scoring::{DEADLINE_SCORE_RANGE, PAYMENT_SCORE_RANGE};

const LOWEST_DEADLINE_SCORE: u32 = *DEADLINE_SCORE_RANGE.start();
const TOP_PAYMENT_SCORE: u32 = *PAYMENT_SCORE_RANGE.end();

/// Builds the full prioritization cascade.
///
/// Falls back to input order for candidates that tie on every rule
/// (identical ids).
pub fn priority_rules() -> RuleEngine<ProjectCandidate> {
    RuleEngine::new()
        .with_rule(HighestPriority)
        .with_rule(FewestDaysInLowestTier)
        .with_rule(LargestAmountInTopTier)
        .with_rule(MostUrgentDeadline)
        .with_rule(HighestPayment)
        .with_rule(EasiestDifficulty)
        .with_rule(NameAscending)
        .with_rule(IdAscending)
        .with_tie_breaker(TieBreaker::ByIndex)
}

pub struct HighestPriority;

impl TieBreakRule<ProjectCandidate> for HighestPriority {
    fn name(&self) -> &str {
        "HighestPriority"
    }

    fn compare(&self, a: &ProjectCandidate, b: &ProjectCandidate) -> Ordering {
        b.priority_score().cmp(&a.priority_score())
    }
}

pub struct FewestDaysInLowestTier;

impl TieBreakRule<ProjectCandidate> for FewestDaysInLowestTier {
    fn name(&self) -> &str {
        "FewestDaysInLowestTier"
    }

    fn compare(&self, a: &ProjectCandidate, b: &ProjectCandidate) -> Ordering {
        if a.deadline_score() == LOWEST_DEADLINE_SCORE
            && b.deadline_score() == LOWEST_DEADLINE_SCORE
            && a.priority_score() == b.priority_score()
        {
            a.days_until_deadline().cmp(&b.days_until_deadline())
        } else {
            Ordering::Equal
        }
    }
}

pub struct LargestAmountInTopTier;

impl TieBreakRule<ProjectCandidate> for LargestAmountInTopTier {
    fn name(&self) -> &str {
        "LargestAmountInTopTier"
    }

    fn compare(&self, a: &ProjectCandidate, b: &ProjectCandidate) -> Ordering {
        if a.payment_score() == TOP_PAYMENT_SCORE
            && b.payment_score() == TOP_PAYMENT_SCORE
            && a.priority_score() == b.priority_score()
        {
            // amounts are finite by construction
            b.payment_amount().total_cmp(&a.payment_amount())
        } else {
            Ordering::Equal
        }
    }
}

pub struct MostUrgentDeadline;

impl TieBreakRule<ProjectCandidate> for MostUrgentDeadline {
    fn name(&self) -> &str {
        "MostUrgentDeadline"
    }

    fn compare(&self, a: &ProjectCandidate, b: &ProjectCandidate) -> Ordering {
        b.deadline_score().cmp(&a.deadline_score())
    }
}

pub struct HighestPayment;

impl TieBreakRule<ProjectCandidate> for HighestPayment {
    fn name(&self) -> &str {
        "HighestPayment"
    }

    fn compare(&self, a: &ProjectCandidate, b: &ProjectCandidate) -> Ordering {
        b.payment_score().cmp(&a.payment_score())
    }
}

pub struct EasiestDifficulty;

impl TieBreakRule<ProjectCandidate> for EasiestDifficulty {
    fn name(&self) -> &str {
        "EasiestDifficulty"
    }

    fn compare(&self, a: &ProjectCandidate, b: &ProjectCandidate) -> Ordering {
        b.difficulty_score().cmp(&a.difficulty_score())
    }
}

/// Case-insensitive name order.
pub struct NameAscending;

impl TieBreakRule<ProjectCandidate> for NameAscending {
    fn name(&self) -> &str {
        "NameAscending"
    }

    fn compare(&self, a: &ProjectCandidate, b: &ProjectCandidate) -> Ordering {
        fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
            s.chars().flat_map(char::to_lowercase)
        }
        fold(a.name()).cmp(fold(b.name()))
    }
}

pub struct IdAscending;

impl TieBreakRule<ProjectCandidate> for IdAscending {
    fn name(&self) -> &str {
        "IdAscending"
    }

    fn compare(&self, a: &ProjectCandidate, b: &ProjectCandidate) -> Ordering {
        a.id().cmp(b.id())
    }
}
