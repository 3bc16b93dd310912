//! Validated ranking input.

use std::ops::RangeInclusive;

use super::types::{DeadlineTier, DifficultyLevel, PaymentLevel, ProjectId};
use crate::error::{DssError, Result};
use crate::scoring::{
    priority_score, DEADLINE_SCORE_RANGE, DIFFICULTY_SCORE_RANGE, PAYMENT_SCORE_RANGE,
};

/// A project as seen by the priority engine.
///
/// Only constructible through [`CandidateBuilder`], so every instance
/// satisfies the score-range and weighted-sum invariants the ranking
/// rules depend on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectCandidate {
    id: ProjectId,
    name: String,
    client_name: String,
    deadline_score: u32,
    payment_score: u32,
    difficulty_score: u32,
    payment_amount: f64,
    difficulty_level: DifficultyLevel,
    days_until_deadline: i64,
    priority_score: u32,
}

impl ProjectCandidate {
    /// Starts building a candidate.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_dss::project::ProjectCandidate;
    ///
    /// let project = ProjectCandidate::builder("p-7", "Landing Page", "Acme")
    ///     .with_deadline_score(4)
    ///     .with_payment_score(3)
    ///     .with_difficulty_score(2)
    ///     .with_payment_amount(4_500.0)
    ///     .with_days_until_deadline(3)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(project.priority_score(), 4 * 9 + 3 * 7 + 2 * 5);
    /// ```
    pub fn builder(
        id: impl Into<ProjectId>,
        name: impl Into<String>,
        client_name: impl Into<String>,
    ) -> CandidateBuilder {
        CandidateBuilder {
            id: id.into(),
            name: name.into(),
            client_name: client_name.into(),
            deadline_score: None,
            payment_score: None,
            difficulty_score: None,
            payment_amount: 0.0,
            difficulty_level: None,
            days_until_deadline: 0,
            priority_score: None,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Deadline urgency in `1..=5`; higher is more urgent.
    pub fn deadline_score(&self) -> u32 {
        self.deadline_score
    }

    /// Payment tier in `1..=3`.
    pub fn payment_score(&self) -> u32 {
        self.payment_score
    }

    /// Inverted difficulty in `1..=3`; 3 is the easiest.
    pub fn difficulty_score(&self) -> u32 {
        self.difficulty_score
    }

    pub fn payment_amount(&self) -> f64 {
        self.payment_amount
    }

    /// Human difficulty label as recorded by the store.
    ///
    /// Independent of [`difficulty_score`](Self::difficulty_score).
    pub fn difficulty_level(&self) -> DifficultyLevel {
        self.difficulty_level
    }

    /// Whole days left before the deadline; negative when overdue.
    pub fn days_until_deadline(&self) -> i64 {
        self.days_until_deadline
    }

    pub fn priority_score(&self) -> u32 {
        self.priority_score
    }

    pub fn deadline_tier(&self) -> DeadlineTier {
        // in range by construction
        DeadlineTier::from_score(self.deadline_score).unwrap_or(DeadlineTier::Planned)
    }

    pub fn payment_level(&self) -> PaymentLevel {
        PaymentLevel::from_score(self.payment_score).unwrap_or(PaymentLevel::Low)
    }
}

/// Builder for [`ProjectCandidate`].
///
/// The three component scores are required. `priority_score` is optional:
/// when omitted it is computed, when supplied it must equal the weighted sum.
#[derive(Debug, Clone)]
pub struct CandidateBuilder {
    id: ProjectId,
    name: String,
    client_name: String,
    deadline_score: Option<i64>,
    payment_score: Option<i64>,
    difficulty_score: Option<i64>,
    payment_amount: f64,
    difficulty_level: Option<DifficultyLevel>,
    days_until_deadline: i64,
    priority_score: Option<i64>,
}

impl CandidateBuilder {
    pub fn with_deadline_score(mut self, score: i64) -> Self {
        self.deadline_score = Some(score);
        self
    }

    pub fn with_payment_score(mut self, score: i64) -> Self {
        self.payment_score = Some(score);
        self
    }

    pub fn with_difficulty_score(mut self, score: i64) -> Self {
        self.difficulty_score = Some(score);
        self
    }

    /// Sets payment tier from a level instead of a raw score.
    pub fn with_payment_level(self, level: PaymentLevel) -> Self {
        self.with_payment_score(i64::from(level.score()))
    }

    pub fn with_payment_amount(mut self, amount: f64) -> Self {
        self.payment_amount = amount;
        self
    }

    /// Sets the display label. Defaults to the level implied by the
    /// difficulty score.
    pub fn with_difficulty_level(mut self, level: DifficultyLevel) -> Self {
        self.difficulty_level = Some(level);
        self
    }

    pub fn with_days_until_deadline(mut self, days: i64) -> Self {
        self.days_until_deadline = days;
        self
    }

    pub fn with_priority_score(mut self, score: i64) -> Self {
        self.priority_score = Some(score);
        self
    }

    /// Validates and builds the candidate.
    pub fn build(self) -> Result<ProjectCandidate> {
        let deadline_score = required_in_range(
            "deadline_score",
            self.deadline_score,
            &DEADLINE_SCORE_RANGE,
        )?;
        let payment_score =
            required_in_range("payment_score", self.payment_score, &PAYMENT_SCORE_RANGE)?;
        let difficulty_score = required_in_range(
            "difficulty_score",
            self.difficulty_score,
            &DIFFICULTY_SCORE_RANGE,
        )?;

        if !self.payment_amount.is_finite() || self.payment_amount < 0.0 {
            return Err(DssError::InvalidPaymentAmount(self.payment_amount));
        }

        let computed = priority_score(deadline_score, payment_score, difficulty_score);
        if let Some(supplied) = self.priority_score {
            if supplied != i64::from(computed) {
                return Err(DssError::ScoreMismatch { supplied, computed });
            }
        }

        let difficulty_level = match self.difficulty_level {
            Some(level) => level,
            None => DifficultyLevel::from_score(difficulty_score).unwrap_or_default(),
        };

        Ok(ProjectCandidate {
            id: self.id,
            name: self.name,
            client_name: self.client_name,
            deadline_score,
            payment_score,
            difficulty_score,
            payment_amount: self.payment_amount,
            difficulty_level,
            days_until_deadline: self.days_until_deadline,
            priority_score: computed,
        })
    }
}

fn required_in_range(
    field: &'static str,
    value: Option<i64>,
    range: &RangeInclusive<u32>,
) -> Result<u32> {
    let value = value.ok_or(DssError::MissingField(field))?;
    match u32::try_from(value) {
        Ok(v) if range.contains(&v) => Ok(v),
        _ => Err(DssError::ScoreOutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        }),
    }
}
