//! Ranking output types.

use std::fmt;

use crate::project::{DifficultyLevel, ProjectCandidate};

/// Informational badge attached to a project; never affects order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UrgencyBadge {
    /// The single most deadline-urgent project among others sharing its
    /// priority score.
    UrgentDeadline,
}

impl UrgencyBadge {
    pub fn label(self) -> &'static str {
        match self {
            UrgencyBadge::UrgentDeadline => "Urgent Deadline",
        }
    }
}

impl fmt::Display for UrgencyBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A candidate annotated with its badge, in input order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BadgedCandidate {
    pub candidate: ProjectCandidate,
    pub urgency_badge: Option<UrgencyBadge>,
}

/// A candidate placed in the final ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedProject {
    pub candidate: ProjectCandidate,

    /// 1-based position in the ranking.
    pub rank: usize,

    /// Priority score rescaled to `0..=100`.
    pub normalized_score: i64,

    pub urgency_badge: Option<UrgencyBadge>,
}

impl RankedProject {
    /// Builds the human-readable reasoning behind this project's score.
    pub fn explain(&self) -> Explanation {
        let c = &self.candidate;
        Explanation {
            rank: self.rank,
            project_name: c.name().to_owned(),
            client_name: c.client_name().to_owned(),
            normalized_score: self.normalized_score,
            deadline_category: c.deadline_tier().category(),
            days_until_deadline: c.days_until_deadline(),
            payment_category: c.payment_level().category(),
            payment_amount: c.payment_amount(),
            difficulty_level: c.difficulty_level(),
        }
    }
}

/// Why a project sits where it does.
///
/// `Display` renders the details text shown when a ranked project is
/// expanded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Explanation {
    pub rank: usize,
    pub project_name: String,
    pub client_name: String,
    pub normalized_score: i64,
    pub deadline_category: &'static str,
    pub days_until_deadline: i64,
    pub payment_category: &'static str,
    pub payment_amount: f64,
    pub difficulty_level: DifficultyLevel,
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Project {} for client {} is prioritized with a Priority Score of {}/100, \
             combining the following factors:",
            self.project_name, self.client_name, self.normalized_score
        )?;
        writeln!(
            f,
            "- Deadline: {} days left, category {}",
            self.days_until_deadline, self.deadline_category
        )?;
        writeln!(
            f,
            "- Payment: ${}, category {}",
            format_amount(self.payment_amount),
            self.payment_category
        )?;
        writeln!(f, "- Difficulty: {}", self.difficulty_level)?;
        write!(
            f,
            "With these values and the weight of each factor, the project currently ranks #{}.",
            self.rank
        )
    }
}

/// Formats an amount with thousands separators and at most two decimals.
pub(crate) fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if amount < 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}
