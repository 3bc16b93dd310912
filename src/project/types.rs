//! Project attribute levels and identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::DssError;

/// Opaque, stable project identifier.
///
/// Store rows may carry integer or UUID keys; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProjectId(String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for ProjectId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

/// Payment tier of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaymentLevel {
    Low,
    Medium,
    High,
}

impl PaymentLevel {
    /// Payment score: Low = 1, Medium = 2, High = 3.
    pub fn score(self) -> u32 {
        match self {
            PaymentLevel::Low => 1,
            PaymentLevel::Medium => 2,
            PaymentLevel::High => 3,
        }
    }

    pub fn from_score(score: u32) -> Option<Self> {
        match score {
            1 => Some(PaymentLevel::Low),
            2 => Some(PaymentLevel::Medium),
            3 => Some(PaymentLevel::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentLevel::Low => "Low",
            PaymentLevel::Medium => "Medium",
            PaymentLevel::High => "High",
        }
    }

    /// Long form used in explanations, e.g. "High Payment".
    pub fn category(self) -> &'static str {
        match self {
            PaymentLevel::Low => "Low Payment",
            PaymentLevel::Medium => "Medium Payment",
            PaymentLevel::High => "High Payment",
        }
    }
}

impl fmt::Display for PaymentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentLevel {
    type Err = DssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s, "payment").map(|i| [Self::Low, Self::Medium, Self::High][i])
    }
}

/// Difficulty of a project.
///
/// The score is inverted: easier work scores higher, so
/// "easy, urgent, and well paid" maximizes priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DifficultyLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl DifficultyLevel {
    /// Inverted difficulty score: Low = 3, Medium = 2, High = 1.
    pub fn score(self) -> u32 {
        match self {
            DifficultyLevel::Low => 3,
            DifficultyLevel::Medium => 2,
            DifficultyLevel::High => 1,
        }
    }

    pub fn from_score(score: u32) -> Option<Self> {
        match score {
            3 => Some(DifficultyLevel::Low),
            2 => Some(DifficultyLevel::Medium),
            1 => Some(DifficultyLevel::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Low => "Low",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::High => "High",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DifficultyLevel {
    type Err = DssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s, "difficulty").map(|i| [Self::Low, Self::Medium, Self::High][i])
    }
}

fn parse_level(s: &str, kind: &'static str) -> Result<usize, DssError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "low" => Ok(0),
        "medium" => Ok(1),
        "high" => Ok(2),
        _ => Err(DssError::UnknownLevel {
            kind,
            label: s.to_owned(),
        }),
    }
}

/// Deadline urgency tier, one per deadline score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeadlineTier {
    Planned,
    OnTrack,
    Upcoming,
    Urgent,
    DueTomorrow,
}

impl DeadlineTier {
    pub fn from_score(score: u32) -> Option<Self> {
        match score {
            1 => Some(DeadlineTier::Planned),
            2 => Some(DeadlineTier::OnTrack),
            3 => Some(DeadlineTier::Upcoming),
            4 => Some(DeadlineTier::Urgent),
            5 => Some(DeadlineTier::DueTomorrow),
            _ => None,
        }
    }

    pub fn score(self) -> u32 {
        match self {
            DeadlineTier::Planned => 1,
            DeadlineTier::OnTrack => 2,
            DeadlineTier::Upcoming => 3,
            DeadlineTier::Urgent => 4,
            DeadlineTier::DueTomorrow => 5,
        }
    }

    /// Short level name shown on the factor badge.
    pub fn level(self) -> &'static str {
        match self {
            DeadlineTier::Planned => "Planned",
            DeadlineTier::OnTrack => "On Track",
            DeadlineTier::Upcoming => "Upcoming",
            DeadlineTier::Urgent => "Urgent",
            DeadlineTier::DueTomorrow => "Due Tomorrow",
        }
    }

    /// Category name used in explanations.
    pub fn category(self) -> &'static str {
        match self {
            DeadlineTier::Planned => "Planned",
            DeadlineTier::OnTrack => "On Track",
            DeadlineTier::Upcoming => "Upcoming Deadline",
            DeadlineTier::Urgent => "Urgent Deadline",
            DeadlineTier::DueTomorrow => "Due Tomorrow",
        }
    }
}

impl fmt::Display for DeadlineTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.level())
    }
}

/// Workflow status of a project row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Active(i64),
    /// Terminal status; done projects are never ranked.
    Done,
}

impl ProjectStatus {
    /// `status_id` the store uses for finished projects.
    pub const DONE_ID: i64 = 3;

    pub fn from_id(status_id: i64) -> Self {
        if status_id == Self::DONE_ID {
            ProjectStatus::Done
        } else {
            ProjectStatus::Active(status_id)
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, ProjectStatus::Done)
    }
}
