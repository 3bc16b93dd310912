//! Raw project rows as the store returns them.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::warn;

use super::candidate::ProjectCandidate;
use super::types::{DifficultyLevel, ProjectId, ProjectStatus};
use crate::error::{DssError, Result};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `now` until midnight UTC of `deadline`, rounded up.
///
/// Deadlines are dates, due at 00:00 UTC. Negative once more than a full
/// day overdue; a deadline dated today yields 0.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use u_dss::project::days_until_deadline;
///
/// let now = Utc.with_ymd_and_hms(2025, 3, 1, 15, 0, 0).unwrap();
/// let deadline = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// assert_eq!(days_until_deadline(deadline, now), 3);
/// ```
pub fn days_until_deadline(deadline: NaiveDate, now: DateTime<Utc>) -> i64 {
    let due = deadline.and_time(NaiveTime::MIN).and_utc();
    let millis = (due - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// A project row with every column nullable.
///
/// Zero scores are treated as missing, and missing scores fall back to the
/// lowest tier, mirroring how the store's rows have always been read.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectRecord {
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::project_id"))]
    pub project_id: Option<ProjectId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub project_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub client_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority_score: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deadline_score: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub payment_score: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub difficulty_score: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub payment_amount: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub difficulty_level: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deadline: Option<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_id: Option<i64>,
}

impl ProjectRecord {
    /// Rows without a status are treated as active.
    pub fn status(&self) -> Option<ProjectStatus> {
        self.status_id.map(ProjectStatus::from_id)
    }

    pub fn is_done(&self) -> bool {
        self.status().is_some_and(ProjectStatus::is_done)
    }

    /// Converts the row into a validated candidate, applying defaults for
    /// missing columns and computing days left relative to `now`.
    pub fn into_candidate(self, now: DateTime<Utc>) -> Result<ProjectCandidate> {
        let id = self.project_id.ok_or(DssError::MissingField("project_id"))?;
        let name = self
            .project_name
            .ok_or(DssError::MissingField("project_name"))?;
        let client_name = self
            .client_name
            .ok_or(DssError::MissingField("client_name"))?;

        let deadline_score = score_or_lowest(self.deadline_score, "deadline_score", &id);
        let payment_score = score_or_lowest(self.payment_score, "payment_score", &id);
        let difficulty_score = score_or_lowest(self.difficulty_score, "difficulty_score", &id);

        let difficulty_level = match self.difficulty_level.as_deref() {
            Some(label) if !label.is_empty() => label.parse::<DifficultyLevel>()?,
            _ => DifficultyLevel::Low,
        };

        let days = self
            .deadline
            .map(|d| days_until_deadline(d, now))
            .unwrap_or(0);

        let mut builder = ProjectCandidate::builder(id, name, client_name)
            .with_deadline_score(deadline_score)
            .with_payment_score(payment_score)
            .with_difficulty_score(difficulty_score)
            .with_payment_amount(self.payment_amount.unwrap_or(0.0))
            .with_difficulty_level(difficulty_level)
            .with_days_until_deadline(days);

        if let Some(score) = self.priority_score.filter(|&s| s != 0) {
            builder = builder.with_priority_score(score);
        }

        builder.build()
    }
}

fn score_or_lowest(value: Option<i64>, field: &'static str, id: &ProjectId) -> i64 {
    match value {
        Some(v) if v != 0 => v,
        _ => {
            warn!(project = %id, field, "missing score, using lowest tier");
            1
        }
    }
}

/// Decodes the store's JSON array of project rows.
#[cfg(feature = "serde")]
pub fn records_from_json(json: &str) -> Result<Vec<ProjectRecord>> {
    serde_json::from_str(json).map_err(|e| DssError::Decode(e.to_string()))
}

#[cfg(feature = "serde")]
mod de {
    use serde::{Deserialize, Deserializer};

    use crate::project::ProjectId;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    pub(super) fn project_id<'de, D>(deserializer: D) -> Result<Option<ProjectId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawId>::deserialize(deserializer)?;
        Ok(raw.map(|id| match id {
            RawId::Int(n) => ProjectId::from(n),
            RawId::Text(s) => ProjectId::from(s),
        }))
    }
}
