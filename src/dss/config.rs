//! Priority engine configuration.

use crate::error::DssError;

/// Configuration for the [`PriorityEngine`](super::PriorityEngine).
///
/// # Examples
///
/// ```
/// use u_dss::dss::DssConfig;
///
/// let config = DssConfig::default()
///     .with_rank_visible_only(false)
///     .with_max_results(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DssConfig {
    /// When a search query hides projects, rank numbers count the visible
    /// projects only. When `false`, the full list is ranked first and the
    /// visible projects keep their full-list rank numbers. Badges are
    /// computed over the full list either way.
    pub rank_visible_only: bool,

    /// Upper bound on the projects returned by
    /// [`rank_visible`](super::PriorityEngine::rank_visible). `None` = no limit.
    pub max_results: Option<usize>,
}

impl Default for DssConfig {
    fn default() -> Self {
        Self {
            rank_visible_only: true,
            max_results: None,
        }
    }
}

impl DssConfig {
    pub fn with_rank_visible_only(mut self, yes: bool) -> Self {
        self.rank_visible_only = yes;
        self
    }

    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DssError> {
        if self.max_results == Some(0) {
            return Err(DssError::Config("max_results must be positive".into()));
        }
        Ok(())
    }
}
