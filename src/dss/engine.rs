//! The priority engine.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::config::DssConfig;
use super::rules::priority_rules;
use super::types::{BadgedCandidate, RankedProject, UrgencyBadge};
use crate::error::Result;
use crate::ordering::RuleEngine;
use crate::project::ProjectCandidate;
use crate::scoring::normalize_score;

/// Ranks project candidates and annotates them for display.
///
/// Stateless between calls: every method is a pure function of its input,
/// so one engine can be shared across threads.
///
/// # Examples
///
/// ```
/// use u_dss::dss::PriorityEngine;
/// use u_dss::project::ProjectCandidate;
///
/// let build = |id: &str, deadline: i64| {
///     ProjectCandidate::builder(id, format!("Project {id}"), "Client")
///         .with_deadline_score(deadline)
///         .with_payment_score(2)
///         .with_difficulty_score(2)
///         .build()
///         .unwrap()
/// };
///
/// let engine = PriorityEngine::new();
/// let ranked = engine.rank(&[build("a", 2), build("b", 5)]);
///
/// assert_eq!(ranked[0].candidate.id().as_str(), "b");
/// assert_eq!(ranked[0].rank, 1);
/// assert_eq!(ranked[0].normalized_score, 85);
/// ```
pub struct PriorityEngine {
    config: DssConfig,
    rules: RuleEngine<ProjectCandidate>,
}

impl PriorityEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: DssConfig::default(),
            rules: priority_rules(),
        }
    }

    /// Creates an engine with a validated configuration.
    pub fn with_config(config: DssConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rules: priority_rules(),
        })
    }

    pub fn config(&self) -> &DssConfig {
        &self.config
    }

    /// Marks, within each group of candidates sharing a priority score, the
    /// single candidate with the strictly highest deadline score.
    ///
    /// Groups of one get no badge, and neither do groups whose top deadline
    /// score is shared. Output order matches input order.
    pub fn assign_badges(&self, candidates: &[ProjectCandidate]) -> Vec<BadgedCandidate> {
        let badges = urgency_badges(candidates);
        candidates
            .iter()
            .zip(badges)
            .map(|(candidate, urgency_badge)| BadgedCandidate {
                candidate: candidate.clone(),
                urgency_badge,
            })
            .collect()
    }

    /// Sorts candidates by the prioritization cascade, then attaches rank,
    /// normalized score, and badge.
    pub fn rank(&self, candidates: &[ProjectCandidate]) -> Vec<RankedProject> {
        self.rank_with_badges(candidates, &urgency_badges(candidates))
    }

    /// `badges` is indexed like `candidates`.
    fn rank_with_badges(
        &self,
        candidates: &[ProjectCandidate],
        badges: &[Option<UrgencyBadge>],
    ) -> Vec<RankedProject> {
        let order = self.rules.sort_indices(candidates);

        let ranked: Vec<RankedProject> = order
            .into_iter()
            .enumerate()
            .map(|(pos, i)| {
                let candidate = candidates[i].clone();
                RankedProject {
                    rank: pos + 1,
                    normalized_score: normalize_score(i64::from(candidate.priority_score())),
                    urgency_badge: badges[i],
                    candidate,
                }
            })
            .collect();

        debug!(
            candidates = ranked.len(),
            badges = ranked.iter().filter(|r| r.urgency_badge.is_some()).count(),
            "ranked projects"
        );
        ranked
    }

    /// Returns the candidates whose name or client matches `query`.
    pub fn search(&self, candidates: &[ProjectCandidate], query: &str) -> Vec<ProjectCandidate> {
        candidates
            .iter()
            .filter(|c| matches_query(c, query))
            .cloned()
            .collect()
    }

    /// Filters by `query` and ranks, honoring
    /// [`rank_visible_only`](DssConfig::rank_visible_only) and
    /// [`max_results`](DssConfig::max_results).
    ///
    /// Badges always come from the full `candidates` list, so hiding a
    /// project never changes the badge of one that stays visible.
    pub fn rank_visible(&self, candidates: &[ProjectCandidate], query: &str) -> Vec<RankedProject> {
        let mut ranked = if self.config.rank_visible_only {
            let badges = urgency_badges(candidates);
            let (visible, visible_badges): (Vec<ProjectCandidate>, Vec<Option<UrgencyBadge>>) =
                candidates
                    .iter()
                    .zip(badges)
                    .filter(|(c, _)| matches_query(c, query))
                    .map(|(c, badge)| (c.clone(), badge))
                    .unzip();
            self.rank_with_badges(&visible, &visible_badges)
        } else {
            let mut all = self.rank(candidates);
            all.retain(|r| matches_query(&r.candidate, query));
            all
        };

        if let Some(max) = self.config.max_results {
            ranked.truncate(max);
        }
        ranked
    }

    /// Returns the `n` highest-priority projects.
    pub fn top(&self, candidates: &[ProjectCandidate], n: usize) -> Vec<RankedProject> {
        let mut ranked = self.rank(candidates);
        ranked.truncate(n);
        ranked
    }

    /// Returns the single highest-priority candidate, if any.
    pub fn best<'a>(&self, candidates: &'a [ProjectCandidate]) -> Option<&'a ProjectCandidate> {
        self.rules.select_best(candidates).map(|i| &candidates[i])
    }
}

impl Default for PriorityEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Search predicate: a blank query matches everything, otherwise the query
/// must be a case-insensitive substring of the name or the client name.
pub fn matches_query(candidate: &ProjectCandidate, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    candidate.name().to_lowercase().contains(&query)
        || candidate.client_name().to_lowercase().contains(&query)
}

/// Badge per input position.
fn urgency_badges(candidates: &[ProjectCandidate]) -> Vec<Option<UrgencyBadge>> {
    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (i, c) in candidates.iter().enumerate() {
        groups.entry(c.priority_score()).or_default().push(i);
    }

    let mut badges = vec![None; candidates.len()];
    for (score, members) in groups.iter().filter(|(_, m)| m.len() > 1) {
        let max_deadline = members
            .iter()
            .map(|&i| candidates[i].deadline_score())
            .max()
            .unwrap_or_default();
        let mut winners = members
            .iter()
            .filter(|&&i| candidates[i].deadline_score() == max_deadline);

        if let (Some(&winner), None) = (winners.next(), winners.next()) {
            trace!(score, project = %candidates[winner].id(), "urgent deadline badge");
            badges[winner] = Some(UrgencyBadge::UrgentDeadline);
        }
    }
    badges
}
