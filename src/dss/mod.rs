//! Decision support: project prioritization.
//!
//! [`PriorityEngine`] turns validated candidates into a display ranking:
//!
//! - **Ordering**: one comparator built from the cascade in [`rules`];
//!   see that module for the rule list.
//! - **Normalization**: each project's priority score is rescaled to
//!   `0..=100` with [`normalize_score`].
//! - **Badges**: inside every group of projects sharing a priority score,
//!   the single project with the strictly highest deadline score is marked
//!   [`UrgencyBadge::UrgentDeadline`]. A tie for the top deadline score
//!   marks nobody. Badges are always computed over the full input, before
//!   any search filter.
//! - **Search**: a case-insensitive substring filter over project and
//!   client names. [`DssConfig`] decides whether rank numbers count the
//!   visible projects only or the full list.
//!
//! Input is never mutated, and every output is freshly allocated.

mod config;
mod engine;
pub mod rules;
mod types;

pub use crate::scoring::normalize_score;
pub use config::DssConfig;
pub use engine::{matches_query, PriorityEngine};
pub use types::{BadgedCandidate, Explanation, RankedProject, UrgencyBadge};
