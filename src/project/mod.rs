//! Project data model.
//!
//! Rows arrive from an external store as [`ProjectRecord`]s with nullable
//! columns. [`ProjectRecord::into_candidate`] applies defaults and hands
//! the values to [`CandidateBuilder`], which rejects anything the ranking
//! rules cannot handle. Everything downstream works on validated
//! [`ProjectCandidate`]s only.

mod candidate;
mod record;
mod store;
mod types;

pub use candidate::{CandidateBuilder, ProjectCandidate};
#[cfg(feature = "serde")]
pub use record::records_from_json;
pub use record::{days_until_deadline, ProjectRecord};
pub use store::{load_active_candidates, InMemoryStore, ProjectStore};
pub use types::{DeadlineTier, DifficultyLevel, PaymentLevel, ProjectId, ProjectStatus};
