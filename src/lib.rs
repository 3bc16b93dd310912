//! Rule-based project prioritization for freelancers.
//!
//! Ranks a freelancer's open projects by a weighted priority score and a
//! deterministic cascade of tie-breaks:
//!
//! - **Scoring**: `deadline * 9 + payment * 7 + difficulty * 5`, with the
//!   difficulty score inverted so easier work ranks higher.
//! - **Project model**: validated candidates built from nullable store rows,
//!   including days-until-deadline and the store seam.
//! - **Ordering**: a generic engine composing pairwise rules into one
//!   comparator with a deterministic final tie-breaker.
//! - **DSS**: the priority engine itself (ranking, normalized display
//!   scores, urgency badges, search, and per-project explanations).
//!
//! # Architecture
//!
//! Pure and synchronous. Persistence, authentication and rendering belong to
//! the surrounding application; this crate only sees in-memory values and
//! never performs I/O beyond what a caller's [`project::ProjectStore`] does.

pub mod dss;
pub mod error;
pub mod ordering;
pub mod project;
pub mod scoring;

pub use error::{DssError, Result};
