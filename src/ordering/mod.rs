//! Cascading comparator composition.
//!
//! Builds one comparator out of an ordered list of pairwise rules. Each
//! rule only breaks ties left by the rules before it, and a final
//! [`TieBreaker`] makes the result deterministic when every rule ties.
//!
//! Sorting is a single `sort_by` over this comparator rather than a chain
//! of independent sorts, so the order is well defined whenever the
//! cascade is a strict weak ordering.
//!
//! # Design
//!
//! This module knows nothing about projects. The prioritization rules live
//! in [`crate::dss`].

mod engine;
mod types;

pub use engine::{RuleEngine, TieBreaker};
pub use types::{FnRule, TieBreakRule};
