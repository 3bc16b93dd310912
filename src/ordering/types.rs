//! Core trait for ordering rules.

use std::cmp::Ordering;

/// A pairwise ordering rule.
///
/// `Ordering::Less` means `a` ranks **before** `b`. A rule returns
/// `Ordering::Equal` when it has no opinion, handing the decision to the
/// next rule in the [`RuleEngine`](super::RuleEngine).
///
/// A rule on its own need not be total, but the cascade as a whole must be
/// a strict weak ordering over the items it is used with.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_dss::ordering::TieBreakRule;
///
/// struct LongestFirst;
///
/// impl TieBreakRule<String> for LongestFirst {
///     fn name(&self) -> &str { "LongestFirst" }
///     fn compare(&self, a: &String, b: &String) -> Ordering {
///         b.len().cmp(&a.len())
///     }
/// }
/// ```
pub trait TieBreakRule<T>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Compares two items; `Less` ranks `a` first.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// A rule built from a named closure.
pub struct FnRule<F> {
    name: &'static str,
    compare: F,
}

impl<F> FnRule<F> {
    pub fn new(name: &'static str, compare: F) -> Self {
        Self { name, compare }
    }
}

impl<T, F> TieBreakRule<T> for FnRule<F>
where
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}
