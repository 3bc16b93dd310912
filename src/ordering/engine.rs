//! Rule composition engine.

use std::cmp::Ordering;

use super::types::TieBreakRule;

/// Strategy for breaking ties when every rule returns `Equal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the original order (stable sort).
    PreserveOrder,

    /// Break ties by item index (deterministic).
    ByIndex,
}

/// Engine composing ordering rules into a single comparator.
///
/// Rules are consulted in the order they were added; a later rule is only
/// consulted when every earlier rule returned `Equal`. This is the
/// `then_with` chain of [`Ordering`], evaluated lazily.
///
/// # Examples
///
/// ```
/// use u_dss::ordering::{FnRule, RuleEngine, TieBreaker};
///
/// let engine = RuleEngine::new()
///     .with_rule(FnRule::new("LongestFirst", |a: &&str, b: &&str| b.len().cmp(&a.len())))
///     .with_rule(FnRule::new("Alphabetical", |a: &&str, b: &&str| a.cmp(b)))
///     .with_tie_breaker(TieBreaker::ByIndex);
///
/// let words = ["fig", "apple", "kiwi", "pear"];
/// let sorted = engine.sort(&words);
/// assert_eq!(sorted, vec![&"apple", &"kiwi", &"pear", &"fig"]);
/// ```
pub struct RuleEngine<T> {
    rules: Vec<Box<dyn TieBreakRule<T>>>,
    tie_breaker: TieBreaker,
}

impl<T> RuleEngine<T> {
    /// Creates an engine with no rules that preserves input order.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::PreserveOrder,
        }
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Appends a rule after the existing ones.
    pub fn with_rule<R: TieBreakRule<T> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the strategy applied when every rule reports `Equal`.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Compares two items with the rule cascade only (no tie-breaker).
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Sorts items by priority.
    ///
    /// Returns indices into the original slice, highest priority first.
    pub fn sort_indices(&self, items: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();

        indices.sort_by(|&a, &b| {
            self.compare(&items[a], &items[b])
                .then_with(|| match self.tie_breaker {
                    TieBreaker::PreserveOrder => Ordering::Equal,
                    TieBreaker::ByIndex => a.cmp(&b),
                })
        });

        indices
    }

    /// Sorts items by priority and returns references in sorted order.
    pub fn sort<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.sort_indices(items)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }

    /// Returns the index of the highest-priority item.
    ///
    /// Returns `None` if the slice is empty.
    pub fn select_best(&self, items: &[T]) -> Option<usize> {
        (0..items.len()).reduce(|best, i| {
            if self.compare(&items[i], &items[best]).is_lt() {
                i
            } else {
                best
            }
        })
    }
}

impl<T> Default for RuleEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::FnRule;

    // Test domain: items with value and weight
    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        value: u32,
        weight: u32,
    }

    // Rule: lower value first
    struct ByValue;
    impl TieBreakRule<Item> for ByValue {
        fn name(&self) -> &str {
            "ByValue"
        }
        fn compare(&self, a: &Item, b: &Item) -> Ordering {
            a.value.cmp(&b.value)
        }
    }

    // Rule: heavier first
    struct HeaviestFirst;
    impl TieBreakRule<Item> for HeaviestFirst {
        fn name(&self) -> &str {
            "HeaviestFirst"
        }
        fn compare(&self, a: &Item, b: &Item) -> Ordering {
            b.weight.cmp(&a.weight)
        }
    }

    fn item(value: u32, weight: u32) -> Item {
        Item { value, weight }
    }

    fn test_items() -> Vec<Item> {
        vec![item(3, 1), item(1, 2), item(2, 1), item(1, 3)]
    }

    #[test]
    fn test_single_rule_sort() {
        let engine = RuleEngine::new().with_rule(ByValue);
        let items = test_items();
        let values: Vec<u32> = engine.sort(&items).iter().map(|i| i.value).collect();
        assert_eq!(values, vec![1, 1, 2, 3]);
    }

    #[test]
    fn test_sequential_tie_breaking() {
        // items 1 and 3 tie on value; weight decides
        let engine = RuleEngine::new().with_rule(ByValue).with_rule(HeaviestFirst);
        let items = test_items();
        let sorted = engine.sort(&items);
        assert_eq!(sorted[0], &item(1, 3));
        assert_eq!(sorted[1], &item(1, 2));
    }

    #[test]
    fn test_rule_order_matters() {
        let engine = RuleEngine::new().with_rule(HeaviestFirst).with_rule(ByValue);
        let items = test_items();
        assert_eq!(engine.sort_indices(&items), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_select_best() {
        let engine = RuleEngine::new().with_rule(ByValue).with_rule(HeaviestFirst);
        let items = test_items();
        assert_eq!(engine.select_best(&items), Some(3));
    }

    #[test]
    fn test_select_best_prefers_first_on_tie() {
        let engine = RuleEngine::new().with_rule(ByValue);
        let items = vec![item(1, 1), item(1, 2)];
        assert_eq!(engine.select_best(&items), Some(0));
    }

    #[test]
    fn test_select_best_empty() {
        let engine = RuleEngine::<Item>::new().with_rule(ByValue);
        assert!(engine.select_best(&[]).is_none());
    }

    #[test]
    fn test_no_rules() {
        let engine = RuleEngine::<Item>::new();
        let items = test_items();
        // Without rules, preserve original order
        assert_eq!(engine.sort_indices(&items), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rule_names() {
        let engine = RuleEngine::<Item>::new()
            .with_rule(ByValue)
            .with_rule(HeaviestFirst);

        assert_eq!(engine.rule_names(), vec!["ByValue", "HeaviestFirst"]);
        assert_eq!(engine.rule_count(), 2);
    }

    #[test]
    fn test_by_index_tie_breaker() {
        let items = vec![item(1, 1), item(1, 1), item(1, 1)];
        let engine = RuleEngine::new()
            .with_rule(ByValue)
            .with_tie_breaker(TieBreaker::ByIndex);

        assert_eq!(engine.sort_indices(&items), vec![0, 1, 2]);
        assert_eq!(engine.tie_breaker(), TieBreaker::ByIndex);
    }

    #[test]
    fn test_compare_early_exit() {
        let engine = RuleEngine::new()
            .with_rule(ByValue)
            .with_rule(FnRule::new("Unreachable", |_: &Item, _: &Item| -> Ordering {
                panic!("consulted after a decisive rule")
            }));
        assert_eq!(engine.compare(&item(1, 0), &item(2, 0)), Ordering::Less);
    }

    #[test]
    fn test_fn_rule() {
        let engine = RuleEngine::new().with_rule(FnRule::new("Desc", |a: &Item, b: &Item| {
            b.value.cmp(&a.value)
        }));
        let items = test_items();
        assert_eq!(engine.sort(&items)[0].value, 3);
        assert_eq!(engine.rule_names(), vec!["Desc"]);
    }
}
