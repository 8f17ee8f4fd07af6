//! Predicate registry: rule kind to predicate implementation.
//!
//! The registry is built once at startup and injected into the
//! validator. Resolving rule kinds through an explicit registry (rather
//! than any ambient global lookup) makes "schema references a rule kind
//! that does not exist" a checkable startup condition.

use rustc_hash::FxHashMap;

use super::predicate::RulePredicate;

/// Registry of rule predicates, keyed by rule kind identifier.
///
/// ## Example
///
/// ```
/// use bornes::rules::{MaxInPile, PredicateRegistry, MAX_IN_PILE};
///
/// let mut registry = PredicateRegistry::new();
/// registry.register(MAX_IN_PILE, Box::new(MaxInPile));
///
/// assert!(registry.contains(MAX_IN_PILE));
/// assert!(!registry.contains("teleport"));
/// ```
#[derive(Default)]
pub struct PredicateRegistry {
    predicates: FxHashMap<String, Box<dyn RulePredicate>>,
}

impl PredicateRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate for a rule kind.
    ///
    /// Panics if the kind is already registered.
    pub fn register(&mut self, kind: impl Into<String>, predicate: Box<dyn RulePredicate>) {
        let kind = kind.into();
        if self.predicates.contains_key(&kind) {
            panic!("Rule kind {:?} already registered", kind);
        }
        self.predicates.insert(kind, predicate);
    }

    /// Get the predicate for a rule kind.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&dyn RulePredicate> {
        self.predicates.get(kind).map(|p| p.as_ref())
    }

    /// Check if a rule kind is registered.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.predicates.contains_key(kind)
    }

    /// Get the number of registered predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Iterate over registered rule kinds (unordered).
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.kinds().collect();
        kinds.sort_unstable();
        f.debug_struct("PredicateRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::predicate::{MaxInPile, TopCard, MAX_IN_PILE, TOP_CARD};

    #[test]
    fn test_register_and_get() {
        let mut registry = PredicateRegistry::new();
        registry.register(MAX_IN_PILE, Box::new(MaxInPile));

        assert!(registry.get(MAX_IN_PILE).is_some());
        assert!(registry.get(TOP_CARD).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_kind_panics() {
        let mut registry = PredicateRegistry::new();
        registry.register(MAX_IN_PILE, Box::new(MaxInPile));
        registry.register(MAX_IN_PILE, Box::new(MaxInPile));
    }

    #[test]
    fn test_kinds() {
        let mut registry = PredicateRegistry::new();
        registry.register(MAX_IN_PILE, Box::new(MaxInPile));
        registry.register(TOP_CARD, Box::new(TopCard));

        let mut kinds: Vec<_> = registry.kinds().collect();
        kinds.sort_unstable();
        assert_eq!(kinds, vec![MAX_IN_PILE, TOP_CARD]);
    }

    #[test]
    fn test_debug_lists_kinds() {
        let mut registry = PredicateRegistry::new();
        registry.register(TOP_CARD, Box::new(TopCard));

        let debug = format!("{:?}", registry);
        assert!(debug.contains("topCard"));
    }
}
