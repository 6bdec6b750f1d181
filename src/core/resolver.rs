//! # Combination Resolver
//!
//! Maps a pair of ingredients to an outcome. Pure: reads the catalog and the
//! unlock set, mutates neither.

use crate::core::catalog::{Catalog, Element, ElementId};
use crate::core::unlock::UnlockSet;

/// Result of combining two elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinationOutcome {
    /// Valid recipe, first time this element is unlocked.
    Discovered(Element),
    /// Valid recipe, element was already owned.
    Repeated(Element),
    /// No element lists this pair as a recipe.
    NoMatch,
}

impl CombinationOutcome {
    pub fn element(&self) -> Option<&Element> {
        match self {
            CombinationOutcome::Discovered(e) | CombinationOutcome::Repeated(e) => Some(e),
            CombinationOutcome::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, CombinationOutcome::NoMatch)
    }
}

/// Resolve `a + b`. Argument order never affects the result.
pub fn resolve(
    a: &ElementId,
    b: &ElementId,
    catalog: &Catalog,
    unlocked: &UnlockSet,
) -> CombinationOutcome {
    match catalog.recipe_for(a, b) {
        Some(element) if unlocked.contains(element.id.as_str()) => {
            CombinationOutcome::Repeated(element.clone())
        }
        Some(element) => CombinationOutcome::Discovered(element.clone()),
        None => CombinationOutcome::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{id, sample_catalog};

    #[test]
    fn test_discovered_then_repeated() {
        let catalog = sample_catalog();
        let mut unlocked = UnlockSet::seeded(&catalog);

        let outcome = resolve(&id("water"), &id("earth"), &catalog, &unlocked);
        assert!(matches!(&outcome, CombinationOutcome::Discovered(e) if e.id == id("mud")));

        unlocked.add(id("mud"));
        let outcome = resolve(&id("earth"), &id("water"), &catalog, &unlocked);
        assert!(matches!(&outcome, CombinationOutcome::Repeated(e) if e.id == id("mud")));
    }

    #[test]
    fn test_no_match() {
        let catalog = sample_catalog();
        let unlocked = UnlockSet::seeded(&catalog);
        let outcome = resolve(&id("water"), &id("water"), &catalog, &unlocked);
        assert_eq!(outcome, CombinationOutcome::NoMatch);
        assert!(outcome.element().is_none());
        assert!(!outcome.is_match());
    }

    #[test]
    fn test_commutative_for_every_pair() {
        let catalog = sample_catalog();
        let mut unlocked = UnlockSet::seeded(&catalog);
        unlocked.add(id("mud"));
        for a in catalog.elements() {
            for b in catalog.elements() {
                assert_eq!(
                    resolve(&a.id, &b.id, &catalog, &unlocked),
                    resolve(&b.id, &a.id, &catalog, &unlocked),
                    "{} + {}",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn test_resolves_higher_tier_recipes() {
        let catalog = sample_catalog();
        let unlocked = UnlockSet::seeded(&catalog);
        let outcome = resolve(&id("fire"), &id("mud"), &catalog, &unlocked);
        assert_eq!(outcome.element().map(|e| e.name.as_str()), Some("Brick"));
    }
}
