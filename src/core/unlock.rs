//! # Unlock Set
//!
//! The elements the player currently owns. Seeded with every tier 0 element
//! and only ever grows: there is no removal operation.

use std::collections::HashSet;

use crate::core::catalog::{Catalog, ElementId};

#[derive(Debug, Clone, Default)]
pub struct UnlockSet {
    members: HashSet<ElementId>,
    // Unlock order, used for "latest discovery" readouts.
    order: Vec<ElementId>,
}

impl UnlockSet {
    /// A set holding exactly the catalog's base elements.
    pub fn seeded(catalog: &Catalog) -> Self {
        let mut set = Self::default();
        for element in catalog.base_elements() {
            set.add(element.id.clone());
        }
        set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Adds `id`. Returns `false` (and changes nothing) if it was already present.
    pub fn add(&mut self, id: ElementId) -> bool {
        if self.members.contains(&id) {
            return false;
        }
        self.members.insert(id.clone());
        self.order.push(id);
        true
    }

    /// All unlocked ids, in the order they were unlocked.
    pub fn all(&self) -> impl Iterator<Item = &ElementId> {
        self.order.iter()
    }

    pub fn latest(&self) -> Option<&ElementId> {
        self.order.last()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{id, sample_catalog};

    #[test]
    fn test_seeded_with_exactly_base_elements() {
        let catalog = sample_catalog();
        let set = UnlockSet::seeded(&catalog);
        let mut ids: Vec<&str> = set.all().map(ElementId::as_str).collect();
        ids.sort();
        assert_eq!(ids, vec!["earth", "fire", "water"]);
        assert!(!set.contains("mud"));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut set = UnlockSet::seeded(&sample_catalog());
        assert!(set.add(id("mud")));
        assert_eq!(set.len(), 4);
        assert!(!set.add(id("mud")));
        assert!(!set.add(id("water")));
        assert_eq!(set.len(), 4);
        assert_eq!(set.latest(), Some(&id("mud")));
    }
}
