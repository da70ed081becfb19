use std::collections::hash_map::{Values, ValuesMut};
use std::collections::HashMap;

use crate::term::internal::GoTermInternal;
use crate::{GoTermId, Namespace};

/// Backing store of the [`crate::Ontology`] term graph
///
/// Relationships may reference a term before its metadata record arrives,
/// so lookups that feed edge insertion go through [`TermStore::ensure`],
/// which creates a stub on first contact and upgrades it in place later.
#[derive(Clone, Debug, Default)]
pub(crate) struct TermStore {
    terms: HashMap<GoTermId, GoTermInternal>,
}

impl TermStore {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn contains(&self, id: GoTermId) -> bool {
        self.terms.contains_key(&id)
    }

    /// The term of `id`, created as a stub when it is new
    pub fn ensure(&mut self, id: GoTermId) -> &mut GoTermInternal {
        self.terms
            .entry(id)
            .or_insert_with(|| GoTermInternal::stub(id))
    }

    /// Records a term's metadata, upgrading an existing stub in place
    pub fn upsert(&mut self, id: GoTermId, name: &str, definition: &str, namespace: Namespace) {
        self.ensure(id).fill_in(name, definition, namespace);
    }

    pub fn get(&self, id: GoTermId) -> Option<&GoTermInternal> {
        self.terms.get(&id)
    }

    pub fn get_mut(&mut self, id: GoTermId) -> Option<&mut GoTermInternal> {
        self.terms.get_mut(&id)
    }

    /// # Panics
    ///
    /// Panics if the term is not present
    pub fn get_unchecked(&self, id: GoTermId) -> &GoTermInternal {
        self.terms.get(&id).unwrap()
    }

    /// # Panics
    ///
    /// Panics if the term is not present
    pub fn get_unchecked_mut(&mut self, id: GoTermId) -> &mut GoTermInternal {
        self.terms.get_mut(&id).unwrap()
    }

    pub fn values(&self) -> Values<'_, GoTermId, GoTermInternal> {
        self.terms.values()
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, GoTermId, GoTermInternal> {
        self.terms.values_mut()
    }

    /// A snapshot of all term ids, detached from the map's borrow
    pub fn ids(&self) -> Vec<GoTermId> {
        self.terms.keys().copied().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Relationship;

    #[test]
    fn ensure_creates_each_term_once() {
        let mut store = TermStore::default();
        store.ensure(8152u32.into()).add_parent(8150u32, Relationship::IsA);
        store.ensure(8152u32.into());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_unchecked(8152u32.into()).parents().len(), 1);
    }

    #[test]
    fn upsert_keeps_edges_of_a_stub() {
        let mut store = TermStore::default();
        store.ensure(6810u32.into()).add_parent(8152u32, Relationship::IsA);
        assert!(store.get_unchecked(6810u32.into()).is_stub());

        store.upsert(
            6810u32.into(),
            "transport",
            "",
            Namespace::BiologicalProcess,
        );
        let term = store.get_unchecked(6810u32.into());
        assert!(!term.is_stub());
        assert_eq!(term.name(), "transport");
        assert_eq!(term.parents().len(), 1);
        assert!(!store.contains(1u32.into()));
    }
}
