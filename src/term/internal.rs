use smallvec::SmallVec;

use crate::annotations::{GeneId, Genes};
use crate::term::{GoChildren, GoParents, InformationContent, Relationship};
use crate::{GoTermId, Namespace};
use crate::{DEFAULT_NUM_ALL_PARENTS, DEFAULT_NUM_GENES, DEFAULT_NUM_PARENTS};

/// The owned representation of a GO term inside the ontology arena
///
/// Clients never interact with `GoTermInternal` directly, they receive
/// [`crate::GoTerm`] views instead.
#[derive(Clone, Debug)]
pub(crate) struct GoTermInternal {
    id: GoTermId,
    name: String,
    definition: String,
    namespace: Option<Namespace>,
    parents: GoParents,
    typed_parents: SmallVec<[(GoTermId, Relationship); 4]>,
    all_parents: GoParents,
    children: GoChildren,
    genes: Genes,
    ic: InformationContent,
    obsolete: bool,
}

impl GoTermInternal {
    /// A placeholder term that is referenced before its own metadata arrived
    ///
    /// Stubs carry no namespace. [`GoTermInternal::fill_in`] upgrades them
    /// once the actual record shows up.
    pub fn stub(id: GoTermId) -> Self {
        Self {
            id,
            name: String::new(),
            definition: String::new(),
            namespace: None,
            parents: GoParents::with_capacity(DEFAULT_NUM_PARENTS),
            typed_parents: SmallVec::new(),
            all_parents: GoParents::with_capacity(DEFAULT_NUM_ALL_PARENTS),
            children: GoChildren::with_capacity(DEFAULT_NUM_PARENTS),
            genes: Genes::with_capacity(DEFAULT_NUM_GENES),
            ic: InformationContent::default(),
            obsolete: false,
        }
    }

    /// A stub has not yet received its metadata record
    pub fn is_stub(&self) -> bool {
        self.namespace.is_none()
    }

    pub fn fill_in(&mut self, name: &str, definition: &str, namespace: Namespace) {
        self.name = name.to_string();
        self.definition = definition.to_string();
        self.namespace = Some(namespace);
    }

    pub fn id(&self) -> GoTermId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn namespace(&self) -> Option<Namespace> {
        self.namespace
    }

    pub fn parents(&self) -> &GoParents {
        &self.parents
    }

    pub fn children(&self) -> &GoChildren {
        &self.children
    }

    pub fn all_parents(&self) -> &GoParents {
        &self.all_parents
    }

    pub fn all_parents_mut(&mut self) -> &mut GoParents {
        &mut self.all_parents
    }

    pub fn typed_parents(&self) -> &[(GoTermId, Relationship)] {
        &self.typed_parents
    }

    pub fn genes(&self) -> &Genes {
        &self.genes
    }

    /// The ancestor cache is built exactly once and never shrinks, so a
    /// non-empty cache means the term was already processed.
    pub fn parents_cached(&self) -> bool {
        self.parents.is_empty() || !self.all_parents.is_empty()
    }

    pub fn add_parent<I: Into<GoTermId>>(&mut self, parent_id: I, kind: Relationship) {
        let parent_id = parent_id.into();
        if self.parents.insert(parent_id) {
            self.typed_parents.push((parent_id, kind));
        }
    }

    pub fn add_child<I: Into<GoTermId>>(&mut self, child_id: I) {
        self.children.insert(child_id);
    }

    /// Returns whether the gene was newly linked
    pub fn add_gene(&mut self, gene_id: GeneId) -> bool {
        self.genes.insert(gene_id)
    }

    pub fn information_content(&self) -> &InformationContent {
        &self.ic
    }

    pub fn information_content_mut(&mut self) -> &mut InformationContent {
        &mut self.ic
    }

    pub fn obsolete(&self) -> bool {
        self.obsolete
    }

    pub fn obsolete_mut(&mut self) -> &mut bool {
        &mut self.obsolete
    }
}

impl PartialEq for GoTermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stub_upgrade() {
        let mut term = GoTermInternal::stub(8150u32.into());
        assert!(term.is_stub());

        term.fill_in(
            "biological_process",
            "Any process",
            Namespace::BiologicalProcess,
        );
        assert!(!term.is_stub());
        assert_eq!(term.name(), "biological_process");
        assert_eq!(term.namespace(), Some(Namespace::BiologicalProcess));
    }

    #[test]
    fn duplicate_parent_keeps_one_typed_edge() {
        let mut term = GoTermInternal::stub(1u32.into());
        term.add_parent(2u32, Relationship::IsA);
        term.add_parent(2u32, Relationship::PartOf);

        assert_eq!(term.parents().len(), 1);
        assert_eq!(term.typed_parents().len(), 1);
        assert_eq!(term.typed_parents()[0].1, Relationship::IsA);
    }
}
