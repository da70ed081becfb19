use crate::annotations::{GeneIterator, Genes};
use crate::similarity::Similarity;
use crate::term::{GoGroup, GoTermIds, GroupCombine, InformationContent, Relationship};
use crate::{GoError, GoResult, GoTermId, Namespace, Ontology};

/// A borrowed view of a single term and its place in the ontology graph
///
/// `GoTerm`s are cheap copies of references into the [`Ontology`], they
/// can only exist while the ontology does.
#[derive(Clone, Copy)]
pub struct GoTerm<'a> {
    id: GoTermId,
    name: &'a str,
    definition: &'a str,
    namespace: Option<Namespace>,
    parents: &'a GoGroup,
    all_parents: &'a GoGroup,
    children: &'a GoGroup,
    typed_parents: &'a [(GoTermId, Relationship)],
    genes: &'a Genes,
    information_content: &'a InformationContent,
    ontology: &'a Ontology,
}

impl<'a> GoTerm<'a> {
    /// Constructs a new [`GoTerm`]
    ///
    /// # Errors
    ///
    /// If the term does not exist, a [`GoError::DoesNotExist`] is returned
    pub fn try_new<I: Into<GoTermId>>(ontology: &'a Ontology, id: I) -> GoResult<GoTerm<'a>> {
        let id = id.into();
        let term = ontology.get(id).ok_or(GoError::DoesNotExist)?;
        Ok(GoTerm::new(term, ontology))
    }

    pub(crate) fn new(term: &'a crate::term::internal::GoTermInternal, ontology: &'a Ontology) -> GoTerm<'a> {
        GoTerm {
            id: term.id(),
            name: term.name(),
            definition: term.definition(),
            namespace: term.namespace(),
            parents: term.parents(),
            all_parents: term.all_parents(),
            children: term.children(),
            typed_parents: term.typed_parents(),
            genes: term.genes(),
            information_content: term.information_content(),
            ontology,
        }
    }

    /// Returns the [`GoTermId`] of the term
    pub fn id(&self) -> GoTermId {
        self.id
    }

    /// Returns the name of the term
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the OBO definition of the term
    pub fn definition(&self) -> &'a str {
        self.definition
    }

    /// Returns the sub-ontology the term belongs to, `None` for stubs
    pub fn namespace(&self) -> Option<Namespace> {
        self.namespace
    }

    /// Returns an iterator of the direct parent terms
    pub fn parents(&self) -> GoTerms<'a> {
        GoTerms::new(self.parents.iter(), self.ontology)
    }

    /// Returns the [`GoTermId`]s of the direct parents
    pub fn parent_ids(&self) -> &GoGroup {
        self.parents
    }

    /// Returns an iterator of all ancestor terms
    pub fn all_parents(&self) -> GoTerms<'a> {
        GoTerms::new(self.all_parents.iter(), self.ontology)
    }

    /// Returns the [`GoTermId`]s of all ancestors
    ///
    /// This requires the ancestor cache, see [`Ontology::create_cache`]
    pub fn all_parent_ids(&self) -> &GoGroup {
        self.all_parents
    }

    /// Returns an iterator of the direct child terms
    pub fn children(&self) -> GoTerms<'a> {
        GoTerms::new(self.children.iter(), self.ontology)
    }

    /// Returns the [`GoTermId`]s of the direct children
    pub fn children_ids(&self) -> &GoGroup {
        self.children
    }

    /// Returns the term's ancestors including the term itself
    pub fn self_ancestor_ids(&self) -> GoGroup {
        let mut group = self.all_parents.clone();
        group.insert(self.id);
        group
    }

    /// Returns the [`GoTermId`]s of all common ancestors of both terms
    ///
    /// If one term is an ancestor of the other, it is part of the result.
    pub fn common_ancestor_ids(&self, other: &GoTerm) -> GoGroup {
        let mut group = self.all_parent_ids() & other.all_parent_ids();
        if self.all_parent_ids().contains(&other.id()) {
            group.insert(other.id());
        }
        if other.all_parent_ids().contains(&self.id()) {
            group.insert(self.id());
        }
        group
    }

    /// Returns the [`GoTermId`]s of the combined ancestors of both terms
    pub fn union_ancestor_ids(&self, other: &GoTerm) -> GoGroup {
        self.all_parent_ids() | other.all_parent_ids()
    }

    /// Returns an iterator of all common ancestor terms of both terms
    pub fn common_ancestors(&self, other: &GoTerm) -> GroupCombine<'a> {
        GroupCombine::new(self.common_ancestor_ids(other), self.ontology)
    }

    /// Returns an iterator of the combined ancestor terms of both terms
    pub fn union_ancestors(&self, other: &GoTerm) -> GroupCombine<'a> {
        GroupCombine::new(self.union_ancestor_ids(other), self.ontology)
    }

    /// Returns the kind of edge connecting the term to a direct parent
    ///
    /// `None` if `parent_id` is not a direct parent.
    pub fn relationship_to(&self, parent_id: GoTermId) -> Option<Relationship> {
        self.typed_parents
            .iter()
            .find(|(id, _)| *id == parent_id)
            .map(|(_, kind)| *kind)
    }

    /// Returns an iterator of all genes annotated to the term or a descendant
    pub fn genes(&self) -> GeneIterator<'a> {
        GeneIterator::new(self.genes, self.ontology)
    }

    /// Returns the set of [`crate::annotations::GeneId`]s annotated to the term
    pub fn gene_ids(&self) -> &Genes {
        self.genes
    }

    /// Returns the term's [`InformationContent`]
    pub fn information_content(&self) -> &InformationContent {
        self.information_content
    }

    /// Returns the largest IC of any term in this term's sub-ontology
    ///
    /// `0.0` if the term has no namespace.
    pub fn max_namespace_ic(&self) -> f32 {
        match self.namespace {
            Some(namespace) => self.ontology.max_ic(namespace),
            None => 0.0,
        }
    }

    /// Calculates the similarity of the term to another term
    pub fn similarity_score(&self, other: &GoTerm, similarity: &impl Similarity) -> f32 {
        similarity.calculate(self, other)
    }

    /// Returns the shortest path to an ancestor term, `None` if `other`
    /// is not an ancestor
    pub fn distance_to_ancestor(&self, other: &GoTerm) -> Option<usize> {
        if self.id() == other.id() {
            return Some(0);
        }
        if self.parent_ids().contains(&other.id()) {
            return Some(1);
        }
        if !self.all_parent_ids().contains(&other.id()) {
            return None;
        }
        self.parents()
            .filter_map(|parent| parent.distance_to_ancestor(other))
            .min()
            .map(|distance| distance + 1)
    }

    /// Returns `true` if `other` is an ancestor of the term
    pub fn child_of(&self, other: &GoTerm) -> bool {
        self.all_parent_ids().contains(&other.id())
    }

    /// Returns `true` if `other` is a descendant of the term
    pub fn parent_of(&self, other: &GoTerm) -> bool {
        other.child_of(self)
    }

    pub(crate) fn ontology(&self) -> &'a Ontology {
        self.ontology
    }
}

impl PartialEq for GoTerm<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GoTerm<'_> {}

impl std::fmt::Debug for GoTerm<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoTerm(id: {}, name: {})", self.id, self.name)
    }
}

/// An iterator of [`GoTerm`]s
pub struct GoTerms<'a> {
    ids: GoTermIds<'a>,
    ontology: &'a Ontology,
}

impl<'a> GoTerms<'a> {
    pub(crate) fn new(ids: GoTermIds<'a>, ontology: &'a Ontology) -> Self {
        Self { ids, ontology }
    }
}

impl<'a> Iterator for GoTerms<'a> {
    type Item = GoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        // ids without a term, e.g. from a client-built group, are skipped
        loop {
            let id = self.ids.next()?;
            if let Ok(term) = GoTerm::try_new(self.ontology, id) {
                return Some(term);
            }
        }
    }
}
