use crate::similarity::{GroupSimilarity, Similarity, SimilarityCombiner};
use crate::term::{GoGroup, GoTerms};
use crate::Ontology;

/// A set of terms of one [`Ontology`], e.g. the annotations of a gene
///
/// The set keeps a reference to its ontology, so it can resolve terms,
/// induce ancestor closures and run similarity comparisons directly.
pub struct GoSet<'a> {
    ontology: &'a Ontology,
    group: GoGroup,
}

impl<'a> GoSet<'a> {
    pub fn new(ontology: &'a Ontology, group: GoGroup) -> Self {
        Self { ontology, group }
    }

    /// Returns the number of terms in the set
    pub fn len(&self) -> usize {
        self.group.len()
    }

    /// Returns `true` if the set contains no terms
    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    /// Returns `true` if the set contains the term
    pub fn contains<I: Into<crate::GoTermId>>(&self, id: I) -> bool {
        self.group.contains(&id.into())
    }

    /// Returns the ids of the set members
    pub fn group(&self) -> &GoGroup {
        &self.group
    }

    /// Returns an iterator of the member terms
    ///
    /// Unknown ids are skipped by the iterator.
    pub fn iter(&self) -> GoTerms<'_> {
        GoTerms::new(self.group.iter(), self.ontology)
    }

    /// The set members together with all their ancestors
    pub fn extended(&self) -> GoGroup {
        self.ontology.extended_term_set(&self.group)
    }

    /// Compares two sets with a pairwise measure and a combiner
    pub fn similarity<S: Similarity + Copy, C: SimilarityCombiner + Copy>(
        &self,
        other: &GoSet,
        similarity: S,
        combiner: C,
    ) -> f32 {
        GroupSimilarity::new(similarity, combiner).calculate(self, other)
    }

    pub(crate) fn ontology(&self) -> &'a Ontology {
        self.ontology
    }
}

impl<'a, 'b> IntoIterator for &'b GoSet<'a> {
    type Item = crate::GoTerm<'b>;
    type IntoIter = GoTerms<'b>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::{Relationship, RelationshipPolicy};
    use crate::{Namespace, BP_ROOT};

    #[test]
    fn member_iteration_skips_unknown_ids() {
        let mut ontology = Ontology::default();
        let policy = RelationshipPolicy::default();
        ontology.insert_term(BP_ROOT, "biological_process", "", Namespace::BiologicalProcess);
        ontology.insert_term(8152u32, "metabolic process", "", Namespace::BiologicalProcess);
        ontology.add_relationship(
            8152u32,
            BP_ROOT.as_u32(),
            Relationship::IsA,
            &policy,
        );
        ontology.create_cache();

        let mut group = GoGroup::new();
        group.insert(8152u32);
        group.insert(9999u32);
        let set = GoSet::new(&ontology, group);

        assert_eq!(set.len(), 2);
        assert!(set.contains(8152u32));
        let resolved: Vec<_> = set.iter().map(|term| term.id()).collect();
        assert_eq!(resolved, vec![8152u32.into()]);
        assert_eq!(set.extended().len(), 2);
    }
}
