use crate::set::GoSet;
use crate::similarity::{usize_to_f32, SetSimilarity};
use crate::term::GoGroup;
use crate::Ontology;

fn ic_sum(ontology: &Ontology, group: &GoGroup) -> f32 {
    group
        .iter()
        .filter_map(|id| ontology.go(id))
        .map(|term| term.information_content().ic())
        .sum()
}

/// Jaccard index of the induced ancestor sets
///
/// Pure set overlap, the information content of the shared terms plays
/// no role.
#[derive(Clone, Copy, Debug, Default)]
pub struct Jaccard;

/// `simUI` is the Jaccard index under its GO-specific name
pub type SimUi = Jaccard;

impl SetSimilarity for Jaccard {
    fn calculate(&self, a: &GoSet, b: &GoSet) -> f32 {
        let extended_a = a.extended();
        let extended_b = b.extended();
        let union = &extended_a | &extended_b;
        if union.is_empty() {
            return 0.0;
        }
        let intersection = &extended_a & &extended_b;
        usize_to_f32(intersection.len()) / usize_to_f32(union.len())
    }
}

/// `simUIC`, the IC-weighted Jaccard index
///
/// Shared informative terms count more than shared terms near the root.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimUic;

impl SetSimilarity for SimUic {
    fn calculate(&self, a: &GoSet, b: &GoSet) -> f32 {
        let extended_a = a.extended();
        let extended_b = b.extended();
        let union_ic = ic_sum(a.ontology(), &(&extended_a | &extended_b));
        if union_ic == 0.0 {
            return 0.0;
        }
        ic_sum(a.ontology(), &(&extended_a & &extended_b)) / union_ic
    }
}

/// `simDIC`, a Dice-style IC overlap
#[derive(Clone, Copy, Debug, Default)]
pub struct SimDic;

impl SetSimilarity for SimDic {
    fn calculate(&self, a: &GoSet, b: &GoSet) -> f32 {
        let extended_a = a.extended();
        let extended_b = b.extended();
        let denominator =
            ic_sum(a.ontology(), &extended_a) + ic_sum(b.ontology(), &extended_b);
        if denominator == 0.0 {
            return 0.0;
        }
        2.0 * ic_sum(a.ontology(), &(&extended_a & &extended_b)) / denominator
    }
}

/// `simGIC`, the graph information content similarity
///
/// Numerically identical to [`SimUic`], both names are in active use in
/// the literature and kept as distinct types.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimGic;

impl SetSimilarity for SimGic {
    fn calculate(&self, a: &GoSet, b: &GoSet) -> f32 {
        SimUic.calculate(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::annotations::{AnnotationIndex, Evidence};
    use crate::term::{Relationship, RelationshipPolicy};
    use crate::{Namespace, BP_ROOT};

    const A: u32 = 8152;
    const C: u32 = 6810;

    fn fixture() -> Ontology {
        let mut ontology = Ontology::default();
        let policy = RelationshipPolicy::default();
        ontology.insert_term(BP_ROOT, "biological_process", "", Namespace::BiologicalProcess);
        ontology.insert_term(A, "metabolic process", "", Namespace::BiologicalProcess);
        ontology.insert_term(C, "transport", "", Namespace::BiologicalProcess);
        ontology.add_relationship(A, BP_ROOT.as_u32(), Relationship::IsA, &policy);
        ontology.add_relationship(C, A, Relationship::IsA, &policy);
        ontology.create_cache();

        let mut annotations = AnnotationIndex::default();
        annotations.add_association("G1", C, Evidence::Exp);
        annotations.add_association("G2", A, Evidence::Exp);
        annotations.add_association("G3", A, Evidence::Exp);
        annotations.add_association("G4", BP_ROOT, Evidence::Exp);
        annotations.add_association("G5", BP_ROOT, Evidence::Exp);
        ontology.annotate(&annotations).unwrap();
        ontology.calculate_information_content().unwrap();
        ontology
    }

    #[test]
    fn jaccard_of_nested_sets() {
        let ontology = fixture();
        let mut group_a = GoGroup::new();
        group_a.insert(A);
        let mut group_c = GoGroup::new();
        group_c.insert(C);

        let set_a = GoSet::new(&ontology, group_a);
        let set_c = GoSet::new(&ontology, group_c);

        // induced sets are {A, R} and {C, A, R}
        assert!((Jaccard.calculate(&set_a, &set_c) - 2.0 / 3.0).abs() < 0.000_001);
        assert_eq!(Jaccard.calculate(&set_c, &set_c), 1.0);
    }

    #[test]
    fn empty_sets_score_zero() {
        let ontology = fixture();
        let empty = GoSet::new(&ontology, GoGroup::new());
        assert_eq!(Jaccard.calculate(&empty, &empty), 0.0);
        assert_eq!(SimUic.calculate(&empty, &empty), 0.0);
        assert_eq!(SimDic.calculate(&empty, &empty), 0.0);
    }

    #[test]
    fn ic_weighted_overlaps() {
        let ontology = fixture();
        let mut group_a = GoGroup::new();
        group_a.insert(A);
        let mut group_c = GoGroup::new();
        group_c.insert(C);

        let set_a = GoSet::new(&ontology, group_a);
        let set_c = GoSet::new(&ontology, group_c);

        let ic_a = 0.510_825_6f32;
        let ic_c = 1.609_437_9f32;

        // intersection {A, R}, union {C, A, R}
        let uic = SimUic.calculate(&set_a, &set_c);
        assert!((uic - ic_a / (ic_a + ic_c)).abs() < 0.000_01);
        assert_eq!(uic, SimGic.calculate(&set_a, &set_c));

        let dic = SimDic.calculate(&set_a, &set_c);
        assert!((dic - 2.0 * ic_a / (ic_a + ic_a + ic_c)).abs() < 0.000_01);

        assert_eq!(SimUic.calculate(&set_c, &set_c), 1.0);
        assert_eq!(SimDic.calculate(&set_c, &set_c), 1.0);
    }
}
