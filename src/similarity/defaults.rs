use crate::similarity::shared::{same_namespace, SharedInformation};
use crate::similarity::{Mica, Similarity};
use crate::{GoTerm, TermDepthMap};

fn depth_f32(depth: u32) -> f32 {
    f32::from(u16::try_from(depth).unwrap_or(u16::MAX))
}

/// Resnik's similarity, the shared information itself
///
/// The raw score is unbounded, [`Similarity::calculate_normalized`]
/// scales it by the largest IC of the namespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct Resnik<S = Mica> {
    shared: S,
}

impl Resnik<Mica> {
    pub fn new() -> Self {
        Self { shared: Mica }
    }
}

impl<S: SharedInformation> Resnik<S> {
    pub fn with_shared(shared: S) -> Self {
        Self { shared }
    }
}

impl<S: SharedInformation> Similarity for Resnik<S> {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        self.shared.shared_information(a, b)
    }

    fn calculate_normalized(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        if a.id() == b.id() && a.namespace().is_some() {
            return 1.0;
        }
        let max = self.shared.max_information(a);
        if max == 0.0 {
            return 0.0;
        }
        (self.calculate(a, b) / max).clamp(0.0, 1.0)
    }
}

/// Lin's similarity, shared information relative to the terms' own IC
#[derive(Clone, Copy, Debug, Default)]
pub struct Lin<S = Mica> {
    shared: S,
}

impl Lin<Mica> {
    pub fn new() -> Self {
        Self { shared: Mica }
    }
}

impl<S: SharedInformation> Lin<S> {
    pub fn with_shared(shared: S) -> Self {
        Self { shared }
    }
}

impl<S: SharedInformation> Similarity for Lin<S> {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        let denominator = self.shared.self_information(a) + self.shared.self_information(b);
        if denominator == 0.0 {
            return 0.0;
        }
        2.0 * self.shared.shared_information(a, b) / denominator
    }
}

/// Jiang & Conrath's similarity, an IC distance folded back into `[0, 1]`
#[derive(Clone, Copy, Debug, Default)]
pub struct JiangConrath<S = Mica> {
    shared: S,
}

impl JiangConrath<Mica> {
    pub fn new() -> Self {
        Self { shared: Mica }
    }
}

impl<S: SharedInformation> JiangConrath<S> {
    pub fn with_shared(shared: S) -> Self {
        Self { shared }
    }
}

impl<S: SharedInformation> Similarity for JiangConrath<S> {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        if !same_namespace(a, b) {
            return 0.0;
        }
        let max = self.shared.max_information(a);
        if max == 0.0 {
            return 0.0;
        }
        let distance = self.shared.self_information(a) + self.shared.self_information(b)
            - 2.0 * self.shared.shared_information(a, b);
        (1.0 - distance / (2.0 * max)).clamp(0.0, 1.0)
    }
}

/// Schlicker's Relevance similarity
///
/// Lin's score weighted by how rare the shared ancestor is, so matches
/// near the root count less.
#[derive(Clone, Copy, Debug, Default)]
pub struct Relevance<S = Mica> {
    shared: S,
}

impl Relevance<Mica> {
    pub fn new() -> Self {
        Self { shared: Mica }
    }
}

impl<S: SharedInformation> Relevance<S> {
    pub fn with_shared(shared: S) -> Self {
        Self { shared }
    }
}

impl<S: SharedInformation> Similarity for Relevance<S> {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        let denominator = self.shared.self_information(a) + self.shared.self_information(b);
        if denominator == 0.0 {
            return 0.0;
        }
        let shared = self.shared.shared_information(a, b);
        let lin = 2.0 * shared / denominator;
        lin * (1.0 - (-shared).exp())
    }
}

/// Pekar & Staab's edge-based similarity
///
/// Works on graph depths instead of information content, so it needs a
/// prebuilt [`TermDepthMap`] and no annotations at all.
#[derive(Clone, Copy, Debug)]
pub struct PekarStaab<'a> {
    depths: &'a TermDepthMap,
}

impl<'a> PekarStaab<'a> {
    pub fn new(depths: &'a TermDepthMap) -> Self {
        Self { depths }
    }
}

impl Similarity for PekarStaab<'_> {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        if !same_namespace(a, b) {
            return 0.0;
        }
        let lca = match self
            .depths
            .lca(&a.self_ancestor_ids(), &b.self_ancestor_ids())
        {
            Some(lca) => lca,
            None => return 0.0,
        };
        let (depth_lca, depth_a, depth_b) = match (
            self.depths.depth(lca),
            self.depths.depth(a.id()),
            self.depths.depth(b.id()),
        ) {
            (Some(lca), Some(a), Some(b)) => (lca, a, b),
            _ => return 0.0,
        };
        let denominator = depth_a + depth_b - depth_lca;
        if denominator == 0 {
            return 0.0;
        }
        depth_f32(depth_lca) / depth_f32(denominator)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::annotations::{AnnotationIndex, Evidence};
    use crate::term::{Relationship, RelationshipPolicy};
    use crate::{Namespace, Ontology, BP_ROOT};

    const A: u32 = 8152;
    const C: u32 = 6810;

    /// Chain R <- A <- C with p(C) = 0.2, p(A) = 0.6, p(R) = 1.0
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
    fn resnik() {
        let ontology = fixture();
        let term_a = ontology.go(A).unwrap();
        let term_c = ontology.go(C).unwrap();
        let resnik = Resnik::new();

        assert!((resnik.calculate(&term_a, &term_c) - 0.510_825_6).abs() < 0.000_01);
        assert!((resnik.calculate_normalized(&term_a, &term_c) - 0.317_39).abs() < 0.000_1);
        assert_eq!(resnik.calculate_normalized(&term_c, &term_c), 1.0);
    }

    #[test]
    fn lin() {
        let ontology = fixture();
        let term_a = ontology.go(A).unwrap();
        let term_c = ontology.go(C).unwrap();
        let lin = Lin::new();

        assert!((lin.calculate(&term_a, &term_c) - 0.481_851).abs() < 0.000_1);
        // Lin of the root with itself is 0/0, the raw score guards to 0
        let root = ontology.go(BP_ROOT).unwrap();
        assert_eq!(lin.calculate(&root, &root), 0.0);
        assert_eq!(lin.calculate_normalized(&root, &root), 1.0);
    }

    #[test]
    fn jiang_conrath() {
        let ontology = fixture();
        let term_a = ontology.go(A).unwrap();
        let term_c = ontology.go(C).unwrap();
        let jc = JiangConrath::new();

        assert!((jc.calculate(&term_a, &term_c) - 0.658_72).abs() < 0.000_1);
        assert_eq!(jc.calculate_normalized(&term_a, &term_a), 1.0);
    }

    #[test]
    fn relevance() {
        let ontology = fixture();
        let term_a = ontology.go(A).unwrap();
        let term_c = ontology.go(C).unwrap();
        let relevance = Relevance::new();

        assert!((relevance.calculate(&term_a, &term_c) - 0.192_74).abs() < 0.000_1);
    }

    #[test]
    fn pekar_staab() {
        let ontology = fixture();
        let depths = TermDepthMap::new(&ontology);
        let term_a = ontology.go(A).unwrap();
        let term_c = ontology.go(C).unwrap();
        let pekar = PekarStaab::new(&depths);

        assert!((pekar.calculate(&term_a, &term_c) - 0.5).abs() < f32::EPSILON);
        let root = ontology.go(BP_ROOT).unwrap();
        assert_eq!(pekar.calculate(&root, &root), 0.0);
        assert_eq!(pekar.calculate_normalized(&root, &root), 1.0);
    }

    #[test]
    fn symmetry() {
        let ontology = fixture();
        let term_a = ontology.go(A).unwrap();
        let term_c = ontology.go(C).unwrap();

        let lin = Lin::new();
        assert_eq!(
            lin.calculate(&term_a, &term_c),
            lin.calculate(&term_c, &term_a)
        );
        let resnik = Resnik::new();
        assert_eq!(
            resnik.calculate_normalized(&term_a, &term_c),
            resnik.calculate_normalized(&term_c, &term_a)
        );
    }
}
