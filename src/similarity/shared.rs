use std::collections::HashMap;

use crate::similarity::usize_to_f32;
use crate::term::GoGroup;
use crate::{GoTerm, GoTermId, Ontology};

/// Both terms belong to the same sub-ontology
pub(crate) fn same_namespace(a: &GoTerm, b: &GoTerm) -> bool {
    match (a.namespace(), b.namespace()) {
        (Some(namespace_a), Some(namespace_b)) => namespace_a == namespace_b,
        _ => false,
    }
}

/// Quantifies the information two terms share through their ancestry
///
/// The IC-based similarity measures ([`crate::similarity::Resnik`],
/// [`crate::similarity::Lin`], ...) are parameterized over this trait, so
/// the same formula can run on different notions of "shared".
///
/// Cross-namespace pairs and stub terms share nothing, every
/// implementation returns `0.0` for them.
pub trait SharedInformation {
    /// The information content shared by the two terms
    fn shared_information(&self, a: &GoTerm, b: &GoTerm) -> f32;

    /// The information content of a single term
    fn self_information(&self, term: &GoTerm) -> f32 {
        term.information_content().ic()
    }

    /// The largest IC any term of `term`'s sub-ontology can have
    fn max_information(&self, term: &GoTerm) -> f32 {
        term.max_namespace_ic()
    }
}

/// The IC of the single most informative common ancestor
///
/// The classic choice. A term is considered an ancestor of itself, so
/// identical terms share their own IC.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mica;

impl SharedInformation for Mica {
    fn shared_information(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        if !same_namespace(a, b) {
            return 0.0;
        }
        a.ontology()
            .mica_ic(&a.self_ancestor_ids(), &b.self_ancestor_ids())
    }
}

/// The mean IC of all common ancestors
///
/// More forgiving than [`Mica`], shallow shared ancestors pull the score
/// down.
#[derive(Clone, Copy, Debug, Default)]
pub struct AncestorMean;

impl SharedInformation for AncestorMean {
    fn shared_information(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        if !same_namespace(a, b) {
            return 0.0;
        }
        let common = &a.self_ancestor_ids() & &b.self_ancestor_ids();
        if common.is_empty() {
            return 0.0;
        }
        let ontology = a.ontology();
        let sum: f32 = common
            .iter()
            .filter_map(|id| ontology.go(id))
            .map(|term| term.information_content().ic())
            .sum();
        sum / usize_to_f32(common.len())
    }
}

/// The mean IC of the exclusively inherited common ancestors
///
/// A common ancestor counts only if one of its direct children is an
/// ancestor of exactly one of the two terms, i.e. the ancestor marks a
/// point where the two ancestries actually diverge.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExclusivelyInherited;

impl SharedInformation for ExclusivelyInherited {
    fn shared_information(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        if !same_namespace(a, b) {
            return 0.0;
        }
        if a.id() == b.id() {
            return a.information_content().ic();
        }

        let ancestors_a = a.self_ancestor_ids();
        let ancestors_b = b.self_ancestor_ids();
        let common = &ancestors_a & &ancestors_b;
        let ontology = a.ontology();

        let mut retained = 0usize;
        let mut sum = 0.0f32;
        for id in &common {
            if let Some(term) = ontology.go(id) {
                let diverges = term
                    .children_ids()
                    .iter()
                    .any(|child| ancestors_a.contains(&child) != ancestors_b.contains(&child));
                if diverges {
                    retained += 1;
                    sum += term.information_content().ic();
                }
            }
        }
        if retained == 0 {
            return 0.0;
        }
        sum / usize_to_f32(retained)
    }
}

/// The mean IC of the common disjoint ancestors (GraSM)
///
/// Couto's GraSM keeps only common ancestors that represent genuinely
/// different paths of inheritance. Candidates are visited in order of
/// decreasing IC and accepted if they are disjoint from every already
/// accepted ancestor with respect to both query terms.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoutoGraSm {
    adjusted: bool,
}

impl CoutoGraSm {
    /// The strict original definition of disjointness
    pub fn new() -> Self {
        Self { adjusted: false }
    }

    /// The adjusted variant, which also accepts ancestors reached through
    /// the same number of paths
    pub fn adjusted() -> Self {
        Self { adjusted: true }
    }

    /// Number of distinct directed paths from `from` up to `to`
    fn path_count(
        &self,
        ontology: &Ontology,
        from: GoTermId,
        to: GoTermId,
        memo: &mut HashMap<(GoTermId, GoTermId), u64>,
    ) -> u64 {
        if from == to {
            return 1;
        }
        if let Some(count) = memo.get(&(from, to)) {
            return *count;
        }
        let term = match ontology.go(from) {
            Some(term) => term,
            None => return 0,
        };
        let mut total = 0;
        for parent in term.parent_ids() {
            if parent == to || ontology.ancestor_ids(parent).contains(&to) {
                total += self.path_count(ontology, parent, to, memo);
            }
        }
        memo.insert((from, to), total);
        total
    }

    /// `candidate` reaches `term` through paths not already represented
    /// by `selected`
    fn is_disjoint(
        &self,
        ontology: &Ontology,
        term: GoTermId,
        candidate: GoTermId,
        selected: GoTermId,
        memo: &mut HashMap<(GoTermId, GoTermId), u64>,
    ) -> bool {
        let direct = self.path_count(ontology, term, candidate, memo);
        let through = self.path_count(ontology, term, selected, memo)
            * self.path_count(ontology, selected, candidate, memo);
        if self.adjusted {
            direct >= through
        } else {
            direct > through
        }
    }

    /// The common disjoint ancestors of two terms, including the terms
    /// themselves where applicable
    pub fn common_disjoint_ancestors(&self, a: &GoTerm, b: &GoTerm) -> GoGroup {
        let ontology = a.ontology();
        let common = &a.self_ancestor_ids() & &b.self_ancestor_ids();

        let mut candidates: Vec<(GoTermId, f32)> = common
            .iter()
            .filter_map(|id| ontology.go(id))
            .map(|term| (term.id(), term.information_content().ic()))
            .collect();
        candidates.sort_by(|x, y| y.1.total_cmp(&x.1));

        let mut memo = HashMap::new();
        let mut selected = GoGroup::new();
        for (candidate, _) in candidates {
            let disjoint = selected.iter().all(|previous| {
                self.is_disjoint(ontology, a.id(), candidate, previous, &mut memo)
                    && self.is_disjoint(ontology, b.id(), candidate, previous, &mut memo)
            });
            if disjoint {
                selected.insert(candidate);
            }
        }
        selected
    }
}

impl SharedInformation for CoutoGraSm {
    fn shared_information(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        if !same_namespace(a, b) {
            return 0.0;
        }
        let disjoint_ancestors = self.common_disjoint_ancestors(a, b);
        if disjoint_ancestors.is_empty() {
            return 0.0;
        }
        let ontology = a.ontology();
        let sum: f32 = disjoint_ancestors
            .iter()
            .filter_map(|id| ontology.go(id))
            .map(|term| term.information_content().ic())
            .sum();
        sum / usize_to_f32(disjoint_ancestors.len())
    }
}
