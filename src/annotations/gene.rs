use std::collections::hash_set::Iter;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::set::GoSet;
use crate::term::GoGroup;
use crate::{GoTermId, Namespace, Ontology};

/// A set of [`GeneId`]s, as attached to every term
pub type Genes = HashSet<GeneId>;

/// A unique, ontology-internal identifier of a gene
///
/// Ids are handed out sequentially while genes are added, so they are
/// only meaningful within the [`Ontology`] that created them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GeneId {
    inner: u32,
}

impl GeneId {
    pub fn as_u32(self) -> u32 {
        self.inner
    }
}

impl From<u32> for GeneId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Display for GeneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gene:{}", self.inner)
    }
}

/// A gene together with its directly annotated terms
#[derive(Clone, Debug)]
pub struct Gene {
    id: GeneId,
    symbol: String,
    terms: GoGroup,
}

impl Gene {
    pub fn new(id: GeneId, symbol: &str) -> Self {
        Self {
            id,
            symbol: symbol.to_string(),
            terms: GoGroup::new(),
        }
    }

    /// Returns the [`GeneId`] of the gene
    pub fn id(&self) -> GeneId {
        self.id
    }

    /// Returns the gene symbol, e.g. `CFTR`
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the ids of the directly annotated terms
    ///
    /// The group holds the annotations as recorded, ancestors are not
    /// included. Use [`Gene::to_set`] for similarity comparisons.
    pub fn terms(&self) -> &GoGroup {
        &self.terms
    }

    pub fn add_term<I: Into<GoTermId>>(&mut self, term_id: I) {
        self.terms.insert(term_id);
    }

    /// Returns the ids of the directly annotated terms of one namespace
    pub fn terms_in(&self, namespace: Namespace, ontology: &Ontology) -> GoGroup {
        self.terms
            .iter()
            .filter(|id| ontology.namespace(*id) == Some(namespace))
            .collect()
    }

    /// Returns the gene's annotations as a [`GoSet`] for set comparisons
    pub fn to_set<'a>(&self, ontology: &'a Ontology) -> GoSet<'a> {
        GoSet::new(ontology, self.terms.clone())
    }
}

impl PartialEq for Gene {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Gene {}

impl Hash for Gene {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// An iterator of [`Gene`]s
pub struct GeneIterator<'a> {
    ontology: &'a Ontology,
    genes: Iter<'a, GeneId>,
}

impl<'a> GeneIterator<'a> {
    pub(crate) fn new(genes: &'a Genes, ontology: &'a Ontology) -> Self {
        GeneIterator {
            genes: genes.iter(),
            ontology,
        }
    }
}

impl<'a> Iterator for GeneIterator<'a> {
    type Item = &'a Gene;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.genes.next() {
                Some(gene_id) => {
                    if let Some(gene) = self.ontology.gene(gene_id) {
                        return Some(gene);
                    }
                }
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gene_equality_is_by_id() {
        let gene_a = Gene::new(1u32.into(), "CFTR");
        let mut gene_b = Gene::new(1u32.into(), "CFTR");
        gene_b.add_term(8150u32);
        assert_eq!(gene_a, gene_b);
    }

    #[test]
    fn add_term_deduplicates() {
        let mut gene = Gene::new(1u32.into(), "CFTR");
        gene.add_term(8150u32);
        gene.add_term(8150u32);
        assert_eq!(gene.terms().len(), 1);
    }
}
