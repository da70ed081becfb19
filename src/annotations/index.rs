use std::collections::HashMap;

use crate::annotations::Evidence;
use crate::{GoTermId, Namespace, Ontology};

/// A bidirectional gene ↔ term annotation index
///
/// Associations are stored twice, once per gene and once per term, so both
/// lookup directions are O(1). [`AnnotationIndex::integrity_check`]
/// verifies the two sides stayed in sync.
///
/// The index is the input for [`Ontology::annotate`].
#[derive(Debug, Default)]
pub struct AnnotationIndex {
    gene_ids: HashMap<String, usize>,
    gene_symbols: Vec<String>,
    term_ids: HashMap<GoTermId, usize>,
    term_list: Vec<GoTermId>,
    gene_annotations: Vec<(Vec<usize>, Vec<Evidence>)>,
    term_annotations: Vec<(Vec<usize>, Vec<Evidence>)>,
}

impl AnnotationIndex {
    fn gene_index(&mut self, symbol: &str) -> usize {
        match self.gene_ids.get(symbol) {
            Some(idx) => *idx,
            None => {
                let idx = self.gene_symbols.len();
                self.gene_ids.insert(symbol.to_string(), idx);
                self.gene_symbols.push(symbol.to_string());
                self.gene_annotations.push((Vec::new(), Vec::new()));
                idx
            }
        }
    }

    fn term_index(&mut self, term_id: GoTermId) -> usize {
        match self.term_ids.get(&term_id) {
            Some(idx) => *idx,
            None => {
                let idx = self.term_list.len();
                self.term_ids.insert(term_id, idx);
                self.term_list.push(term_id);
                self.term_annotations.push((Vec::new(), Vec::new()));
                idx
            }
        }
    }

    /// Records one gene → term association with its evidence code
    ///
    /// Duplicate associations are kept, GAF files legitimately list the
    /// same pair with different evidence.
    pub fn add_association<I: Into<GoTermId>>(
        &mut self,
        symbol: &str,
        term_id: I,
        evidence: Evidence,
    ) {
        let term_id = term_id.into();
        let gene_idx = self.gene_index(symbol);
        let term_idx = self.term_index(term_id);

        self.gene_annotations[gene_idx].0.push(term_idx);
        self.gene_annotations[gene_idx].1.push(evidence);
        self.term_annotations[term_idx].0.push(gene_idx);
        self.term_annotations[term_idx].1.push(evidence);
    }

    /// Number of distinct genes
    pub fn gene_count(&self) -> usize {
        self.gene_symbols.len()
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.term_list.len()
    }

    /// Number of recorded associations
    pub fn annotation_count(&self) -> usize {
        self.gene_annotations
            .iter()
            .map(|(terms, _)| terms.len())
            .sum()
    }

    /// All terms a gene is annotated to, empty for unknown genes
    pub fn terms_for_gene(&self, symbol: &str) -> Vec<GoTermId> {
        match self.gene_ids.get(symbol) {
            Some(idx) => self.gene_annotations[*idx]
                .0
                .iter()
                .map(|term_idx| self.term_list[*term_idx])
                .collect(),
            None => Vec::new(),
        }
    }

    /// All terms of one namespace a gene is annotated to
    pub fn terms_for_gene_in(
        &self,
        symbol: &str,
        namespace: Namespace,
        ontology: &Ontology,
    ) -> Vec<GoTermId> {
        self.terms_for_gene(symbol)
            .into_iter()
            .filter(|id| ontology.namespace(*id) == Some(namespace))
            .collect()
    }

    /// All gene symbols annotated to a term, empty for unknown terms
    pub fn genes_for_term<I: Into<GoTermId>>(&self, term_id: I) -> Vec<&str> {
        match self.term_ids.get(&term_id.into()) {
            Some(idx) => self.term_annotations[*idx]
                .0
                .iter()
                .map(|gene_idx| self.gene_symbols[*gene_idx].as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Iterates all recorded `(symbol, term, evidence)` triples
    pub fn associations(&self) -> impl Iterator<Item = (&str, GoTermId, Evidence)> + '_ {
        self.gene_annotations
            .iter()
            .enumerate()
            .flat_map(move |(gene_idx, (terms, evidence))| {
                terms.iter().zip(evidence.iter()).map(move |(term_idx, ev)| {
                    (
                        self.gene_symbols[gene_idx].as_str(),
                        self.term_list[*term_idx],
                        *ev,
                    )
                })
            })
    }

    /// Verifies that both lookup directions describe the same associations
    pub fn integrity_check(&self) -> bool {
        if self.gene_ids.len() != self.gene_symbols.len()
            || self.gene_symbols.len() != self.gene_annotations.len()
        {
            return false;
        }
        if self.term_ids.len() != self.term_list.len()
            || self.term_list.len() != self.term_annotations.len()
        {
            return false;
        }
        for (terms, evidence) in &self.gene_annotations {
            if terms.len() != evidence.len() {
                return false;
            }
        }
        for (genes, evidence) in &self.term_annotations {
            if genes.len() != evidence.len() {
                return false;
            }
        }
        for (gene_idx, (terms, _)) in self.gene_annotations.iter().enumerate() {
            for term_idx in terms {
                if *term_idx >= self.term_annotations.len() {
                    return false;
                }
                if !self.term_annotations[*term_idx].0.contains(&gene_idx) {
                    return false;
                }
            }
        }
        for (term_idx, (genes, _)) in self.term_annotations.iter().enumerate() {
            for gene_idx in genes {
                if *gene_idx >= self.gene_annotations.len() {
                    return false;
                }
                if !self.gene_annotations[*gene_idx].0.contains(&term_idx) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn small_index() -> AnnotationIndex {
        let mut index = AnnotationIndex::default();
        index.add_association("CFTR", 8150u32, Evidence::Exp);
        index.add_association("CFTR", 8152u32, Evidence::Ida);
        index.add_association("BRCA2", 8150u32, Evidence::Iea);
        index
    }

    #[test]
    fn both_directions_agree() {
        let index = small_index();
        assert_eq!(index.gene_count(), 2);
        assert_eq!(index.term_count(), 2);
        assert_eq!(index.annotation_count(), 3);

        assert_eq!(
            index.terms_for_gene("CFTR"),
            vec![8150u32.into(), 8152u32.into()]
        );
        assert_eq!(index.genes_for_term(8150u32), vec!["CFTR", "BRCA2"]);
        assert!(index.terms_for_gene("TP53").is_empty());
        assert!(index.genes_for_term(9987u32).is_empty());
    }

    #[test]
    fn association_iterator() {
        let index = small_index();
        let all: Vec<_> = index.associations().collect();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&("BRCA2", 8150u32.into(), Evidence::Iea)));
    }

    #[test]
    fn integrity_check_catches_desync() {
        let mut index = small_index();
        assert!(index.integrity_check());

        // drop one side of an association
        index.term_annotations[0].0.pop();
        index.term_annotations[0].1.pop();
        assert!(!index.integrity_check());
    }
}
