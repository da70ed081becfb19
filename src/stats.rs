//! Statistics on top of the ontology and the population store
//!
//! [`hypergeom`] answers which terms are over-represented in a gene set,
//! [`inbreeding`] derives inbreeding coefficients from heterozygosity in
//! the variant store.

use std::collections::HashMap;
use std::hash::Hash;

use crate::annotations::Gene;
use crate::{GoError, GoResult, GoTermId, Ontology};

pub mod hypergeom;
pub mod inbreeding;

pub(crate) fn f64_from_u64(n: u64) -> GoResult<f64> {
    let small: u32 = n.try_into().map_err(|_| GoError::AnnotationOverflow)?;
    Ok(f64::from(small))
}

pub(crate) fn f64_from_usize(n: usize) -> GoResult<f64> {
    let small: u32 = n.try_into().map_err(|_| GoError::AnnotationOverflow)?;
    Ok(f64::from(small))
}

/// Occurrence counts of items in a sample, e.g. terms in a gene set
#[derive(Clone, Debug)]
pub struct SampleSet<T> {
    samples: HashMap<T, u64>,
    total: u64,
}

impl<T: Hash + Eq> SampleSet<T> {
    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the sample the counts were taken from
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The count of one item, `None` if it never occurred
    pub fn get(&self, item: &T) -> Option<u64> {
        self.samples.get(item).copied()
    }

    /// Returns an iterator of `(item, count)` pairs
    pub fn counts(&self) -> Counts<'_, T> {
        Counts {
            inner: self.samples.iter(),
        }
    }
}

impl SampleSet<GoTermId> {
    /// Counts, for every term, how many genes of the sample are annotated
    /// to it or one of its descendants
    pub fn terms<'a, I: IntoIterator<Item = &'a Gene>>(genes: I, ontology: &Ontology) -> Self {
        let mut samples: HashMap<GoTermId, u64> = HashMap::new();
        let mut total = 0;
        for gene in genes {
            total += 1;
            for term_id in &ontology.extended_term_set(gene.terms()) {
                *samples.entry(term_id).or_default() += 1;
            }
        }
        Self { samples, total }
    }
}

/// An iterator of `(item, count)` pairs of a [`SampleSet`]
pub struct Counts<'a, T> {
    inner: std::collections::hash_map::Iter<'a, T, u64>,
}

impl<'a, T> Iterator for Counts<'a, T> {
    type Item = (&'a T, u64);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(item, count)| (item, *count))
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a SampleSet<T> {
    type Item = (&'a T, u64);
    type IntoIter = Counts<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.counts()
    }
}

/// Over-representation of one item in a sample compared to the background
#[derive(Clone, Copy, Debug)]
pub struct Enrichment<T> {
    id: T,
    count: u64,
    pvalue: f64,
    enrichment: f64,
}

impl<T> Enrichment<T> {
    pub(crate) fn new(id: T, count: u64, pvalue: f64, enrichment: f64) -> Self {
        Self {
            id,
            count,
            pvalue,
            enrichment,
        }
    }

    /// The enriched item
    pub fn id(&self) -> &T {
        &self.id
    }

    /// Occurrences of the item in the sample
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Hypergeometric p-value of seeing at least this many occurrences
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// Fold change of the sample frequency over the background frequency
    pub fn enrichment(&self) -> f64 {
        self.enrichment
    }
}
