//! A thread-safe population → genome → contig store for variant calls
//!
//! Workers parsing call sets in parallel push immutable [`Variant`]s into
//! a shared [`PopulationDb`] through `&self` methods. Reads never block
//! each other and filtered views ([`PopulationDb::filter_variants`])
//! leave the source store untouched.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::warn;

mod contig;
mod filter;
mod genome;
mod variant;

pub use contig::ContigDb;
pub use filter::{
    AlleleCountFilter, AndFilter, DepthFilter, FrameshiftFilter, HomozygousFilter, InfoFilter,
    NotFilter, OrFilter, PassFilter, PhaseFilter, VariantFilter,
};
pub use genome::GenomeDb;
pub use variant::{Phase, Variant, VariantEvidence, Zygosity};

/// Variant calls of a whole cohort, one [`GenomeDb`] per sample
///
/// A variant shared by several genomes is stored once and referenced by
/// all of them. The store can either accept any genome name on demand
/// ([`PopulationDb::new`]) or be restricted to a known sample sheet
/// ([`PopulationDb::with_samples`]).
#[derive(Debug)]
pub struct PopulationDb {
    id: String,
    expected: Option<HashSet<String>>,
    genomes: RwLock<HashMap<String, Arc<GenomeDb>>>,
}

impl PopulationDb {
    /// An open population that creates genomes as their names appear
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            expected: None,
            genomes: RwLock::new(HashMap::new()),
        }
    }

    /// A population restricted to a fixed set of samples
    ///
    /// All genomes are created up front, so they are present even if no
    /// variant is ever recorded for them. Variants for names outside the
    /// sample sheet are logged and dropped.
    pub fn with_samples(id: &str, samples: &[&str]) -> Self {
        let mut genomes = HashMap::with_capacity(samples.len());
        let mut expected = HashSet::with_capacity(samples.len());
        for sample in samples {
            expected.insert((*sample).to_string());
            genomes.insert((*sample).to_string(), Arc::new(GenomeDb::new(sample)));
        }
        Self {
            id: id.to_string(),
            expected: Some(expected),
            genomes: RwLock::new(genomes),
        }
    }

    /// The population identifier, e.g. a cohort name
    pub fn id(&self) -> &str {
        &self.id
    }

    fn get_or_create_genome(&self, name: &str) -> Option<Arc<GenomeDb>> {
        {
            let genomes = self
                .genomes
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(genome) = genomes.get(name) {
                return Some(Arc::clone(genome));
            }
        }
        if let Some(expected) = &self.expected {
            if !expected.contains(name) {
                return None;
            }
        }
        let mut genomes = self
            .genomes
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Some(Arc::clone(
            genomes
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(GenomeDb::new(name))),
        ))
    }

    /// Records one variant call for every listed genome
    ///
    /// The call is stored once and shared. Genome names outside a fixed
    /// sample sheet are skipped with a warning, the remaining genomes
    /// still receive the variant.
    pub fn add_variant<S: AsRef<str>>(&self, variant: Arc<Variant>, genome_ids: &[S]) {
        for genome_id in genome_ids {
            let genome_id = genome_id.as_ref();
            match self.get_or_create_genome(genome_id) {
                Some(genome) => genome.add_variant(Arc::clone(&variant)),
                None => {
                    warn!("genome {genome_id} is not part of population {}", self.id);
                }
            }
        }
    }

    /// The genome of the given name
    pub fn genome(&self, name: &str) -> Option<Arc<GenomeDb>> {
        self.genomes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(Arc::clone)
    }

    /// The names of all genomes, sorted
    pub fn genome_ids(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .genomes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Number of variant calls across all genomes
    ///
    /// A call shared by several genomes is counted once per genome.
    pub fn variant_count(&self) -> usize {
        self.genomes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|genome| genome.variant_count())
            .sum()
    }

    /// A new population holding only the calls the filter accepts
    ///
    /// Genomes are kept even if all their calls are filtered away, so the
    /// cohort layout stays comparable. The source store is not modified.
    pub fn filter_variants<F: VariantFilter + ?Sized>(&self, filter: &F) -> PopulationDb {
        let genomes = self
            .genomes
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut filtered_genomes = HashMap::with_capacity(genomes.len());
        for (name, genome) in genomes.iter() {
            filtered_genomes.insert(name.clone(), Arc::new(genome.filter(filter)));
        }
        PopulationDb {
            id: self.id.clone(),
            expected: self.expected.clone(),
            genomes: RwLock::new(filtered_genomes),
        }
    }

    /// All matching calls of one genome, without building a new store
    pub fn view_filter<F: VariantFilter + ?Sized>(
        &self,
        genome_id: &str,
        filter: &F,
    ) -> Vec<Arc<Variant>> {
        match self.genome(genome_id) {
            Some(genome) => genome.collect_filtered(filter),
            None => Vec::new(),
        }
    }

    /// All matching calls across the population, grouped by genome
    ///
    /// Genomes appear in name order, genomes without a matching call are
    /// omitted. Like [`PopulationDb::view_filter`], this is a snapshot
    /// and does not build a new store.
    pub fn view_filter_all<F: VariantFilter + ?Sized>(
        &self,
        filter: &F,
    ) -> Vec<(String, Vec<Arc<Variant>>)> {
        let genomes = self
            .genomes
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut matches: Vec<(String, Vec<Arc<Variant>>)> = genomes
            .iter()
            .map(|(name, genome)| (name.clone(), genome.collect_filtered(filter)))
            .filter(|(_, calls)| !calls.is_empty())
            .collect();
        matches.sort_by(|a, b| a.0.cmp(&b.0));
        matches
    }
}
