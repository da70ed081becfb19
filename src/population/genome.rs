use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::population::{ContigDb, Variant, VariantFilter};

/// All variants of one genome, sharded by contig
///
/// Each contig sits behind its own lock, so workers streaming different
/// contigs of the same genome do not contend. A poisoned lock is
/// recovered by taking the inner value, the store never propagates
/// another thread's panic.
#[derive(Debug, Default)]
pub struct GenomeDb {
    id: String,
    contigs: RwLock<HashMap<String, Arc<RwLock<ContigDb>>>>,
}

impl GenomeDb {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            contigs: RwLock::new(HashMap::new()),
        }
    }

    /// The genome identifier, e.g. a sample name like `HG002`
    pub fn id(&self) -> &str {
        &self.id
    }

    fn get_or_create_contig(&self, name: &str) -> Arc<RwLock<ContigDb>> {
        // fast path, the contig usually exists already
        {
            let contigs = self
                .contigs
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(contig) = contigs.get(name) {
                return Arc::clone(contig);
            }
        }
        let mut contigs = self
            .contigs
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            contigs
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(RwLock::new(ContigDb::new(name)))),
        )
    }

    /// Stores one variant call under its contig
    pub fn add_variant(&self, variant: Arc<Variant>) {
        let contig = self.get_or_create_contig(variant.contig());
        contig
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add(variant);
    }

    /// The contig of the given name, `None` if no variant mentioned it yet
    pub fn contig(&self, name: &str) -> Option<Arc<RwLock<ContigDb>>> {
        self.contigs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(Arc::clone)
    }

    /// The names of all contigs with at least one variant, sorted
    pub fn contig_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .contigs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Number of variant calls across all contigs
    pub fn variant_count(&self) -> usize {
        self.contigs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|contig| {
                contig
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .variant_count()
            })
            .sum()
    }

    /// Number of heterozygous calls across all contigs
    pub fn heterozygous_site_count(&self) -> usize {
        self.contigs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|contig| {
                contig
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .heterozygous_site_count()
            })
            .sum()
    }

    /// A new genome holding only the calls the filter accepts
    pub fn filter<F: VariantFilter + ?Sized>(&self, filter: &F) -> GenomeDb {
        let filtered = GenomeDb::new(&self.id);
        let contigs = self
            .contigs
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut filtered_contigs = filtered
            .contigs
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for (name, contig) in contigs.iter() {
            let kept = contig
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .filter(filter);
            if !kept.is_empty() {
                filtered_contigs.insert(name.clone(), Arc::new(RwLock::new(kept)));
            }
        }
        drop(filtered_contigs);
        filtered
    }

    /// All calls the filter accepts, in contig name and offset order
    pub(crate) fn collect_filtered<F: VariantFilter + ?Sized>(
        &self,
        filter: &F,
    ) -> Vec<Arc<Variant>> {
        let mut matches = Vec::new();
        for name in self.contig_names() {
            if let Some(contig) = self.contig(&name) {
                let contig = contig.read().unwrap_or_else(PoisonError::into_inner);
                for variant in contig.variants() {
                    if filter.apply(variant) {
                        matches.push(Arc::clone(variant));
                    }
                }
            }
        }
        matches
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::population::{PassFilter, Zygosity};

    fn genome() -> GenomeDb {
        let genome = GenomeDb::new("HG002");
        genome.add_variant(Arc::new(
            Variant::new("chr2", 50, "G", "GA").with_zygosity(Zygosity::Heterozygous),
        ));
        genome.add_variant(Arc::new(Variant::new("chr1", 100, "A", "T")));
        genome.add_variant(Arc::new(
            Variant::new("chr1", 200, "C", "G").with_filter_pass(false),
        ));
        genome
    }

    #[test]
    fn variants_are_sharded_by_contig() {
        let genome = genome();
        assert_eq!(genome.id(), "HG002");
        assert_eq!(genome.variant_count(), 3);
        assert_eq!(genome.contig_names(), vec!["chr1", "chr2"]);
        assert_eq!(genome.heterozygous_site_count(), 1);
        assert!(genome.contig("chrX").is_none());

        let chr1 = genome.contig("chr1").unwrap();
        assert_eq!(chr1.read().unwrap().variant_count(), 2);
    }

    #[test]
    fn filter_copies_nothing_and_drops_empty_contigs() {
        let genome = genome();
        let passing = genome.filter(&PassFilter);
        assert_eq!(passing.variant_count(), 2);
        assert_eq!(genome.variant_count(), 3);

        let none = genome.filter(&PassFilter.not());
        assert_eq!(none.contig_names(), vec!["chr1"]);
    }

    #[test]
    fn collect_filtered_is_ordered() {
        let genome = genome();
        let all = genome.collect_filtered(&PassFilter);
        let keys: Vec<(String, u64)> = all
            .iter()
            .map(|variant| (variant.contig().to_string(), variant.offset()))
            .collect();
        assert_eq!(keys, vec![("chr1".to_string(), 100), ("chr2".to_string(), 50)]);
    }
}
