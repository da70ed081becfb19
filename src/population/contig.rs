use std::collections::BTreeMap;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::population::{Variant, VariantFilter};

/// Multiple calls at the same offset are rare, two haplotypes cover
/// almost every site.
type SiteCalls = SmallVec<[Arc<Variant>; 2]>;

/// All variants of one genome on one contig, ordered by offset
///
/// The contig level is plain single-threaded data, the surrounding
/// [`crate::population::GenomeDb`] wraps it in a lock.
#[derive(Clone, Debug, Default)]
pub struct ContigDb {
    name: String,
    variants: BTreeMap<u64, SiteCalls>,
}

impl ContigDb {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            variants: BTreeMap::new(),
        }
    }

    /// The contig name, e.g. `chr1`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn add(&mut self, variant: Arc<Variant>) {
        self.variants
            .entry(variant.offset())
            .or_default()
            .push(variant);
    }

    /// Number of stored variant calls
    pub fn variant_count(&self) -> usize {
        self.variants.values().map(SmallVec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterates all calls in offset order
    pub fn variants(&self) -> impl Iterator<Item = &Arc<Variant>> {
        self.variants.values().flat_map(|calls| calls.iter())
    }

    /// All calls at one offset, empty if the site has none
    pub fn at_offset(&self, offset: u64) -> &[Arc<Variant>] {
        self.variants
            .get(&offset)
            .map_or(&[], |calls| calls.as_slice())
    }

    /// Number of heterozygous calls
    pub fn heterozygous_site_count(&self) -> usize {
        self.variants()
            .filter(|variant| variant.zygosity().is_heterozygous())
            .count()
    }

    /// A new contig holding only the calls the filter accepts
    ///
    /// The calls themselves are shared with the source, not cloned.
    pub fn filter<F: VariantFilter + ?Sized>(&self, filter: &F) -> ContigDb {
        let mut filtered = ContigDb::new(&self.name);
        for variant in self.variants() {
            if filter.apply(variant) {
                filtered.add(Arc::clone(variant));
            }
        }
        filtered
    }
}
