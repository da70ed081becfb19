use crate::population::{Phase, Variant};

/// A predicate over [`Variant`]s
///
/// Filters must be `Send + Sync` so filtered views can be built from
/// concurrent workers. The provided combinators build composite filters
/// without boxing the closure-style leaf filters.
pub trait VariantFilter: Send + Sync {
    fn apply(&self, variant: &Variant) -> bool;

    /// Both filters must match
    fn and<F: VariantFilter + Sized>(self, other: F) -> AndFilter<Self, F>
    where
        Self: Sized,
    {
        AndFilter {
            left: self,
            right: other,
        }
    }

    /// Either filter must match
    fn or<F: VariantFilter + Sized>(self, other: F) -> OrFilter<Self, F>
    where
        Self: Sized,
    {
        OrFilter {
            left: self,
            right: other,
        }
    }

    /// Inverts the filter
    fn not(self) -> NotFilter<Self>
    where
        Self: Sized,
    {
        NotFilter { inner: self }
    }
}

/// Conjunction of two filters, see [`VariantFilter::and`]
pub struct AndFilter<L, R> {
    left: L,
    right: R,
}

impl<L: VariantFilter, R: VariantFilter> VariantFilter for AndFilter<L, R> {
    fn apply(&self, variant: &Variant) -> bool {
        self.left.apply(variant) && self.right.apply(variant)
    }
}

/// Disjunction of two filters, see [`VariantFilter::or`]
pub struct OrFilter<L, R> {
    left: L,
    right: R,
}

impl<L: VariantFilter, R: VariantFilter> VariantFilter for OrFilter<L, R> {
    fn apply(&self, variant: &Variant) -> bool {
        self.left.apply(variant) || self.right.apply(variant)
    }
}

/// Negation of a filter, see [`VariantFilter::not`]
pub struct NotFilter<F> {
    inner: F,
}

impl<F: VariantFilter> VariantFilter for NotFilter<F> {
    fn apply(&self, variant: &Variant) -> bool {
        !self.inner.apply(variant)
    }
}

/// Keeps variants of one [`Phase`]
pub struct PhaseFilter {
    phase: Phase,
}

impl PhaseFilter {
    pub fn new(phase: Phase) -> Self {
        Self { phase }
    }
}

impl VariantFilter for PhaseFilter {
    fn apply(&self, variant: &Variant) -> bool {
        variant.phase() == self.phase
    }
}

/// Keeps variants whose caller annotation contains a substring
pub struct InfoFilter {
    needle: String,
}

impl InfoFilter {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_string(),
        }
    }
}

impl VariantFilter for InfoFilter {
    fn apply(&self, variant: &Variant) -> bool {
        variant
            .evidence()
            .info()
            .is_some_and(|info| info.contains(&self.needle))
    }
}

/// Keeps homozygous variants
pub struct HomozygousFilter;

impl VariantFilter for HomozygousFilter {
    fn apply(&self, variant: &Variant) -> bool {
        variant.zygosity().is_homozygous()
    }
}

/// Keeps variants covered by at least `min_depth` reads
///
/// Variants without a recorded read depth never match.
pub struct DepthFilter {
    min_depth: u32,
}

impl DepthFilter {
    pub fn new(min_depth: u32) -> Self {
        Self { min_depth }
    }
}

impl VariantFilter for DepthFilter {
    fn apply(&self, variant: &Variant) -> bool {
        variant
            .evidence()
            .read_depth()
            .is_some_and(|depth| depth >= self.min_depth)
    }
}

/// Keeps variants supported by at least `min_count` alternate reads
pub struct AlleleCountFilter {
    min_count: u32,
}

impl AlleleCountFilter {
    pub fn new(min_count: u32) -> Self {
        Self { min_count }
    }
}

impl VariantFilter for AlleleCountFilter {
    fn apply(&self, variant: &Variant) -> bool {
        variant
            .evidence()
            .alt_count()
            .is_some_and(|count| count >= self.min_count)
    }
}

/// Keeps frameshift indels
pub struct FrameshiftFilter;

impl VariantFilter for FrameshiftFilter {
    fn apply(&self, variant: &Variant) -> bool {
        variant.is_frameshift()
    }
}

/// Keeps variants the caller marked as PASS
pub struct PassFilter;

impl VariantFilter for PassFilter {
    fn apply(&self, variant: &Variant) -> bool {
        variant.filter_pass()
    }
}
