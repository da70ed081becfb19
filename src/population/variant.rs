use std::fmt::Display;

/// Haplotype assignment of a phased variant call
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Phase {
    /// The call is not phased
    #[default]
    Unphased,
    /// The call lies on the first haplotype
    HaplotypeA,
    /// The call lies on the second haplotype
    HaplotypeB,
}

impl Phase {
    pub fn is_phased(self) -> bool {
        match self {
            Phase::Unphased => false,
            Phase::HaplotypeA | Phase::HaplotypeB => true,
        }
    }
}

/// Genotype of a variant call in a diploid genome
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Zygosity {
    /// The genotype was not called
    #[default]
    Unknown,
    /// Both alleles match the reference
    HomozygousReference,
    /// One allele carries the alternate
    Heterozygous,
    /// Both alleles carry the alternate
    HomozygousAlternate,
}

impl Zygosity {
    pub fn is_heterozygous(self) -> bool {
        match self {
            Zygosity::Heterozygous => true,
            Zygosity::Unknown | Zygosity::HomozygousReference | Zygosity::HomozygousAlternate => {
                false
            }
        }
    }

    pub fn is_homozygous(self) -> bool {
        match self {
            Zygosity::HomozygousReference | Zygosity::HomozygousAlternate => true,
            Zygosity::Unknown | Zygosity::Heterozygous => false,
        }
    }
}

/// Optional caller evidence attached to a variant
#[derive(Clone, Debug, Default)]
pub struct VariantEvidence {
    read_depth: Option<u32>,
    alt_count: Option<u32>,
    info: Option<String>,
}

impl VariantEvidence {
    pub fn new(read_depth: Option<u32>, alt_count: Option<u32>, info: Option<String>) -> Self {
        Self {
            read_depth,
            alt_count,
            info,
        }
    }

    /// Total reads covering the site
    pub fn read_depth(&self) -> Option<u32> {
        self.read_depth
    }

    /// Reads supporting the alternate allele
    pub fn alt_count(&self) -> Option<u32> {
        self.alt_count
    }

    /// Free-form caller annotation, e.g. the INFO column of a VCF record
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }
}

/// One immutable variant call
///
/// Variants are built once and then shared between genomes behind an
/// `Arc`, they never change after construction. Optional attributes are
/// set through the `with_*` builder methods.
#[derive(Clone, Debug)]
pub struct Variant {
    contig: String,
    offset: u64,
    reference: String,
    alternate: String,
    phase: Phase,
    zygosity: Zygosity,
    evidence: VariantEvidence,
    filter_pass: bool,
}

impl Variant {
    pub fn new(contig: &str, offset: u64, reference: &str, alternate: &str) -> Self {
        Self {
            contig: contig.to_string(),
            offset,
            reference: reference.to_string(),
            alternate: alternate.to_string(),
            phase: Phase::default(),
            zygosity: Zygosity::default(),
            evidence: VariantEvidence::default(),
            filter_pass: true,
        }
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_zygosity(mut self, zygosity: Zygosity) -> Self {
        self.zygosity = zygosity;
        self
    }

    pub fn with_evidence(mut self, evidence: VariantEvidence) -> Self {
        self.evidence = evidence;
        self
    }

    pub fn with_filter_pass(mut self, filter_pass: bool) -> Self {
        self.filter_pass = filter_pass;
        self
    }

    /// The contig the variant lies on, e.g. `chr1`
    pub fn contig(&self) -> &str {
        &self.contig
    }

    /// 0-based offset of the first reference base
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The reference allele
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The alternate allele
    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn zygosity(&self) -> Zygosity {
        self.zygosity
    }

    pub fn evidence(&self) -> &VariantEvidence {
        &self.evidence
    }

    /// Whether the caller marked the variant as PASS
    pub fn filter_pass(&self) -> bool {
        self.filter_pass
    }

    /// Both alleles are single bases
    pub fn is_snv(&self) -> bool {
        self.reference.len() == 1 && self.alternate.len() == 1
    }

    /// Length change introduced by the variant, negative for deletions
    pub fn size_difference(&self) -> i64 {
        self.alternate.len() as i64 - self.reference.len() as i64
    }

    /// An indel whose length change is not a multiple of three
    pub fn is_frameshift(&self) -> bool {
        self.size_difference() % 3 != 0
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {}>{}",
            self.contig, self.offset, self.reference, self.alternate
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn snv_classification() {
        let snv = Variant::new("chr1", 100, "A", "T");
        assert!(snv.is_snv());
        assert_eq!(snv.size_difference(), 0);
        assert!(!snv.is_frameshift());

        let insertion = Variant::new("chr1", 100, "A", "ATT");
        assert!(!insertion.is_snv());
        assert_eq!(insertion.size_difference(), 2);
        assert!(insertion.is_frameshift());

        let in_frame_deletion = Variant::new("chr1", 100, "ACGT", "A");
        assert_eq!(in_frame_deletion.size_difference(), -3);
        assert!(!in_frame_deletion.is_frameshift());
    }

    #[test]
    fn builder_defaults() {
        let variant = Variant::new("chr1", 100, "A", "T");
        assert_eq!(variant.phase(), Phase::Unphased);
        assert_eq!(variant.zygosity(), Zygosity::Unknown);
        assert!(variant.filter_pass());
        assert!(variant.evidence().read_depth().is_none());

        let variant = variant
            .with_phase(Phase::HaplotypeA)
            .with_zygosity(Zygosity::Heterozygous)
            .with_evidence(VariantEvidence::new(Some(30), Some(14), None))
            .with_filter_pass(false);
        assert!(variant.phase().is_phased());
        assert!(variant.zygosity().is_heterozygous());
        assert!(!variant.filter_pass());
        assert_eq!(variant.evidence().read_depth(), Some(30));
    }

    #[test]
    fn zygosity_predicates() {
        assert!(!Zygosity::Unknown.is_heterozygous());
        assert!(!Zygosity::Unknown.is_homozygous());
        assert!(Zygosity::HomozygousReference.is_homozygous());
        assert!(Zygosity::HomozygousAlternate.is_homozygous());
        assert!(!Zygosity::Heterozygous.is_homozygous());
    }

    #[test]
    fn display() {
        let variant = Variant::new("chr2", 1234, "AC", "A");
        assert_eq!(variant.to_string(), "chr2:1234 AC>A");
    }
}
