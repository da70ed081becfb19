use std::fmt::Display;

use crate::{GoError, GoResult};

/// GAF evidence code of a gene annotation
///
/// The variants cover the full GO evidence vocabulary. Most analyses only
/// care about the broad class, see [`Evidence::is_experimental`] and
/// [`Evidence::is_computational`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Evidence {
    /// Inferred from experiment
    Exp,
    /// Inferred from direct assay
    Ida,
    /// Inferred from physical interaction
    Ipi,
    /// Inferred from mutant phenotype
    Imp,
    /// Inferred from genetic interaction
    Igi,
    /// Inferred from expression pattern
    Iep,
    /// Inferred from high throughput experiment
    Htp,
    /// Inferred from high throughput direct assay
    Hda,
    /// Inferred from high throughput mutant phenotype
    Hmp,
    /// Inferred from high throughput genetic interaction
    Hgi,
    /// Inferred from high throughput expression pattern
    Hep,
    /// Inferred from biological aspect of ancestor
    Iba,
    /// Inferred from biological aspect of descendant
    Ibd,
    /// Inferred from key residues
    Ikr,
    /// Inferred from rapid divergence
    Ird,
    /// Inferred from sequence or structural similarity
    Iss,
    /// Inferred from sequence orthology
    Iso,
    /// Inferred from sequence alignment
    Isa,
    /// Inferred from sequence model
    Ism,
    /// Inferred from genomic context
    Igc,
    /// Inferred from reviewed computational analysis
    Rca,
    /// Traceable author statement
    Tas,
    /// Non-traceable author statement
    Nas,
    /// Inferred by curator
    Ic,
    /// No biological data available
    Nd,
    /// Inferred from electronic annotation
    Iea,
}

impl Evidence {
    /// Experimental and high-throughput experimental evidence
    pub fn is_experimental(self) -> bool {
        matches!(
            self,
            Evidence::Exp
                | Evidence::Ida
                | Evidence::Ipi
                | Evidence::Imp
                | Evidence::Igi
                | Evidence::Iep
                | Evidence::Htp
                | Evidence::Hda
                | Evidence::Hmp
                | Evidence::Hgi
                | Evidence::Hep
        )
    }

    /// Phylogenetically or computationally inferred evidence
    pub fn is_computational(self) -> bool {
        matches!(
            self,
            Evidence::Iba
                | Evidence::Ibd
                | Evidence::Ikr
                | Evidence::Ird
                | Evidence::Iss
                | Evidence::Iso
                | Evidence::Isa
                | Evidence::Ism
                | Evidence::Igc
                | Evidence::Rca
                | Evidence::Iea
        )
    }

    /// The GAF spelling of the code
    pub fn as_str(self) -> &'static str {
        match self {
            Evidence::Exp => "EXP",
            Evidence::Ida => "IDA",
            Evidence::Ipi => "IPI",
            Evidence::Imp => "IMP",
            Evidence::Igi => "IGI",
            Evidence::Iep => "IEP",
            Evidence::Htp => "HTP",
            Evidence::Hda => "HDA",
            Evidence::Hmp => "HMP",
            Evidence::Hgi => "HGI",
            Evidence::Hep => "HEP",
            Evidence::Iba => "IBA",
            Evidence::Ibd => "IBD",
            Evidence::Ikr => "IKR",
            Evidence::Ird => "IRD",
            Evidence::Iss => "ISS",
            Evidence::Iso => "ISO",
            Evidence::Isa => "ISA",
            Evidence::Ism => "ISM",
            Evidence::Igc => "IGC",
            Evidence::Rca => "RCA",
            Evidence::Tas => "TAS",
            Evidence::Nas => "NAS",
            Evidence::Ic => "IC",
            Evidence::Nd => "ND",
            Evidence::Iea => "IEA",
        }
    }
}

impl TryFrom<&str> for Evidence {
    type Error = GoError;
    fn try_from(s: &str) -> GoResult<Self> {
        match s {
            "EXP" => Ok(Evidence::Exp),
            "IDA" => Ok(Evidence::Ida),
            "IPI" => Ok(Evidence::Ipi),
            "IMP" => Ok(Evidence::Imp),
            "IGI" => Ok(Evidence::Igi),
            "IEP" => Ok(Evidence::Iep),
            "HTP" => Ok(Evidence::Htp),
            "HDA" => Ok(Evidence::Hda),
            "HMP" => Ok(Evidence::Hmp),
            "HGI" => Ok(Evidence::Hgi),
            "HEP" => Ok(Evidence::Hep),
            "IBA" => Ok(Evidence::Iba),
            "IBD" => Ok(Evidence::Ibd),
            "IKR" => Ok(Evidence::Ikr),
            "IRD" => Ok(Evidence::Ird),
            "ISS" => Ok(Evidence::Iss),
            "ISO" => Ok(Evidence::Iso),
            "ISA" => Ok(Evidence::Isa),
            "ISM" => Ok(Evidence::Ism),
            "IGC" => Ok(Evidence::Igc),
            "RCA" => Ok(Evidence::Rca),
            "TAS" => Ok(Evidence::Tas),
            "NAS" => Ok(Evidence::Nas),
            "IC" => Ok(Evidence::Ic),
            "ND" => Ok(Evidence::Nd),
            "IEA" => Ok(Evidence::Iea),
            _ => Err(GoError::UnknownEvidence(s.to_string())),
        }
    }
}

impl Display for Evidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!(Evidence::try_from("EXP").unwrap(), Evidence::Exp);
        assert_eq!(Evidence::try_from("IEA").unwrap(), Evidence::Iea);
        assert!(Evidence::try_from("exp").is_err());
        assert!(Evidence::try_from("XXX").is_err());
    }

    #[test]
    fn broad_classes_are_disjoint() {
        for code in ["EXP", "HDA", "IBA", "IEA", "TAS", "ND", "IC"] {
            let evidence = Evidence::try_from(code).unwrap();
            assert!(!(evidence.is_experimental() && evidence.is_computational()));
        }
    }
}
