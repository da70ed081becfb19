//! `govar` provides semantic similarity calculations on the Gene Ontology
//! and a thread-safe population store for genomic variant calls.
//!
//! The ontology side holds all GO terms in an [`Ontology`], links genes to
//! terms with upward propagation and derives per-term information content
//! from annotation frequencies. On top of that sit interchangeable
//! similarity algorithms ([`similarity`]) for term pairs and term sets.
//!
//! The genomic side ([`population`]) accumulates immutable [`population::Variant`]
//! records from concurrent workers into a population → genome → contig
//! hierarchy and answers filtered, read-only views for downstream statistics
//! ([`stats`]).
//!
//! # Examples
//!
//! ```
//! use govar::term::{Namespace, Relationship, RelationshipPolicy};
//! use govar::annotations::{AnnotationIndex, Evidence};
//! use govar::{GoTermId, Ontology};
//!
//! let mut ontology = Ontology::default();
//! let policy = RelationshipPolicy::default();
//!
//! let root = govar::BP_ROOT;
//! let child = GoTermId::from_u32(8152);
//!
//! ontology.insert_term(root, "biological_process", "", Namespace::BiologicalProcess);
//! ontology.insert_term(child, "metabolic process", "", Namespace::BiologicalProcess);
//! ontology.add_relationship(child, root, Relationship::IsA, &policy);
//! ontology.create_cache();
//!
//! let mut annotations = AnnotationIndex::default();
//! annotations.add_association("CFTR", child, Evidence::Exp);
//! ontology.annotate(&annotations).unwrap();
//! ontology.calculate_information_content().unwrap();
//!
//! let term = ontology.go(child).unwrap();
//! assert_eq!(term.name(), "metabolic process");
//! assert_eq!(term.information_content().probability(), 1.0);
//! ```
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

pub mod annotations;
pub mod matrix;
mod ontology;
pub mod population;
mod set;
pub mod similarity;
pub mod stats;
pub mod term;

pub use ontology::depth::TermDepthMap;
pub use ontology::{IcDiagnostics, Ontology};
pub use set::GoSet;
pub use similarity::Similarity;
pub use term::{GoTerm, GoTermId, Namespace, Relationship, RelationshipPolicy};

const DEFAULT_NUM_PARENTS: usize = 10;
const DEFAULT_NUM_ALL_PARENTS: usize = 50;
const DEFAULT_NUM_GENES: usize = 50;

/// Root term of the `biological_process` sub-ontology
pub const BP_ROOT: GoTermId = GoTermId::from_u32(8150);
/// Root term of the `molecular_function` sub-ontology
pub const MF_ROOT: GoTermId = GoTermId::from_u32(3674);
/// Root term of the `cellular_component` sub-ontology
pub const CC_ROOT: GoTermId = GoTermId::from_u32(5575);

/// Main Error type of the crate
///
/// Single-item misses (an unknown term or gene in a query) are not errors,
/// they yield `None`, empty containers or `0.0` instead. `GoError` is
/// reserved for whole-object failures.
#[derive(Error, Debug)]
pub enum GoError {
    /// The term does not exist in the ontology
    #[error("term does not exist")]
    DoesNotExist,
    /// The ontology contains no terms
    #[error("ontology contains no terms")]
    EmptyOntology,
    /// The relationship string is not an OBO relationship kind
    #[error("unknown relationship: {0}")]
    UnknownRelationship(String),
    /// The evidence code is not a GAF evidence code
    #[error("unknown evidence code: {0}")]
    UnknownEvidence(String),
    /// The namespace string is not a GO sub-ontology
    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),
    /// The accession does not follow the `GO:0000000` layout
    #[error("invalid term id: {0}")]
    InvalidTermId(String),
    /// More annotated genes than can be converted to `f32` without loss
    #[error("annotation count too large for IC calculation")]
    AnnotationOverflow,
    /// The study set is not drawn from the background set
    #[error("study set is not a subset of the background set")]
    InvalidSampleSet,
    /// Failed to parse an integer
    #[error("unable to parse Integer")]
    ParseIntError,
    /// Failed to parse a float
    #[error("unable to parse Float")]
    ParseFloatError,
    /// A similarity-matrix file does not match the expected layout
    #[error("malformed similarity matrix: {0}")]
    MatrixFormat(String),
    /// Failed to read or write a file
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParseIntError> for GoError {
    fn from(_: ParseIntError) -> Self {
        GoError::ParseIntError
    }
}

impl From<ParseFloatError> for GoError {
    fn from(_: ParseFloatError) -> Self {
        GoError::ParseFloatError
    }
}

/// Crate-wide Result type
pub type GoResult<T> = Result<T, GoError>;
