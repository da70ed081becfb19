//! Genes, evidence codes and the gene ↔ term annotation index
//!
//! Annotations enter the crate through an [`AnnotationIndex`], which
//! [`crate::Ontology::annotate`] then propagates up the graph so that
//! every term knows all genes annotated to it or any of its descendants.

mod evidence;
mod gene;
mod index;

pub use evidence::Evidence;
pub use gene::{Gene, GeneId, GeneIterator, Genes};
pub use index::AnnotationIndex;
