use govar::annotations::{AnnotationIndex, Evidence};
use govar::term::{Relationship, RelationshipPolicy};
use govar::{GoTermId, Namespace, Ontology, BP_ROOT, MF_ROOT};

pub const TERM_A: GoTermId = GoTermId::from_u32(8152);
pub const TERM_B: GoTermId = GoTermId::from_u32(9987);
pub const TERM_C: GoTermId = GoTermId::from_u32(6810);
pub const TERM_MF: GoTermId = GoTermId::from_u32(3824);

/// A small annotated ontology with known probabilities
///
/// `biological_process` holds a root R with children A and B, and C below
/// A. Ten genes are annotated so that p(C) = 0.2, p(A) = 0.6, p(B) = 0.4
/// and p(R) = 1.0. A single `molecular_function` term exists for
/// cross-namespace checks.
pub fn test_ontology() -> Ontology {
    let mut ontology = Ontology::default();
    let policy = RelationshipPolicy::default();

    ontology.insert_term(
        BP_ROOT,
        "biological_process",
        "",
        Namespace::BiologicalProcess,
    );
    ontology.insert_term(TERM_A, "metabolic process", "", Namespace::BiologicalProcess);
    ontology.insert_term(TERM_B, "cellular process", "", Namespace::BiologicalProcess);
    ontology.insert_term(TERM_C, "transport", "", Namespace::BiologicalProcess);
    ontology.insert_term(
        MF_ROOT,
        "molecular_function",
        "",
        Namespace::MolecularFunction,
    );
    ontology.insert_term(TERM_MF, "catalytic activity", "", Namespace::MolecularFunction);

    ontology.add_relationship(TERM_A, BP_ROOT, Relationship::IsA, &policy);
    ontology.add_relationship(TERM_B, BP_ROOT, Relationship::IsA, &policy);
    ontology.add_relationship(TERM_C, TERM_A, Relationship::IsA, &policy);
    ontology.add_relationship(TERM_MF, MF_ROOT, Relationship::IsA, &policy);
    ontology.create_cache();

    let mut annotations = AnnotationIndex::default();
    annotations.add_association("G0", TERM_C, Evidence::Exp);
    annotations.add_association("G1", TERM_C, Evidence::Ida);
    for symbol in ["G2", "G3", "G4", "G5"] {
        annotations.add_association(symbol, TERM_A, Evidence::Exp);
    }
    for symbol in ["G6", "G7", "G8", "G9"] {
        annotations.add_association(symbol, TERM_B, Evidence::Imp);
    }
    annotations.add_association("G0", TERM_MF, Evidence::Iea);
    assert!(annotations.integrity_check());

    ontology.annotate(&annotations).unwrap();
    ontology.calculate_information_content().unwrap();
    ontology
}
