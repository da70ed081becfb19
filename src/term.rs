//! GO terms and their building blocks
//!
//! [`GoTermId`] identifies a term, [`GoGroup`] holds sorted sets of ids,
//! [`GoTerm`] is the borrowed client-facing view and [`Namespace`] names
//! the three disjoint sub-ontologies.

use std::fmt::Display;

use crate::{GoError, GoResult, BP_ROOT, CC_ROOT, MF_ROOT};

mod goterm;
mod group;
mod information_content;
pub(crate) mod internal;
mod relationship;
mod termid;

pub use goterm::{GoTerm, GoTerms};
pub use group::{GoGroup, GoTermIds, GroupCombine};
pub use information_content::InformationContent;
pub use relationship::{Relationship, RelationshipPolicy};
pub use termid::GoTermId;

/// The direct or transitive parents of a term
pub type GoParents = GoGroup;
/// The direct children of a term
pub type GoChildren = GoGroup;

/// One of the three disjoint sub-ontologies of the Gene Ontology
///
/// Terms of different namespaces never share ancestors, so similarity
/// scores across namespaces are defined as `0.0`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Namespace {
    BiologicalProcess,
    MolecularFunction,
    CellularComponent,
}

impl Namespace {
    /// Returns the root term of the sub-ontology
    pub fn root(self) -> GoTermId {
        match self {
            Namespace::BiologicalProcess => BP_ROOT,
            Namespace::MolecularFunction => MF_ROOT,
            Namespace::CellularComponent => CC_ROOT,
        }
    }

    /// A stable index for per-namespace bookkeeping arrays
    pub(crate) fn index(self) -> usize {
        match self {
            Namespace::BiologicalProcess => 0,
            Namespace::MolecularFunction => 1,
            Namespace::CellularComponent => 2,
        }
    }

    /// All three namespaces, in index order
    pub fn all() -> [Namespace; 3] {
        [
            Namespace::BiologicalProcess,
            Namespace::MolecularFunction,
            Namespace::CellularComponent,
        ]
    }

    /// The OBO spelling of the namespace
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::BiologicalProcess => "biological_process",
            Namespace::MolecularFunction => "molecular_function",
            Namespace::CellularComponent => "cellular_component",
        }
    }
}

impl TryFrom<&str> for Namespace {
    type Error = GoError;
    fn try_from(s: &str) -> GoResult<Self> {
        match s {
            "biological_process" => Ok(Namespace::BiologicalProcess),
            "molecular_function" => Ok(Namespace::MolecularFunction),
            "cellular_component" => Ok(Namespace::CellularComponent),
            _ => Err(GoError::UnknownNamespace(s.to_string())),
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn namespace_roots() {
        assert_eq!(Namespace::BiologicalProcess.root(), BP_ROOT);
        assert_eq!(Namespace::MolecularFunction.root(), MF_ROOT);
        assert_eq!(Namespace::CellularComponent.root(), CC_ROOT);
    }

    #[test]
    fn parse_namespace() {
        assert_eq!(
            Namespace::try_from("cellular_component").unwrap(),
            Namespace::CellularComponent
        );
        assert!(Namespace::try_from("cellular component").is_err());
    }
}
