use std::fmt::Display;

use crate::{GoError, GoResult};

/// The kind of a directed child → parent edge in the ontology graph
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Relationship {
    /// `is_a`: the child is a subtype of the parent
    IsA,
    /// `part_of`: the child is a component of the parent
    PartOf,
    /// `regulates`: the child modulates the parent process
    Regulates,
    /// `positively_regulates`
    PositivelyRegulates,
    /// `negatively_regulates`
    NegativelyRegulates,
}

impl Relationship {
    /// Returns `true` for any of the three `regulates` edge kinds
    pub fn is_regulatory(self) -> bool {
        match self {
            Relationship::Regulates
            | Relationship::PositivelyRegulates
            | Relationship::NegativelyRegulates => true,
            Relationship::IsA | Relationship::PartOf => false,
        }
    }

    /// The OBO spelling of the relationship
    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::IsA => "is_a",
            Relationship::PartOf => "part_of",
            Relationship::Regulates => "regulates",
            Relationship::PositivelyRegulates => "positively_regulates",
            Relationship::NegativelyRegulates => "negatively_regulates",
        }
    }
}

impl TryFrom<&str> for Relationship {
    type Error = GoError;
    fn try_from(s: &str) -> GoResult<Self> {
        match s {
            "is_a" => Ok(Relationship::IsA),
            "part_of" => Ok(Relationship::PartOf),
            "regulates" => Ok(Relationship::Regulates),
            "positively_regulates" => Ok(Relationship::PositivelyRegulates),
            "negatively_regulates" => Ok(Relationship::NegativelyRegulates),
            _ => Err(GoError::UnknownRelationship(s.to_string())),
        }
    }
}

impl Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decides which [`Relationship`] kinds are admitted as graph edges
///
/// The policy is applied during construction: rejected edges are simply not
/// inserted, although their endpoint terms still get created as stubs.
///
/// # Examples
///
/// ```
/// use govar::term::{Relationship, RelationshipPolicy};
///
/// let policy = RelationshipPolicy::default();
/// assert!(policy.is_allowed(Relationship::IsA));
/// assert!(policy.is_allowed(Relationship::PartOf));
/// assert!(!policy.is_allowed(Relationship::Regulates));
///
/// let policy = RelationshipPolicy::all();
/// assert!(policy.is_allowed(Relationship::NegativelyRegulates));
/// ```
#[derive(Clone, Debug)]
pub struct RelationshipPolicy {
    allowed: Vec<Relationship>,
}

impl RelationshipPolicy {
    /// Constructs a policy admitting exactly the given kinds
    pub fn new(kinds: &[Relationship]) -> Self {
        Self {
            allowed: kinds.to_vec(),
        }
    }

    /// Constructs a policy admitting all five relationship kinds
    pub fn all() -> Self {
        Self::new(&[
            Relationship::IsA,
            Relationship::PartOf,
            Relationship::Regulates,
            Relationship::PositivelyRegulates,
            Relationship::NegativelyRegulates,
        ])
    }

    /// Returns `true` if edges of this kind are admitted into the graph
    pub fn is_allowed(&self, relationship: Relationship) -> bool {
        self.allowed.contains(&relationship)
    }
}

impl Default for RelationshipPolicy {
    /// The standard policy admits `is_a` and `part_of` edges
    fn default() -> Self {
        Self::new(&[Relationship::IsA, Relationship::PartOf])
    }
}
