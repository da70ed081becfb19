use core::fmt::Debug;
use std::fmt::Display;

use crate::{GoError, GoResult};

/// A unique identifier for a GO term, e.g. `GO:0008150`
///
/// Only the numerical part is stored, the `GO:` prefix is implied.
#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GoTermId {
    inner: u32,
}

impl GoTermId {
    /// Constructs a `GoTermId` from the numerical part of the accession
    ///
    /// This is a `const` constructor so that well-known term ids, like the
    /// sub-ontology roots, can be defined as constants.
    pub const fn from_u32(inner: u32) -> Self {
        Self { inner }
    }

    /// Returns the numerical part of the accession
    pub fn as_u32(self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for GoTermId {
    type Error = GoError;
    fn try_from(s: &str) -> GoResult<Self> {
        if s.len() != 10 || !s.starts_with("GO:") {
            return Err(GoError::InvalidTermId(s.to_string()));
        }
        Ok(GoTermId {
            inner: s[3..].parse::<u32>()?,
        })
    }
}

impl From<u32> for GoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Debug for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoTermId({self})")
    }
}

impl Display for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GO:{:07}", self.inner)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_accession() {
        let id = GoTermId::try_from("GO:0008150").unwrap();
        assert_eq!(id.as_u32(), 8150);
        assert_eq!(id.to_string(), "GO:0008150");
    }

    #[test]
    fn reject_malformed_accession() {
        assert!(GoTermId::try_from("0008150").is_err());
        assert!(GoTermId::try_from("GO:8150").is_err());
        assert!(GoTermId::try_from("GO:000815O").is_err());
    }

    #[test]
    fn round_trip_through_u32() {
        let id = GoTermId::from(8150u32);
        assert_eq!(id, GoTermId::try_from("GO:0008150").unwrap());
        assert_eq!(GoTermId::from(id.as_u32()), id);
    }
}
