use std::collections::HashSet;
use std::ops::{BitAnd, BitOr};

use crate::{GoTerm, GoTermId, Ontology};

/// A set of [`GoTermId`]s
///
/// Each id can occur only once. The ids are kept sorted, so membership
/// tests are binary searches and the set operations merge linearly.
///
/// `GoGroup` is used for the direct parents and children of a term, for
/// the cached ancestor closure and for the induced term sets that the
/// set-similarity measures operate on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GoGroup {
    ids: Vec<GoTermId>,
}

impl GoGroup {
    /// Constructs a new, empty [`GoGroup`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new, empty [`GoGroup`] with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the group contains no [`GoTermId`]s
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of [`GoTermId`]s in the group
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Adds a new [`GoTermId`] to the group
    ///
    /// Returns whether the id was newly inserted. That is:
    ///
    /// - If the group did not previously contain this id, `true` is returned.
    /// - If the group already contained this id, `false` is returned.
    pub fn insert<I: Into<GoTermId>>(&mut self, id: I) -> bool {
        let id = id.into();
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                self.ids.insert(idx, id);
                true
            }
        }
    }

    /// Adds a new [`GoTermId`] to the end of the group
    ///
    /// # Note
    ///
    /// This method does not check for duplicates or sort order, so it must
    /// only be used when the caller guarantees both.
    fn insert_unchecked(&mut self, id: GoTermId) {
        self.ids.push(id);
    }

    /// Returns `true` if the group contains the [`GoTermId`]
    pub fn contains(&self, id: &GoTermId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Returns an Iterator of the [`GoTermId`]s inside the group
    pub fn iter(&self) -> GoTermIds {
        GoTermIds::new(self.ids.iter())
    }

    /// Returns the [`GoTermId`] at the given index, `None` if out of bounds
    pub(crate) fn get(&self, index: usize) -> Option<&GoTermId> {
        self.ids.get(index)
    }
}

impl From<HashSet<GoTermId>> for GoGroup {
    fn from(set: HashSet<GoTermId>) -> Self {
        let mut group = GoGroup::with_capacity(set.len());
        for id in set {
            group.insert(id);
        }
        group
    }
}

impl FromIterator<GoTermId> for GoGroup {
    fn from_iter<T: IntoIterator<Item = GoTermId>>(iter: T) -> Self {
        let mut group = GoGroup::new();
        for id in iter {
            group.insert(id);
        }
        group
    }
}

impl<'a> IntoIterator for &'a GoGroup {
    type Item = GoTermId;
    type IntoIter = GoTermIds<'a>;

    fn into_iter(self) -> GoTermIds<'a> {
        GoTermIds::new(self.ids.iter())
    }
}

/// An iterator of [`GoTermId`]s
pub struct GoTermIds<'a> {
    inner: std::slice::Iter<'a, GoTermId>,
}

impl<'a> GoTermIds<'a> {
    fn new(inner: std::slice::Iter<'a, GoTermId>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for GoTermIds<'a> {
    type Item = GoTermId;
    fn next(&mut self) -> Option<GoTermId> {
        self.inner.next().copied()
    }
}

/// Iterates [`GoTerm`]s from an owned [`GoGroup`]
///
/// Used where the group is short-lived, e.g. the result of a set
/// operation, and cannot be referenced by the iterator itself.
pub struct GroupCombine<'a> {
    inner: GoGroup,
    ontology: &'a Ontology,
    idx: usize,
}

impl<'a> GroupCombine<'a> {
    /// Constructs a new [`GroupCombine`] from a [`GoGroup`] and the [`Ontology`]
    pub fn new(inner: GoGroup, ontology: &'a Ontology) -> Self {
        Self {
            inner,
            ontology,
            idx: 0,
        }
    }
}

impl<'a> Iterator for GroupCombine<'a> {
    type Item = GoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.idx;
        self.idx += 1;
        match self.inner.get(index) {
            Some(term_id) => self.ontology.go(*term_id),
            None => None,
        }
    }
}

impl BitOr for &GoGroup {
    type Output = GoGroup;

    fn bitor(self, rhs: &GoGroup) -> GoGroup {
        let mut group = GoGroup::with_capacity(self.len() + rhs.len());
        let (large, small) = if self.len() > rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        for id in &large.ids {
            group.insert_unchecked(*id);
        }
        for id in &small.ids {
            group.insert(*id);
        }
        group
    }
}

impl BitAnd for &GoGroup {
    type Output = GoGroup;

    fn bitand(self, rhs: &GoGroup) -> GoGroup {
        let mut group = GoGroup::with_capacity(self.len().min(rhs.len()));
        let (large, small) = if self.len() > rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        for id in &small.ids {
            if large.contains(id) {
                group.insert_unchecked(*id);
            }
        }
        group
    }
}
