use crate::{GoError, GoResult};

/// Annotation frequency and information content of a term
///
/// Both values are derived from the gene annotations within the term's
/// own sub-ontology. Before [`crate::Ontology::calculate_information_content`]
/// ran, probability and IC are `0.0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InformationContent {
    probability: f32,
    ic: f32,
}

impl InformationContent {
    /// The fraction of the sub-ontology's annotated genes that reach this term
    pub fn probability(&self) -> f32 {
        self.probability
    }

    /// The information content, `-ln(probability)`
    ///
    /// A term with no annotated genes reports `0.0` rather than infinity.
    pub fn ic(&self) -> f32 {
        self.ic
    }

    /// Recalculates probability and IC from annotation counts
    ///
    /// `root_count` is the number of genes annotated at the sub-ontology
    /// root, `term_count` the number annotated at this term.
    pub(crate) fn set(&mut self, root_count: usize, term_count: usize) -> GoResult<()> {
        fn f32_from_usize(n: usize) -> GoResult<f32> {
            let small: u16 = n
                .try_into()
                .map_err(|_| GoError::AnnotationOverflow)?;
            Ok(f32::from(small))
        }

        if root_count == 0 {
            self.probability = 0.0;
            self.ic = 0.0;
            return Ok(());
        }

        self.probability = f32_from_usize(term_count)? / f32_from_usize(root_count)?;
        self.ic = if self.probability == 0.0 {
            0.0
        } else {
            -self.probability.ln()
        };
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn probability_and_ic() {
        let mut ic = InformationContent::default();
        ic.set(10, 2).unwrap();
        assert!((ic.probability() - 0.2).abs() < f32::EPSILON);
        assert!((ic.ic() - 1.609_437_9).abs() < 0.000_001);
    }

    #[test]
    fn root_has_zero_ic() {
        let mut ic = InformationContent::default();
        ic.set(10, 10).unwrap();
        assert_eq!(ic.probability(), 1.0);
        assert_eq!(ic.ic(), 0.0);
    }

    #[test]
    fn unannotated_term_has_zero_ic() {
        let mut ic = InformationContent::default();
        ic.set(10, 0).unwrap();
        assert_eq!(ic.probability(), 0.0);
        assert_eq!(ic.ic(), 0.0);
    }

    #[test]
    fn empty_ontology_has_zero_everything() {
        let mut ic = InformationContent::default();
        ic.set(0, 0).unwrap();
        assert_eq!(ic.probability(), 0.0);
        assert_eq!(ic.ic(), 0.0);
    }

    #[test]
    fn overflow_is_an_error() {
        let mut ic = InformationContent::default();
        assert!(ic.set(100_000, 5).is_err());
    }
}
