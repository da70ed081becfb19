//! Similarity comparisons of terms, term sets and genes
//!
//! Pairwise measures implement [`Similarity`], set measures implement
//! [`SetSimilarity`]. Group comparisons build a score matrix of all term
//! pairs and fold it into one score with a [`SimilarityCombiner`].
//!
//! All normalized scores are in `[0.0, 1.0]`. Comparing terms of
//! different namespaces, or terms without a namespace, yields `0.0`.

use crate::matrix::Matrix;
use crate::set::GoSet;
use crate::GoTerm;

mod defaults;
mod overlap;
mod precomputed;
mod shared;

pub use defaults::{JiangConrath, Lin, PekarStaab, Relevance, Resnik};
pub use overlap::{Jaccard, SimDic, SimGic, SimUi, SimUic};
pub use precomputed::PrecomputedMatrix;
pub use shared::{AncestorMean, CoutoGraSm, ExclusivelyInherited, Mica, SharedInformation};

/// Comparison of two [`GoTerm`]s
pub trait Similarity {
    /// Calculates the raw similarity score of two terms
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32;

    /// Calculates the similarity, scaled into `[0.0, 1.0]`
    ///
    /// Identical terms always score `1.0`.
    fn calculate_normalized(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        if a.id() == b.id() && a.namespace().is_some() {
            return 1.0;
        }
        self.calculate(a, b).clamp(0.0, 1.0)
    }
}

/// Comparison of two [`GoSet`]s as a whole
///
/// Unlike [`GroupSimilarity`], set measures work on the induced ancestor
/// sets directly, without a pairwise score matrix.
pub trait SetSimilarity {
    fn calculate(&self, a: &GoSet, b: &GoSet) -> f32;
}

pub(crate) fn usize_to_f32(n: usize) -> f32 {
    let small: u16 = n.try_into().expect("matrix dimension overflows u16");
    f32::from(small)
}

/// Folds a matrix of pairwise scores into a single score
pub trait SimilarityCombiner {
    /// The actual combination logic, `m` is guaranteed non-empty
    fn combine(&self, m: &Matrix<f32>) -> f32;

    /// Combines the matrix, empty matrices score `0.0`
    fn calculate(&self, m: &Matrix<f32>) -> f32 {
        if m.is_empty() {
            return 0.0;
        }
        self.combine(m)
    }

    /// The largest value of each row
    fn row_maxes(&self, m: &Matrix<f32>) -> Vec<f32> {
        m.rows()
            .map(|row| row.iter().fold(f32::MIN, |acc, value| acc.max(*value)))
            .collect()
    }

    /// The largest value of each column
    fn col_maxes(&self, m: &Matrix<f32>) -> Vec<f32> {
        m.cols()
            .map(|col| col.iter().fold(f32::MIN, |acc, value| acc.max(*value)))
            .collect()
    }

    /// The matrix dimensions as `f32`, for averaging
    fn dim_f32(&self, m: &Matrix<f32>) -> (f32, f32) {
        let (rows, cols) = m.dim();
        (usize_to_f32(rows), usize_to_f32(cols))
    }
}

/// The built-in ways of folding a pairwise score matrix
#[derive(Clone, Copy, Debug, Default)]
pub enum StandardCombiner {
    /// The mean of all pairwise scores
    AllPairsAverage,
    /// The single largest pairwise score
    AllPairsMax,
    /// The mean of the row maxima averaged with the mean of the column
    /// maxima, i.e. every term is matched with its best counterpart
    #[default]
    BestMatchAverage,
}

impl SimilarityCombiner for StandardCombiner {
    fn combine(&self, m: &Matrix<f32>) -> f32 {
        match self {
            StandardCombiner::AllPairsAverage => {
                let (rows, cols) = self.dim_f32(m);
                m.values().sum::<f32>() / (rows * cols)
            }
            StandardCombiner::AllPairsMax => {
                m.values().fold(f32::MIN, |acc, value| acc.max(*value))
            }
            StandardCombiner::BestMatchAverage => {
                let (rows, cols) = self.dim_f32(m);
                let row_mean = self.row_maxes(m).iter().sum::<f32>() / rows;
                let col_mean = self.col_maxes(m).iter().sum::<f32>() / cols;
                (row_mean + col_mean) / 2.0
            }
        }
    }
}

/// Compares two [`GoSet`]s through pairwise term similarities
///
/// Every term of one set is scored against every term of the other with
/// the normalized `similarity`, the resulting matrix is folded by the
/// `combiner`.
#[derive(Debug, Default)]
pub struct GroupSimilarity<S, C> {
    similarity: S,
    combiner: C,
}

impl<S: Similarity, C: SimilarityCombiner> GroupSimilarity<S, C> {
    pub fn new(similarity: S, combiner: C) -> Self {
        Self {
            similarity,
            combiner,
        }
    }

    /// Calculates the combined similarity of two term sets
    ///
    /// Ids without a term are dropped before the score matrix is built,
    /// so its dimensions always match the resolved terms.
    pub fn calculate(&self, a: &GoSet, b: &GoSet) -> f32 {
        let terms_a: Vec<GoTerm> = a.iter().collect();
        let terms_b: Vec<GoTerm> = b.iter().collect();
        let mut scores = Vec::with_capacity(terms_a.len() * terms_b.len());
        for term_a in &terms_a {
            for term_b in &terms_b {
                scores.push(self.similarity.calculate_normalized(term_a, term_b));
            }
        }
        let matrix = Matrix::new(&scores, terms_a.len(), terms_b.len());
        self.combiner.calculate(&matrix)
    }
}
