use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::similarity::Similarity;
use crate::{GoError, GoResult, GoTerm, GoTermId, Namespace, Ontology};

/// A symmetric matrix of precalculated normalized similarity scores
///
/// Scoring large cohorts recalculates the same term pairs over and over.
/// `PrecomputedMatrix` runs the expensive measure once for every term
/// pair of a namespace and serves lookups from then on, optionally
/// persisted as a TSV file. It implements [`Similarity`] itself, so it is
/// a drop-in replacement for the measure it cached.
///
/// Term pairs not present in the matrix score `0.0`.
#[derive(Clone, Debug)]
pub struct PrecomputedMatrix {
    ids: Vec<GoTermId>,
    index: HashMap<GoTermId, usize>,
    values: Vec<f32>,
}

impl PrecomputedMatrix {
    /// Scores all term pairs of one namespace with the given measure
    pub fn compute(
        ontology: &Ontology,
        namespace: Namespace,
        similarity: &impl Similarity,
    ) -> Self {
        let mut ids: Vec<GoTermId> = ontology
            .terms()
            .filter(|term| term.namespace() == Some(namespace))
            .map(|term| term.id())
            .collect();
        ids.sort();

        let terms: Vec<GoTerm> = ids.iter().filter_map(|id| ontology.go(*id)).collect();
        let n = terms.len();
        let mut values = vec![0.0f32; n * n];
        for (row, term_a) in terms.iter().enumerate() {
            for (col, term_b) in terms.iter().enumerate().skip(row) {
                let score = similarity.calculate_normalized(term_a, term_b);
                values[row * n + col] = score;
                values[col * n + row] = score;
            }
        }

        Self::from_parts(ids, values)
    }

    fn from_parts(ids: Vec<GoTermId>, values: Vec<f32>) -> Self {
        let index = ids.iter().enumerate().map(|(idx, id)| (*id, idx)).collect();
        Self { ids, index, values }
    }

    /// Number of terms covered by the matrix
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The cached score of a term pair, `0.0` if either term is not covered
    pub fn score(&self, a: GoTermId, b: GoTermId) -> f32 {
        match (self.index.get(&a), self.index.get(&b)) {
            (Some(row), Some(col)) => self.values[row * self.ids.len() + col],
            _ => 0.0,
        }
    }

    /// Serializes the matrix as TSV, one term per row
    pub fn to_writer<W: Write>(&self, writer: &mut W) -> GoResult<()> {
        let n = self.ids.len();
        for (row, id) in self.ids.iter().enumerate() {
            write!(writer, "{id}")?;
            for value in &self.values[row * n..(row + 1) * n] {
                write!(writer, "\t{value}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Deserializes a matrix written by [`PrecomputedMatrix::to_writer`]
    ///
    /// # Errors
    ///
    /// [`GoError::MatrixFormat`] if rows have inconsistent widths or the
    /// row count does not match the width.
    pub fn from_reader<R: BufRead>(reader: R) -> GoResult<Self> {
        let mut ids = Vec::new();
        let mut values = Vec::new();
        let mut width: Option<usize> = None;

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let mut columns = line.split('\t');
            let id = columns
                .next()
                .ok_or_else(|| GoError::MatrixFormat("empty row".to_string()))?;
            ids.push(GoTermId::try_from(id)?);

            let mut row_width = 0;
            for value in columns {
                values.push(value.parse::<f32>()?);
                row_width += 1;
            }
            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(GoError::MatrixFormat(format!(
                        "expected {expected} columns, row {id} has {row_width}"
                    )));
                }
                Some(_) => {}
            }
        }

        if ids.len() != width.unwrap_or(0) {
            return Err(GoError::MatrixFormat(format!(
                "{} rows do not match {} columns",
                ids.len(),
                width.unwrap_or(0)
            )));
        }
        Ok(Self::from_parts(ids, values))
    }

    /// Writes the matrix to a TSV file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> GoResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)
    }

    /// Reads a matrix from a TSV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GoResult<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }
}

impl Similarity for PrecomputedMatrix {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        self.score(a.id(), b.id())
    }

    fn calculate_normalized(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        if a.id() == b.id() && a.namespace().is_some() {
            return 1.0;
        }
        self.score(a.id(), b.id()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::annotations::{AnnotationIndex, Evidence};
    use crate::similarity::Lin;
    use crate::term::{Relationship, RelationshipPolicy};
    use crate::BP_ROOT;

    const A: u32 = 8152;
    const C: u32 = 6810;

    fn fixture() -> Ontology {
        let mut ontology = Ontology::default();
        let policy = RelationshipPolicy::default();
        ontology.insert_term(BP_ROOT, "biological_process", "", Namespace::BiologicalProcess);
        ontology.insert_term(A, "metabolic process", "", Namespace::BiologicalProcess);
        ontology.insert_term(C, "transport", "", Namespace::BiologicalProcess);
        ontology.add_relationship(A, BP_ROOT.as_u32(), Relationship::IsA, &policy);
        ontology.add_relationship(C, A, Relationship::IsA, &policy);
        ontology.create_cache();

        let mut annotations = AnnotationIndex::default();
        annotations.add_association("G1", C, Evidence::Exp);
        annotations.add_association("G2", A, Evidence::Exp);
        annotations.add_association("G3", A, Evidence::Exp);
        annotations.add_association("G4", BP_ROOT, Evidence::Exp);
        annotations.add_association("G5", BP_ROOT, Evidence::Exp);
        ontology.annotate(&annotations).unwrap();
        ontology.calculate_information_content().unwrap();
        ontology
    }

    #[test]
    fn matches_the_live_measure() {
        let ontology = fixture();
        let lin = Lin::new();
        let matrix =
            PrecomputedMatrix::compute(&ontology, Namespace::BiologicalProcess, &lin);
        assert_eq!(matrix.len(), 3);

        let term_a = ontology.go(A).unwrap();
        let term_c = ontology.go(C).unwrap();
        assert_eq!(
            matrix.calculate_normalized(&term_a, &term_c),
            lin.calculate_normalized(&term_a, &term_c)
        );
        assert_eq!(matrix.calculate_normalized(&term_c, &term_c), 1.0);
        assert_eq!(matrix.score(A.into(), 1u32.into()), 0.0);
    }

    #[test]
    fn tsv_round_trip() {
        let ontology = fixture();
        let matrix = PrecomputedMatrix::compute(
            &ontology,
            Namespace::BiologicalProcess,
            &Lin::new(),
        );

        let mut buffer = Vec::new();
        matrix.to_writer(&mut buffer).unwrap();
        let restored = PrecomputedMatrix::from_reader(Cursor::new(buffer)).unwrap();

        assert_eq!(restored.len(), matrix.len());
        assert_eq!(
            restored.score(A.into(), C.into()),
            matrix.score(A.into(), C.into())
        );
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let ragged = "GO:0008150\t1.0\t0.5\nGO:0008152\t1.0\n";
        assert!(matches!(
            PrecomputedMatrix::from_reader(Cursor::new(ragged)),
            Err(GoError::MatrixFormat(_))
        ));

        let non_square = "GO:0008150\t1.0\t0.5\nGO:0008152\t0.5\t1.0\nGO:0006810\t0.1\t0.2\n";
        assert!(matches!(
            PrecomputedMatrix::from_reader(Cursor::new(non_square)),
            Err(GoError::MatrixFormat(_))
        ));

        let bad_float = "GO:0008150\tone\n";
        assert!(matches!(
            PrecomputedMatrix::from_reader(Cursor::new(bad_float)),
            Err(GoError::ParseFloatError)
        ));
    }
}
