//! A borrowed 2-dimensional view into a flat slice
//!
//! [`Matrix`] does not own its data, it interprets a row-major slice as a
//! grid and hands out row and column iterators. Similarity combiners use
//! it to walk pairwise score matrices without allocating per row.

/// A row-major 2-dimensional view of a borrowed slice
#[derive(Debug)]
pub struct Matrix<'a, T> {
    inner: &'a [T],
    rows: usize,
    cols: usize,
}

impl<'a, T> Matrix<'a, T> {
    /// Constructs a new [`Matrix`]
    ///
    /// # Panics
    ///
    /// Panics if the slice length does not equal `rows * cols`
    pub fn new(inner: &'a [T], rows: usize, cols: usize) -> Self {
        assert_eq!(
            inner.len(),
            rows * cols,
            "matrix dimensions do not match the data"
        );
        Self { inner, rows, cols }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the matrix has no elements
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns an iterator of all elements in row-major order
    pub fn values(&self) -> std::slice::Iter<'a, T> {
        self.inner.iter()
    }

    /// Returns an iterator of the rows
    pub fn rows(&self) -> RowIterator<'a, T> {
        RowIterator {
            inner: self.inner,
            cols: self.cols,
            idx: 0,
            rows: self.rows,
        }
    }

    /// Returns an iterator of the columns
    pub fn cols(&self) -> ColumnIterator<'a, T> {
        ColumnIterator {
            inner: self.inner,
            cols: self.cols,
            idx: 0,
        }
    }
}

/// One row of a [`Matrix`]
pub struct Row<'a, T> {
    inner: &'a [T],
}

impl<'a, T> Row<'a, T> {
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.inner.iter()
    }
}

impl<'a, T> IntoIterator for Row<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Iterates the [`Row`]s of a [`Matrix`]
pub struct RowIterator<'a, T> {
    inner: &'a [T],
    cols: usize,
    rows: usize,
    idx: usize,
}

impl<'a, T> Iterator for RowIterator<'a, T> {
    type Item = Row<'a, T>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.rows {
            return None;
        }
        let start = self.idx * self.cols;
        self.idx += 1;
        Some(Row {
            inner: &self.inner[start..start + self.cols],
        })
    }
}

/// One column of a [`Matrix`]
pub struct Column<'a, T> {
    inner: &'a [T],
    cols: usize,
    offset: usize,
}

impl<'a, T> Column<'a, T> {
    pub fn iter(&self) -> ColumnValues<'a, T> {
        ColumnValues {
            inner: self.inner,
            cols: self.cols,
            pos: self.offset,
        }
    }
}

impl<'a, T> IntoIterator for Column<'a, T> {
    type Item = &'a T;
    type IntoIter = ColumnValues<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterates the values of a [`Column`], stepping one row at a time
pub struct ColumnValues<'a, T> {
    inner: &'a [T],
    cols: usize,
    pos: usize,
}

impl<'a, T> Iterator for ColumnValues<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.inner.get(self.pos)?;
        self.pos += self.cols;
        Some(value)
    }
}

/// Iterates the [`Column`]s of a [`Matrix`]
pub struct ColumnIterator<'a, T> {
    inner: &'a [T],
    cols: usize,
    idx: usize,
}

impl<'a, T> Iterator for ColumnIterator<'a, T> {
    type Item = Column<'a, T>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.cols {
            return None;
        }
        let offset = self.idx;
        self.idx += 1;
        Some(Column {
            inner: self.inner,
            cols: self.cols,
            offset,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const VALUES: [u32; 6] = [1, 2, 3, 4, 5, 6];

    #[test]
    fn rows_of_a_2x3_matrix() {
        let matrix = Matrix::new(&VALUES, 2, 3);
        let rows: Vec<Vec<u32>> = matrix
            .rows()
            .map(|row| row.iter().copied().collect())
            .collect();
        assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn cols_of_a_2x3_matrix() {
        let matrix = Matrix::new(&VALUES, 2, 3);
        let cols: Vec<Vec<u32>> = matrix
            .cols()
            .map(|col| col.iter().copied().collect())
            .collect();
        assert_eq!(cols, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn values_in_row_major_order() {
        let matrix = Matrix::new(&VALUES, 3, 2);
        let all: Vec<u32> = matrix.values().copied().collect();
        assert_eq!(all, VALUES.to_vec());
    }

    #[test]
    #[should_panic(expected = "matrix dimensions")]
    fn dimension_mismatch_panics() {
        let _ = Matrix::new(&VALUES, 2, 2);
    }

    #[test]
    fn empty_matrix() {
        let values: [u32; 0] = [];
        let matrix = Matrix::new(&values, 0, 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows().count(), 0);
        assert_eq!(matrix.cols().count(), 0);
    }
}
