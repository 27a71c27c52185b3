//! Compressed sparse storage for the constraint matrix.
//!
//! Entries are held either column-wise (CSC) or row-wise (CSR). In CSC form
//! `start` has one entry per column plus a terminator and `index` holds row
//! indices; in CSR form the roles of rows and columns swap.
//!
//! ```text
//!   | 1 . 2 |      start = [0, 2, 3, 5]
//!   | 3 4 5 |  ->  index = [0, 1, 1, 0, 1]
//!                  value = [1, 3, 4, 2, 5]   (CSC, a(1,2) = 5)
//! ```

use crate::model::ModelError;
use crate::scale::ScaleRecord;
use crate::types::MatrixFormat;

/// Sparse coefficient matrix owned by an [`crate::LpModel`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix {
    pub format: MatrixFormat,
    pub num_col: usize,
    pub num_row: usize,
    pub start: Vec<usize>,
    pub index: Vec<usize>,
    pub value: Vec<f64>,
}

impl SparseMatrix {
    /// An empty column-wise matrix with no rows or columns.
    pub fn new() -> Self {
        Self {
            format: MatrixFormat::Colwise,
            num_col: 0,
            num_row: 0,
            start: vec![0],
            index: Vec::new(),
            value: Vec::new(),
        }
    }

    /// Build a column-wise matrix; the column count is `start.len() - 1`.
    pub fn from_colwise(
        num_row: usize,
        start: Vec<usize>,
        index: Vec<usize>,
        value: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let num_col = start.len().checked_sub(1).ok_or(ModelError::InvalidMatrix {
            reason: "start must hold at least one entry".to_string(),
        })?;
        validate_compressed(num_row, &start, &index, &value)?;
        Ok(Self {
            format: MatrixFormat::Colwise,
            num_col,
            num_row,
            start,
            index,
            value,
        })
    }

    /// Build a row-wise matrix; the row count is `start.len() - 1`.
    pub fn from_rowwise(
        num_col: usize,
        start: Vec<usize>,
        index: Vec<usize>,
        value: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let num_row = start.len().checked_sub(1).ok_or(ModelError::InvalidMatrix {
            reason: "start must hold at least one entry".to_string(),
        })?;
        validate_compressed(num_col, &start, &index, &value)?;
        Ok(Self {
            format: MatrixFormat::Rowwise,
            num_col,
            num_row,
            start,
            index,
            value,
        })
    }

    pub fn is_colwise(&self) -> bool {
        self.format == MatrixFormat::Colwise
    }

    /// Number of compressed vectors: columns when column-wise, rows otherwise.
    pub fn num_vec(&self) -> usize {
        match self.format {
            MatrixFormat::Colwise => self.num_col,
            MatrixFormat::Rowwise => self.num_row,
        }
    }

    fn num_minor(&self) -> usize {
        match self.format {
            MatrixFormat::Colwise => self.num_row,
            MatrixFormat::Rowwise => self.num_col,
        }
    }

    pub fn num_nz(&self) -> usize {
        self.start.get(self.num_vec()).copied().unwrap_or(0)
    }

    /// Coefficient at `(row, col)`, if stored.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let (vec, minor) = match self.format {
            MatrixFormat::Colwise => (col, row),
            MatrixFormat::Rowwise => (row, col),
        };
        if vec >= self.num_vec() {
            return None;
        }
        (self.start[vec]..self.start[vec + 1])
            .find(|&k| self.index[k] == minor)
            .map(|k| self.value[k])
    }

    /// Multiply every entry `a(i, j)` by `col[j] * row[i]`.
    pub fn apply_scale(&mut self, scale: &ScaleRecord) {
        self.scale_entries(scale, |value, factor| *value *= factor);
    }

    /// Divide every entry `a(i, j)` by `col[j] * row[i]`.
    pub fn unapply_scale(&mut self, scale: &ScaleRecord) {
        self.scale_entries(scale, |value, factor| *value /= factor);
    }

    fn scale_entries(&mut self, scale: &ScaleRecord, op: impl Fn(&mut f64, f64)) {
        assert!(scale.col.len() >= self.num_col);
        assert!(scale.row.len() >= self.num_row);
        let colwise = self.is_colwise();
        for vec in 0..self.num_vec() {
            for k in self.start[vec]..self.start[vec + 1] {
                let minor = self.index[k];
                let factor = if colwise {
                    scale.col[vec] * scale.row[minor]
                } else {
                    scale.col[minor] * scale.row[vec]
                };
                op(&mut self.value[k], factor);
            }
        }
    }

    /// Size `start` to the current dimensions and `index`/`value` to the
    /// resulting number of nonzeros. Vectors added here are empty.
    pub fn exact_resize(&mut self) {
        let num_vec = self.num_vec();
        let last = self.start.last().copied().unwrap_or(0);
        self.start.resize(num_vec + 1, last);
        let num_nz = self.start[num_vec];
        self.index.resize(num_nz, 0);
        self.value.resize(num_nz, 0.0);
    }

    /// Switch storage orientation, keeping every entry.
    pub fn set_format(&mut self, format: MatrixFormat) {
        if self.format == format {
            return;
        }
        let num_vec = self.num_vec();
        let num_minor = self.num_minor();
        let num_nz = self.num_nz();

        let mut start = vec![0usize; num_minor + 1];
        for &minor in &self.index[..num_nz] {
            start[minor + 1] += 1;
        }
        for minor in 0..num_minor {
            start[minor + 1] += start[minor];
        }

        let mut next = start[..num_minor].to_vec();
        let mut index = vec![0usize; num_nz];
        let mut value = vec![0.0; num_nz];
        for vec in 0..num_vec {
            for k in self.start[vec]..self.start[vec + 1] {
                let minor = self.index[k];
                let pos = next[minor];
                index[pos] = vec;
                value[pos] = self.value[k];
                next[minor] += 1;
            }
        }

        tracing::trace!(
            component = "matrix",
            operation = "set_format",
            status = "success",
            from = self.format.as_str(),
            to = format.as_str(),
            num_nz,
            "Converted matrix storage"
        );

        self.format = format;
        self.start = start;
        self.index = index;
        self.value = value;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for SparseMatrix {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_compressed(
    num_minor: usize,
    start: &[usize],
    index: &[usize],
    value: &[f64],
) -> Result<(), ModelError> {
    if index.len() != value.len() {
        return Err(ModelError::InvalidMatrix {
            reason: "index and value must be the same length".to_string(),
        });
    }
    if start.first().copied().unwrap_or(0) != 0 {
        return Err(ModelError::InvalidMatrix {
            reason: "start must begin at 0".to_string(),
        });
    }
    if start.last().copied().unwrap_or(0) != value.len() {
        return Err(ModelError::InvalidMatrix {
            reason: "last start entry must equal the number of values".to_string(),
        });
    }
    if let Some(vec) = start.windows(2).position(|pair| pair[0] > pair[1]) {
        return Err(ModelError::InvalidMatrix {
            reason: format!("start must be non-decreasing (vector {vec})"),
        });
    }
    if let Some(pos) = index.iter().position(|&minor| minor >= num_minor) {
        return Err(ModelError::InvalidMatrix {
            reason: format!("index out of bounds at position {pos}"),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::ScaleStrategy;

    fn sample() -> SparseMatrix {
        // | 1 . 2 |
        // | 3 4 5 |
        SparseMatrix::from_colwise(
            2,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 1],
            vec![1.0, 3.0, 4.0, 2.0, 5.0],
        )
        .unwrap()
    }

    #[test]
    fn test_new_is_empty_colwise() {
        let matrix = SparseMatrix::new();
        assert!(matrix.is_colwise());
        assert_eq!(matrix.num_nz(), 0);
        assert_eq!(matrix.start, vec![0]);
    }

    #[test]
    fn test_from_colwise_dimensions() {
        let matrix = sample();
        assert_eq!(matrix.num_col, 3);
        assert_eq!(matrix.num_row, 2);
        assert_eq!(matrix.num_nz(), 5);
        assert_eq!(matrix.get(1, 2), Some(5.0));
        assert_eq!(matrix.get(0, 1), None);
    }

    #[test]
    fn test_from_colwise_rejects_bad_input() {
        let err = SparseMatrix::from_colwise(2, vec![0, 2], vec![0, 2], vec![1.0, 1.0]);
        assert!(matches!(err, Err(ModelError::InvalidMatrix { .. })));

        let err = SparseMatrix::from_colwise(2, vec![0, 2, 1], vec![0, 1], vec![1.0, 1.0]);
        assert!(matches!(err, Err(ModelError::InvalidMatrix { .. })));

        let err = SparseMatrix::from_colwise(2, vec![1, 2], vec![0, 1], vec![1.0, 1.0]);
        assert!(matches!(err, Err(ModelError::InvalidMatrix { .. })));

        let err = SparseMatrix::from_colwise(2, vec![0, 1], vec![0], vec![1.0, 2.0]);
        assert!(matches!(err, Err(ModelError::InvalidMatrix { .. })));

        let err = SparseMatrix::from_colwise(2, vec![], vec![], vec![]);
        assert!(matches!(err, Err(ModelError::InvalidMatrix { .. })));
    }

    #[test]
    fn test_set_format_round_trip() {
        let original = sample();
        let mut matrix = original.clone();
        matrix.set_format(MatrixFormat::Rowwise);
        assert_eq!(matrix.format, MatrixFormat::Rowwise);
        assert_eq!(matrix.start, vec![0, 2, 5]);
        assert_eq!(matrix.index, vec![0, 2, 0, 1, 2]);
        assert_eq!(matrix.value, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(matrix.get(1, 2), Some(5.0));

        matrix.set_format(MatrixFormat::Colwise);
        assert_eq!(matrix, original);
    }

    #[test]
    fn test_apply_and_unapply_scale() {
        let mut matrix = sample();
        let scale = ScaleRecord::new(
            ScaleStrategy::Equilibration,
            vec![2.0, 4.0, 0.5],
            vec![1.0, 8.0],
        );
        matrix.apply_scale(&scale);
        assert_eq!(matrix.get(0, 0), Some(2.0));
        assert_eq!(matrix.get(1, 0), Some(48.0));
        assert_eq!(matrix.get(1, 1), Some(128.0));
        assert_eq!(matrix.get(0, 2), Some(1.0));
        assert_eq!(matrix.get(1, 2), Some(20.0));

        matrix.unapply_scale(&scale);
        assert_eq!(matrix, sample());
    }

    #[test]
    fn test_rowwise_scale_matches_colwise() {
        let scale = ScaleRecord::new(
            ScaleStrategy::Equilibration,
            vec![2.0, 4.0, 0.5],
            vec![1.0, 8.0],
        );
        let mut colwise = sample();
        colwise.apply_scale(&scale);

        let mut rowwise = sample();
        rowwise.set_format(MatrixFormat::Rowwise);
        rowwise.apply_scale(&scale);
        rowwise.set_format(MatrixFormat::Colwise);
        assert_eq!(rowwise, colwise);
    }

    #[test]
    fn test_exact_resize_grows_with_empty_vectors() {
        let mut matrix = sample();
        matrix.num_col = 5;
        matrix.exact_resize();
        assert_eq!(matrix.start, vec![0, 2, 3, 5, 5, 5]);
        assert_eq!(matrix.num_nz(), 5);
    }

    #[test]
    fn test_exact_resize_shrinks() {
        let mut matrix = sample();
        matrix.num_col = 1;
        matrix.exact_resize();
        assert_eq!(matrix.start, vec![0, 2]);
        assert_eq!(matrix.index, vec![0, 1]);
        assert_eq!(matrix.value, vec![1.0, 3.0]);
    }

    #[test]
    fn test_clear() {
        let mut matrix = sample();
        matrix.clear();
        assert_eq!(matrix, SparseMatrix::new());
    }
}
