//! Keeping vector lengths in step with the model dimensions.

use tracing::debug;

use crate::model::LpModel;
use crate::model::error::ModelError;
use crate::types::VarType;

impl LpModel {
    /// Resize every per-column and per-row vector to exactly `num_col` and
    /// `num_row`, and the matrix to its own dimensions.
    ///
    /// Name tables and `integrality` are resized only when non-empty. A
    /// present scaling record is resized too, with new factors of one.
    pub fn exact_resize(&mut self) {
        self.col_cost.resize(self.num_col, 0.0);
        self.col_lower.resize(self.num_col, 0.0);
        self.col_upper.resize(self.num_col, 0.0);
        self.row_lower.resize(self.num_row, 0.0);
        self.row_upper.resize(self.num_row, 0.0);
        self.a_matrix.exact_resize();

        if !self.col_names.is_empty() && self.col_names.len() != self.num_col {
            self.col_names.resize(self.num_col, String::new());
            self.col_hash.clear();
        }
        if !self.row_names.is_empty() && self.row_names.len() != self.num_row {
            self.row_names.resize(self.num_row, String::new());
            self.row_hash.clear();
        }
        if !self.integrality.is_empty() {
            self.integrality.resize(self.num_col, VarType::Continuous);
        }
        if self.scale.has_scaling {
            self.scale.col.resize(self.num_col, 1.0);
            self.scale.row.resize(self.num_row, 1.0);
            self.scale.num_col = self.num_col;
            self.scale.num_row = self.num_row;
        }
    }

    /// Append columns with no matrix entries.
    ///
    /// Complete column name tables are extended with generated names, and a
    /// present scaling record gets a factor of one for each new column.
    pub fn add_cols(
        &mut self,
        cost: &[f64],
        lower: &[f64],
        upper: &[f64],
    ) -> Result<(), ModelError> {
        let num_new_col = cost.len();
        check_input_len(num_new_col, lower.len())?;
        check_input_len(num_new_col, upper.len())?;
        if num_new_col == 0 {
            return Ok(());
        }

        self.add_col_names(num_new_col);

        let num_col = self.num_col + num_new_col;
        self.col_cost.extend_from_slice(cost);
        self.col_lower.extend_from_slice(lower);
        self.col_upper.extend_from_slice(upper);
        if !self.integrality.is_empty() {
            self.integrality.resize(num_col, VarType::Continuous);
        }
        if self.scale.has_scaling {
            self.scale.col.resize(num_col, 1.0);
            self.scale.num_col = num_col;
        }
        self.num_col = num_col;
        self.set_matrix_dimensions();
        self.a_matrix.exact_resize();

        debug!(
            component = "lp",
            operation = "add_cols",
            status = "success",
            num_new_col,
            num_col,
            "Added columns"
        );
        Ok(())
    }

    /// Append rows with no matrix entries.
    pub fn add_rows(&mut self, lower: &[f64], upper: &[f64]) -> Result<(), ModelError> {
        let num_new_row = lower.len();
        check_input_len(num_new_row, upper.len())?;
        if num_new_row == 0 {
            return Ok(());
        }

        self.add_row_names(num_new_row);

        let num_row = self.num_row + num_new_row;
        self.row_lower.extend_from_slice(lower);
        self.row_upper.extend_from_slice(upper);
        if self.scale.has_scaling {
            self.scale.row.resize(num_row, 1.0);
            self.scale.num_row = num_row;
        }
        self.num_row = num_row;
        self.set_matrix_dimensions();
        self.a_matrix.exact_resize();

        debug!(
            component = "lp",
            operation = "add_rows",
            status = "success",
            num_new_row,
            num_row,
            "Added rows"
        );
        Ok(())
    }
}

fn check_input_len(expected: usize, got: usize) -> Result<(), ModelError> {
    if expected == got {
        Ok(())
    } else {
        Err(ModelError::InputLengthMismatch { expected, got })
    }
}
