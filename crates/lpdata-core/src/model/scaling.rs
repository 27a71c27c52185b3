//! Applying and reversing the scaling record.
//!
//! Scaling is a two-state toggle. `apply_scale` divides column bounds and
//! multiplies costs by the column factors, multiplies row bounds by the row
//! factors and scales the matrix; `unapply_scale` performs the reciprocal
//! operation on each element with the same factor.

use tracing::{debug, trace};

use crate::model::LpModel;
use crate::model::error::ModelError;
use crate::scale::ScaleRecord;

impl LpModel {
    /// Install an externally computed scaling record.
    ///
    /// The record must match the model dimensions and hold only finite,
    /// non-zero factors. It cannot replace a record that is applied.
    pub fn set_scale(&mut self, scale: ScaleRecord) -> Result<(), ModelError> {
        if self.is_scaled {
            return Err(ModelError::ScaleAlreadyApplied);
        }
        if scale.has_scaling {
            if scale.num_col != self.num_col
                || scale.num_row != self.num_row
                || scale.col.len() != scale.num_col
                || scale.row.len() != scale.num_row
            {
                return Err(ModelError::ScaleDimensionMismatch {
                    num_col: self.num_col,
                    num_row: self.num_row,
                    scale_num_col: scale.col.len(),
                    scale_num_row: scale.row.len(),
                });
            }
            if let Some((is_col, index, value)) = scale.first_invalid_factor() {
                return Err(ModelError::InvalidScaleFactor {
                    kind: if is_col { "column" } else { "row" },
                    index,
                    value,
                });
            }
        }
        debug!(
            component = "lp",
            operation = "set_scale",
            status = "success",
            strategy = scale.strategy.as_str(),
            has_scaling = scale.has_scaling,
            "Installed scaling record"
        );
        self.scale = scale;
        Ok(())
    }

    /// Apply the scale factors, unless already applied or there are none.
    pub fn apply_scale(&mut self) {
        if self.is_scaled {
            assert!(self.scale.has_scaling);
            trace!(
                component = "lp",
                operation = "apply_scale",
                status = "skipped",
                "Scaling already applied"
            );
            return;
        }
        if !self.scale.has_scaling {
            trace!(
                component = "lp",
                operation = "apply_scale",
                status = "skipped",
                "No scaling to apply"
            );
            return;
        }
        let scale = &self.scale;
        for col in 0..self.num_col {
            self.col_lower[col] /= scale.col[col];
            self.col_upper[col] /= scale.col[col];
            self.col_cost[col] *= scale.col[col];
        }
        for row in 0..self.num_row {
            self.row_lower[row] *= scale.row[row];
            self.row_upper[row] *= scale.row[row];
        }
        self.a_matrix.apply_scale(scale);
        self.is_scaled = true;
        debug!(
            component = "lp",
            operation = "apply_scale",
            status = "success",
            num_col = self.num_col,
            num_row = self.num_row,
            num_nz = self.a_matrix.num_nz(),
            "Applied scaling"
        );
    }

    /// Reverse the scale factors, unless not applied.
    pub fn unapply_scale(&mut self) {
        if !self.is_scaled {
            trace!(
                component = "lp",
                operation = "unapply_scale",
                status = "skipped",
                "Scaling not applied"
            );
            return;
        }
        assert!(self.scale.has_scaling);
        let scale = &self.scale;
        for col in 0..self.num_col {
            self.col_lower[col] *= scale.col[col];
            self.col_upper[col] *= scale.col[col];
            self.col_cost[col] /= scale.col[col];
        }
        for row in 0..self.num_row {
            self.row_lower[row] /= scale.row[row];
            self.row_upper[row] /= scale.row[row];
        }
        self.a_matrix.unapply_scale(scale);
        self.is_scaled = false;
        debug!(
            component = "lp",
            operation = "unapply_scale",
            status = "success",
            num_col = self.num_col,
            num_row = self.num_row,
            num_nz = self.a_matrix.num_nz(),
            "Unapplied scaling"
        );
    }

    /// Switch the scaling record off. Values currently scaled stay scaled;
    /// use [`LpModel::clear_scaling`] to unscale first.
    pub fn reset_scale(&mut self) {
        self.scale.clear();
    }

    /// Unapply any applied scaling, then switch the record off.
    pub fn clear_scaling(&mut self) {
        self.unapply_scale();
        self.reset_scale();
    }
}
