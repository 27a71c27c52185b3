//! LP model data and the structural operations performed on it around a solve.
//!
//! This module provides the [`LpModel`] aggregate: dimensions, costs, bounds,
//! integrality, the coefficient matrix, names, the scaling record and the
//! semi-variable modification journal.
//!
//! # Module Organization
//!
//! - [`error`]: Model error types
//! - [`scaling`]: Applying, reversing and installing scale factors
//! - [`names`]: Name tables, auto-generated names and name lookup
//! - [`equality`]: Structural and name comparison
//! - [`resize`]: Exact resizing and appending columns/rows
//! - [`semi`]: Relaxing semi variables and restoring them from the journal

mod equality;
mod error;
mod names;
mod resize;
mod scaling;
mod semi;

use crate::matrix::SparseMatrix;
use crate::mods::LpMods;
use crate::name_hash::NameHash;
use crate::num::CompensatedF64;
use crate::scale::ScaleRecord;
use crate::types::{MatrixFormat, Sense, VarType};

pub use error::ModelError;
pub use names::{COL_NAME_PREFIX, ROW_NAME_PREFIX};

/// A linear or mixed-integer program held in memory.
///
/// Per-column vectors have length `num_col` and per-row vectors length
/// `num_row` whenever the model is not mid-mutation. `integrality`, and each
/// name table, is either empty or complete.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpModel {
    pub num_col: usize,
    pub num_row: usize,
    pub sense: Sense,
    pub offset: f64,
    pub model_name: String,
    pub objective_name: String,
    pub col_cost: Vec<f64>,
    pub col_lower: Vec<f64>,
    pub col_upper: Vec<f64>,
    pub row_lower: Vec<f64>,
    pub row_upper: Vec<f64>,
    /// Empty means every column is continuous.
    pub integrality: Vec<VarType>,
    pub a_matrix: SparseMatrix,
    /// Row of the matrix holding objective coefficients, if any.
    pub cost_row_location: Option<usize>,
    pub(crate) col_names: Vec<String>,
    pub(crate) row_names: Vec<String>,
    pub(crate) new_col_name_ix: usize,
    pub(crate) new_row_name_ix: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) col_hash: NameHash,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) row_hash: NameHash,
    pub(crate) scale: ScaleRecord,
    pub(crate) is_scaled: bool,
    pub(crate) is_moved: bool,
    pub(crate) mods: LpMods,
}

impl LpModel {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> &ScaleRecord {
        &self.scale
    }

    /// True while the scale factors are applied to bounds, costs and matrix.
    pub fn is_scaled(&self) -> bool {
        self.is_scaled
    }

    /// True while this model's storage is lent out via [`LpModel::lend_lp`].
    pub fn is_moved(&self) -> bool {
        self.is_moved
    }

    pub fn mods(&self) -> &LpMods {
        &self.mods
    }

    /// Journal access for a relaxation pass that lives outside this crate.
    pub fn mods_mut(&mut self) -> &mut LpMods {
        &mut self.mods
    }

    /// True if any column is not continuous.
    pub fn is_mip(&self) -> bool {
        if self.integrality.is_empty() {
            return false;
        }
        assert_eq!(self.integrality.len(), self.num_col);
        self.integrality
            .iter()
            .any(|var_type| *var_type != VarType::Continuous)
    }

    /// True if any column is semi-continuous or semi-integer.
    pub fn has_semi_variables(&self) -> bool {
        if self.integrality.is_empty() {
            return false;
        }
        assert_eq!(self.integrality.len(), self.num_col);
        self.integrality.iter().any(|var_type| var_type.is_semi())
    }

    /// `offset + sum(col_cost[i] * solution[i])`.
    pub fn objective_value(&self, solution: &[f64]) -> f64 {
        assert!(
            solution.len() >= self.num_col,
            "solution has {} entries for {} columns",
            solution.len(),
            self.num_col
        );
        self.col_cost[..self.num_col]
            .iter()
            .zip(solution)
            .fold(self.offset, |value, (cost, x)| value + cost * x)
    }

    /// As [`LpModel::objective_value`], accumulated in double-double precision.
    pub fn objective_value_compensated(&self, solution: &[f64]) -> CompensatedF64 {
        assert!(
            solution.len() >= self.num_col,
            "solution has {} entries for {} columns",
            solution.len(),
            self.num_col
        );
        let mut value = CompensatedF64::new(self.offset);
        for (cost, x) in self.col_cost[..self.num_col].iter().zip(solution) {
            value += CompensatedF64::product(*cost, *x);
        }
        value
    }

    /// Copy the model dimensions onto the matrix.
    pub fn set_matrix_dimensions(&mut self) {
        self.a_matrix.num_col = self.num_col;
        self.a_matrix.num_row = self.num_row;
    }

    pub fn set_format(&mut self, format: MatrixFormat) {
        self.a_matrix.set_format(format);
    }

    /// Reset to the empty model, including name counters, caches, scaling
    /// and the journal.
    pub fn clear(&mut self) {
        self.num_col = 0;
        self.num_row = 0;

        self.col_cost.clear();
        self.col_lower.clear();
        self.col_upper.clear();
        self.row_lower.clear();
        self.row_upper.clear();

        self.a_matrix.clear();

        self.sense = Sense::Minimize;
        self.offset = 0.0;

        self.model_name.clear();
        self.objective_name.clear();

        self.new_col_name_ix = 0;
        self.new_row_name_ix = 0;
        self.col_names.clear();
        self.row_names.clear();

        self.integrality.clear();

        self.col_hash.clear();
        self.row_hash.clear();

        self.reset_scale();
        self.is_scaled = false;
        self.is_moved = false;
        self.cost_row_location = None;
        self.mods.clear();

        tracing::debug!(
            component = "lp",
            operation = "clear",
            status = "success",
            "Cleared model"
        );
    }

    /// Move this model's contents out, leaving an empty model marked as lent.
    ///
    /// The only way back is [`LpModel::move_back_lp_and_unapply_scaling`].
    pub fn lend_lp(&mut self) -> LpModel {
        assert!(!self.is_moved, "model storage is already lent");
        let lent = std::mem::take(self);
        self.is_moved = true;
        tracing::debug!(
            component = "lp",
            operation = "lend",
            status = "success",
            num_col = lent.num_col,
            num_row = lent.num_row,
            is_scaled = lent.is_scaled,
            "Lent model storage"
        );
        lent
    }

    /// Take back storage lent by [`LpModel::lend_lp`] and make sure it is
    /// unscaled.
    pub fn move_back_lp_and_unapply_scaling(&mut self, lp: LpModel) {
        assert!(self.is_moved, "model storage was not lent");
        *self = lp;
        self.unapply_scale();
        assert!(!self.is_moved);
        tracing::debug!(
            component = "lp",
            operation = "move_back",
            status = "success",
            num_col = self.num_col,
            num_row = self.num_row,
            "Reclaimed model storage"
        );
    }
}
