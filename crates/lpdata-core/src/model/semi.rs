//! Relaxing semi variables to ordinary bounds and restoring them exactly.
//!
//! [`LpModel::assess_semi_variables`] and [`LpModel::relax_semi_variables`]
//! form one relaxation pass and record every change in the journal.
//! [`LpModel::unapply_mods`] undoes the changes and empties the journal. A
//! pass refuses to start while entries from an earlier pass are pending.
//!
//! The journal holds unscaled bounds. The pass is refused on a scaled model,
//! and restoring requires the model to be unscaled.

use tracing::debug;

use crate::config::SemiVariableConfig;
use crate::model::LpModel;
use crate::model::error::ModelError;
use crate::types::VarType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SemiAction {
    /// Lower above upper: the variable can only be zero.
    Inconsistent,
    /// Zero lower bound: the semi condition is trivial.
    NonSemi,
    /// Upper bound too large to model the semi condition; tighten it.
    TightenUpper,
    Keep,
    Illegal,
}

fn classify(lower: f64, upper: f64, max_semi_upper: f64) -> SemiAction {
    if lower > upper {
        SemiAction::Inconsistent
    } else if lower == 0.0 {
        SemiAction::NonSemi
    } else if lower < 0.0 {
        SemiAction::Illegal
    } else if upper > max_semi_upper {
        if lower > max_semi_upper {
            SemiAction::Illegal
        } else {
            SemiAction::TightenUpper
        }
    } else {
        SemiAction::Keep
    }
}

impl LpModel {
    /// Normalize semi variables before they are relaxed, journalling each
    /// change. Returns whether anything was modified.
    ///
    /// Nothing is modified if any semi variable has illegal bounds.
    pub fn assess_semi_variables(
        &mut self,
        config: &SemiVariableConfig,
    ) -> Result<bool, ModelError> {
        if self.is_scaled {
            return Err(ModelError::ScaledSemiRelaxation);
        }
        if !self.mods.is_clear() {
            return Err(ModelError::UnrestoredModifications);
        }
        if self.integrality.is_empty() {
            return Ok(false);
        }
        assert_eq!(self.integrality.len(), self.num_col);

        let max_semi_upper = config.max_semi_upper;
        let semi_cols: Vec<usize> = (0..self.num_col)
            .filter(|&col| self.integrality[col].is_semi())
            .collect();

        for &col in &semi_cols {
            let (lower, upper) = (self.col_lower[col], self.col_upper[col]);
            if classify(lower, upper, max_semi_upper) == SemiAction::Illegal {
                debug!(
                    component = "lp",
                    operation = "assess_semi_variables",
                    status = "failed",
                    col,
                    lower,
                    upper,
                    "Illegal semi variable bounds"
                );
                return Err(ModelError::IllegalSemiVariable { col, lower, upper });
            }
        }

        for &col in &semi_cols {
            let (lower, upper) = (self.col_lower[col], self.col_upper[col]);
            match classify(lower, upper, max_semi_upper) {
                SemiAction::Inconsistent => {
                    self.mods
                        .record_inconsistent_semi(col, lower, upper, self.integrality[col]);
                    self.col_lower[col] = 0.0;
                    self.col_upper[col] = 0.0;
                    self.integrality[col] = VarType::Continuous;
                }
                SemiAction::NonSemi => {
                    self.mods.record_non_semi(col);
                    self.integrality[col] = self.integrality[col].without_semi();
                }
                SemiAction::TightenUpper => {
                    self.mods.record_tightened_upper(col, upper);
                    self.col_upper[col] = max_semi_upper;
                }
                SemiAction::Keep | SemiAction::Illegal => {}
            }
        }

        let made_mods = !self.mods.is_clear();
        debug!(
            component = "lp",
            operation = "assess_semi_variables",
            status = "success",
            num_semi = semi_cols.len(),
            num_modified = self.mods.len(),
            "Assessed semi variables"
        );
        Ok(made_mods)
    }

    /// Relax the lower bound of every semi variable to zero, journalling
    /// the original. Returns whether any bound was relaxed.
    pub fn relax_semi_variables(&mut self) -> Result<bool, ModelError> {
        if self.is_scaled {
            return Err(ModelError::ScaledSemiRelaxation);
        }
        if self.mods.has_relaxed_lower_bounds() {
            return Err(ModelError::UnrestoredModifications);
        }
        if self.integrality.is_empty() {
            return Ok(false);
        }
        assert_eq!(self.integrality.len(), self.num_col);

        let mut num_relaxed = 0;
        for col in 0..self.num_col {
            if self.integrality[col].is_semi() && self.col_lower[col] > 0.0 {
                self.mods.record_relaxed_lower(col, self.col_lower[col]);
                self.col_lower[col] = 0.0;
                num_relaxed += 1;
            }
        }
        debug!(
            component = "lp",
            operation = "relax_semi_variables",
            status = "success",
            num_relaxed,
            "Relaxed semi variable lower bounds"
        );
        Ok(num_relaxed > 0)
    }

    /// Undo every journalled change, then clear the journal.
    ///
    /// Restores in a fixed order: types of non-semi conversions, the saved
    /// state of inconsistent semi variables, relaxed lower bounds and then
    /// tightened upper bounds.
    ///
    /// # Panics
    ///
    /// Panics if scaling is applied while the journal holds entries.
    pub fn unapply_mods(&mut self) {
        assert!(
            !self.is_scaled || self.mods.is_clear(),
            "semi variable modifications must be restored on the unscaled model"
        );
        debug_assert!(self.mods.is_consistent());
        let mut mods = std::mem::take(&mut self.mods);

        for &col in mods.non_semi_variables() {
            let var_type = self.integrality[col];
            debug_assert!(matches!(var_type, VarType::Continuous | VarType::Integer));
            self.integrality[col] = var_type.with_semi();
        }

        for saved in mods.inconsistent_semi_variables() {
            self.col_lower[saved.col] = saved.lower;
            self.col_upper[saved.col] = saved.upper;
            self.integrality[saved.col] = saved.var_type;
        }

        for (col, lower) in mods.relaxed_lower_bounds() {
            debug_assert!(self.integrality[col].is_semi());
            self.col_lower[col] = lower;
        }

        for (col, upper) in mods.tightened_upper_bounds() {
            debug_assert!(self.integrality[col].is_semi());
            self.col_upper[col] = upper;
        }

        let num_restored = mods.len();
        mods.clear();
        self.mods = mods;
        debug!(
            component = "lp",
            operation = "unapply_mods",
            status = "success",
            num_restored,
            "Restored semi variable modifications"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(3.0, 2.0, 1e5), SemiAction::Inconsistent);
        assert_eq!(classify(0.0, 10.0, 1e5), SemiAction::NonSemi);
        assert_eq!(classify(-1.0, 10.0, 1e5), SemiAction::Illegal);
        assert_eq!(classify(2.0, f64::INFINITY, 1e5), SemiAction::TightenUpper);
        assert_eq!(classify(2e5, f64::INFINITY, 1e5), SemiAction::Illegal);
        assert_eq!(classify(2.0, 10.0, 1e5), SemiAction::Keep);
    }
}
