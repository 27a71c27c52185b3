//! Journal of the bound and type changes made when semi variables are
//! relaxed, so they can be undone exactly.
//!
//! Each category is a set of parallel vectors: an index vector and the
//! values saved for each index. Entries can only be added through the
//! `record_*` methods, which keep the vectors in step.

use crate::types::VarType;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpMods {
    non_semi_variable_index: Vec<usize>,
    inconsistent_semi_variable_index: Vec<usize>,
    inconsistent_semi_variable_lower_bound_value: Vec<f64>,
    inconsistent_semi_variable_upper_bound_value: Vec<f64>,
    inconsistent_semi_variable_type: Vec<VarType>,
    relaxed_semi_variable_lower_bound_index: Vec<usize>,
    relaxed_semi_variable_lower_bound_value: Vec<f64>,
    tightened_semi_variable_upper_bound_index: Vec<usize>,
    tightened_semi_variable_upper_bound_value: Vec<f64>,
}

/// A saved lower/upper/type triple for a semi column whose bounds were
/// inconsistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InconsistentSemi {
    pub col: usize,
    pub lower: f64,
    pub upper: f64,
    pub var_type: VarType,
}

impl LpMods {
    pub fn new() -> Self {
        Self::default()
    }

    /// A semi column converted to its ordinary type because its semi bound
    /// was trivial.
    pub fn record_non_semi(&mut self, col: usize) {
        self.non_semi_variable_index.push(col);
    }

    /// A semi column whose lower bound, upper bound and type were all
    /// overwritten.
    pub fn record_inconsistent_semi(
        &mut self,
        col: usize,
        lower: f64,
        upper: f64,
        var_type: VarType,
    ) {
        self.inconsistent_semi_variable_index.push(col);
        self.inconsistent_semi_variable_lower_bound_value.push(lower);
        self.inconsistent_semi_variable_upper_bound_value.push(upper);
        self.inconsistent_semi_variable_type.push(var_type);
    }

    /// A semi column whose lower bound was relaxed; `lower` is the original.
    pub fn record_relaxed_lower(&mut self, col: usize, lower: f64) {
        self.relaxed_semi_variable_lower_bound_index.push(col);
        self.relaxed_semi_variable_lower_bound_value.push(lower);
    }

    /// A semi column whose upper bound was tightened; `upper` is the original.
    pub fn record_tightened_upper(&mut self, col: usize, upper: f64) {
        self.tightened_semi_variable_upper_bound_index.push(col);
        self.tightened_semi_variable_upper_bound_value.push(upper);
    }

    pub fn non_semi_variables(&self) -> &[usize] {
        &self.non_semi_variable_index
    }

    pub fn inconsistent_semi_variables(&self) -> impl Iterator<Item = InconsistentSemi> + '_ {
        self.inconsistent_semi_variable_index
            .iter()
            .enumerate()
            .map(|(k, &col)| InconsistentSemi {
                col,
                lower: self.inconsistent_semi_variable_lower_bound_value[k],
                upper: self.inconsistent_semi_variable_upper_bound_value[k],
                var_type: self.inconsistent_semi_variable_type[k],
            })
    }

    /// `(col, original lower)` pairs.
    pub fn relaxed_lower_bounds(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.relaxed_semi_variable_lower_bound_index
            .iter()
            .copied()
            .zip(self.relaxed_semi_variable_lower_bound_value.iter().copied())
    }

    /// `(col, original upper)` pairs.
    pub fn tightened_upper_bounds(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.tightened_semi_variable_upper_bound_index
            .iter()
            .copied()
            .zip(self.tightened_semi_variable_upper_bound_value.iter().copied())
    }

    pub fn has_relaxed_lower_bounds(&self) -> bool {
        !self.relaxed_semi_variable_lower_bound_index.is_empty()
    }

    /// Total number of journalled entries across all categories.
    pub fn len(&self) -> usize {
        self.non_semi_variable_index.len()
            + self.inconsistent_semi_variable_index.len()
            + self.relaxed_semi_variable_lower_bound_index.len()
            + self.tightened_semi_variable_upper_bound_index.len()
    }

    /// True when every index and value vector is empty.
    pub fn is_clear(&self) -> bool {
        self.non_semi_variable_index.is_empty()
            && self.inconsistent_semi_variable_index.is_empty()
            && self.inconsistent_semi_variable_lower_bound_value.is_empty()
            && self.inconsistent_semi_variable_upper_bound_value.is_empty()
            && self.inconsistent_semi_variable_type.is_empty()
            && self.relaxed_semi_variable_lower_bound_index.is_empty()
            && self.relaxed_semi_variable_lower_bound_value.is_empty()
            && self.tightened_semi_variable_upper_bound_index.is_empty()
            && self.tightened_semi_variable_upper_bound_value.is_empty()
    }

    /// Parallel vectors within each category have matching lengths.
    pub(crate) fn is_consistent(&self) -> bool {
        let n = self.inconsistent_semi_variable_index.len();
        n == self.inconsistent_semi_variable_lower_bound_value.len()
            && n == self.inconsistent_semi_variable_upper_bound_value.len()
            && n == self.inconsistent_semi_variable_type.len()
            && self.relaxed_semi_variable_lower_bound_index.len()
                == self.relaxed_semi_variable_lower_bound_value.len()
            && self.tightened_semi_variable_upper_bound_index.len()
                == self.tightened_semi_variable_upper_bound_value.len()
    }

    pub fn clear(&mut self) {
        self.non_semi_variable_index.clear();
        self.inconsistent_semi_variable_index.clear();
        self.inconsistent_semi_variable_lower_bound_value.clear();
        self.inconsistent_semi_variable_upper_bound_value.clear();
        self.inconsistent_semi_variable_type.clear();
        self.relaxed_semi_variable_lower_bound_index.clear();
        self.relaxed_semi_variable_lower_bound_value.clear();
        self.tightened_semi_variable_upper_bound_index.clear();
        self.tightened_semi_variable_upper_bound_value.clear();
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_clear() {
        let mods = LpMods::new();
        assert!(mods.is_clear());
        assert_eq!(mods.len(), 0);
    }

    #[test]
    fn test_each_category_makes_journal_non_clear() {
        let mut mods = LpMods::new();
        mods.record_non_semi(0);
        assert!(!mods.is_clear());

        let mut mods = LpMods::new();
        mods.record_inconsistent_semi(1, 3.0, 2.0, VarType::SemiInteger);
        assert!(!mods.is_clear());

        let mut mods = LpMods::new();
        mods.record_relaxed_lower(2, 5.0);
        assert!(!mods.is_clear());

        let mut mods = LpMods::new();
        mods.record_tightened_upper(3, f64::INFINITY);
        assert!(!mods.is_clear());
    }

    #[test]
    fn test_orphan_value_vectors_count_as_entries() {
        let mut mods = LpMods::new();
        mods.tightened_semi_variable_upper_bound_value.push(1.0);
        assert!(!mods.is_clear());
        assert!(!mods.is_consistent());

        let mut mods = LpMods::new();
        mods.relaxed_semi_variable_lower_bound_value.push(1.0);
        assert!(!mods.is_clear());
    }

    #[test]
    fn test_accessors_pair_values() {
        let mut mods = LpMods::new();
        mods.record_inconsistent_semi(4, 3.0, 2.0, VarType::SemiContinuous);
        mods.record_relaxed_lower(2, 5.0);
        mods.record_relaxed_lower(6, 1.5);
        mods.record_tightened_upper(7, 1e9);

        let inconsistent: Vec<_> = mods.inconsistent_semi_variables().collect();
        assert_eq!(inconsistent, vec![InconsistentSemi {
            col: 4,
            lower: 3.0,
            upper: 2.0,
            var_type: VarType::SemiContinuous,
        }]);
        assert_eq!(
            mods.relaxed_lower_bounds().collect::<Vec<_>>(),
            vec![(2, 5.0), (6, 1.5)]
        );
        assert_eq!(
            mods.tightened_upper_bounds().collect::<Vec<_>>(),
            vec![(7, 1e9)]
        );
        assert!(mods.is_consistent());
        assert_eq!(mods.len(), 4);
    }

    #[test]
    fn test_clear_empties_all_categories() {
        let mut mods = LpMods::new();
        mods.record_non_semi(0);
        mods.record_inconsistent_semi(1, 3.0, 2.0, VarType::SemiInteger);
        mods.record_relaxed_lower(2, 5.0);
        mods.record_tightened_upper(3, 10.0);
        mods.clear();
        assert!(mods.is_clear());
        assert_eq!(mods, LpMods::default());
    }
}
