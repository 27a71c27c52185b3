//! Column and row scale factors.

use crate::types::ScaleStrategy;

/// Multiplicative factors applied to a model's columns, rows and costs.
///
/// A column factor divides the column bounds and multiplies the cost; a row
/// factor multiplies the row bounds. Matrix entries are multiplied by both.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleRecord {
    pub strategy: ScaleStrategy,
    pub has_scaling: bool,
    pub num_col: usize,
    pub num_row: usize,
    pub cost: f64,
    pub col: Vec<f64>,
    pub row: Vec<f64>,
}

impl ScaleRecord {
    /// A record with the given factors and `has_scaling` set.
    pub fn new(strategy: ScaleStrategy, col: Vec<f64>, row: Vec<f64>) -> Self {
        Self {
            strategy,
            has_scaling: true,
            num_col: col.len(),
            num_row: row.len(),
            cost: 1.0,
            col,
            row,
        }
    }

    /// Return to the empty, switched-off state.
    pub fn clear(&mut self) {
        self.strategy = ScaleStrategy::Off;
        self.has_scaling = false;
        self.num_col = 0;
        self.num_row = 0;
        self.cost = 0.0;
        self.col.clear();
        self.row.clear();
    }

    /// First factor that cannot be divided by, as `(is_col, index, value)`.
    pub(crate) fn first_invalid_factor(&self) -> Option<(bool, usize, f64)> {
        let bad = |value: &f64| *value == 0.0 || !value.is_finite();
        if let Some((index, value)) = self.col.iter().enumerate().find(|(_, v)| bad(v)) {
            return Some((true, index, *value));
        }
        self.row
            .iter()
            .enumerate()
            .find(|(_, v)| bad(v))
            .map(|(index, value)| (false, index, *value))
    }
}
