use crate::matrix::SparseMatrix;
use crate::model::LpModel;
use crate::scale::ScaleRecord;
use crate::types::{ScaleStrategy, VarType};

/// Three columns, two rows:
///
/// ```text
///   min  x0 + 2 x1 - x2
///   -inf <= x0       + 2 x2 <= 8
///      2 <= 3 x0 + 4 x1 + 5 x2 <= 6
/// ```
pub(super) fn small_lp() -> LpModel {
    let mut lp = LpModel::new();
    lp.num_col = 3;
    lp.num_row = 2;
    lp.col_cost = vec![1.0, 2.0, -1.0];
    lp.col_lower = vec![0.0, -4.0, 1.0];
    lp.col_upper = vec![10.0, 4.0, f64::INFINITY];
    lp.row_lower = vec![f64::NEG_INFINITY, 2.0];
    lp.row_upper = vec![8.0, 6.0];
    lp.a_matrix = SparseMatrix::from_colwise(
        2,
        vec![0, 2, 3, 5],
        vec![0, 1, 1, 0, 1],
        vec![1.0, 3.0, 4.0, 2.0, 5.0],
    )
    .unwrap();
    lp
}

/// Power-of-two factors, so scaling round trips are exact.
pub(super) fn scale_record() -> ScaleRecord {
    ScaleRecord::new(
        ScaleStrategy::Equilibration,
        vec![2.0, 4.0, 0.5],
        vec![1.0, 8.0],
    )
}

pub(super) fn scaled_lp() -> LpModel {
    let mut lp = small_lp();
    lp.set_scale(scale_record()).unwrap();
    lp
}

/// Five columns covering each semi variable case, no rows.
pub(super) fn semi_lp() -> LpModel {
    let mut lp = LpModel::new();
    lp.num_col = 5;
    lp.col_cost = vec![1.0; 5];
    lp.col_lower = vec![0.0, 0.0, 5.0, 3.0, 2.0];
    lp.col_upper = vec![1.0, 8.0, 20.0, 1.0, f64::INFINITY];
    lp.integrality = vec![
        VarType::Continuous,
        VarType::SemiContinuous,
        VarType::SemiInteger,
        VarType::SemiContinuous,
        VarType::SemiInteger,
    ];
    lp.set_matrix_dimensions();
    lp.a_matrix.exact_resize();
    lp
}

pub(super) fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|name| name.to_string()).collect()
}
