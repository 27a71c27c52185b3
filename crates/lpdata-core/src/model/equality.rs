//! Structural and name comparison of models.
//!
//! Every field is compared even after a difference is found, and each
//! difference is reported as a trace event, so a failed comparison can be
//! diffed from the log.

use tracing::trace;

use crate::model::LpModel;

impl LpModel {
    /// Compare dimensions, sense, offset, model name, costs, bounds, matrix
    /// and scaling record. Names of the objective, rows and columns are
    /// ignored.
    pub fn equal_but_for_names(&self, other: &LpModel) -> bool {
        let mut equal = true;
        equal &= field_eq("num_col", &self.num_col, &other.num_col);
        equal &= field_eq("num_row", &self.num_row, &other.num_row);
        equal &= field_eq("sense", &self.sense, &other.sense);
        equal &= field_eq("offset", &self.offset, &other.offset);
        equal &= field_eq("model_name", &self.model_name, &other.model_name);
        equal &= field_eq("col_cost", &self.col_cost, &other.col_cost);
        equal &= field_eq("col_upper", &self.col_upper, &other.col_upper);
        equal &= field_eq("col_lower", &self.col_lower, &other.col_lower);
        equal &= field_eq("row_upper", &self.row_upper, &other.row_upper);
        equal &= field_eq("row_lower", &self.row_lower, &other.row_lower);
        equal &= field_eq("a_matrix", &self.a_matrix, &other.a_matrix);

        let (scale, other_scale) = (&self.scale, &other.scale);
        equal &= field_eq("scale.strategy", &scale.strategy, &other_scale.strategy);
        equal &= field_eq(
            "scale.has_scaling",
            &scale.has_scaling,
            &other_scale.has_scaling,
        );
        equal &= field_eq("scale.num_col", &scale.num_col, &other_scale.num_col);
        equal &= field_eq("scale.num_row", &scale.num_row, &other_scale.num_row);
        equal &= field_eq("scale.cost", &scale.cost, &other_scale.cost);
        equal &= field_eq("scale.col", &scale.col, &other_scale.col);
        equal &= field_eq("scale.row", &scale.row, &other_scale.row);
        equal
    }

    /// Compare objective, row and column names only.
    pub fn equal_names(&self, other: &LpModel) -> bool {
        let mut equal = true;
        equal &= field_eq(
            "objective_name",
            &self.objective_name,
            &other.objective_name,
        );
        equal &= field_eq("row_names", &self.row_names, &other.row_names);
        equal &= field_eq("col_names", &self.col_names, &other.col_names);
        equal
    }
}

impl PartialEq for LpModel {
    fn eq(&self, other: &Self) -> bool {
        let equal = self.equal_but_for_names(other);
        self.equal_names(other) & equal
    }
}

fn field_eq<T: PartialEq + ?Sized>(field: &'static str, left: &T, right: &T) -> bool {
    let equal = left == right;
    if !equal {
        trace!(
            component = "lp",
            operation = "compare",
            status = "differs",
            field,
            "Model field differs"
        );
    }
    equal
}
