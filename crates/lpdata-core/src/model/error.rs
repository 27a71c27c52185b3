//! Model error types.

/// Errors returned by the fallible model operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Compressed matrix arrays are malformed
    InvalidMatrix { reason: String },
    /// A scaling record cannot be replaced while it is applied
    ScaleAlreadyApplied,
    /// Scaling record dimensions disagree with the model
    ScaleDimensionMismatch {
        num_col: usize,
        num_row: usize,
        scale_num_col: usize,
        scale_num_row: usize,
    },
    /// A scale factor is zero or not finite
    InvalidScaleFactor {
        kind: &'static str,
        index: usize,
        value: f64,
    },
    /// A name table is neither empty nor complete
    NameCountMismatch { expected: usize, got: usize },
    /// No column or row carries this name
    NameNotFound(String),
    /// The name is carried by more than one column or row
    DuplicateName(String),
    /// Per-entry input slices have the wrong length
    InputLengthMismatch { expected: usize, got: usize },
    /// Semi variable bounds cannot be relaxed
    IllegalSemiVariable { col: usize, lower: f64, upper: f64 },
    /// The modification journal still holds entries from an earlier pass
    UnrestoredModifications,
    /// Semi variables can only be relaxed while scaling is not applied
    ScaledSemiRelaxation,
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::InvalidMatrix { .. } => "MATRIX_INVALID",
            ModelError::ScaleAlreadyApplied => "SCALE_ALREADY_APPLIED",
            ModelError::ScaleDimensionMismatch { .. } => "SCALE_DIMENSION_MISMATCH",
            ModelError::InvalidScaleFactor { .. } => "SCALE_INVALID_FACTOR",
            ModelError::NameCountMismatch { .. } => "NAME_COUNT_MISMATCH",
            ModelError::NameNotFound(_) => "NAME_NOT_FOUND",
            ModelError::DuplicateName(_) => "NAME_DUPLICATE",
            ModelError::InputLengthMismatch { .. } => "INPUT_LENGTH_MISMATCH",
            ModelError::IllegalSemiVariable { .. } => "SEMI_VARIABLE_ILLEGAL",
            ModelError::UnrestoredModifications => "MODS_UNRESTORED",
            ModelError::ScaledSemiRelaxation => "SEMI_RELAX_SCALED",
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidMatrix { reason } => {
                write!(f, "[{}] Matrix invalid: {}", self.code(), reason)
            }
            ModelError::ScaleAlreadyApplied => write!(
                f,
                "[{}] Scaling is applied; unapply it before replacing the record",
                self.code()
            ),
            ModelError::ScaleDimensionMismatch {
                num_col,
                num_row,
                scale_num_col,
                scale_num_row,
            } => write!(
                f,
                "[{}] Scale factors are for {} columns and {} rows but the model has {} columns and {} rows",
                self.code(),
                scale_num_col,
                scale_num_row,
                num_col,
                num_row
            ),
            ModelError::InvalidScaleFactor { kind, index, value } => write!(
                f,
                "[{}] Scale factor for {} {} must be finite and non-zero (got {})",
                self.code(),
                kind,
                index,
                value
            ),
            ModelError::NameCountMismatch { expected, got } => write!(
                f,
                "[{}] Name table must be empty or hold {} names (got {})",
                self.code(),
                expected,
                got
            ),
            ModelError::NameNotFound(name) => {
                write!(f, "[{}] Name '{}' not found", self.code(), name)
            }
            ModelError::DuplicateName(name) => write!(
                f,
                "[{}] Name '{}' is not unique and cannot be resolved",
                self.code(),
                name
            ),
            ModelError::InputLengthMismatch { expected, got } => write!(
                f,
                "[{}] Input length must be {} (got {})",
                self.code(),
                expected,
                got
            ),
            ModelError::IllegalSemiVariable { col, lower, upper } => write!(
                f,
                "[{}] Semi variable {} has illegal bounds [{}, {}]",
                self.code(),
                col,
                lower,
                upper
            ),
            ModelError::UnrestoredModifications => write!(
                f,
                "[{}] Semi variable modifications from an earlier pass have not been restored",
                self.code()
            ),
            ModelError::ScaledSemiRelaxation => write!(
                f,
                "[{}] Semi variables cannot be relaxed while scaling is applied",
                self.code()
            ),
        }
    }
}

impl std::error::Error for ModelError {}
