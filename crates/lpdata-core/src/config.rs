//! Configuration for the semi-variable relaxation pass.

/// Largest upper bound a semi variable keeps by default during relaxation.
pub const DEFAULT_MAX_SEMI_UPPER: f64 = 1e5;

/// Options controlling [`crate::LpModel::assess_semi_variables`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemiVariableConfig {
    /// Semi upper bounds above this are tightened to it. A semi variable
    /// whose lower bound exceeds it is rejected.
    pub max_semi_upper: f64,
}

impl SemiVariableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest upper bound a semi variable may keep.
    pub fn with_max_semi_upper(mut self, upper: f64) -> Self {
        self.max_semi_upper = upper;
        self
    }
}

impl Default for SemiVariableConfig {
    fn default() -> Self {
        Self {
            max_semi_upper: DEFAULT_MAX_SEMI_UPPER,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_semi_upper() {
        assert_eq!(SemiVariableConfig::new().max_semi_upper, 1e5);
    }

    #[test]
    fn test_builder() {
        let config = SemiVariableConfig::new().with_max_semi_upper(50.0);
        assert_eq!(config.max_semi_upper, 50.0);
    }
}
