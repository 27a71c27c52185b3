/// Optimization sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        }
    }
}

/// Integrality type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VarType {
    #[default]
    Continuous,
    Integer,
    /// Zero, or between a nontrivial lower and upper bound.
    SemiContinuous,
    /// Zero, or an integer between a nontrivial lower and upper bound.
    SemiInteger,
}

impl VarType {
    /// True for both semi-continuous and semi-integer columns.
    pub fn is_semi(self) -> bool {
        matches!(self, VarType::SemiContinuous | VarType::SemiInteger)
    }

    /// The ordinary type a semi column becomes once its semi bound is dropped.
    pub fn without_semi(self) -> Self {
        match self {
            VarType::SemiContinuous => VarType::Continuous,
            VarType::SemiInteger => VarType::Integer,
            other => other,
        }
    }

    /// The semi type an ordinary column is restored to.
    pub fn with_semi(self) -> Self {
        match self {
            VarType::Continuous => VarType::SemiContinuous,
            VarType::Integer => VarType::SemiInteger,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Continuous => "continuous",
            VarType::Integer => "integer",
            VarType::SemiContinuous => "semi_continuous",
            VarType::SemiInteger => "semi_integer",
        }
    }
}

/// Storage orientation of the coefficient matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixFormat {
    #[default]
    Colwise,
    Rowwise,
}

impl MatrixFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            MatrixFormat::Colwise => "colwise",
            MatrixFormat::Rowwise => "rowwise",
        }
    }
}

/// How the scale factors in a [`crate::ScaleRecord`] were derived.
///
/// Only recorded and compared here; computing factors happens elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleStrategy {
    #[default]
    Off,
    Choose,
    Equilibration,
    ForcedEquilibration,
    MaxValue,
}

impl ScaleStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            ScaleStrategy::Off => "off",
            ScaleStrategy::Choose => "choose",
            ScaleStrategy::Equilibration => "equilibration",
            ScaleStrategy::ForcedEquilibration => "forced_equilibration",
            ScaleStrategy::MaxValue => "max_value",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semi_type_round_trip() {
        assert_eq!(
            VarType::SemiContinuous.without_semi().with_semi(),
            VarType::SemiContinuous
        );
        assert_eq!(
            VarType::SemiInteger.without_semi().with_semi(),
            VarType::SemiInteger
        );
    }

    #[test]
    fn test_is_semi() {
        assert!(VarType::SemiContinuous.is_semi());
        assert!(VarType::SemiInteger.is_semi());
        assert!(!VarType::Continuous.is_semi());
        assert!(!VarType::Integer.is_semi());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Sense::default(), Sense::Minimize);
        assert_eq!(VarType::default(), VarType::Continuous);
        assert_eq!(MatrixFormat::default(), MatrixFormat::Colwise);
        assert_eq!(ScaleStrategy::default().as_str(), "off");
    }
}
