//! In-memory LP/MIP model data for a solver pipeline.
//!
//! Around each solve a model is scaled and unscaled, its semi variables are
//! relaxed and later restored, and names are generated and looked up. These
//! operations live on [`LpModel`]; the pieces it owns are defined in the
//! modules below.

pub mod config;
pub mod matrix;
pub mod model;
pub mod mods;
pub mod name_hash;
pub mod num;
pub mod scale;
pub mod types;

pub use config::SemiVariableConfig;
pub use matrix::SparseMatrix;
pub use model::{COL_NAME_PREFIX, LpModel, ModelError, ROW_NAME_PREFIX};
pub use mods::{InconsistentSemi, LpMods};
pub use name_hash::{NameEntry, NameHash};
pub use num::CompensatedF64;
pub use scale::ScaleRecord;
pub use types::{MatrixFormat, ScaleStrategy, Sense, VarType};
