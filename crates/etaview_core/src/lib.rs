//! Delivery time prediction core
//!
//! This crate provides the prediction engine behind the etaview terminal app:
//! - A narrow [`Regressor`] capability: batch-predict over an ordered,
//!   named-column table, one number per row
//! - A serialized model artifact (tree ensemble or linear) loaded by path
//! - Sensitivity sweeps: vary one feature across a range while holding the
//!   others fixed, scoring the whole range in a single model invocation
//! - Duration splitting for "H hr M min" display

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod duration;
pub mod error;
pub mod regressor;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod feature;
pub mod table;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use duration::split_duration;
pub use error::{ModelError, PredictError, SweepError};
pub use feature::{Feature, FeatureRange, FeatureVector};
pub use regressor::{
    DEFAULT_MODEL_FILENAME, DecisionTree, ForestModel, LinearModel, ModelArtifact, Regressor,
    TreeNode, load_model,
};
pub use sweep::{SweepPoint, SweepResult, predict_one, sweep};
pub use table::FeatureTable;
