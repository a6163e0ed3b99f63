//! Regression models and artifact loading.
//!
//! The app consumes exactly one model capability: batch-predict over a
//! named-column table. Two concrete shapes satisfy it, both carried by the
//! same JSON artifact: an averaged ensemble of binary decision trees (what a
//! real trained model looks like) and a linear model (what the demo artifact
//! generator emits). Artifact internals are otherwise opaque to the rest of
//! the system; everything past `load_model` sees only `dyn Regressor`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, PredictError};
use crate::table::FeatureTable;

/// Artifact filename looked up in the working directory by default.
pub const DEFAULT_MODEL_FILENAME: &str = "delivery_time_model.json";

/// Batch prediction over an ordered named-column table.
///
/// Returns exactly one predicted value per row, in row order.
pub trait Regressor: std::fmt::Debug {
    fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, PredictError>;
}

/// One node of a decision tree. Trees are stored as flat arrays with the
/// root at index 0 and child pointers as array indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: u32,
        threshold: f64,
        left: u32,
        right: u32,
    },
    Leaf {
        value: f64,
    },
}

/// A binary regression tree in flat-array form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk the tree for one row. Numeric splits send
    /// `row[feature] < threshold` left, everything else right.
    fn score(&self, row: &[f64]) -> f64 {
        let mut node = 0usize;
        loop {
            match &self.nodes[node] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature as usize] < *threshold {
                        *left as usize
                    } else {
                        *right as usize
                    };
                }
            }
        }
    }

    /// Structural validation: every child pointer must stay in bounds and
    /// point strictly forward, which also guarantees traversal terminates.
    fn validate(&self, tree_index: usize, n_columns: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Invalid(format!("tree {tree_index} is empty")));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature as usize >= n_columns {
                    return Err(ModelError::Invalid(format!(
                        "tree {tree_index} node {i} splits on feature {feature} but the model has {n_columns} columns"
                    )));
                }
                for (side, child) in [("left", *left), ("right", *right)] {
                    if child as usize >= self.nodes.len() || child as usize <= i {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree_index} node {i} has out-of-order {side} child {child}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Averaged ensemble of decision trees (random-forest semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    /// Column names in the order the model was fit on.
    pub columns: Vec<String>,
    /// Added to the tree average for every prediction.
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    fn validate(&self) -> Result<(), ModelError> {
        if self.columns.is_empty() {
            return Err(ModelError::Invalid("model declares no columns".into()));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("forest has no trees".into()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.columns.len())?;
        }
        Ok(())
    }
}

impl Regressor for ForestModel {
    fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, PredictError> {
        check_columns(&self.columns, table)?;
        let predictions = table
            .rows()
            .map(|row| {
                let sum: f64 = self.trees.iter().map(|tree| tree.score(row)).sum();
                self.base_score + sum / self.trees.len() as f64
            })
            .collect();
        Ok(predictions)
    }
}

/// Linear model: intercept plus one coefficient per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub columns: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    fn validate(&self) -> Result<(), ModelError> {
        if self.columns.is_empty() {
            return Err(ModelError::Invalid("model declares no columns".into()));
        }
        if self.coefficients.len() != self.columns.len() {
            return Err(ModelError::Invalid(format!(
                "linear model has {} coefficients for {} columns",
                self.coefficients.len(),
                self.columns.len()
            )));
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, PredictError> {
        check_columns(&self.columns, table)?;
        let predictions = table
            .rows()
            .map(|row| {
                self.intercept
                    + row
                        .iter()
                        .zip(&self.coefficients)
                        .map(|(x, c)| x * c)
                        .sum::<f64>()
            })
            .collect();
        Ok(predictions)
    }
}

/// Serialized model artifact, tagged by model family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelArtifact {
    Forest(ForestModel),
    Linear(LinearModel),
}

impl ModelArtifact {
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ModelArtifact::Forest(m) => m.validate(),
            ModelArtifact::Linear(m) => m.validate(),
        }
    }

    pub fn into_regressor(self) -> Box<dyn Regressor> {
        match self {
            ModelArtifact::Forest(m) => Box::new(m),
            ModelArtifact::Linear(m) => Box::new(m),
        }
    }
}

/// Load and validate a model artifact.
///
/// The existence check runs first so a missing file surfaces as
/// [`ModelError::NotFound`] with the offending path rather than a bare
/// I/O error.
pub fn load_model(path: &Path) -> Result<Box<dyn Regressor>, ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)?;
    let artifact: ModelArtifact = serde_json::from_str(&raw)?;
    artifact.validate()?;
    Ok(artifact.into_regressor())
}

/// Reject tables whose column order differs from the model's.
fn check_columns(model_columns: &[String], table: &FeatureTable) -> Result<(), PredictError> {
    let table_columns = table.column_names();
    if model_columns.len() != table_columns.len()
        || model_columns
            .iter()
            .zip(&table_columns)
            .any(|(m, t)| m != t)
    {
        return Err(PredictError::ColumnMismatch {
            expected: model_columns.to_vec(),
            found: table_columns.iter().map(|c| c.to_string()).collect(),
        });
    }
    Ok(())
}
