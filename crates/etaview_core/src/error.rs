use std::fmt;
use std::path::PathBuf;

use crate::feature::Feature;

/// Errors raised while loading a model artifact from disk.
#[derive(Debug)]
pub enum ModelError {
    /// The artifact file does not exist. Fatal at startup; the app cannot
    /// function without a model.
    NotFound(PathBuf),
    /// The artifact file exists but could not be read.
    Io(std::io::Error),
    /// The artifact is not valid JSON for the expected schema.
    Parse(serde_json::Error),
    /// The artifact deserialized but is structurally unsound.
    Invalid(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::NotFound(path) => {
                write!(
                    f,
                    "model artifact '{}' was not found; place the pre-trained model there or pass --model",
                    path.display()
                )
            }
            ModelError::Io(e) => write!(f, "failed to read model artifact: {e}"),
            ModelError::Parse(e) => write!(f, "failed to parse model artifact: {e}"),
            ModelError::Invalid(msg) => write!(f, "invalid model artifact: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Io(e) => Some(e),
            ModelError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ModelError {
    fn from(e: std::io::Error) -> Self {
        ModelError::Io(e)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Parse(e)
    }
}

/// Errors raised by a regressor when it rejects a prediction table.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Table column order does not match the columns the model was fit on.
    ColumnMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// The model returned the wrong number of predictions for the table.
    OutputLength { expected: usize, found: usize },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::ColumnMismatch { expected, found } => {
                write!(
                    f,
                    "table columns {found:?} do not match model columns {expected:?}"
                )
            }
            PredictError::OutputLength { expected, found } => {
                write!(f, "model returned {found} predictions for {expected} rows")
            }
        }
    }
}

impl std::error::Error for PredictError {}

/// Errors raised while building or scoring a sensitivity sweep.
#[derive(Debug)]
pub enum SweepError {
    /// The feature to vary is not part of the table's column order.
    /// Programmer error given the fixed feature set; treated as a defect.
    InvalidFeature(Feature),
    /// An empty candidate range was supplied.
    EmptyRange,
    /// The model rejected the constructed table. Propagated unwrapped.
    Prediction(PredictError),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::InvalidFeature(feature) => {
                write!(f, "feature '{feature}' is not in the sweep column order")
            }
            SweepError::EmptyRange => write!(f, "sweep range is empty"),
            SweepError::Prediction(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Prediction(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PredictError> for SweepError {
    fn from(e: PredictError) -> Self {
        SweepError::Prediction(e)
    }
}
