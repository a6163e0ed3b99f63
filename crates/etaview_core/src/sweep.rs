//! Sensitivity sweeps: hold the baseline fixed, vary one feature across a
//! candidate range, and score the whole range in one model invocation.

use crate::error::{PredictError, SweepError};
use crate::feature::{Feature, FeatureVector};
use crate::regressor::Regressor;
use crate::table::FeatureTable;

/// One scored candidate value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub value: f64,
    pub predicted: f64,
}

/// Result of sweeping one feature, in the candidate order given.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub feature: Feature,
    pub points: Vec<SweepPoint>,
    /// Prediction for the unmodified baseline, for the marker line.
    pub baseline_prediction: f64,
}

impl SweepResult {
    /// Smallest predicted value, including the baseline prediction.
    pub fn min_predicted(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.predicted)
            .fold(self.baseline_prediction, f64::min)
    }

    /// Largest predicted value, including the baseline prediction.
    pub fn max_predicted(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.predicted)
            .fold(self.baseline_prediction, f64::max)
    }
}

/// Score `values` for `feature_to_vary` against a fixed baseline.
///
/// Builds one row per candidate value, each a copy of the baseline with the
/// varied column replaced, with columns ordered exactly as `order`. The
/// baseline itself rides along as a final extra row so the model is invoked
/// exactly once for the whole sweep; the output preserves candidate order.
pub fn sweep(
    model: &dyn Regressor,
    order: &[Feature],
    baseline: &FeatureVector,
    feature_to_vary: Feature,
    values: &[f64],
) -> Result<SweepResult, SweepError> {
    if !order.contains(&feature_to_vary) {
        return Err(SweepError::InvalidFeature(feature_to_vary));
    }
    if values.is_empty() {
        return Err(SweepError::EmptyRange);
    }

    let mut table = FeatureTable::with_capacity(order, values.len() + 1);
    for &value in values {
        let mut case = *baseline;
        case.set(feature_to_vary, value);
        table.push_row(&case);
    }
    table.push_row(baseline);

    let mut predictions = model.predict(&table)?;
    if predictions.len() != table.n_rows() {
        return Err(PredictError::OutputLength {
            expected: table.n_rows(),
            found: predictions.len(),
        }
        .into());
    }

    let baseline_prediction = predictions.pop().unwrap_or_default();
    let points = values
        .iter()
        .zip(predictions)
        .map(|(&value, predicted)| SweepPoint { value, predicted })
        .collect();

    Ok(SweepResult {
        feature: feature_to_vary,
        points,
        baseline_prediction,
    })
}

/// Predict the baseline as a single case: one row, columns ordered per
/// `order`, one predict call.
pub fn predict_one(
    model: &dyn Regressor,
    order: &[Feature],
    baseline: &FeatureVector,
) -> Result<f64, SweepError> {
    let mut table = FeatureTable::with_capacity(order, 1);
    table.push_row(baseline);

    let predictions = model.predict(&table)?;
    match predictions.first() {
        Some(&predicted) => Ok(predicted),
        None => Err(PredictError::OutputLength {
            expected: 1,
            found: 0,
        }
        .into()),
    }
}
