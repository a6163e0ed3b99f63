//! Tests for the sensitivity sweep
//!
//! These tests verify:
//! - Output length and candidate order are preserved
//! - Non-varied columns stay pinned to the baseline
//! - The model's batch-predict runs exactly once per sweep
//! - Boundary conditions surface the right errors

use std::cell::{Cell, RefCell};

use crate::error::{PredictError, SweepError};
use crate::feature::{Feature, FeatureVector};
use crate::regressor::Regressor;
use crate::sweep::{predict_one, sweep};
use crate::table::FeatureTable;

/// Stand-in model returning `10 * distance` per row, counting invocations
/// and recording every table it scores.
#[derive(Debug)]
struct TenTimesDistance {
    calls: Cell<usize>,
    tables: RefCell<Vec<FeatureTable>>,
}

impl TenTimesDistance {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
            tables: RefCell::new(Vec::new()),
        }
    }
}

impl Regressor for TenTimesDistance {
    fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, PredictError> {
        self.calls.set(self.calls.get() + 1);
        self.tables.borrow_mut().push(table.clone());

        let distance_col = table
            .order()
            .iter()
            .position(|f| *f == Feature::Distance)
            .ok_or_else(|| PredictError::ColumnMismatch {
                expected: vec!["distance".into()],
                found: table.column_names().iter().map(|c| c.to_string()).collect(),
            })?;

        Ok(table.rows().map(|row| 10.0 * row[distance_col]).collect())
    }
}

/// Stand-in model that rejects every table.
#[derive(Debug)]
struct AlwaysRejects;

impl Regressor for AlwaysRejects {
    fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, PredictError> {
        Err(PredictError::ColumnMismatch {
            expected: vec!["something_else".into()],
            found: table.column_names().iter().map(|c| c.to_string()).collect(),
        })
    }
}

fn baseline() -> FeatureVector {
    FeatureVector::new(4.5, 25.0, 10.0)
}

#[test]
fn test_sweep_end_to_end_ten_times_distance() {
    let model = TenTimesDistance::new();
    let values: Vec<f64> = (1..=50).map(f64::from).collect();

    let result = sweep(
        &model,
        &Feature::ORDER,
        &baseline(),
        Feature::Distance,
        &values,
    )
    .unwrap();

    assert_eq!(result.points.len(), 50);
    for (i, point) in result.points.iter().enumerate() {
        let expected_value = (i + 1) as f64;
        assert_eq!(point.value, expected_value, "candidate order not preserved");
        assert_eq!(point.predicted, 10.0 * expected_value);
    }
    // Baseline distance is 10.0
    assert_eq!(result.baseline_prediction, 100.0);
}

#[test]
fn test_sweep_length_matches_values() {
    let model = TenTimesDistance::new();
    let values = vec![3.0];

    let result = sweep(
        &model,
        &Feature::ORDER,
        &baseline(),
        Feature::Rating,
        &values,
    )
    .unwrap();

    assert_eq!(result.points.len(), 1);
    assert_eq!(result.points[0].value, 3.0);
}

#[test]
fn test_sweep_holds_other_columns_fixed() {
    let model = TenTimesDistance::new();
    let base = baseline();
    let values = vec![20.0, 30.0, 40.0];

    sweep(&model, &Feature::ORDER, &base, Feature::Age, &values).unwrap();

    let tables = model.tables.borrow();
    let table = &tables[0];
    // values rows plus the trailing baseline row
    assert_eq!(table.n_rows(), 4);
    for (i, &age) in values.iter().enumerate() {
        let row = table.row(i);
        assert_eq!(row[Feature::Rating.index()], base.rating);
        assert_eq!(row[Feature::Age.index()], age);
        assert_eq!(row[Feature::Distance.index()], base.distance);
    }
    assert_eq!(table.row(3), &[base.rating, base.age, base.distance]);
}

#[test]
fn test_sweep_calls_model_exactly_once() {
    let model = TenTimesDistance::new();
    let values: Vec<f64> = (0..100).map(|i| 1.0 + i as f64 * 0.49).collect();

    sweep(
        &model,
        &Feature::ORDER,
        &baseline(),
        Feature::Distance,
        &values,
    )
    .unwrap();

    assert_eq!(model.calls.get(), 1, "sweep must batch a single predict call");
}

#[test]
fn test_sweep_rejects_feature_outside_order() {
    let model = TenTimesDistance::new();
    // Order deliberately missing Age
    let order = [Feature::Rating, Feature::Distance];

    let err = sweep(&model, &order, &baseline(), Feature::Age, &[20.0]).unwrap_err();
    assert!(matches!(err, SweepError::InvalidFeature(Feature::Age)));
    assert_eq!(model.calls.get(), 0);
}

#[test]
fn test_sweep_rejects_empty_range() {
    let model = TenTimesDistance::new();

    let err = sweep(&model, &Feature::ORDER, &baseline(), Feature::Distance, &[]).unwrap_err();
    assert!(matches!(err, SweepError::EmptyRange));
    assert_eq!(model.calls.get(), 0);
}

#[test]
fn test_sweep_propagates_model_rejection() {
    let err = sweep(
        &AlwaysRejects,
        &Feature::ORDER,
        &baseline(),
        Feature::Distance,
        &[1.0, 2.0],
    )
    .unwrap_err();

    match err {
        SweepError::Prediction(PredictError::ColumnMismatch { expected, .. }) => {
            assert_eq!(expected, vec!["something_else".to_string()]);
        }
        other => panic!("expected propagated prediction failure, got {other:?}"),
    }
}

#[test]
fn test_predict_one_single_row_single_call() {
    let model = TenTimesDistance::new();

    let predicted = predict_one(&model, &Feature::ORDER, &baseline()).unwrap();

    assert_eq!(predicted, 100.0);
    assert_eq!(model.calls.get(), 1);
    assert_eq!(model.tables.borrow()[0].n_rows(), 1);
}
