//! The feature set the delivery time model is trained on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three inputs to the delivery time model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Rating,
    Age,
    Distance,
}

impl Feature {
    /// Canonical column order the model expects. Every prediction table is
    /// assembled in exactly this order; the model contract is order-sensitive.
    pub const ORDER: [Feature; 3] = [Feature::Rating, Feature::Age, Feature::Distance];

    /// Column name used in model artifacts and prediction tables.
    pub fn column_name(&self) -> &'static str {
        match self {
            Feature::Rating => "rating",
            Feature::Age => "age",
            Feature::Distance => "distance",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Rating => "Courier Rating",
            Feature::Age => "Courier Age",
            Feature::Distance => "Distance (km)",
        }
    }

    /// Position of this feature in [`Feature::ORDER`].
    pub fn index(&self) -> usize {
        match self {
            Feature::Rating => 0,
            Feature::Age => 1,
            Feature::Distance => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Feature::Rating),
            1 => Some(Feature::Age),
            2 => Some(Feature::Distance),
            _ => None,
        }
    }

    /// Declared input range for the bound UI control.
    pub fn range(&self) -> FeatureRange {
        match self {
            Feature::Rating => FeatureRange::new(1.0, 5.0, 0.1),
            Feature::Age => FeatureRange::new(18.0, 60.0, 1.0),
            Feature::Distance => FeatureRange::new(0.1, 50.0, 0.1),
        }
    }

    /// Candidate values scored when this feature is swept for its chart.
    ///
    /// Continuous features use 100 evenly spaced points; age is swept over
    /// whole years. The distance sweep starts at 1 km rather than the control
    /// minimum of 0.1 km.
    pub fn sweep_values(&self) -> Vec<f64> {
        match self {
            Feature::Rating => linspace(1.0, 5.0, 100),
            Feature::Age => (18..=60).map(f64::from).collect(),
            Feature::Distance => linspace(1.0, 50.0, 100),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Declared bounds and step size for one input control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FeatureRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into the declared bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Clamp a value and round it to the nearest step multiple. Keeps
    /// slider-adjusted values on a clean grid (one decimal for 0.1 steps,
    /// whole numbers for integer features).
    pub fn snap(&self, value: f64) -> f64 {
        let quantized = (value / self.step).round() * self.step;
        // Undo binary float drift from the division above
        let rounded = (quantized * 1e6).round() / 1e6;
        self.clamp(rounded)
    }
}

/// The user's currently selected value for every feature.
///
/// Total mapping: all three features always have a value. Built fresh per
/// interaction and passed by value into the prediction routines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub rating: f64,
    pub age: f64,
    pub distance: f64,
}

impl FeatureVector {
    pub fn new(rating: f64, age: f64, distance: f64) -> Self {
        Self {
            rating,
            age,
            distance,
        }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Rating => self.rating,
            Feature::Age => self.age,
            Feature::Distance => self.distance,
        }
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        match feature {
            Feature::Rating => self.rating = value,
            Feature::Age => self.age = value,
            Feature::Distance => self.distance = value,
        }
    }
}
