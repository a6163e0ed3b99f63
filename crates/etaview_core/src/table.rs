//! Ordered named-column tables fed to a regressor.

use crate::feature::{Feature, FeatureVector};

/// A batch of prediction cases with a fixed column order.
///
/// Columns are ordered exactly as given at construction and never reordered;
/// rows are stored flat in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    order: Vec<Feature>,
    values: Vec<f64>,
}

impl FeatureTable {
    pub fn new(order: &[Feature]) -> Self {
        Self::with_capacity(order, 0)
    }

    pub fn with_capacity(order: &[Feature], rows: usize) -> Self {
        Self {
            order: order.to_vec(),
            values: Vec::with_capacity(rows * order.len()),
        }
    }

    /// The column order this table was built with.
    pub fn order(&self) -> &[Feature] {
        &self.order
    }

    /// Column names, in column order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.order.iter().map(Feature::column_name).collect()
    }

    pub fn n_columns(&self) -> usize {
        self.order.len()
    }

    pub fn n_rows(&self) -> usize {
        if self.order.is_empty() {
            0
        } else {
            self.values.len() / self.order.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append one case, laying its values out in this table's column order.
    pub fn push_row(&mut self, case: &FeatureVector) {
        for feature in &self.order {
            self.values.push(case.get(*feature));
        }
    }

    /// One row as a slice, in column order.
    pub fn row(&self, index: usize) -> &[f64] {
        let width = self.order.len();
        &self.values[index * width..(index + 1) * width]
    }

    /// Iterate over rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.order.len().max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_column_order() {
        let mut table = FeatureTable::new(&Feature::ORDER);
        table.push_row(&FeatureVector::new(4.5, 25.0, 10.0));

        assert_eq!(table.n_rows(), 1);
        assert_eq!(table.row(0), &[4.5, 25.0, 10.0]);
        assert_eq!(table.column_names(), vec!["rating", "age", "distance"]);
    }

    #[test]
    fn test_custom_order_respected() {
        let order = [Feature::Distance, Feature::Rating, Feature::Age];
        let mut table = FeatureTable::new(&order);
        table.push_row(&FeatureVector::new(4.5, 25.0, 10.0));

        assert_eq!(table.row(0), &[10.0, 4.5, 25.0]);
    }
}
