//! Integration tests for the prediction core
//!
//! Tests are organized by topic:
//! - `sweep` - sweep construction, ordering, and error boundaries
//! - `regressor` - artifact loading, validation, and model scoring

mod sweep;
