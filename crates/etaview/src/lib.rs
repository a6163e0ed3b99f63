//! Terminal delivery time predictor
//!
//! Binds three feature controls (distance, courier rating, courier age) to a
//! session baseline, predicts a delivery time with a pre-trained regression
//! model, and renders sensitivity charts showing how the prediction moves as
//! each feature sweeps its range.

pub mod app;
pub mod components;
pub mod logging;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
