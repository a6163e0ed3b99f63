//! Development helper: writes a demo model artifact so the app can run
//! without a real trained model.
//!
//! The emitted linear model uses the coefficients of the synthetic data the
//! demo dataset was generated from: 15 + 2.5*distance - 3*rating +
//! 0.2*(age - 20) minutes, folded into a single intercept.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use etaview_core::regressor::{DEFAULT_MODEL_FILENAME, LinearModel, ModelArtifact};
use etaview_core::Feature;

#[derive(Parser, Debug)]
#[command(name = "make-model")]
#[command(about = "Write a demo delivery time model artifact")]
struct Args {
    /// Where to write the artifact
    #[arg(short, long, default_value = DEFAULT_MODEL_FILENAME)]
    output: PathBuf,
}

fn demo_artifact() -> ModelArtifact {
    ModelArtifact::Linear(LinearModel {
        columns: Feature::ORDER
            .iter()
            .map(|f| f.column_name().to_string())
            .collect(),
        // 15 - 0.2*20 folded into the intercept
        intercept: 11.0,
        coefficients: vec![-3.0, 0.2, 2.5],
    })
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let artifact = demo_artifact();
    artifact.validate()?;

    let json = serde_json::to_string_pretty(&artifact)?;
    std::fs::write(&args.output, json)
        .wrap_err_with(|| format!("failed to write {}", args.output.display()))?;

    println!("Wrote demo model artifact to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use etaview_core::{FeatureTable, FeatureVector, Regressor};

    #[test]
    fn test_demo_artifact_validates_and_predicts() {
        let artifact = demo_artifact();
        artifact.validate().unwrap();

        let model = artifact.into_regressor();
        let mut table = FeatureTable::new(&Feature::ORDER);
        table.push_row(&FeatureVector::new(4.0, 20.0, 10.0));

        let predictions = model.predict(&table).unwrap();
        // 15 + 2.5*10 - 3*4 + 0.2*(20-20)
        assert!((predictions[0] - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_written_artifact_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delivery_time_model.json");
        let json = serde_json::to_string_pretty(&demo_artifact()).unwrap();
        std::fs::write(&path, json).unwrap();

        let model = etaview_core::load_model(&path).unwrap();
        let mut table = FeatureTable::new(&Feature::ORDER);
        table.push_row(&FeatureVector::new(4.5, 25.0, 10.0));
        let predictions = model.predict(&table).unwrap();
        assert!((predictions[0] - (11.0 - 3.0 * 4.5 + 0.2 * 25.0 + 2.5 * 10.0)).abs() < 1e-9);
    }
}
