use crate::io_struct::{FeatureVector, NUM_FEATURES};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::Path;

fn default_threshold() -> f64 {
    0.5
}

fn default_classes() -> Vec<Value> {
    vec![json!(0), json!(1)]
}

/// On-disk classifier artifact, exported out-of-band by the training process.
///
/// `feature_names` records the input order contract; `classes` holds the labels
/// emitted for the negative and positive outcomes, as arbitrary JSON scalars
/// because exports in the wild carry both numeric `1` and textual `"1"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    pub scaler_mean: Vec<f64>,
    pub scaler_std: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_classes")]
    pub classes: Vec<Value>,
}

/// A validated artifact, loaded once at startup and shared read-only
/// across requests.
#[derive(Debug, Clone)]
pub struct RiskModel {
    artifact: ModelArtifact,
}

impl RiskModel {
    pub fn new(artifact: ModelArtifact) -> anyhow::Result<Self> {
        for (name, len) in [
            ("feature_names", artifact.feature_names.len()),
            ("scaler_mean", artifact.scaler_mean.len()),
            ("scaler_std", artifact.scaler_std.len()),
            ("coefficients", artifact.coefficients.len()),
        ] {
            if len != NUM_FEATURES {
                anyhow::bail!("artifact {} has {} entries, expected {}", name, len, NUM_FEATURES);
            }
        }
        if artifact.scaler_std.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            anyhow::bail!("artifact scaler_std entries must be positive and finite");
        }
        if !(artifact.threshold > 0.0 && artifact.threshold < 1.0) {
            anyhow::bail!("artifact threshold {} outside (0, 1)", artifact.threshold);
        }
        if artifact.classes.len() != 2 {
            anyhow::bail!("artifact must list exactly 2 classes, got {}", artifact.classes.len());
        }
        Ok(RiskModel { artifact })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read(path)
            .with_context(|| format!("failed to read model artifact {}", path.display()))?;
        let artifact: ModelArtifact = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse model artifact {}", path.display()))?;
        Self::new(artifact)
    }

    pub fn feature_names(&self) -> &[String] {
        &self.artifact.feature_names
    }

    /// Standardize the row, apply the logistic regression, and emit the class
    /// label for the thresholded probability.
    pub fn predict(&self, features: &FeatureVector) -> Value {
        let probability = self.predict_proba(features);
        let index = usize::from(probability >= self.artifact.threshold);
        self.artifact.classes[index].clone()
    }

    pub fn predict_proba(&self, features: &FeatureVector) -> f64 {
        let mut z = self.artifact.intercept;
        for i in 0..NUM_FEATURES {
            let x = (features.0[i] - self.artifact.scaler_mean[i]) / self.artifact.scaler_std[i];
            z += self.artifact.coefficients[i] * x;
        }
        1.0 / (1.0 + (-z).exp())
    }
}

/// Binary screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    AtRisk,
    NotAtRisk,
}

impl Risk {
    /// Coerce a predicted label into an outcome at the inference boundary.
    ///
    /// Positive only for numeric `1` or textual `"1"`; every other label is
    /// negative, and a label that is not a recognizable 0/1 is logged rather
    /// than silently folded into the negative outcome.
    pub fn from_label(label: &Value) -> Risk {
        match label {
            Value::Number(n) => {
                if n.as_i64() == Some(1) || n.as_f64() == Some(1.0) {
                    Risk::AtRisk
                } else {
                    if n.as_i64() != Some(0) && n.as_f64() != Some(0.0) {
                        log::warn!("unrecognized numeric prediction label {}, treating as negative", n);
                    }
                    Risk::NotAtRisk
                }
            }
            Value::String(s) => match s.trim() {
                "1" => Risk::AtRisk,
                "0" => Risk::NotAtRisk,
                other => {
                    log::warn!("unrecognized prediction label {:?}, treating as negative", other);
                    Risk::NotAtRisk
                }
            },
            other => {
                log::warn!("unrecognized prediction label {}, treating as negative", other);
                Risk::NotAtRisk
            }
        }
    }
}
