use serde::Deserialize;
use std::fmt;

pub const NUM_FEATURES: usize = 10;

/// Model-order feature names. The two misspellings are part of the form
/// contract inherited from the training export.
pub const FEATURE_FIELDS: [&str; NUM_FEATURES] = [
    "gender",
    "height",
    "weight",
    "bp_high",
    "bp_low",
    "cholestrol",
    "gluocose",
    "smoke",
    "alcohol",
    "active",
];

/// One row of inputs in the fixed model order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(pub [f64; NUM_FEATURES]);

/// The submitted screening form. Every field is optional so that a missing
/// key is reported by name instead of failing inside the form extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ScreeningForm {
    pub gender: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub bp_high: Option<String>,
    pub bp_low: Option<String>,
    pub cholestrol: Option<String>,
    pub gluocose: Option<String>,
    pub smoke: Option<String>,
    pub alcohol: Option<String>,
    pub active: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
    pub invalid: Vec<&'static str>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing fields: {}", self.missing.join(", ")));
        }
        if !self.invalid.is_empty() {
            parts.push(format!("non-numeric fields: {}", self.invalid.join(", ")));
        }
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

impl ScreeningForm {
    fn fields(&self) -> [(&'static str, Option<&str>); NUM_FEATURES] {
        [
            ("gender", self.gender.as_deref()),
            ("height", self.height.as_deref()),
            ("weight", self.weight.as_deref()),
            ("bp_high", self.bp_high.as_deref()),
            ("bp_low", self.bp_low.as_deref()),
            ("cholestrol", self.cholestrol.as_deref()),
            ("gluocose", self.gluocose.as_deref()),
            ("smoke", self.smoke.as_deref()),
            ("alcohol", self.alcohol.as_deref()),
            ("active", self.active.as_deref()),
        ]
    }

    /// Validate presence and numeric coercibility of all ten fields and
    /// assemble them into the model-order feature vector.
    pub fn to_features(&self) -> Result<FeatureVector, ValidationError> {
        let mut values = [0.0; NUM_FEATURES];
        let mut missing = Vec::new();
        let mut invalid = Vec::new();
        for (i, (name, raw)) in self.fields().into_iter().enumerate() {
            match raw.map(str::trim) {
                None | Some("") => missing.push(name),
                Some(text) => match text.parse::<f64>() {
                    Ok(value) if value.is_finite() => values[i] = value,
                    _ => invalid.push(name),
                },
            }
        }
        if missing.is_empty() && invalid.is_empty() {
            Ok(FeatureVector(values))
        } else {
            Err(ValidationError { missing, invalid })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> ScreeningForm {
        ScreeningForm {
            gender: Some("1".to_string()),
            height: Some("165".to_string()),
            weight: Some("70".to_string()),
            bp_high: Some("140".to_string()),
            bp_low: Some("90".to_string()),
            cholestrol: Some("2".to_string()),
            gluocose: Some("1".to_string()),
            smoke: Some("0".to_string()),
            alcohol: Some("0".to_string()),
            active: Some("1".to_string()),
        }
    }

    #[test]
    fn features_follow_model_order() {
        let features = full_form().to_features().unwrap();
        assert_eq!(
            features.0,
            [1.0, 165.0, 70.0, 140.0, 90.0, 2.0, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut form = full_form();
        form.weight = None;
        let err = form.to_features().unwrap_err();
        assert_eq!(err.missing, vec!["weight"]);
        assert!(err.invalid.is_empty());
    }

    #[test]
    fn blank_field_counts_as_missing() {
        let mut form = full_form();
        form.bp_low = Some("   ".to_string());
        let err = form.to_features().unwrap_err();
        assert_eq!(err.missing, vec!["bp_low"]);
    }

    #[test]
    fn non_numeric_field_is_reported_by_name() {
        let mut form = full_form();
        form.height = Some("tall".to_string());
        form.smoke = Some("sometimes".to_string());
        let err = form.to_features().unwrap_err();
        assert!(err.missing.is_empty());
        assert_eq!(err.invalid, vec!["height", "smoke"]);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut form = full_form();
        form.weight = Some("inf".to_string());
        let err = form.to_features().unwrap_err();
        assert_eq!(err.invalid, vec!["weight"]);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let mut form = full_form();
        form.gender = Some(" 1 ".to_string());
        assert!(form.to_features().is_ok());
    }
}
