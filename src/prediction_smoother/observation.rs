use crate::prediction_smoother::error::SmootherError;

pub type Label = String;

/// One top-ranked classification of a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub label: Label,
    pub confidence: f32,
}

impl Observation {
    pub fn new(label: impl Into<Label>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    pub fn validate(&self) -> Result<(), SmootherError> {
        if self.label.trim().is_empty() {
            return Err(SmootherError::InvalidObservation(
                "label is empty".to_string(),
            ));
        }

        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(SmootherError::InvalidObservation(format!(
                "confidence {} for {:?} is outside [0, 1]",
                self.confidence, self.label
            )));
        }

        Ok(())
    }
}
