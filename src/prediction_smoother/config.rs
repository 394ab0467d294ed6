use crate::prediction_smoother::error::SmootherError;

#[derive(Debug, Clone, PartialEq)]
pub struct SmootherConfig {
    /// Observations with a confidence at or below this value are discarded.
    pub admission_threshold: f32,
    /// Maximum number of admitted observations that take part in the vote.
    pub window_size: usize,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            admission_threshold: 0.7,
            window_size: 5,
        }
    }
}

impl SmootherConfig {
    pub fn validate(&self) -> Result<(), SmootherError> {
        if !(0.0..=1.0).contains(&self.admission_threshold) {
            return Err(SmootherError::InvalidConfig(format!(
                "admission threshold {} is outside [0, 1]",
                self.admission_threshold
            )));
        }

        if self.window_size == 0 {
            return Err(SmootherError::InvalidConfig(
                "window size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
