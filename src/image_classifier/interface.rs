use crate::prediction_smoother::observation::Observation;
use crate::video_source::interface::Frame;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

pub trait ImageClassifier: Send + Sync {
    /// Results are ranked by confidence, highest first. An empty list means
    /// nothing was recognized in the frame.
    fn classify(
        &self,
        frame: &Frame,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}

pub fn top_observation(classifications: &[Classification]) -> Option<Observation> {
    classifications
        .first()
        .map(|top| Observation::new(top.label.clone(), top.confidence))
}
