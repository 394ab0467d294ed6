use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::video_source::interface::Frame;
use rand::distr::{Distribution, Uniform};
use rand::seq::IndexedRandom;
use std::sync::Arc;

const ACTIVITIES: [&str; 8] = [
    "squat",
    "push-up",
    "plank",
    "lunge",
    "jumping-jack",
    "burpee",
    "sit-up",
    "deadlift",
];

/// Noisy stand-in for an on-device activity classifier. Most frames come back
/// as the dominant activity, the rest as a random one.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    dominant: String,
    dominant_rate: f32,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            dominant: ACTIVITIES[0].to_string(),
            dominant_rate: 0.75,
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        frame: &Frame,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!(
                "Classifying frame {} ({} bytes)...",
                frame.index,
                frame.pixels.len()
            ))?;

        let mut rng = rand::rng();

        let confidence_dist = Uniform::new_inclusive(0.0f32, 1.0)?;

        let top_label = if rand::random::<f32>() < self.dominant_rate {
            self.dominant.clone()
        } else {
            ACTIVITIES
                .choose(&mut rng)
                .map(|label| label.to_string())
                .unwrap_or_else(|| self.dominant.clone())
        };

        let top_confidence = confidence_dist.sample(&mut rng);

        let mut classifications = vec![Classification::new(top_label.clone(), top_confidence)];

        // Runner-up shares what is left of the probability mass
        if let Some(runner_up) = ACTIVITIES.iter().find(|label| **label != top_label) {
            let rest = (1.0 - top_confidence) * confidence_dist.sample(&mut rng);
            classifications.push(Classification::new(*runner_up, rest));
        }

        classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        Ok(classifications)
    }
}
