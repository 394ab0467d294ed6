use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::video_source::interface::Frame;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Scripted {
    Ranked(Vec<Classification>),
    Failure(String),
}

/// Answers with a preset result per frame index. Frames without a script
/// come back with nothing recognized.
#[derive(Debug, Clone, Default)]
pub struct ImageClassifierScripted {
    by_frame: HashMap<usize, Scripted>,
}

impl ImageClassifierScripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, frame_index: usize, label: &str, confidence: f32) -> Self {
        self.by_frame.insert(
            frame_index,
            Scripted::Ranked(vec![Classification::new(label, confidence)]),
        );
        self
    }

    pub fn ranked(mut self, frame_index: usize, classifications: Vec<Classification>) -> Self {
        self.by_frame
            .insert(frame_index, Scripted::Ranked(classifications));
        self
    }

    pub fn failure(mut self, frame_index: usize, message: &str) -> Self {
        self.by_frame
            .insert(frame_index, Scripted::Failure(message.to_string()));
        self
    }
}

impl ImageClassifier for ImageClassifierScripted {
    fn classify(
        &self,
        frame: &Frame,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        match self.by_frame.get(&frame.index) {
            Some(Scripted::Ranked(classifications)) => Ok(classifications.clone()),
            Some(Scripted::Failure(message)) => Err(message.clone().into()),
            None => Ok(vec![]),
        }
    }
}
