use crate::display::interface::Display;
use crate::video_prediction::core::{FrameOutcome, Model, ModelClassifying};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    display: Arc<Mutex<dyn Display + Send + Sync>>,
}

impl Render {
    pub fn new(display: Arc<Mutex<dyn Display + Send + Sync>>) -> Self {
        Self { display }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (headline, detail) = lines(model);

        let mut display = self.display.lock().map_err(|e| e.to_string())?;

        display.clear()?;
        display.write_line(0, &headline)?;
        display.write_line(1, &detail)?;

        Ok(())
    }
}

pub fn lines(model: &Model) -> (String, String) {
    match model {
        Model::Picking => ("Pick a video".to_string(), String::new()),
        Model::Extracting { path } => (
            "Extracting frames...".to_string(),
            path.file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default(),
        ),
        Model::Classifying(classifying) => (
            classifying_headline(classifying),
            format!("{}/{} frames", classifying.completed, classifying.total),
        ),
        Model::Done {
            total, smoother, ..
        } => {
            let headline = match smoother.current() {
                Some(label) => label,
                None if *total == 0 => "No frames found".to_string(),
                None => "Not sure".to_string(),
            };
            (headline, format!("Done, {} frames", total))
        }
        Model::Failed { message } => (message.clone(), String::new()),
    }
}

fn classifying_headline(classifying: &ModelClassifying) -> String {
    if let Some(label) = classifying.smoother.current() {
        return label;
    }

    match &classifying.last {
        None => "Classifying...".to_string(),
        Some((_, FrameOutcome::NothingRecognized)) => "Nothing recognized.".to_string(),
        Some((_, FrameOutcome::Failed(_))) => "Unable to classify".to_string(),
        Some(_) => "Not sure".to_string(),
    }
}
