use crate::config::Config;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::video_picker::interface::VideoPicker;
use crate::video_prediction::core::{Effect, Msg};
use crate::video_source::extract::extract_frames;
use crate::video_source::interface::VideoSource;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    video_picker: Arc<dyn VideoPicker + Send + Sync>,
    video_source: Arc<dyn VideoSource + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        video_picker: Arc<dyn VideoPicker + Send + Sync>,
        video_source: Arc<dyn VideoSource + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger,
            video_picker,
            video_source,
            image_classifier,
        }
    }

    /// Performs one effect and reports its result. A closed channel means the
    /// session is already over, so send failures are dropped.
    pub fn run_effect(&self, effect: Effect, msg_sender: Sender<Msg>) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::PickVideo => {
                let picked = self.video_picker.pick();
                let _ = msg_sender.send(Msg::VideoPickDone(picked));
            }
            Effect::ExtractFrames { path } => {
                let frames = extract_frames(
                    self.video_source.as_ref(),
                    &path,
                    self.config.frame_step,
                    &self.logger,
                );
                let _ = msg_sender.send(Msg::FramesExtractDone(frames));
            }
            Effect::ClassifyFrame { frame } => {
                let result = self.image_classifier.classify(&frame);
                let _ = msg_sender.send(Msg::FrameClassifyDone {
                    index: frame.index,
                    result,
                });
            }
        }
    }
}
