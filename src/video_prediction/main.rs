use crate::config::Config;
use crate::display::interface::Display;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::prediction_smoother::observation::Label;
use crate::video_picker::interface::VideoPicker;
use crate::video_prediction::core::{init, transition, Effect, Model, Msg};
use crate::video_prediction::render::Render;
use crate::video_prediction::run_effect::RunEffect;
use crate::video_source::interface::VideoSource;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};

/// One video session: pick, extract frames, classify them, and keep a smoothed
/// prediction on the display.
///
/// Classifications finish on worker threads in any order but are applied to the
/// model one message at a time, so the smoother only ever has one writer.
#[derive(Clone)]
pub struct VideoPrediction {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    model: Arc<Mutex<Model>>,
    display: Arc<Mutex<dyn Display + Send + Sync>>,
    render: Render,
    run_effect: RunEffect,
}

impl VideoPrediction {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        video_picker: Arc<dyn VideoPicker + Send + Sync>,
        video_source: Arc<dyn VideoSource + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        display: Arc<Mutex<dyn Display + Send + Sync>>,
    ) -> Self {
        let logger = logger.with_namespace("video_prediction");

        let run_effect = RunEffect::new(
            config.clone(),
            logger.clone(),
            video_picker,
            video_source,
            image_classifier,
        );

        Self {
            config,
            model: Arc::new(Mutex::new(init().0)),
            render: Render::new(display.clone()),
            display,
            run_effect,
            logger,
        }
    }

    /// Latest smoothed label, read from a whole model snapshot.
    #[allow(dead_code)]
    pub fn current_prediction(&self) -> Option<Label> {
        self.snapshot().prediction()
    }

    pub fn snapshot(&self) -> Model {
        lock(&self.model).clone()
    }

    pub fn run(&self) -> Result<Model, Box<dyn std::error::Error + Send + Sync>> {
        self.display.lock().map_err(|e| e.to_string())?.init()?;

        let config = self.config.clone();
        let transition_logger = self.logger.clone();
        let transition_fn = move |model: Model, msg: Msg| {
            let _ = transition_logger.info(&format!("msg: {}", msg.to_display_string()));
            let (new_model, effects) = transition(&config, model, msg);
            let _ = transition_logger.info(&format!(
                "prediction: {:?}, effects: {}",
                new_model.prediction(),
                effects.len()
            ));
            (new_model, effects)
        };

        let model = self.model.clone();
        let render = self.render.clone();
        let render_logger = self.logger.clone();
        let render_fn = move |new_model: &Model| {
            *lock(&model) = new_model.clone();
            if let Err(e) = render.render(new_model) {
                let _ = render_logger.info(&format!("Render failed: {}", e));
            }
        };

        let run_effect = self.run_effect.clone();
        let run_effect_fn =
            move |effect: Effect, msg_sender: Sender<Msg>| run_effect.run_effect(effect, msg_sender);

        let state_machine = StateMachine::new(
            init(),
            transition_fn,
            render_fn,
            run_effect_fn,
            Model::is_done,
        );

        let final_model = state_machine.run()?;

        match &final_model {
            Model::Done {
                path,
                total,
                stats,
                smoother,
            } => {
                let _ = self.logger.info(&format!(
                    "{}: {:?} after {} frames ({:?})",
                    path.display(),
                    smoother.current(),
                    total,
                    stats
                ));
            }
            Model::Failed { message } => {
                let _ = self.logger.info(&format!("Session failed: {}", message));
            }
            _ => {}
        }

        Ok(final_model)
    }
}

fn lock(model: &Mutex<Model>) -> MutexGuard<'_, Model> {
    model.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
