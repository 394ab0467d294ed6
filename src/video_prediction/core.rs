use crate::config::Config;
use crate::image_classifier::interface::{top_observation, Classification};
use crate::prediction_smoother::core::PredictionSmoother;
use crate::prediction_smoother::observation::Label;
use crate::video_source::interface::Frame;
use std::collections::VecDeque;
use std::path::PathBuf;

//
// Model
//

#[derive(Clone, Debug, PartialEq)]
pub enum Model {
    Picking,
    Extracting {
        path: PathBuf,
    },
    Classifying(ModelClassifying),
    Done {
        path: PathBuf,
        total: usize,
        stats: FrameStats,
        smoother: PredictionSmoother,
    },
    Failed {
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelClassifying {
    pub path: PathBuf,
    pub pending: VecDeque<Frame>,
    pub in_flight: usize,
    pub completed: usize,
    pub total: usize,
    pub last: Option<(usize, FrameOutcome)>,
    pub stats: FrameStats,
    pub smoother: PredictionSmoother,
}

/// What happened to a single classified frame.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    Admitted,
    BelowThreshold,
    NothingRecognized,
    Invalid(String),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub admitted: usize,
    pub below_threshold: usize,
    pub nothing_recognized: usize,
    pub invalid: usize,
    pub failed: usize,
}

impl FrameStats {
    fn record(&mut self, outcome: &FrameOutcome) {
        match outcome {
            FrameOutcome::Admitted => self.admitted += 1,
            FrameOutcome::BelowThreshold => self.below_threshold += 1,
            FrameOutcome::NothingRecognized => self.nothing_recognized += 1,
            FrameOutcome::Invalid(_) => self.invalid += 1,
            FrameOutcome::Failed(_) => self.failed += 1,
        }
    }
}

impl Model {
    pub fn prediction(&self) -> Option<Label> {
        match self {
            Model::Classifying(classifying) => classifying.smoother.current(),
            Model::Done { smoother, .. } => smoother.current(),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Model::Done { .. } | Model::Failed { .. })
    }
}

//
// Msg
//

#[derive(Debug)]
pub enum Msg {
    VideoPickDone(Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>>),
    FramesExtractDone(Result<Vec<Frame>, Box<dyn std::error::Error + Send + Sync>>),
    FrameClassifyDone {
        index: usize,
        result: Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Msg {
    pub fn to_display_string(&self) -> String {
        match self {
            Msg::FramesExtractDone(Ok(frames)) => {
                format!("FramesExtractDone(Ok({} frames))", frames.len())
            }
            msg => format!("{:?}", msg),
        }
    }
}

//
// Effect
//

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PickVideo,
    ExtractFrames { path: PathBuf },
    ClassifyFrame { frame: Frame },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyFrame { frame } => format!(
                "ClassifyFrame {{ index: {}, timestamp: {:?}, size: {}x{} }}",
                frame.index, frame.timestamp, frame.width, frame.height
            ),
            effect => format!("{:?}", effect),
        }
    }
}

//
// Transition
//

pub fn init() -> (Model, Vec<Effect>) {
    (Model::Picking, vec![Effect::PickVideo])
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match (model, msg) {
        (Model::Picking, Msg::VideoPickDone(Ok(Some(path)))) => (
            Model::Extracting { path: path.clone() },
            vec![Effect::ExtractFrames { path }],
        ),
        (Model::Picking, Msg::VideoPickDone(Ok(None))) => (
            Model::Failed {
                message: "Invalid video selected".to_string(),
            },
            vec![],
        ),
        (Model::Picking, Msg::VideoPickDone(Err(e))) => (
            Model::Failed {
                message: format!("Unable to pick video: {}", e),
            },
            vec![],
        ),

        (Model::Extracting { path }, Msg::FramesExtractDone(Ok(frames))) => {
            let smoother = match PredictionSmoother::new(config.smoother.clone()) {
                Ok(smoother) => smoother,
                Err(e) => {
                    return (
                        Model::Failed {
                            message: e.to_string(),
                        },
                        vec![],
                    )
                }
            };

            if frames.is_empty() {
                return (
                    Model::Done {
                        path,
                        total: 0,
                        stats: FrameStats::default(),
                        smoother,
                    },
                    vec![],
                );
            }

            let mut classifying = ModelClassifying {
                path,
                total: frames.len(),
                pending: frames.into(),
                in_flight: 0,
                completed: 0,
                last: None,
                stats: FrameStats::default(),
                smoother,
            };

            let effects = dispatch(config, &mut classifying);

            (Model::Classifying(classifying), effects)
        }
        (Model::Extracting { .. }, Msg::FramesExtractDone(Err(e))) => (
            Model::Failed {
                message: format!("Unable to read video: {}", e),
            },
            vec![],
        ),

        (Model::Classifying(mut classifying), Msg::FrameClassifyDone { index, result }) => {
            classifying.in_flight = classifying.in_flight.saturating_sub(1);
            classifying.completed += 1;

            let outcome = admit_frame(&mut classifying.smoother, result);
            classifying.stats.record(&outcome);
            classifying.last = Some((index, outcome));

            if classifying.completed >= classifying.total {
                return (
                    Model::Done {
                        path: classifying.path,
                        total: classifying.total,
                        stats: classifying.stats,
                        smoother: classifying.smoother,
                    },
                    vec![],
                );
            }

            let effects = dispatch(config, &mut classifying);

            (Model::Classifying(classifying), effects)
        }

        (model, _) => (model, vec![]),
    }
}

/// Tops the in-flight classifications back up to the configured limit.
fn dispatch(config: &Config, classifying: &mut ModelClassifying) -> Vec<Effect> {
    let limit = config.max_frames_in_flight.max(1);
    let mut effects = vec![];

    while classifying.in_flight < limit {
        match classifying.pending.pop_front() {
            Some(frame) => {
                classifying.in_flight += 1;
                effects.push(Effect::ClassifyFrame { frame });
            }
            None => break,
        }
    }

    effects
}

fn admit_frame(
    smoother: &mut PredictionSmoother,
    result: Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>,
) -> FrameOutcome {
    let classifications = match result {
        Ok(classifications) => classifications,
        Err(e) => return FrameOutcome::Failed(e.to_string()),
    };

    let observation = match top_observation(&classifications) {
        Some(observation) => observation,
        None => return FrameOutcome::NothingRecognized,
    };

    let admitted = observation.confidence > smoother.config().admission_threshold;

    match smoother.admit(observation) {
        Ok(_) if admitted => FrameOutcome::Admitted,
        Ok(_) => FrameOutcome::BelowThreshold,
        Err(e) => FrameOutcome::Invalid(e.to_string()),
    }
}
