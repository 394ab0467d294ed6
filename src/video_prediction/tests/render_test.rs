#[cfg(test)]
mod render_test {
    use crate::display::impl_fake::DisplayFake;
    use crate::prediction_smoother::core::PredictionSmoother;
    use crate::prediction_smoother::observation::Observation;
    use crate::video_prediction::core::{FrameOutcome, FrameStats, Model, ModelClassifying};
    use crate::video_prediction::render::{lines, Render};
    use crate::video_prediction::tests::fixture::frames;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    fn classifying(last: Option<FrameOutcome>, smoother: PredictionSmoother) -> Model {
        Model::Classifying(ModelClassifying {
            path: PathBuf::from("gym.mp4"),
            pending: frames(2).into(),
            in_flight: 1,
            completed: 3,
            total: 6,
            last: last.map(|outcome| (2, outcome)),
            stats: FrameStats::default(),
            smoother,
        })
    }

    #[test]
    fn test_render_writes_both_lines() {
        let display = DisplayFake::new();
        let render = Render::new(Arc::new(Mutex::new(display.clone())));

        render
            .render(&Model::Extracting {
                path: PathBuf::from("/videos/gym.mp4"),
            })
            .unwrap();

        assert_eq!(display.line(0), "Extracting frames...");
        assert_eq!(display.line(1), "gym.mp4");
    }

    #[test]
    fn test_classifying_before_first_result() {
        let (headline, detail) = lines(&classifying(None, PredictionSmoother::default()));

        assert_eq!(headline, "Classifying...");
        assert_eq!(detail, "3/6 frames");
    }

    #[test]
    fn test_classifying_without_confident_label() {
        let smoother = PredictionSmoother::default();

        let (below, _) = lines(&classifying(
            Some(FrameOutcome::BelowThreshold),
            smoother.clone(),
        ));
        let (nothing, _) = lines(&classifying(
            Some(FrameOutcome::NothingRecognized),
            smoother.clone(),
        ));
        let (failed, _) = lines(&classifying(
            Some(FrameOutcome::Failed("boom".to_string())),
            smoother,
        ));

        assert_eq!(below, "Not sure");
        assert_eq!(nothing, "Nothing recognized.");
        assert_eq!(failed, "Unable to classify");
    }

    #[test]
    fn test_classifying_shows_current_best() {
        let mut smoother = PredictionSmoother::default();
        smoother.admit(Observation::new("plank", 0.9)).unwrap();

        let (headline, _) = lines(&classifying(
            Some(FrameOutcome::NothingRecognized),
            smoother,
        ));

        assert_eq!(headline, "plank");
    }

    #[test]
    fn test_done() {
        let mut smoother = PredictionSmoother::default();
        smoother.admit(Observation::new("lunge", 0.8)).unwrap();

        let done = Model::Done {
            path: PathBuf::from("gym.mp4"),
            total: 12,
            stats: FrameStats::default(),
            smoother,
        };
        let unsure = Model::Done {
            path: PathBuf::from("gym.mp4"),
            total: 12,
            stats: FrameStats::default(),
            smoother: PredictionSmoother::default(),
        };
        let empty = Model::Done {
            path: PathBuf::from("gym.mp4"),
            total: 0,
            stats: FrameStats::default(),
            smoother: PredictionSmoother::default(),
        };

        assert_eq!(
            lines(&done),
            ("lunge".to_string(), "Done, 12 frames".to_string())
        );
        assert_eq!(lines(&unsure).0, "Not sure");
        assert_eq!(lines(&empty).0, "No frames found");
    }

    #[test]
    fn test_failed() {
        let (headline, detail) = lines(&Model::Failed {
            message: "Invalid video selected".to_string(),
        });

        assert_eq!(headline, "Invalid video selected");
        assert_eq!(detail, "");
    }
}
