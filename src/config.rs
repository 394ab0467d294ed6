use crate::prediction_smoother::config::SmootherConfig;
use chrono::Offset;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub smoother: SmootherConfig,
    /// Distance between extracted frames.
    pub frame_step: Duration,
    /// Upper bound on frames being classified at the same time.
    pub max_frames_in_flight: usize,
    pub default_video_path: Option<PathBuf>,
    pub fake_video_duration: Duration,
    pub display_kind: DisplayKind,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smoother: SmootherConfig::default(),
            frame_step: Duration::from_secs(1),
            max_frames_in_flight: 4,
            default_video_path: Some(PathBuf::from("big_buck_bunny_720p_5mb.mp4")),
            fake_video_duration: Duration::from_secs(30),
            display_kind: DisplayKind::Console,
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}

impl Config {
    /// Applies command-line flags and hands back the remaining arguments.
    pub fn apply_args(mut self, args: impl IntoIterator<Item = String>) -> (Self, Vec<String>) {
        let mut rest = vec![];
        for arg in args {
            match arg.as_str() {
                "--gui" => self.display_kind = DisplayKind::Gui,
                "--console" => self.display_kind = DisplayKind::Console,
                _ => rest.push(arg),
            }
        }
        (self, rest)
    }
}
