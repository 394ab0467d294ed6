use crate::library::logger::interface::Logger;
use crate::video_source::interface::{Frame, VideoSource};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const WIDTH: u32 = 32;
const HEIGHT: u32 = 24;

/// Synthetic video of noise frames. Whole-second timestamps listed as
/// undecodable fail like a corrupt frame would.
pub struct VideoSourceFake {
    logger: Arc<dyn Logger + Send + Sync>,
    duration: Duration,
    undecodable_secs: HashSet<u64>,
}

impl VideoSourceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, duration: Duration) -> Self {
        Self {
            logger: logger.with_namespace("video_source").with_namespace("fake"),
            duration,
            undecodable_secs: HashSet::new(),
        }
    }

    #[cfg(test)]
    pub fn with_undecodable(mut self, secs: &[u64]) -> Self {
        self.undecodable_secs.extend(secs.iter().copied());
        self
    }
}

impl VideoSource for VideoSourceFake {
    fn duration(&self, path: &Path) -> Result<Duration, Box<dyn std::error::Error + Send + Sync>> {
        if path.as_os_str().is_empty() {
            return Err("no video at empty path".into());
        }
        Ok(self.duration)
    }

    fn frame_at(
        &self,
        path: &Path,
        time: Duration,
    ) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
        if time >= self.duration {
            return Err(format!("{:?} is past the end of {}", time, path.display()).into());
        }

        if self.undecodable_secs.contains(&time.as_secs()) {
            return Err(format!("could not decode frame at {:?}", time).into());
        }

        let _ = self
            .logger
            .info(&format!("Decoded frame at {:.1}s", time.as_secs_f64()));

        let pixels: Vec<u8> = (0..WIDTH * HEIGHT * 3).map(|_| rand::random::<u8>()).collect();

        Ok(Frame {
            index: 0,
            timestamp: time,
            width: WIDTH,
            height: HEIGHT,
            pixels,
        })
    }
}
