use crate::library::logger::interface::Logger;
use crate::video_source::interface::{Frame, VideoSource};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Grabs one frame at the start of every whole `step` the video covers, so a
/// 4.5s video at 1s steps yields frames at 0, 1, 2 and 3 seconds.
///
/// Frames that fail to decode are logged and skipped. Only a failure to read
/// the video itself is an error.
pub fn extract_frames(
    video_source: &dyn VideoSource,
    path: &Path,
    step: Duration,
    logger: &Arc<dyn Logger + Send + Sync>,
) -> Result<Vec<Frame>, Box<dyn std::error::Error + Send + Sync>> {
    if step.is_zero() {
        return Err("frame step must be greater than zero".into());
    }

    let duration = video_source.duration(path)?;

    let _ = logger.info(&format!(
        "Extracting frames from {} ({:.1}s, every {:.1}s)",
        path.display(),
        duration.as_secs_f64(),
        step.as_secs_f64()
    ));

    let mut frames = Vec::new();
    let mut time = Duration::ZERO;

    while time.checked_add(step).is_some_and(|end| end <= duration) {
        match video_source.frame_at(path, time) {
            Ok(mut frame) => {
                frame.index = frames.len();
                frame.timestamp = time;
                frames.push(frame);
            }
            Err(e) => {
                let _ = logger.info(&format!(
                    "Skipping frame at {:.1}s: {}",
                    time.as_secs_f64(),
                    e
                ));
            }
        }
        time += step;
    }

    let _ = logger.info(&format!("Extracted {} frames", frames.len()));

    Ok(frames)
}
