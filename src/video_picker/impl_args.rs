use crate::library::logger::interface::Logger;
use crate::video_picker::interface::VideoPicker;
use std::path::PathBuf;
use std::sync::Arc;

/// Picks the video named on the command line, or the bundled sample when no
/// argument was given.
pub struct VideoPickerArgs {
    logger: Arc<dyn Logger + Send + Sync>,
    args: Vec<String>,
    fallback: Option<PathBuf>,
}

impl VideoPickerArgs {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        args: impl IntoIterator<Item = String>,
        fallback: Option<PathBuf>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("video_picker"),
            args: args.into_iter().collect(),
            fallback,
        }
    }
}

impl VideoPicker for VideoPickerArgs {
    fn pick(&self) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let picked = match self.args.first() {
            Some(arg) if !arg.trim().is_empty() => Some(PathBuf::from(arg)),
            Some(_) => None,
            None => self.fallback.clone(),
        };

        match &picked {
            Some(path) => self.logger.info(&format!("Picked {}", path.display()))?,
            None => self.logger.info("No video picked")?,
        }

        Ok(picked)
    }
}
