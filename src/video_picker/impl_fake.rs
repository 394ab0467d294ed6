use crate::video_picker::interface::VideoPicker;
use std::path::PathBuf;

pub struct VideoPickerFake {
    picked: Option<PathBuf>,
}

impl VideoPickerFake {
    pub fn new(picked: Option<PathBuf>) -> Self {
        Self { picked }
    }
}

impl VideoPicker for VideoPickerFake {
    fn pick(&self) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.picked.clone())
    }
}
