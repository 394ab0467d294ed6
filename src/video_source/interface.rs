use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub index: usize,
    pub timestamp: Duration,
    pub width: u32,
    pub height: u32,
    /// Packed RGB8, row major.
    pub pixels: Vec<u8>,
}

pub trait VideoSource: Send + Sync {
    fn duration(&self, path: &Path) -> Result<Duration, Box<dyn std::error::Error + Send + Sync>>;
    fn frame_at(
        &self,
        path: &Path,
        time: Duration,
    ) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>>;
}
