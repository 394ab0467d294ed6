use std::path::PathBuf;

pub trait VideoPicker: Send + Sync {
    /// `None` when nothing usable was picked.
    fn pick(&self) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>>;
}
