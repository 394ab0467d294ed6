use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmootherError {
    #[error("invalid smoother config: {0}")]
    InvalidConfig(String),
    #[error("invalid observation: {0}")]
    InvalidObservation(String),
}
