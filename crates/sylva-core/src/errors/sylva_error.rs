use super::error_code::SylvaErrorCode;
use super::{ConfigError, GraphError};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SylvaError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SylvaErrorCode for SylvaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type SylvaResult<T> = std::result::Result<T, SylvaError>;
