//! Error handling for Sylva.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod sylva_error;

pub use config_error::ConfigError;
pub use error_code::SylvaErrorCode;
pub use graph_error::{GraphError, GraphResult};
pub use sylva_error::{SylvaError, SylvaResult};
