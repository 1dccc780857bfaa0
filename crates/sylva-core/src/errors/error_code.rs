//! Stable error codes for callers that log or match on strings.

/// Every error enum implements this to expose a structured code.
pub trait SylvaErrorCode {
    /// Returns the error code string (e.g., "NODE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NODE_NOT_FOUND: &str = "NODE_NOT_FOUND";
pub const DUPLICATE_NODE: &str = "DUPLICATE_NODE";
pub const GRAPH_INCONSISTENT: &str = "GRAPH_INCONSISTENT";
pub const CANCELLED: &str = "CANCELLED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
