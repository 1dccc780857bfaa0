// Single source of truth for all default values.

// --- Filter ---
pub const DEFAULT_PARALLEL_INCLUSION: bool = false;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_DIRECTIVE: &str = "sylva=info";
