//! Configuration system for Sylva.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod defaults;
pub mod filter_config;
pub mod observability_config;
pub mod sylva_config;

pub use filter_config::{FilterConfig, InclusionStrategy};
pub use observability_config::ObservabilityConfig;
pub use sylva_config::SylvaConfig;
