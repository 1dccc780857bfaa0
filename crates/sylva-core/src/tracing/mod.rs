//! Observability for Sylva.
//! `tracing` with `EnvFilter`, overridable through `SYLVA_LOG`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_config};
