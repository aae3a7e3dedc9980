//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; events carry fields, not
//!   formatted strings
//! - Level comes from config, `RUST_LOG` wins when set

pub mod logging;

pub use logging::init_logging;
