//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → consumed once at startup by the application root
//! ```
//!
//! # Design Decisions
//! - Defaults embed the canonical demo data, so the binary runs with
//!   no config file at all
//! - Validation collects every error, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{AppConfig, ObservabilityConfig, UserEntry};
pub use validation::{validate_config, ValidationError};
