//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the routing demo.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path the shell starts at (must be absolute).
    pub start_path: String,

    /// User records shown by the list view, in display order.
    pub users: Vec<UserEntry>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_path: "/".to_string(),
            users: vec![
                UserEntry {
                    id: "1".to_string(),
                    full_name: "Robin Wieruch".to_string(),
                },
                UserEntry {
                    id: "2".to_string(),
                    full_name: "Sarah Finnley".to_string(),
                },
            ],
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One user record as configured.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserEntry {
    /// Unique, stable identifier.
    pub id: String,

    /// Display name.
    pub full_name: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
