//! Shared fixtures for integration tests.

use route_shell::config::{AppConfig, UserEntry};
use route_shell::App;

/// The canonical demo application: two users, starting at `/`.
pub fn demo_app() -> App {
    App::new(AppConfig::default()).expect("default config is valid")
}

/// An application over a custom user list.
pub fn app_with_users(users: &[(&str, &str)]) -> App {
    let mut config = AppConfig::default();
    config.users = users
        .iter()
        .map(|(id, full_name)| UserEntry {
            id: (*id).to_string(),
            full_name: (*full_name).to_string(),
        })
        .collect();
    App::new(config).expect("custom config is valid")
}
