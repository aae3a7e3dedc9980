//! Application root.
//!
//! # Responsibilities
//! - Declare the route table once at startup
//! - Own the user store and the navigation history
//! - Turn navigation events into resolve-then-render
//!
//! # Design Decisions
//! - All shared data (table, store) is immutable after construction;
//!   the history stack is the only mutable state
//! - Each event runs to completion before the next is handled
//! - Relative targets resolve against the current leaf's matched path

use thiserror::Error;

use crate::config::{validate_config, AppConfig, ConfigError};
use crate::navigation::{link, History};
use crate::routing::{resolve, Resolution, RouteNode, RouteTable, TreeError};
use crate::store::UserStore;
use crate::views::{render_chain, render_view, RenderContext, View};

/// Errors that can stop the application from starting.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration failed semantic validation.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The route table declaration is invalid.
    #[error("route table error: {0}")]
    Table(#[from] TreeError),
}

/// The demo route table.
///
/// ```text
/// <layout>            Layout
/// ├── <index>         Home
/// ├── home            Home
/// ├── users           Users
/// │   └── :userId     User
/// └── *               NotFound
/// about               About (standalone, outside the layout)
/// ```
pub fn demo_route_table() -> Result<RouteTable, TreeError> {
    RouteTable::new(vec![
        RouteNode::layout(View::Layout)
            .child(RouteNode::index(View::Home))
            .child(RouteNode::path("home", View::Home))
            .child(
                RouteNode::path("users", View::Users)
                    .child(RouteNode::path(":userId", View::User)),
            )
            .child(RouteNode::path("*", View::NotFound)),
        RouteNode::path("about", View::About),
    ])
}

/// The single-page-application shell: route table, user store, history.
pub struct App {
    table: RouteTable,
    store: UserStore,
    history: History,
}

impl App {
    /// Build the application from configuration.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let table = demo_route_table()?;
        let store = UserStore::from_config(&config.users);
        let history = History::new(config.start_path.clone());

        tracing::info!(
            users = store.len(),
            start_path = %config.start_path,
            "Application initialized"
        );

        Ok(Self {
            table,
            store,
            history,
        })
    }

    /// The current navigation path.
    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    /// Resolve the current path against the table.
    pub fn resolve_current(&self) -> Option<Resolution> {
        resolve(&self.table, self.history.current())
    }

    /// Handle a navigation event and return the freshly rendered page.
    ///
    /// Relative targets (no leading `/`) are resolved against the
    /// matched path of the current leaf, the way an in-view link would
    /// be.
    pub fn navigate(&mut self, target: &str) -> String {
        let base = self
            .resolve_current()
            .and_then(|r| r.leaf().map(|leaf| leaf.matched_path.clone()))
            .unwrap_or_else(|| self.current_path().to_string());
        let path = link::resolve(&base, target);

        tracing::info!(from = %self.current_path(), to = %path, "Navigate");
        self.history.push(path);
        self.render_current()
    }

    /// Step back in history and return the rendered page.
    pub fn back(&mut self) -> String {
        if self.history.back() {
            tracing::info!(to = %self.current_path(), "Navigate back");
        } else {
            tracing::debug!("Back ignored: already at the start entry");
        }
        self.render_current()
    }

    /// Render whatever the current path resolves to.
    pub fn render_current(&self) -> String {
        let path = self.history.current();
        match resolve(&self.table, path) {
            Some(resolution) => {
                tracing::debug!(
                    path = %path,
                    leaf = ?resolution.leaf().map(|l| l.view),
                    "Route resolved"
                );
                render_chain(&resolution, &self.store, path)
            }
            None => {
                tracing::warn!(path = %path, "No route matched");
                let params = crate::routing::RouteParams::default();
                let ctx = RenderContext {
                    store: &self.store,
                    params: &params,
                    current_path: path,
                    matched_path: path,
                };
                render_view(View::NotFound, &ctx, None)
            }
        }
    }
}
