//! Terminal demo of declarative client-side routing.
//!
//! A nested route table (index route, dynamic segment, catch-all) is
//! resolved by a pure matching function on every navigation event; the
//! matched chain of views renders to text, each child substituted at
//! its parent's outlet.

pub mod app;
pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod store;
pub mod views;

pub use app::{demo_route_table, App, AppError};
pub use config::AppConfig;
pub use routing::{resolve, Resolution, RouteTable};
