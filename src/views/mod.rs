//! View rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Resolution (chain, params)
//!     → render_chain: walk the chain leaf-to-root
//!     → each view renders to text, its child substituted at the outlet
//!     → composed output for the whole page
//! ```
//!
//! # Design Decisions
//! - Views are pure functions of the render context; no ambient state
//! - The outlet is just the child's rendered text handed to the parent
//! - Navigation state reaches views only through `RenderContext`

pub mod layout;
pub mod pages;
pub mod users;

use serde::Serialize;

use crate::routing::{Resolution, RouteParams};
use crate::store::UserStore;

/// The views the route table can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Layout,
    Home,
    About,
    Users,
    User,
    NotFound,
}

/// Everything a view may read while rendering.
///
/// Navigation state is passed explicitly; views have no other way to
/// observe it.
pub struct RenderContext<'a> {
    /// The immutable user records, in display order.
    pub store: &'a UserStore,
    /// Params bound by the resolver for the active chain.
    pub params: &'a RouteParams,
    /// The full current path (for active-link styling).
    pub current_path: &'a str,
    /// The absolute path matched up to the rendering view (for
    /// relative links).
    pub matched_path: &'a str,
}

/// Render a single view, substituting the child's output at the outlet.
pub fn render_view(view: View, ctx: &RenderContext<'_>, outlet: Option<&str>) -> String {
    match view {
        View::Layout => layout::render(ctx, outlet),
        View::Home => pages::home(),
        View::About => pages::about(),
        View::NotFound => pages::not_found(),
        View::Users => users::list(ctx, outlet),
        View::User => users::detail(ctx),
    }
}

/// Render a matched chain: leaf first, each result becoming its
/// parent's outlet content.
pub fn render_chain(resolution: &Resolution, store: &UserStore, current_path: &str) -> String {
    let mut outlet: Option<String> = None;
    for node in resolution.chain.iter().rev() {
        let ctx = RenderContext {
            store,
            params: &resolution.params,
            current_path,
            matched_path: &node.matched_path,
        };
        outlet = Some(render_view(node.view, &ctx, outlet.as_deref()));
    }
    outlet.unwrap_or_default()
}
