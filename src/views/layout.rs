//! Layout shell: persistent navigation chrome plus the child outlet.
//!
//! # Responsibilities
//! - Render the top-level nav links to `/home` and `/users`
//! - Mark whichever link corresponds to the active top-level route
//! - Insert the matched child's output at the outlet
//!
//! # Design Decisions
//! - Active styling is a `*label*` marker in the text output
//! - A link is active when the current path is the target or nested
//!   below it, mirroring client-side nav-link semantics

use crate::views::RenderContext;

pub(super) fn render(ctx: &RenderContext<'_>, outlet: Option<&str>) -> String {
    let mut out = String::from("Route Shell\n");
    out.push_str(&format!(
        "nav: {}  {}\n",
        nav_link("Home", "/home", ctx.current_path),
        nav_link("Users", "/users", ctx.current_path),
    ));
    out.push_str("---\n");
    if let Some(child) = outlet {
        out.push_str(child);
    }
    out
}

fn nav_link(label: &str, to: &str, current_path: &str) -> String {
    if is_active(to, current_path) {
        format!("*{}* -> {}", label, to)
    } else {
        format!("{} -> {}", label, to)
    }
}

/// A nav target is active when the current path equals it or sits
/// beneath it.
fn is_active(to: &str, current_path: &str) -> bool {
    current_path == to || current_path.starts_with(&format!("{}/", to))
}
