//! User list and user detail views.
//!
//! # Responsibilities
//! - List: render every record, in store order, as a navigable link
//! - Detail: render the `userId` bound by the resolver, verbatim
//!
//! # Design Decisions
//! - List link targets are the record id resolved relative to the
//!   view's own matched path; the view never hard-codes `/users`
//! - Detail does not check the id against the store: an unknown id is
//!   rendered as-is, there is no data-integrity concern here

use crate::navigation::link;
use crate::views::RenderContext;

pub(super) fn list(ctx: &RenderContext<'_>, outlet: Option<&str>) -> String {
    let mut out = String::from("Users\n");
    for user in ctx.store.iter() {
        let target = link::resolve(ctx.matched_path, &user.id);
        out.push_str(&format!("- {} -> {}\n", user.full_name, target));
    }
    if let Some(child) = outlet {
        out.push_str(child);
    }
    out
}

pub(super) fn detail(ctx: &RenderContext<'_>) -> String {
    let user_id = ctx.params.get("userId").unwrap_or("");
    format!("User: {}\nBack to Users -> /users\n", user_id)
}
