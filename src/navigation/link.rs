//! Relative link resolution.
//!
//! # Responsibilities
//! - Turn a link target into an absolute path
//! - Resolve relative targets against the rendering view's matched path
//!
//! # Design Decisions
//! - Absolute targets (leading `/`) pass through unchanged apart from
//!   normalization
//! - `.` keeps the base, `..` pops one segment, anything else appends
//! - Popping past the root clamps to `/`

/// Resolve a link target against a base path.
///
/// `base` is the matched path of the view rendering the link, so a list
/// view at `/users` turns the target `"2"` into `/users/2` without
/// knowing its own absolute position.
pub fn resolve(base: &str, target: &str) -> String {
    let mut segments: Vec<&str> = if target.starts_with('/') {
        Vec::new()
    } else {
        base.split('/').filter(|s| !s.is_empty()).collect()
    };

    for segment in target.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}
