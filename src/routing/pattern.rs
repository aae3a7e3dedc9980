//! Route pattern variants and specificity scoring.
//!
//! # Responsibilities
//! - Represent one level of the route tree (layout, index, static, param, splat)
//! - Parse route-table notation (`"users"`, `":userId"`, `"*"`)
//! - Score matched segments so more specific patterns win
//!
//! # Design Decisions
//! - Tagged variants instead of strings re-parsed at match time
//! - Static matching is case-sensitive, exact, and regex-free
//! - Scores are summed along a chain; a static segment always outranks
//!   a param, which outranks index, which outranks the splat

use std::fmt;

/// Score contributed by one matched static segment.
pub const STATIC_SCORE: i32 = 10;
/// Score contributed by one matched param segment.
pub const PARAM_SCORE: i32 = 4;
/// Score contributed by a matched index pattern.
pub const INDEX_SCORE: i32 = 2;
/// Score contributed by a splat, regardless of how much it consumes.
pub const SPLAT_SCORE: i32 = 1;

/// One level of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Pathless wrapper: consumes no segments, always delegates to children.
    Layout,
    /// Matches only when the path is fully consumed.
    Index,
    /// Matches one literal segment.
    Static(String),
    /// Matches any single segment and binds it under the given name.
    Param(String),
    /// Catch-all: consumes the entire remaining path, even an empty one.
    Splat,
}

impl Pattern {
    /// Parse route-table notation: `:name` binds a param, `*` is the
    /// splat, anything else matches literally.
    pub fn parse(raw: &str) -> Self {
        if raw == "*" {
            Pattern::Splat
        } else if let Some(name) = raw.strip_prefix(':') {
            Pattern::Param(name.to_string())
        } else {
            Pattern::Static(raw.to_string())
        }
    }

    /// Whether two sibling patterns would make resolution ambiguous.
    ///
    /// Two params conflict regardless of their binding names (they match
    /// the same segments). Layout wrappers never conflict: they are
    /// pathless and every one of them is tried.
    pub fn conflicts_with(&self, other: &Pattern) -> bool {
        match (self, other) {
            (Pattern::Layout, _) | (_, Pattern::Layout) => false,
            (Pattern::Param(_), Pattern::Param(_)) => true,
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Layout => write!(f, "<layout>"),
            Pattern::Index => write!(f, "<index>"),
            Pattern::Static(s) => write!(f, "{}", s),
            Pattern::Param(name) => write!(f, ":{}", name),
            Pattern::Splat => write!(f, "*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notation() {
        assert_eq!(Pattern::parse("users"), Pattern::Static("users".to_string()));
        assert_eq!(Pattern::parse(":userId"), Pattern::Param("userId".to_string()));
        assert_eq!(Pattern::parse("*"), Pattern::Splat);
    }

    #[test]
    fn test_param_siblings_conflict() {
        let a = Pattern::Param("userId".to_string());
        let b = Pattern::Param("postId".to_string());
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn test_distinct_statics_do_not_conflict() {
        let home = Pattern::parse("home");
        let users = Pattern::parse("users");
        assert!(!home.conflicts_with(&users));
        assert!(home.conflicts_with(&home.clone()));
    }

    #[test]
    fn test_layout_never_conflicts() {
        assert!(!Pattern::Layout.conflicts_with(&Pattern::Layout));
        assert!(!Pattern::Layout.conflicts_with(&Pattern::Splat));
    }

    #[test]
    fn test_score_ordering() {
        assert!(STATIC_SCORE > PARAM_SCORE);
        assert!(PARAM_SCORE > INDEX_SCORE);
        assert!(INDEX_SCORE > SPLAT_SCORE);
    }
}
