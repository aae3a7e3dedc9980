//! Pure path resolution over the route table.
//!
//! # Responsibilities
//! - Split the current path into segments
//! - Walk the tree, binding params and accumulating matched paths
//! - Rank candidate chains by specificity and return the single best
//!
//! # Design Decisions
//! - Resolution is a pure function of (table, path); no hidden state
//! - "No match" is `None`, not an error; tables usually carry a splat
//!   fallback so the not-found view is selected inside the layout
//! - Scores are summed per segment, so a static sibling beats a splat
//!   and a deeper chain beats its own ancestor rendering alone
//! - On equal scores the earlier declaration wins

use serde::Serialize;
use std::collections::BTreeMap;

use crate::routing::pattern::{Pattern, INDEX_SCORE, PARAM_SCORE, SPLAT_SCORE, STATIC_SCORE};
use crate::routing::tree::{RouteNode, RouteTable};
use crate::views::View;

/// Parameters bound while matching (e.g. `userId = "2"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    /// Look up a bound parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Bind a param from an ancestor segment. Deeper bindings win on
    /// name collisions, so an existing entry is kept.
    fn bind_outer(&mut self, name: &str, value: &str) {
        self.0
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
    }
}

/// One node of the matched chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedNode {
    /// The view this node renders.
    pub view: View,
    /// Absolute path consumed up to and including this node. Relative
    /// links rendered by the view resolve against this.
    pub matched_path: String,
}

/// The outcome of resolving one path: ancestors in order, leaf last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub chain: Vec<MatchedNode>,
    pub params: RouteParams,
}

impl Resolution {
    /// The deepest matched node. Resolution never produces an empty
    /// chain, but the accessor stays total.
    pub fn leaf(&self) -> Option<&MatchedNode> {
        self.chain.last()
    }
}

/// A chain under consideration while walking the tree.
struct Candidate {
    chain: Vec<MatchedNode>,
    params: RouteParams,
    score: i32,
}

/// Resolve `path` against the table.
///
/// Returns the highest-scoring root-to-leaf chain, or `None` when no
/// pattern matches.
pub fn resolve(table: &RouteTable, path: &str) -> Option<Resolution> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    best_of(table.roots(), &segments, "").map(|candidate| Resolution {
        chain: candidate.chain,
        params: candidate.params,
    })
}

fn best_of(nodes: &[RouteNode], segments: &[&str], prefix: &str) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for node in nodes {
        if let Some(candidate) = match_node(node, segments, prefix) {
            // Strictly greater, so declaration order breaks ties.
            if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
    }
    best
}

fn match_node(node: &RouteNode, segments: &[&str], prefix: &str) -> Option<Candidate> {
    match node.pattern() {
        Pattern::Layout => {
            let child = best_of(node.children(), segments, prefix)?;
            let mut chain = vec![MatchedNode {
                view: node.view(),
                matched_path: absolute(prefix),
            }];
            chain.extend(child.chain);
            Some(Candidate {
                chain,
                params: child.params,
                score: child.score,
            })
        }
        Pattern::Index => segments.is_empty().then(|| Candidate {
            chain: vec![MatchedNode {
                view: node.view(),
                matched_path: absolute(prefix),
            }],
            params: RouteParams::default(),
            score: INDEX_SCORE,
        }),
        Pattern::Static(literal) => {
            let (first, rest) = segments.split_first()?;
            if *first != literal.as_str() {
                return None;
            }
            descend(node, rest, &join(prefix, first), STATIC_SCORE, None)
        }
        Pattern::Param(name) => {
            let (first, rest) = segments.split_first()?;
            descend(
                node,
                rest,
                &join(prefix, first),
                PARAM_SCORE,
                Some((name.as_str(), *first)),
            )
        }
        Pattern::Splat => {
            let mut consumed = prefix.to_string();
            for segment in segments {
                consumed.push('/');
                consumed.push_str(segment);
            }
            Some(Candidate {
                chain: vec![MatchedNode {
                    view: node.view(),
                    matched_path: absolute(&consumed),
                }],
                params: RouteParams::default(),
                score: SPLAT_SCORE,
            })
        }
    }
}

/// The node consumed one segment. It is itself the leaf when the path
/// is exhausted; a deeper match wins whenever one exists.
fn descend(
    node: &RouteNode,
    rest: &[&str],
    path: &str,
    own_score: i32,
    binding: Option<(&str, &str)>,
) -> Option<Candidate> {
    let matched = MatchedNode {
        view: node.view(),
        matched_path: path.to_string(),
    };

    let mut candidate = match best_of(node.children(), rest, path) {
        Some(child) => {
            let mut chain = vec![matched];
            chain.extend(child.chain);
            Candidate {
                chain,
                params: child.params,
                score: own_score + child.score,
            }
        }
        None if rest.is_empty() => Candidate {
            chain: vec![matched],
            params: RouteParams::default(),
            score: own_score,
        },
        None => return None,
    };

    if let Some((name, value)) = binding {
        candidate.params.bind_outer(name, value);
    }
    Some(candidate)
}

fn join(prefix: &str, segment: &str) -> String {
    format!("{}/{}", prefix, segment)
}

fn absolute(prefix: &str) -> String {
    if prefix.is_empty() {
        "/".to_string()
    } else {
        prefix.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_table() -> RouteTable {
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
        .expect("demo table is valid")
    }

    fn views(resolution: &Resolution) -> Vec<View> {
        resolution.chain.iter().map(|node| node.view).collect()
    }

    #[test]
    fn test_index_route_at_root() {
        let resolution = resolve(&demo_table(), "/").expect("match");
        assert_eq!(views(&resolution), vec![View::Layout, View::Home]);
        assert_eq!(resolution.params, RouteParams::default());
    }

    #[test]
    fn test_static_route() {
        let resolution = resolve(&demo_table(), "/home").expect("match");
        assert_eq!(views(&resolution), vec![View::Layout, View::Home]);
        assert_eq!(resolution.chain[1].matched_path, "/home");
    }

    #[test]
    fn test_parent_without_detail() {
        let resolution = resolve(&demo_table(), "/users").expect("match");
        assert_eq!(views(&resolution), vec![View::Layout, View::Users]);
    }

    #[test]
    fn test_param_binding() {
        let resolution = resolve(&demo_table(), "/users/2").expect("match");
        assert_eq!(views(&resolution), vec![View::Layout, View::Users, View::User]);
        assert_eq!(resolution.params.get("userId"), Some("2"));
        assert_eq!(resolution.chain[1].matched_path, "/users");
        assert_eq!(resolution.chain[2].matched_path, "/users/2");
    }

    #[test]
    fn test_static_sibling_beats_splat() {
        let resolution = resolve(&demo_table(), "/about").expect("match");
        assert_eq!(views(&resolution), vec![View::About]);
        assert_eq!(resolution.chain[0].matched_path, "/about");
    }

    #[test]
    fn test_splat_fallback_inside_layout() {
        let resolution = resolve(&demo_table(), "/no/such/page").expect("match");
        assert_eq!(views(&resolution), vec![View::Layout, View::NotFound]);
        assert_eq!(resolution.chain[1].matched_path, "/no/such/page");
    }

    #[test]
    fn test_trailing_slash_is_equivalent() {
        let table = demo_table();
        assert_eq!(resolve(&table, "/users/"), resolve(&table, "/users"));
    }

    #[test]
    fn test_no_match_without_fallback() {
        let table = RouteTable::new(vec![RouteNode::path("home", View::Home)])
            .expect("table is valid");
        assert!(resolve(&table, "/missing").is_none());
    }

    #[test]
    fn test_resolution_is_pure() {
        let table = demo_table();
        assert_eq!(resolve(&table, "/users/1"), resolve(&table, "/users/1"));
    }
}
