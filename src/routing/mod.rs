//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route table declaration (at startup):
//!     RouteNode tree (tagged patterns)
//!     → tree.rs (sibling uniqueness validation)
//!     → Freeze as immutable RouteTable
//!
//! Navigation event (current path):
//!     → resolver.rs (segment-wise descent over the table)
//!     → pattern.rs (per-segment match + specificity score)
//!     → Return: matched chain with bound params, or None
//! ```
//!
//! # Design Decisions
//! - Table validated at startup, immutable at runtime
//! - No regex: segment comparison is plain string equality
//! - Deterministic: same (table, path) always yields the same chain
//! - Candidates ranked by specificity; ties go to declaration order

pub mod pattern;
pub mod resolver;
pub mod tree;

pub use pattern::Pattern;
pub use resolver::{resolve, MatchedNode, Resolution, RouteParams};
pub use tree::{RouteNode, RouteTable, TreeError};
