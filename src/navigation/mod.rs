//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Link activation (target, possibly relative):
//!     → link.rs (resolve against the view's matched path)
//!     → absolute path
//!     → history.rs (push as the new current entry)
//!     → app re-resolves and re-renders
//!
//! Back:
//!     → history.rs (pop, never past the start entry)
//! ```
//!
//! # Design Decisions
//! - The history stack is the only mutable state in the system
//! - Views never touch it directly; the current path reaches them
//!   through the render context

pub mod history;
pub mod link;

pub use history::History;
