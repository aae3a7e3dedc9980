//! Navigation history stack.
//!
//! # Responsibilities
//! - Track visited paths in order
//! - Expose the current path (top of stack)
//! - Step back without ever dropping the start entry
//!
//! # Design Decisions
//! - Plain stack: `open` pushes, `back` pops; no forward list
//! - The start entry is the floor; `back` at the floor is a no-op

/// Stack of visited absolute paths. Never empty.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Start a history at the given path.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            entries: vec![start.into()],
        }
    }

    /// The current path.
    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    /// Visit a new path.
    pub fn push(&mut self, path: String) {
        self.entries.push(path);
    }

    /// Step back one entry. Returns false when already at the start.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }
}
