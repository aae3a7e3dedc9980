//! In-memory user record store.
//!
//! # Responsibilities
//! - Hold the fixed, ordered list of user records
//! - Preserve insertion order (it is the display order)
//!
//! # Design Decisions
//! - Built once from validated config, immutable afterwards
//! - No lookup index: the list view iterates, nothing else reads it

use crate::config::UserEntry;

/// A single user record. Ids are unique and stable for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub full_name: String,
}

/// Fixed, ordered collection of user records.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    records: Vec<UserRecord>,
}

impl UserStore {
    /// Build the store from configuration entries, preserving order.
    pub fn from_config(entries: &[UserEntry]) -> Self {
        Self {
            records: entries
                .iter()
                .map(|entry| UserRecord {
                    id: entry.id.clone(),
                    full_name: entry.full_name.clone(),
                })
                .collect(),
        }
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> UserEntry {
        UserEntry {
            id: id.to_string(),
            full_name: name.to_string(),
        }
    }

    #[test]
    fn test_order_preserved() {
        let store = UserStore::from_config(&[entry("2", "Sarah Finnley"), entry("1", "Robin Wieruch")]);
        let ids: Vec<&str> = store.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_empty_store() {
        let store = UserStore::from_config(&[]);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
