//! Persisted key-value snapshot read by every refresh.
//!
//! # Responsibility
//! - Hold the string map written by the main application.
//! - Resolve consumed keys with their fixed display defaults.
//!
//! # Invariants
//! - Values are opaque display strings; no parsing happens here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Host-assigned identifier of one placed widget.
pub type InstanceId = i32;

/// Snapshot key for the pre-formatted balance string.
pub const KEY_BALANCE: &str = "balance";
/// Snapshot key for the pre-formatted income string.
pub const KEY_INCOME: &str = "income";
/// Snapshot key for the pre-formatted expenses string.
pub const KEY_EXPENSES: &str = "expenses";
/// Snapshot key for the serialized task list.
pub const KEY_TASKS_JSON: &str = "tasks_json";

/// Display default for any absent money field.
pub const DEFAULT_MONEY: &str = "Rp0";
/// Default task payload: an empty list literal.
pub const DEFAULT_TASKS_JSON: &str = "[]";

/// Immutable string map supplied for one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    entries: BTreeMap<String, String>,
}

impl Snapshot {
    /// Creates an empty snapshot; every consumed key resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this snapshot with one more entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Returns the raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value under `key` or `default` when the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Snapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Snapshot, DEFAULT_MONEY, KEY_BALANCE, KEY_INCOME};

    #[test]
    fn get_or_prefers_stored_value() {
        let snapshot = Snapshot::new().with(KEY_BALANCE, "Rp1.000");
        assert_eq!(snapshot.get_or(KEY_BALANCE, DEFAULT_MONEY), "Rp1.000");
        assert_eq!(snapshot.get_or(KEY_INCOME, DEFAULT_MONEY), "Rp0");
    }

    #[test]
    fn empty_string_is_a_present_value() {
        let snapshot = Snapshot::new().with(KEY_BALANCE, "");
        assert_eq!(snapshot.get_or(KEY_BALANCE, DEFAULT_MONEY), "");
    }

    #[test]
    fn collects_from_pairs() {
        let snapshot: Snapshot = [("balance", "Rp5"), ("income", "Rp7")].into_iter().collect();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("income"), Some("Rp7"));
    }
}
