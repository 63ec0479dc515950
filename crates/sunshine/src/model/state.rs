//! Saved-state bundle for surviving view recreation.
//!
//! [`InstanceState`] is an opaque key/value store of byte arrays. Components
//! write their state under a well-known key when the hosting view is torn
//! down and read it back when the view is recreated.

use std::collections::HashMap;

/// Opaque key/value bundle of byte arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceState {
    entries: HashMap<String, Vec<u8>>,
}

impl InstanceState {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `bytes` under `key`, replacing any previous value.
    pub fn put_bytes(&mut self, key: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(key.into(), bytes);
    }

    /// Returns the bytes stored under `key`.
    pub fn bytes(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Removes and returns the bytes stored under `key`.
    pub fn take_bytes(&mut self, key: &str) -> Option<Vec<u8>> {
        self.entries.remove(key)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static_assertions::assert_impl_all!(InstanceState: Send, Sync);
