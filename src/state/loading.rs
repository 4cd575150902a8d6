//! Per-key loading flags.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Key → in-progress flag, shared copy-on-write.
///
/// Cloning is cheap and yields an independent snapshot: a later [`set`]
/// on either copy never shows through the other.
///
/// [`set`]: LoadingFlags::set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    flags: Arc<BTreeMap<String, bool>>,
}

impl LoadingFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// False for keys never marked.
    pub fn is_loading(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: &str, loading: bool) {
        Arc::make_mut(&mut self.flags).insert(key.to_string(), loading);
    }

    pub fn any(&self) -> bool {
        self.flags.values().any(|loading| *loading)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(key, loading)| (key.as_str(), *loading))
    }
}
