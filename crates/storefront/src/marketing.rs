//! Marketing surfaces: newsletter popup gate and search history.
//!
//! Both persist through the snapshot store under fixed keys, so the
//! popup shows once per installation and recent searches survive
//! restarts.

use crate::persist::{SnapshotError, SnapshotStore, keys};

/// Number of recent queries kept for display.
const MAX_RECENT_SEARCHES: usize = 5;

/// Gate for the one-shot newsletter popup.
///
/// Backed by a single persisted boolean: the popup is shown until it is
/// marked seen, then never again.
#[derive(Debug)]
pub struct NewsletterGate<S: SnapshotStore> {
    snapshot: S,
}

impl<S: SnapshotStore> NewsletterGate<S> {
    /// Create a gate over the given snapshot store.
    pub const fn new(snapshot: S) -> Self {
        Self { snapshot }
    }

    /// Whether the popup should be shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted flag cannot be read.
    pub fn should_show(&self) -> Result<bool, SnapshotError> {
        let seen: bool = self.snapshot.load(keys::NEWSLETTER_SEEN)?.unwrap_or(false);
        Ok(!seen)
    }

    /// Record that the popup has been shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted.
    pub fn mark_seen(&self) -> Result<(), SnapshotError> {
        self.snapshot.save(keys::NEWSLETTER_SEEN, &true)
    }
}

/// Recent search queries, most recent first.
#[derive(Debug)]
pub struct SearchHistory<S: SnapshotStore> {
    entries: Vec<String>,
    snapshot: S,
}

impl<S: SnapshotStore> SearchHistory<S> {
    /// Open the history, rehydrating any persisted entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or decoded.
    pub fn open(snapshot: S) -> Result<Self, SnapshotError> {
        let entries: Vec<String> = snapshot.load(keys::SEARCH_HISTORY)?.unwrap_or_default();
        Ok(Self { entries, snapshot })
    }

    /// Record a query.
    ///
    /// Whitespace is trimmed and empty queries are ignored. A repeated
    /// query moves to the front instead of duplicating, and the list is
    /// capped to the 5 most recent entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot write fails.
    pub fn record(&mut self, query: &str) -> Result<(), SnapshotError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);
        self.persist()
    }

    /// Recent queries, most recent first.
    #[must_use]
    pub fn recent(&self) -> &[String] {
        &self.entries
    }

    /// Forget all recorded queries.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot write fails.
    pub fn clear(&mut self) -> Result<(), SnapshotError> {
        self.entries.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), SnapshotError> {
        self.snapshot.save(keys::SEARCH_HISTORY, &self.entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    #[test]
    fn test_popup_shows_once() {
        let snapshot = MemoryStore::default();
        let gate = NewsletterGate::new(&snapshot);

        assert!(gate.should_show().unwrap());
        gate.mark_seen().unwrap();
        assert!(!gate.should_show().unwrap());

        // The flag is durable, not per-instance
        let reopened = NewsletterGate::new(&snapshot);
        assert!(!reopened.should_show().unwrap());
    }

    #[test]
    fn test_record_caps_at_five() {
        let mut history = SearchHistory::open(MemoryStore::default()).unwrap();
        for query in ["linen", "denim", "wool", "canvas", "fleece", "twill"] {
            history.record(query).unwrap();
        }
        assert_eq!(
            history.recent(),
            ["twill", "fleece", "canvas", "wool", "denim"]
        );
    }

    #[test]
    fn test_record_moves_duplicate_to_front() {
        let mut history = SearchHistory::open(MemoryStore::default()).unwrap();
        history.record("linen").unwrap();
        history.record("denim").unwrap();
        history.record("linen").unwrap();
        assert_eq!(history.recent(), ["linen", "denim"]);
    }

    #[test]
    fn test_record_ignores_blank_queries() {
        let mut history = SearchHistory::open(MemoryStore::default()).unwrap();
        history.record("   ").unwrap();
        assert!(history.recent().is_empty());
    }

    #[test]
    fn test_history_survives_reopen() {
        let snapshot = MemoryStore::default();
        {
            let mut history = SearchHistory::open(&snapshot).unwrap();
            history.record("overshirt").unwrap();
        }
        let history = SearchHistory::open(&snapshot).unwrap();
        assert_eq!(history.recent(), ["overshirt"]);
    }
}
