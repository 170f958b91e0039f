//! In-memory snapshot store.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{SnapshotError, SnapshotStore};

/// Ephemeral snapshot store backed by a map.
///
/// Used by tests and by CLI runs that have no data directory. A poisoned
/// lock means a writer panicked mid-mutation; that is a wiring mistake,
/// so access fails loudly instead of limping on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let values = self.values.lock().expect("snapshot store lock poisoned");
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let mut values = self.values.lock().expect("snapshot store lock poisoned");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SnapshotError> {
        let mut values = self.values.lock().expect("snapshot store lock poisoned");
        values.remove(key);
        Ok(())
    }
}
