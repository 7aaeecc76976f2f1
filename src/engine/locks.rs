use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::OwnedMutexGuard;
use uuid::Uuid;

/// Tagged-scope lock registry
///
/// Guarantees at most one in-flight recompute per scope id (round or
/// season) while recomputes for different scopes proceed independently.
/// Acquisition never waits: the read-aggregate-write cycle is not safe
/// under interleaving, so a contended scope is reported to the caller,
/// who retries the whole recompute.
#[derive(Default)]
pub struct ScopeLocks {
    locks: Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>,
}

impl ScopeLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to take the lock for a scope without waiting
    ///
    /// # Returns
    /// * `Some(guard)` - The scope is now held until the guard drops
    /// * `None` - Another recompute holds this scope
    pub fn try_acquire(&self, scope: Uuid) -> Option<OwnedMutexGuard<()>> {
        let lock = {
            let mut locks = self.locks.lock().expect("scope lock registry poisoned");
            Arc::clone(locks.entry(scope).or_default())
        };

        lock.try_lock_owned().ok()
    }
}
