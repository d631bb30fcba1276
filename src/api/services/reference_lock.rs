//! Critical section shared by every operation that rewrites draft↔resource links.
//!
//! The store only makes single calls atomic. Linking reads a resource and then
//! rewrites a draft, and deleting a resource rewrites every draft pointing at it;
//! both run under this lock, as does any other read-modify-write of a draft, so
//! no update is lost and no draft is left referencing a deleted resource.

use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ReferenceLock(Arc<Mutex<()>>);

impl ReferenceLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn acquire(&self) -> MutexGuard<'_, ()> {
        self.0.lock()
    }
}
