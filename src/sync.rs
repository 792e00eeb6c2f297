//! Shared access to a running game.
//!
//! The engine itself performs no locking. Hosts that read positions from
//! several threads wrap it in a [`SharedEngine`], which allows any number of
//! readers between writes.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::engine::ChessEngine;

/// A cloneable handle to one engine behind a read/write lock.
///
/// Clones share the same game.
#[derive(Clone, Debug, Default)]
pub struct SharedEngine(Arc<RwLock<ChessEngine>>);

impl SharedEngine {
    #[must_use]
    pub fn new(engine: ChessEngine) -> Self {
        SharedEngine(Arc::new(RwLock::new(engine)))
    }

    /// Acquire shared read access.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, ChessEngine> {
        self.0.read()
    }

    /// Acquire exclusive write access.
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, ChessEngine> {
        self.0.write()
    }

    /// Run `f` with shared access and return its result.
    pub fn with<R>(&self, f: impl FnOnce(&ChessEngine) -> R) -> R {
        f(&self.0.read())
    }

    /// Run `f` with exclusive access and return its result.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut ChessEngine) -> R) -> R {
        f(&mut self.0.write())
    }
}

impl From<ChessEngine> for SharedEngine {
    fn from(engine: ChessEngine) -> Self {
        SharedEngine::new(engine)
    }
}
