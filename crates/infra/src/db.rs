use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{AuthorRow, GameRow, ReviewRow};

/// The three in-memory tables. Rows keep insertion order; nothing is
/// indexed and ids are not checked for uniqueness.
#[derive(Default)]
pub struct Tables {
    pub games: Vec<GameRow>,
    pub reviews: Vec<ReviewRow>,
    pub authors: Vec<AuthorRow>,
}

/// Shared handle to the in-memory store. Clones are cheap and all see
/// the same tables; data lives for the lifetime of the process.
#[derive(Clone, Default)]
pub struct Db {
    inner: Arc<RwLock<Tables>>,
}

impl Db {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write()
    }
}
