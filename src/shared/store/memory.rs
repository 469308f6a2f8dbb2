use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

use super::RepositoryError;
use crate::shared::content::{ListEntry, NewListEntry, NewTechnology, Technology};

/// Default bound on lock acquisition for in-process stores.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// An async RwLock whose acquisition gives up after `timeout`.
///
/// Each in-memory entity family keeps all of its tables behind one `Guarded`,
/// so a mutation holding the write guard sees and publishes parent and child
/// rows together.
#[derive(Debug)]
pub struct Guarded<T> {
    inner: RwLock<T>,
    timeout: Duration,
}

impl<T> Guarded<T> {
    pub fn new(value: T, timeout: Duration) -> Self {
        Self {
            inner: RwLock::new(value),
            timeout,
        }
    }

    pub async fn read(&self) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
        tokio::time::timeout(self.timeout, self.inner.read())
            .await
            .map_err(|_| {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Read lock timed out");
                RepositoryError::Contention
            })
    }

    pub async fn write(&self) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
        tokio::time::timeout(self.timeout, self.inner.write())
            .await
            .map_err(|_| {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Write lock timed out");
                RepositoryError::Contention
            })
    }
}

impl<T: Default> Default for Guarded<T> {
    fn default() -> Self {
        Self::new(T::default(), DEFAULT_LOCK_TIMEOUT)
    }
}

/// Rows keyed by a monotonically increasing id. Iteration is in id order,
/// which is also insertion order.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Allocates the next id, builds the row with it and stores it.
    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn remove(&mut self, id: i32) -> Option<T> {
        self.rows.remove(&id)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.rows.retain(|_, row| keep(row));
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Child row tagged with the id of the aggregate root that owns it.
#[derive(Debug, Clone)]
pub struct Owned<T> {
    pub parent_id: i32,
    pub row: T,
}

impl<T: Clone> Table<Owned<T>> {
    /// Children of `parent_id` in id order.
    pub fn children_of(&self, parent_id: i32) -> Vec<T> {
        self.values()
            .filter(|c| c.parent_id == parent_id)
            .map(|c| c.row.clone())
            .collect()
    }

    pub fn remove_children(&mut self, parent_id: i32) {
        self.retain(|c| c.parent_id != parent_id);
    }

    /// Inserts one child per item, building each row from its new id.
    pub fn insert_children<I>(
        &mut self,
        parent_id: i32,
        items: impl IntoIterator<Item = I>,
        build: impl Fn(i32, I) -> T,
    ) {
        for item in items {
            self.insert_with(|id| Owned {
                parent_id,
                row: build(id, item),
            });
        }
    }

    pub fn has_orphans(&self, live_parent: impl Fn(i32) -> bool) -> bool {
        self.values().any(|c| !live_parent(c.parent_id))
    }
}

impl Table<Owned<ListEntry>> {
    pub fn insert_entries(&mut self, parent_id: i32, items: Vec<NewListEntry>) {
        self.insert_children(parent_id, items, |id, entry| ListEntry {
            id,
            description: entry.description,
            order_index: entry.order_index,
        });
    }
}

impl Table<Owned<Technology>> {
    pub fn insert_technologies(&mut self, parent_id: i32, items: Vec<NewTechnology>) {
        self.insert_children(parent_id, items, |id, tech| Technology {
            id,
            name: tech.name,
        });
    }
}
