//! Single-flight result cache for upstream lookups.
//!
//! A [`CacheSlot`] holds one value. The first caller to find the slot empty
//! runs the loader; concurrent callers await the same load instead of
//! issuing their own. Failed loads leave the slot empty so the next caller
//! retries. [`KeyedCache`] is a map of slots, one per key; keys whose load
//! failed or whose value expired are dropped from the map.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{OnceCell, RwLock};

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

type Cell<T> = Arc<OnceCell<Entry<T>>>;

/// A single cached value with optional expiry.
pub struct CacheSlot<T> {
    cell: RwLock<Cell<T>>,
    /// `None` keeps values until invalidated.
    ttl: Option<Duration>,
}

impl<T: Clone> CacheSlot<T> {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            cell: RwLock::new(Arc::new(OnceCell::new())),
            ttl,
        }
    }

    /// Return the cached value, loading it with `load` if absent or expired.
    pub async fn get_or_try_load<F, Fut, E>(&self, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let cell = self.live_cell().await;
        let entry = cell
            .get_or_try_init(move || async move {
                let value = load().await?;
                Ok::<_, E>(Entry {
                    value,
                    stored_at: Instant::now(),
                })
            })
            .await?;
        Ok(entry.value.clone())
    }

    /// The cached value, if one is present and fresh.
    #[cfg(test)]
    pub async fn peek(&self) -> Option<T> {
        let cell = self.cell.read().await;
        cell.get()
            .filter(|entry| !self.is_expired(entry))
            .map(|entry| entry.value.clone())
    }

    /// Drop the cached value. In-flight loads complete into the old cell and
    /// are not observed by later callers.
    pub async fn invalidate(&self) {
        *self.cell.write().await = Arc::new(OnceCell::new());
    }

    /// The current cell, swapped for an empty one if its value has expired.
    async fn live_cell(&self) -> Cell<T> {
        {
            let cell = self.cell.read().await;
            if !cell.get().is_some_and(|entry| self.is_expired(entry)) {
                return Arc::clone(&cell);
            }
        }

        let mut cell = self.cell.write().await;
        // Another caller may have replaced it while we waited for the lock.
        if cell.get().is_some_and(|entry| self.is_expired(entry)) {
            *cell = Arc::new(OnceCell::new());
        }
        Arc::clone(&cell)
    }

    /// Whether the slot holds a value that has outlived its TTL. A slot
    /// that is locked or still loading counts as live.
    fn is_stale(&self) -> bool {
        self.cell
            .try_read()
            .is_ok_and(|cell| cell.get().is_some_and(|entry| self.is_expired(entry)))
    }

    /// Whether the slot has a value, fresh or not.
    async fn is_loaded(&self) -> bool {
        self.cell.read().await.initialized()
    }

    fn is_expired(&self, entry: &Entry<T>) -> bool {
        self.ttl.is_some_and(|ttl| entry.stored_at.elapsed() >= ttl)
    }
}

/// Cached values keyed by string.
pub struct KeyedCache<T> {
    slots: RwLock<HashMap<String, Arc<CacheSlot<T>>>>,
    ttl: Option<Duration>,
}

impl<T: Clone> KeyedCache<T> {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Return the value cached under `key`, loading it with `load` if needed.
    pub async fn get_or_try_load<F, Fut, E>(&self, key: &str, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let slot = self.slot(key).await;
        let result = slot.get_or_try_load(load).await;
        if result.is_err() {
            self.evict_unloaded(key, &slot).await;
        }
        result
    }

    /// Drop every cached entry.
    pub async fn clear(&self) {
        self.slots.write().await.clear();
    }

    /// Number of keys with a slot (loaded or not).
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn slot(&self, key: &str) -> Arc<CacheSlot<T>> {
        if let Some(slot) = self.slots.read().await.get(key) {
            return Arc::clone(slot);
        }

        let mut slots = self.slots.write().await;
        slots.retain(|_, slot| !slot.is_stale());
        let slot = slots
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(CacheSlot::new(self.ttl)));
        Arc::clone(slot)
    }

    /// Remove `key` if it still maps to `slot` and nothing was loaded into
    /// it, so failed lookups do not accumulate.
    async fn evict_unloaded(&self, key: &str, slot: &Arc<CacheSlot<T>>) {
        if slot.is_loaded().await {
            return;
        }
        let mut slots = self.slots.write().await;
        if slots.get(key).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            slots.remove(key);
        }
    }
}
