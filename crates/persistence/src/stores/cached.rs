//! Time-boxed read cache over a guest store.
//!
//! Memoizes `list_all` for a short interval to keep store load down on the
//! admin view. The cache is dropped on every successful insert or delete so
//! a just-deleted row never lingers in the next read.

use async_trait::async_trait;
use domain::models::{Guest, NewGuest};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StoreError;
use crate::stores::GuestStore;

pub struct CachedGuestStore {
    inner: Arc<dyn GuestStore>,
    ttl: Duration,
    cached: Mutex<Option<CachedList>>,
}

struct CachedList {
    fetched_at: Instant,
    guests: Vec<Guest>,
}

impl CachedGuestStore {
    /// Wraps `inner` with a `ttl`-bounded read cache. A zero ttl disables
    /// caching entirely.
    pub fn new(inner: Arc<dyn GuestStore>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: Mutex::new(None),
        }
    }

    async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }
}

#[async_trait]
impl GuestStore for CachedGuestStore {
    async fn insert(&self, guest: NewGuest) -> Result<Guest, StoreError> {
        let inserted = self.inner.insert(guest).await?;
        self.invalidate().await;
        Ok(inserted)
    }

    async fn list_all(&self) -> Result<Vec<Guest>, StoreError> {
        if self.ttl.is_zero() {
            return self.inner.list_all().await;
        }

        let mut cached = self.cached.lock().await;
        if let Some(entry) = cached.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                debug!(count = entry.guests.len(), "Serving guest list from cache");
                return Ok(entry.guests.clone());
            }
        }

        let guests = self.inner.list_all().await?;
        *cached = Some(CachedList {
            fetched_at: Instant::now(),
            guests: guests.clone(),
        });
        Ok(guests)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.inner.delete(id).await?;
        self.invalidate().await;
        Ok(())
    }

    async fn exists_and_reachable(&self) -> Result<bool, StoreError> {
        self.inner.exists_and_reachable().await
    }
}
