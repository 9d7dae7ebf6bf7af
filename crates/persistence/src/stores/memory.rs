//! In-memory guest store.
//!
//! Backs tests and local development. Ids are assigned from a counter that
//! never rewinds, so deleting a record never frees its id for reuse.

use async_trait::async_trait;
use chrono::Utc;
use domain::models::{Guest, NewGuest};
use std::sync::RwLock;

use crate::error::StoreError;
use crate::stores::GuestStore;

#[derive(Default)]
pub struct MemoryGuestStore {
    inner: RwLock<Inner>,
}

struct Inner {
    next_id: i64,
    rows: Vec<Guest>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl MemoryGuestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestStore for MemoryGuestStore {
    async fn insert(&self, guest: NewGuest) -> Result<Guest, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;

        let record = Guest {
            id: inner.next_id,
            first_name: guest.first_name,
            last_name: guest.last_name,
            email: guest.email,
            phone: guest.phone,
            address_line1: guest.address_line1,
            address_line2: guest.address_line2,
            city: guest.city,
            state: guest.state,
            zip_code: guest.zip_code,
            country: guest.country,
            rsvp_status: domain::models::guest::DEFAULT_RSVP_STATUS.to_string(),
            submission_date: Utc::now(),
        };
        inner.next_id += 1;
        inner.rows.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<Guest>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;

        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| {
            b.submission_date
                .cmp(&a.submission_date)
                .then(b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        inner.rows.retain(|g| g.id != id);
        Ok(())
    }

    async fn exists_and_reachable(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
