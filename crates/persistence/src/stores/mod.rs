//! Guest store backends.
//!
//! All backends expose the same four operations, so callers never branch on
//! backend identity; the backend is chosen once at startup by configuration.

use async_trait::async_trait;
use domain::models::{Guest, NewGuest};

use crate::error::StoreError;

pub mod cached;
pub mod memory;
pub mod postgres;
pub mod supabase;

pub use cached::CachedGuestStore;
pub use memory::MemoryGuestStore;
pub use postgres::{PgGuestStore, PgStoreConfig};
pub use supabase::SupabaseGuestStore;

/// Persistence operations over the guests table.
#[async_trait]
pub trait GuestStore: Send + Sync {
    /// Persists a validated record. The store assigns `id` and
    /// `submission_date` and defaults `rsvp_status` to "Pending".
    async fn insert(&self, guest: NewGuest) -> Result<Guest, StoreError>;

    /// Every record, ordered by `submission_date` descending (newest
    /// first, ties broken by `id` descending). An empty store yields an
    /// empty vec, not an error.
    async fn list_all(&self) -> Result<Vec<Guest>, StoreError>;

    /// Removes the record with that id if present. Deleting a missing id
    /// is an idempotent no-op that succeeds.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Lightweight readiness probe used at startup. Callers must halt on
    /// failure rather than attempt degraded operation.
    async fn exists_and_reachable(&self) -> Result<bool, StoreError>;
}
