//! Persistence layer for the wedding address backend.
//!
//! This crate contains:
//! - Entity definitions (database row mappings)
//! - The `GuestStore` trait and its backends (PostgreSQL, Supabase table
//!   client, in-memory) plus a TTL read-cache wrapper

pub mod entities;
pub mod error;
pub mod stores;

pub use error::StoreError;
pub use stores::{
    CachedGuestStore, GuestStore, MemoryGuestStore, PgGuestStore, PgStoreConfig,
    SupabaseGuestStore,
};
