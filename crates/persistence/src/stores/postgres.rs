//! PostgreSQL guest store.

use async_trait::async_trait;
use domain::models::{Guest, NewGuest};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

use crate::entities::GuestEntity;
use crate::error::StoreError;
use crate::stores::GuestStore;

const GUEST_COLUMNS: &str = "id, first_name, last_name, email, phone, address_line1, \
     address_line2, city, state, zip_code, country, rsvp_status, submission_date";

/// Connection settings for the relational backend.
#[derive(Debug, Clone)]
pub struct PgStoreConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// Relational backend over a connection pool.
#[derive(Clone)]
pub struct PgGuestStore {
    pool: PgPool,
}

impl PgGuestStore {
    /// Connects a pool sized by `config` and applies any pending guests
    /// table migrations before the store is handed out.
    pub async fn connect(config: &PgStoreConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(&config.url)
            .await?;

        info!("Applying guests table migrations");
        sqlx::migrate!("src/migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Backend(format!("migration failed: {e}")))?;
        info!("Migrations up to date");

        Ok(Self { pool })
    }
}

#[async_trait]
impl GuestStore for PgGuestStore {
    async fn insert(&self, guest: NewGuest) -> Result<Guest, StoreError> {
        let entity = sqlx::query_as::<_, GuestEntity>(
            r#"
            INSERT INTO guests (
                first_name, last_name, email, phone, address_line1, address_line2,
                city, state, zip_code, country
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, first_name, last_name, email, phone, address_line1,
                      address_line2, city, state, zip_code, country, rsvp_status,
                      submission_date
            "#,
        )
        .bind(&guest.first_name)
        .bind(&guest.last_name)
        .bind(&guest.email)
        .bind(&guest.phone)
        .bind(&guest.address_line1)
        .bind(&guest.address_line2)
        .bind(&guest.city)
        .bind(&guest.state)
        .bind(&guest.zip_code)
        .bind(&guest.country)
        .fetch_one(&self.pool)
        .await?;
        Ok(entity.into())
    }

    async fn list_all(&self) -> Result<Vec<Guest>, StoreError> {
        let entities = sqlx::query_as::<_, GuestEntity>(&format!(
            "SELECT {GUEST_COLUMNS} FROM guests ORDER BY submission_date DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        // Zero rows affected means the id was already gone; that succeeds.
        sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists_and_reachable(&self) -> Result<bool, StoreError> {
        // Probes the table itself so a missing table fails the check, not
        // just a dead connection.
        sqlx::query("SELECT 1 FROM guests LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(true)
    }
}
