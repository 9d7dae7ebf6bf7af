//! Guest entity (store row mapping).
//!
//! Shared by the PostgreSQL backend (`sqlx::FromRow`) and the Supabase
//! table client (serde deserialization of the PostgREST representation).

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

/// Row mapping for the guests table.
#[derive(Debug, Clone, FromRow, Deserialize)]
pub struct GuestEntity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub rsvp_status: String,
    pub submission_date: DateTime<Utc>,
}

impl From<GuestEntity> for domain::models::Guest {
    fn from(entity: GuestEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            address_line1: entity.address_line1,
            address_line2: entity.address_line2,
            city: entity.city,
            state: entity.state,
            zip_code: entity.zip_code,
            country: entity.country,
            rsvp_status: entity.rsvp_status,
            submission_date: entity.submission_date,
        }
    }
}
