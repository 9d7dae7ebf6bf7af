//! Supabase table client.
//!
//! Reaches the same logical guests table through the managed backend's
//! PostgREST endpoint instead of a direct database connection. Exposes
//! exactly the same four operations as the relational backend.

use async_trait::async_trait;
use domain::models::{Guest, NewGuest};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::entities::GuestEntity;
use crate::error::StoreError;
use crate::stores::GuestStore;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Managed-backend guest store over the PostgREST table endpoint.
pub struct SupabaseGuestStore {
    client: Client,
    table_url: String,
}

impl SupabaseGuestStore {
    /// Creates a client for `{service_url}/rest/v1/guests` authenticated
    /// with the service API key.
    pub fn new(service_url: &str, api_key: &str) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(api_key)
            .map_err(|_| StoreError::Backend("API key contains invalid characters".to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| StoreError::Backend("API key contains invalid characters".to_string()))?;
        headers.insert("apikey", key_value);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            table_url: format!("{}/rest/v1/guests", service_url.trim_end_matches('/')),
        })
    }

    fn status_error(operation: &str, status: StatusCode, body: String) -> StoreError {
        let detail = if body.is_empty() {
            status.to_string()
        } else {
            format!("{status}: {body}")
        };
        if status.is_server_error() {
            StoreError::Unavailable(format!("{operation} failed ({detail})"))
        } else {
            StoreError::Query(format!("{operation} failed ({detail})"))
        }
    }
}

#[async_trait]
impl GuestStore for SupabaseGuestStore {
    async fn insert(&self, guest: NewGuest) -> Result<Guest, StoreError> {
        let response = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .json(&guest)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error("insert", status, body));
        }

        // PostgREST returns the inserted rows as an array.
        let mut rows: Vec<GuestEntity> = response.json().await?;
        rows.pop()
            .map(Into::into)
            .ok_or_else(|| StoreError::Backend("insert returned no representation".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Guest>, StoreError> {
        let response = self
            .client
            .get(&self.table_url)
            .query(&[
                ("select", "*"),
                ("order", "submission_date.desc,id.desc"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error("list", status, body));
        }

        let rows: Vec<GuestEntity> = response.json().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(&self.table_url)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;

        // Deleting a missing id matches zero rows and still returns
        // success, which is exactly the idempotent no-op we want.
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error("delete", status, body));
        }
        Ok(())
    }

    async fn exists_and_reachable(&self) -> Result<bool, StoreError> {
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await?;
        Ok(response.status().is_success())
    }
}
