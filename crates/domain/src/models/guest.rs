//! Guest record models and form validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default country when the form leaves it unset.
pub const DEFAULT_COUNTRY: &str = "USA";

/// RSVP status assigned to every new record. Never changed by this service.
pub const DEFAULT_RSVP_STATUS: &str = "Pending";

/// Countries offered by the form selector.
pub const COUNTRIES: [&str; 4] = ["USA", "Canada", "Mexico", "Other"];

/// One submitted mailing address, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Guest {
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

/// A guest form submission, before validation.
///
/// Field declaration order matches the record layout; validation messages
/// are reported in this order.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SubmitGuestRequest {
    #[validate(custom(
        function = shared::validation::not_blank,
        message = "First name is required"
    ))]
    pub first_name: String,

    #[validate(custom(
        function = shared::validation::not_blank,
        message = "Last name is required"
    ))]
    pub last_name: String,

    #[validate(custom(
        function = shared::validation::email_shape_or_empty,
        message = "Please enter a valid email address"
    ))]
    pub email: Option<String>,

    pub phone: Option<String>,

    #[validate(custom(
        function = shared::validation::not_blank,
        message = "Address line 1 is required"
    ))]
    pub address_line1: String,

    pub address_line2: Option<String>,

    #[validate(custom(
        function = shared::validation::not_blank,
        message = "City is required"
    ))]
    pub city: String,

    #[validate(custom(
        function = shared::validation::not_empty,
        message = "State is required"
    ))]
    pub state: String,

    #[validate(custom(
        function = shared::validation::not_blank,
        message = "ZIP code is required"
    ))]
    pub zip_code: String,

    pub country: Option<String>,
}

/// Field order used to report validation messages deterministically.
/// `validator` collects errors into a map, so ordering is restored here.
const FIELD_ORDER: [&str; 7] = [
    "first_name",
    "last_name",
    "email",
    "address_line1",
    "city",
    "state",
    "zip_code",
];

impl SubmitGuestRequest {
    /// Runs every validation rule and returns the collected messages,
    /// ordered by field declaration. An empty vec means the form is valid.
    pub fn validation_messages(&self) -> Vec<String> {
        let errors = match self.validate() {
            Ok(()) => return Vec::new(),
            Err(errors) => errors,
        };

        let field_errors = errors.field_errors();
        let mut messages = Vec::new();
        for field in FIELD_ORDER {
            if let Some(field_errs) = field_errors.get(field) {
                for err in field_errs.iter() {
                    if let Some(msg) = &err.message {
                        messages.push(msg.to_string());
                    }
                }
            }
        }
        messages
    }

    /// Normalizes the submission into an insertable record: optional fields
    /// that arrived empty become None, country falls back to "USA".
    pub fn into_new_guest(self) -> NewGuest {
        NewGuest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: none_if_blank(self.email),
            phone: none_if_blank(self.phone),
            address_line1: self.address_line1,
            address_line2: none_if_blank(self.address_line2),
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self
                .country
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        }
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A validated, normalized record ready for the store. The store assigns
/// `id`, `submission_date`, and the default `rsvp_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewGuest {
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
}
