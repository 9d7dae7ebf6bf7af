//! Static form metadata.

use axum::Json;
use domain::models::guest::{COUNTRIES, DEFAULT_COUNTRY, DEFAULT_RSVP_STATUS};
use serde::Serialize;
use shared::us_states::US_STATES;

/// Select-box options and field requirements for the address form.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub states: Vec<&'static str>,
    pub countries: Vec<&'static str>,
    pub default_country: &'static str,
    pub default_rsvp_status: &'static str,
    pub required_fields: Vec<&'static str>,
}

/// Form options for the submission UI.
///
/// GET /api/v1/meta/form-options
pub async fn form_options() -> Json<FormOptions> {
    Json(FormOptions {
        states: US_STATES.to_vec(),
        countries: COUNTRIES.to_vec(),
        default_country: DEFAULT_COUNTRY,
        default_rsvp_status: DEFAULT_RSVP_STATUS,
        required_fields: vec![
            "first_name",
            "last_name",
            "address_line1",
            "city",
            "state",
            "zip_code",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_form_options_shape() {
        let Json(options) = form_options().await;
        assert_eq!(options.states.len(), 50);
        assert_eq!(options.countries, vec!["USA", "Canada", "Mexico", "Other"]);
        assert_eq!(options.default_country, "USA");
        assert_eq!(options.default_rsvp_status, "Pending");
        assert_eq!(options.required_fields.len(), 6);
        assert!(!options.required_fields.contains(&"email"));
    }
}
