//! The fixed US-state code set offered by the guest form.

/// Two-letter codes for the 50 US states, in form display order.
pub const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Returns true when `code` is one of the 50 state codes.
///
/// The form constrains its selector to this set; the server only requires
/// the field to be non-empty. The admin list's states-represented summary
/// counts values that pass this check.
pub fn is_us_state(code: &str) -> bool {
    US_STATES.contains(&code)
}
