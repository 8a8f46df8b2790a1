//! Output types of a directory fetch.
//!
//! ## Observed shape of `GET /api/v1/theatres?language=en-us`
//!
//! ```json
//! { "data": [ { "name": "...", "urlSlug": "...", "address1": "...",
//!               "city": "...", "provinceCode": "ON", "postalCode": "...",
//!               "latitude": 43.6, "longitude": -79.3, "distance": 1.7 } ] }
//! ```
//!
//! Fields are read one at a time from the raw JSON rather than through a
//! derived struct so that a single malformed field defaults instead of
//! rejecting the whole batch. See [`crate::normalize`].

use tfind_core::TheaterRecord;

/// A field that was missing or of the wrong type and fell back to its default
/// (`""` for strings, `0.0` for numbers). Not an error: the record is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSubstitution {
    /// Position of the entry in the response's `data` array.
    pub index: usize,
    /// JSON key that was defaulted, e.g. `"postalCode"`.
    pub field: &'static str,
}

/// Theatres that passed the radius filter, in response order, plus every
/// default substituted while building them.
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub theaters: Vec<TheaterRecord>,
    pub substitutions: Vec<FieldSubstitution>,
    /// Entries in the response before filtering.
    pub total_entries: usize,
}
