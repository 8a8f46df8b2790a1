//! Theatre domain types shared by the directory client and the pipeline.

use serde::{Deserialize, Serialize};

/// Slugs that resolve to fixed sports-team pages instead of a vendor theatre page.
const FIXED_SLUG_URLS: &[(&str, &str)] = &[
    ("76ers", "https://www.nba.com/teams/sixers"),
    ("trail blazers", "https://www.nba.com/teams/blazers"),
];

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// One theatre from the directory, after field defaulting and filtering.
///
/// Read-only once built; a search session owns its records until the next
/// search replaces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheaterRecord {
    pub name: String,
    /// `"{address1}, {city}, {provinceCode} {postalCode}"`.
    pub address: String,
    pub coordinate: Coordinate,
    pub url_slug: String,
    /// Distance as reported by the directory, unscaled.
    pub distance: f64,
    /// Detail page, see [`detail_url`].
    pub url: String,
}

/// Resolves the detail-page URL for a slug.
///
/// `"76ers"` and `"trail blazers"` (in any letter case) map to fixed team
/// pages; every other slug becomes `{vendor_base_url}/Theatre/{slug}`.
#[must_use]
pub fn detail_url(vendor_base_url: &str, url_slug: &str) -> String {
    if let Some((_, fixed)) = FIXED_SLUG_URLS
        .iter()
        .find(|(slug, _)| slug.eq_ignore_ascii_case(url_slug))
    {
        return (*fixed).to_string();
    }
    format!(
        "{}/Theatre/{url_slug}",
        vendor_base_url.trim_end_matches('/')
    )
}
