/// Location-authorization state as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationAuthorization {
    AuthorizedAlways,
    AuthorizedWhenInUse,
    Denied,
    NotDetermined,
}

impl LocationAuthorization {
    /// `true` for either of the two granted states.
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(
            self,
            LocationAuthorization::AuthorizedAlways | LocationAuthorization::AuthorizedWhenInUse
        )
    }
}

impl std::fmt::Display for LocationAuthorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationAuthorization::AuthorizedAlways => write!(f, "always"),
            LocationAuthorization::AuthorizedWhenInUse => write!(f, "when-in-use"),
            LocationAuthorization::Denied => write!(f, "denied"),
            LocationAuthorization::NotDetermined => write!(f, "not-determined"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Full theatre-directory endpoint, query string included.
    pub directory_url: String,
    /// Scheme + host that detail-page slugs are appended to.
    pub vendor_base_url: String,
    pub search_radius_meters: f64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub location_authorization: LocationAuthorization,
}
