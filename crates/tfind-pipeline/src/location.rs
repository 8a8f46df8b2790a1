//! One-shot location requests on top of a platform authorization model.

use tfind_core::{Coordinate, LocationAuthorization};

use crate::error::LocationError;

/// Device side of location services.
pub trait LocationPlatform {
    /// Current authorization state.
    fn authorization(&self) -> LocationAuthorization;

    /// Shows the "while in use" permission prompt and returns the state the
    /// user left it in.
    fn request_when_in_use_authorization(&mut self) -> LocationAuthorization;

    /// Requests a single fix. `None` when the platform cannot produce one.
    fn request_location(&mut self) -> Option<Coordinate>;
}

/// Wraps a [`LocationPlatform`] with the permission-then-fix sequence.
#[derive(Debug)]
pub struct LocationProvider<P> {
    platform: P,
    prompted: bool,
}

impl<P: LocationPlatform> LocationProvider<P> {
    #[must_use]
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            prompted: false,
        }
    }

    #[must_use]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Obtains one coordinate fix.
    ///
    /// An undetermined authorization triggers the permission prompt, once per
    /// provider. Nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`LocationError::PermissionDenied`] if authorization is denied, or
    ///   is still undetermined after the prompt.
    /// - [`LocationError::LocationUnavailable`] if the platform yields no fix.
    pub fn request_once(&mut self) -> Result<Coordinate, LocationError> {
        let mut status = self.platform.authorization();

        if status == LocationAuthorization::NotDetermined && !self.prompted {
            self.prompted = true;
            status = self.platform.request_when_in_use_authorization();
            tracing::info!(%status, "location authorization changed");
        }

        if !status.is_granted() {
            tracing::warn!(%status, "location permission not granted");
            return Err(LocationError::PermissionDenied);
        }

        let Some(coordinate) = self.platform.request_location() else {
            tracing::warn!("location services produced no fix");
            return Err(LocationError::LocationUnavailable);
        };

        tracing::info!(%coordinate, "location fix obtained");
        Ok(coordinate)
    }
}

/// A platform with a fixed authorization state and a fixed fix.
///
/// Used by the CLI, where the coordinate comes from the command line. The
/// prompt grants "while in use".
#[derive(Debug, Clone)]
pub struct StaticLocation {
    authorization: LocationAuthorization,
    fix: Option<Coordinate>,
}

impl StaticLocation {
    #[must_use]
    pub fn new(authorization: LocationAuthorization, fix: Option<Coordinate>) -> Self {
        Self { authorization, fix }
    }
}

impl LocationPlatform for StaticLocation {
    fn authorization(&self) -> LocationAuthorization {
        self.authorization
    }

    fn request_when_in_use_authorization(&mut self) -> LocationAuthorization {
        if self.authorization == LocationAuthorization::NotDetermined {
            self.authorization = LocationAuthorization::AuthorizedWhenInUse;
        }
        self.authorization
    }

    fn request_location(&mut self) -> Option<Coordinate> {
        self.fix
    }
}
