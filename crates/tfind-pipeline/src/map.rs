//! Map view model: a fixed-size region around the user plus one marker per
//! theatre.

use tfind_core::{Coordinate, TheaterRecord};

/// Side length of the square region shown around the user, in meters.
pub const REGION_METERS: f64 = 50_000.0;

/// Mean meridional length of one degree of latitude.
const METERS_PER_LAT_DEGREE: f64 = 111_320.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub center: Coordinate,
    pub latitudinal_meters: f64,
    pub longitudinal_meters: f64,
}

impl MapRegion {
    /// A [`REGION_METERS`] × [`REGION_METERS`] region around `center`.
    #[must_use]
    pub fn around(center: Coordinate) -> Self {
        Self {
            center,
            latitudinal_meters: REGION_METERS,
            longitudinal_meters: REGION_METERS,
        }
    }

    /// North-south span in degrees.
    #[must_use]
    pub fn latitude_delta(&self) -> f64 {
        self.latitudinal_meters / METERS_PER_LAT_DEGREE
    }

    /// East-west span in degrees. Widens with latitude so the physical width
    /// stays constant; capped at a full turn near the poles.
    #[must_use]
    pub fn longitude_delta(&self) -> f64 {
        let cos_lat = self.center.latitude.to_radians().cos();
        if cos_lat <= f64::EPSILON {
            return 360.0;
        }
        (self.longitudinal_meters / (METERS_PER_LAT_DEGREE * cos_lat)).min(360.0)
    }

    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let half_lat = self.latitude_delta() / 2.0;
        let half_lng = self.longitude_delta() / 2.0;
        let d_lng = (coordinate.longitude - self.center.longitude + 540.0).rem_euclid(360.0) - 180.0;
        (coordinate.latitude - self.center.latitude).abs() <= half_lat && d_lng.abs() <= half_lng
    }
}

/// A map annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub title: String,
    pub subtitle: String,
    pub coordinate: Coordinate,
}

impl Marker {
    #[must_use]
    pub fn for_theater(theater: &TheaterRecord) -> Self {
        Self {
            title: theater.name.clone(),
            subtitle: theater.address.clone(),
            coordinate: theater.coordinate,
        }
    }

    /// Driving directions from the current location to this marker.
    #[must_use]
    pub fn directions_url(&self) -> String {
        format!(
            "https://maps.apple.com/?daddr={},{}&dirflg=d",
            self.coordinate.latitude, self.coordinate.longitude
        )
    }
}

/// Map state: visible region, markers, and whether the user dot is shown.
#[derive(Debug, Clone, Default)]
pub struct MapPresenter {
    region: Option<MapRegion>,
    markers: Vec<Marker>,
    shows_user_location: bool,
}

impl MapPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Centers on the user and turns on the user-location dot, leaving
    /// markers alone.
    pub fn center_on(&mut self, center: Coordinate) {
        self.region = Some(MapRegion::around(center));
        self.shows_user_location = true;
    }

    /// Centers on `center` and replaces all markers with one per theatre, in
    /// input order. Duplicate coordinates give overlapping markers.
    pub fn render(&mut self, center: Coordinate, theaters: &[TheaterRecord]) {
        self.center_on(center);
        self.markers = theaters.iter().map(Marker::for_theater).collect();
        tracing::debug!(markers = self.markers.len(), %center, "map rendered");
    }

    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    #[must_use]
    pub fn region(&self) -> Option<&MapRegion> {
        self.region.as_ref()
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn shows_user_location(&self) -> bool {
        self.shows_user_location
    }
}
