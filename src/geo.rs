use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::time::Duration;

use crate::error::{Error, PositionError, Result};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLon(lat, lng)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lng(self) -> f64 {
        self.1
    }

    //Ex: -18.42,-49.22
    pub fn from_arg(raw: &str) -> Result<Self> {
        lazy_static! {
            static ref PAIR_REGEX: Regex =
                Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*$").unwrap();
        }

        let bad = || Error::BadCoordinate {
            raw: raw.to_owned(),
        };

        let cap = PAIR_REGEX.captures(raw).ok_or_else(bad)?;
        let lat: f64 = cap[1].parse().map_err(|_| bad())?;
        let lng: f64 = cap[2].parse().map_err(|_| bad())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(Error::CoordinateRange { lat, lng });
        }

        Ok(LatLon(lat, lng))
    }

    /// Great-circle distance in kilometers, haversine form.
    pub fn distance_km(self, other: LatLon) -> f64 {
        let d_lat = (other.0 - self.0).to_radians();
        let d_lng = (other.1 - self.1).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.0.to_radians().cos() * other.0.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ns = if self.0.is_sign_positive() { "N" } else { "S" };
        let ew = if self.1.is_sign_positive() { "E" } else { "W" };
        write!(f, "{:.4}{} {:.4}{}", self.0.abs(), ns, self.1.abs(), ew)
    }
}

/// Configuration handed to a position source, matching the page's
/// `{ timeout: 5000, enableHighAccuracy: false }` request.
#[derive(Clone, Copy, Debug)]
pub struct PositionRequest {
    pub timeout: Duration,
    pub high_accuracy: bool,
}

impl Default for PositionRequest {
    fn default() -> Self {
        PositionRequest {
            timeout: Duration::from_secs(5),
            high_accuracy: false,
        }
    }
}

/// External geolocation capability. Requested once per page view, fire
/// and forget; the outcome is handed to the finder as-is.
pub trait PositionSource {
    fn current_position(
        &mut self,
        request: &PositionRequest,
    ) -> std::result::Result<LatLon, PositionError>;
}

/// A caller-supplied fix, e.g. from the `--near` flag.
pub struct FixedPosition(pub LatLon);

impl PositionSource for FixedPosition {
    fn current_position(
        &mut self,
        _request: &PositionRequest,
    ) -> std::result::Result<LatLon, PositionError> {
        Ok(self.0)
    }
}

/// Stands in for a visitor with no fix; behaves like a denied prompt.
pub struct NoProvider;

impl PositionSource for NoProvider {
    fn current_position(
        &mut self,
        _request: &PositionRequest,
    ) -> std::result::Result<LatLon, PositionError> {
        Err(PositionError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITUMBIARA: LatLon = LatLon::new(-18.4097, -49.2181);
    const UBERLANDIA: LatLon = LatLon::new(-18.9186, -48.2772);

    #[test]
    fn identical_points_are_zero_distance() {
        assert!(ITUMBIARA.distance_km(ITUMBIARA).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = ITUMBIARA.distance_km(UBERLANDIA);
        let back = UBERLANDIA.distance_km(ITUMBIARA);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn itumbiara_uberlandia_magnitude() {
        // Roughly 114 km apart on the ground
        let d = ITUMBIARA.distance_km(UBERLANDIA);
        assert!(d > 100.0 && d < 130.0, "got {} km", d);
    }

    #[test]
    fn parses_signed_decimal_pairs() {
        let p = LatLon::from_arg("-18.42, -49.22").unwrap();
        assert_eq!(p, LatLon::new(-18.42, -49.22));

        let q = LatLon::from_arg("0,0").unwrap();
        assert_eq!(q, LatLon::new(0.0, 0.0));
    }

    #[test]
    fn rejects_garbage_pairs() {
        assert!(LatLon::from_arg("north-ish").is_err());
        assert!(LatLon::from_arg("-18.42").is_err());
        assert!(LatLon::from_arg("-18.42;-49.22").is_err());
    }

    #[test]
    fn rejects_out_of_range_degrees() {
        assert!(LatLon::from_arg("91.0,0.0").is_err());
        assert!(LatLon::from_arg("0.0,-181.0").is_err());
    }

    #[test]
    fn display_uses_hemisphere_letters() {
        assert_eq!(ITUMBIARA.to_string(), "18.4097S 49.2181W");
        assert_eq!(LatLon::new(40.7, 74.0).to_string(), "40.7000N 74.0000E");
    }
}
