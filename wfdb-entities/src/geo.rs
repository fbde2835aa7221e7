use std::fmt;

use strum::IntoStaticStr;
use thiserror::Error;

pub type Degrees = f64;

const LAT_DEG_MIN: Degrees = -90.0;
const LAT_DEG_MAX: Degrees = 90.0;
const LNG_DEG_MIN: Degrees = -180.0;
const LNG_DEG_MAX: Degrees = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Error, IntoStaticStr)]
pub enum CoordinateError {
    #[error("Invalid latitude degrees: {0}")]
    InvalidLatitude(Degrees),
    #[error("Invalid longitude degrees: {0}")]
    InvalidLongitude(Degrees),
}

/// A geographical location given in WGS84 degrees.
///
/// The degrees are stored and emitted exactly as received,
/// i.e. without any fixed-point conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: Degrees,
    lng: Degrees,
}

impl MapPoint {
    pub fn lat_deg(self) -> Degrees {
        self.lat
    }

    pub fn lng_deg(self) -> Degrees {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        is_valid_lat(self.lat) && is_valid_lng(self.lng)
    }

    pub fn to_lat_lng_deg(self) -> (Degrees, Degrees) {
        (self.lat, self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    pub fn from_lat_lng_deg(lat: Degrees, lng: Degrees) -> Self {
        let res = Self { lat, lng };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lat_lng_deg(lat: Degrees, lng: Degrees) -> Result<Self, CoordinateError> {
        if !is_valid_lat(lat) {
            return Err(CoordinateError::InvalidLatitude(lat));
        }
        if !is_valid_lng(lng) {
            return Err(CoordinateError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }
}

// NaN and infinite values are rejected implicitly by the range checks.
fn is_valid_lat(deg: Degrees) -> bool {
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng(deg: Degrees) -> bool {
    (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

const METERS_PER_MILE: f64 = 1_609.344;

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn from_miles(miles: f64) -> Self {
        Self(miles * METERS_PER_MILE)
    }

    pub fn to_miles(self) -> f64 {
        self.0 / METERS_PER_MILE
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

pub const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    /// Reference: https://en.wikipedia.org/wiki/Great-circle_distance
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        debug_assert!(p1.is_valid());
        debug_assert!(p2.is_valid());

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat <= self.ne.lat
    }

    /// The box crosses the antimeridian if its western
    /// edge lies east of its eastern edge.
    pub fn wraps_around(&self) -> bool {
        self.sw.lng > self.ne.lng
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        debug_assert!(pt.is_valid());
        if pt.lat < self.sw.lat || pt.lat > self.ne.lat {
            return false;
        }
        if self.wraps_around() {
            // inverse (exclusive)
            !(pt.lng > self.ne.lng && pt.lng < self.sw.lng)
        } else {
            // regular (inclusive)
            pt.lng >= self.sw.lng && pt.lng <= self.ne.lng
        }
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
