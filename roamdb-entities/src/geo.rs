use std::fmt;

use itertools::Itertools as _;
use thiserror::Error;

/// Geographical latitude in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location on the map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("Invalid coordinate degrees: {0}")]
    Degrees(#[from] std::num::ParseFloatError),
    #[error("Coordinate degrees out of range")]
    OutOfRange,
    #[error("Expected \"<lat>,<lng>\"")]
    Format,
}

impl std::str::FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() else {
            return Err(MapPointParseError::Format);
        };
        let lat_deg = lat_deg_str.trim().parse::<f64>()?;
        let lng_deg = lng_deg_str.trim().parse::<f64>()?;
        MapPoint::try_from_lat_lng_deg(lat_deg, lng_deg).ok_or(MapPointParseError::OutOfRange)
    }
}

/// A distance on the surface of the earth.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn from_kilometers(kilometers: f64) -> Self {
        Self(kilometers * 1_000.0)
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface of the earth
    /// using the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        let central_angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * central_angle)
    }
}
