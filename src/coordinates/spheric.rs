//! # Spheric Coordinate Module
//!
//! Geographic position expressed as latitude, longitude and radius on or
//! around a sphere. Latitude spans [-90, 90] degrees, longitude spans
//! (-180, 180] degrees (open lower bound, closed upper bound), and the
//! radius defaults to the Earth mean radius in kilometers.
//!
//! Same-radius distances use the great-circle formula (spherical law of
//! cosines); everything else routes through the Cartesian representation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEG2RAD, EARTH_MEAN_RADIUS_KM, FULL_TURN_DEG, HALF_TURN_DEG};
use crate::coordinates::cartesian::CartesianPoint;
use crate::coordinates::equal_within_delta;
use crate::{GeopointError, Result};

/// Geographic point in spheric representation
///
/// Immutable after construction; the constructor enforces the latitude,
/// longitude and radius ranges, so every live instance satisfies them.
///
/// # Examples
///
/// ```rust
/// use geopoint::coordinates::spheric::SphericPoint;
///
/// let erlangen = SphericPoint::with_earth_radius(49.11, 11.01).unwrap();
/// let nuremberg = SphericPoint::with_earth_radius(49.27, 11.04).unwrap();
/// let km = erlangen.distance(&nuremberg);
/// assert!((km - 17.92426).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SphericRecord", into = "SphericRecord")]
pub struct SphericPoint {
    latitude: f64,
    longitude: f64,
    radius: f64,
}

/// Wire shape for [`SphericPoint`]; deserialization funnels through the
/// validating constructor instead of bypassing it.
#[derive(Serialize, Deserialize)]
struct SphericRecord {
    latitude: f64,
    longitude: f64,
    radius: f64,
}

impl TryFrom<SphericRecord> for SphericPoint {
    type Error = GeopointError;

    fn try_from(record: SphericRecord) -> Result<Self> {
        SphericPoint::new(record.latitude, record.longitude, record.radius)
    }
}

impl From<SphericPoint> for SphericRecord {
    fn from(point: SphericPoint) -> Self {
        SphericRecord {
            latitude: point.latitude,
            longitude: point.longitude,
            radius: point.radius,
        }
    }
}

impl SphericPoint {
    /// Creates a new spheric point
    ///
    /// # Errors
    ///
    /// Returns [`GeopointError::InvalidArgument`] if latitude is outside
    /// [-90, 90], longitude is outside (-180, 180], the radius is negative
    /// or non-finite, or any argument is NaN. NaN fails every range
    /// comparison, so the range checks subsume the NaN check.
    pub fn new(latitude: f64, longitude: f64, radius: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeopointError::InvalidArgument(format!(
                "latitude {} out of range [-90, 90]",
                latitude
            )));
        }
        // Longitude convention: -180 is excluded, its alias +180 is the
        // canonical form of the antimeridian.
        if !(longitude > -HALF_TURN_DEG && longitude <= HALF_TURN_DEG) {
            return Err(GeopointError::InvalidArgument(format!(
                "longitude {} out of range (-180, 180]",
                longitude
            )));
        }
        if !(radius >= 0.0 && radius.is_finite()) {
            return Err(GeopointError::InvalidArgument(format!(
                "radius {} must be finite and non-negative",
                radius
            )));
        }
        Ok(SphericPoint {
            latitude,
            longitude,
            radius,
        })
    }

    /// Creates a spheric point on the Earth mean radius sphere
    pub fn with_earth_radius(latitude: f64, longitude: f64) -> Result<Self> {
        SphericPoint::new(latitude, longitude, EARTH_MEAN_RADIUS_KM)
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Radius in kilometers
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Absolute latitude difference to another spheric point in degrees
    ///
    /// Latitude has no branch cut, so no wraparound applies.
    pub fn latitudinal_distance(&self, other: &SphericPoint) -> f64 {
        (self.latitude - other.latitude).abs()
    }

    /// Shortest longitude difference to another spheric point in degrees
    ///
    /// Wraps around the antimeridian: a raw difference of 180 degrees or
    /// more is replaced by the complement to a full turn, so -179 and +179
    /// are 2 degrees apart, not 358.
    pub fn longitudinal_distance(&self, other: &SphericPoint) -> f64 {
        let raw = (self.longitude - other.longitude).abs();
        if raw >= HALF_TURN_DEG {
            FULL_TURN_DEG - raw
        } else {
            raw
        }
    }

    /// Calculates the distance to another spheric point in kilometers
    ///
    /// Points on the same sphere use the great-circle distance (spherical
    /// law of cosines). Radii are compared exactly, not by delta: any
    /// bitwise radius difference routes the computation through Cartesian
    /// space instead. The result is always non-negative.
    ///
    /// # Mathematical Formula
    ///
    /// `d = r * acos(sin(lat1)*sin(lat2) + cos(lat1)*cos(lat2)*cos(Δlon))`
    ///
    /// with all angles in radians. The acos argument is clamped to
    /// [-1, 1] so rounding at antipodal or coincident points cannot
    /// produce NaN.
    pub fn distance(&self, other: &SphericPoint) -> f64 {
        // Bit-identical points are exactly coincident.
        if self == other {
            return 0.0;
        }
        if self.radius != other.radius {
            return self.to_cartesian().distance(&other.to_cartesian());
        }

        let lat1 = self.latitude * DEG2RAD;
        let lat2 = other.latitude * DEG2RAD;
        let delta_lon = self.longitudinal_distance(other) * DEG2RAD;

        let cos_angle =
            (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos()).clamp(-1.0, 1.0);
        self.radius * cos_angle.acos()
    }

    /// Converts to the Cartesian representation
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = r * cos(lat) * cos(lon)`
    /// - `y = r * cos(lat) * sin(lon)`
    /// - `z = r * sin(lat)`
    ///
    /// Pure and total: validated latitude, longitude and radius cannot
    /// produce NaN components.
    pub fn to_cartesian(&self) -> CartesianPoint {
        let lat = self.latitude * DEG2RAD;
        let lon = self.longitude * DEG2RAD;
        let cos_lat = lat.cos();
        CartesianPoint::new(
            self.radius * cos_lat * lon.cos(),
            self.radius * cos_lat * lon.sin(),
            self.radius * lat.sin(),
        )
        .expect("validated spheric point converts to finite cartesian components")
    }

    /// Checks delta-tolerant equality with another spheric point
    ///
    /// Points whose radii are delta-equal compare componentwise on
    /// latitude, longitude and radius; otherwise both sides are compared
    /// through their Cartesian images, keeping equality
    /// representation-independent.
    pub fn is_equal(&self, other: &SphericPoint) -> bool {
        if !equal_within_delta(self.radius, other.radius) {
            return self.to_cartesian().is_equal(&other.to_cartesian());
        }
        equal_within_delta(self.latitude, other.latitude)
            && equal_within_delta(self.longitude, other.longitude)
            && equal_within_delta(self.radius, other.radius)
    }
}

impl Default for SphericPoint {
    /// Null island at Earth mean radius
    fn default() -> Self {
        SphericPoint {
            latitude: 0.0,
            longitude: 0.0,
            radius: EARTH_MEAN_RADIUS_KM,
        }
    }
}
