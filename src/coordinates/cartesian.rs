//! # Cartesian Coordinate Module
//!
//! This module provides the 3D Cartesian point that serves as the hub of all
//! numeric work in the crate: every cross-representation distance or equality
//! check converts its operands to Cartesian form first.
//!
//! ## Design Philosophy
//!
//! The `CartesianPoint` struct stores a position in a standard right-handed
//! Cartesian coordinate system, free of the branch cuts and pole
//! singularities that complicate spheric coordinates. Construction is the
//! only place validation happens; once built, an instance satisfies its
//! invariants (no NaN components) for its entire lifetime.
//!
//! ## Internal Storage
//!
//! Components are stored as three `f64` values at full IEEE 754 double
//! precision, with no normalization on input. The type bridges to nalgebra's
//! `Vector3<f64>` for linear algebra.
//!
//! ## Examples
//!
//! ```rust
//! use geopoint::coordinates::cartesian::CartesianPoint;
//!
//! let origin = CartesianPoint::new(0.0, 0.0, 0.0).unwrap();
//! let unit_x = CartesianPoint::new(1.0, 0.0, 0.0).unwrap();
//! assert!((unit_x.distance(&origin) - 1.0).abs() < 1e-15);
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::coordinates::equal_within_delta;
use crate::{GeopointError, Result};

/// Three-dimensional Cartesian point
///
/// Canonical representation for distance math. Immutable after construction;
/// the constructor rejects NaN components so every live instance is
/// invariant-safe.
///
/// # Equality
///
/// `is_equal` applies the crate-wide delta tolerance componentwise, so two
/// points within projection error of each other compare equal. The derived
/// `PartialEq` remains exact; the interning layer is stricter still and
/// keys on component bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartesianRecord", into = "CartesianRecord")]
pub struct CartesianPoint {
    x: f64,
    y: f64,
    z: f64,
}

/// Wire shape for [`CartesianPoint`]; deserialization funnels through the
/// validating constructor instead of bypassing it.
#[derive(Serialize, Deserialize)]
struct CartesianRecord {
    x: f64,
    y: f64,
    z: f64,
}

impl TryFrom<CartesianRecord> for CartesianPoint {
    type Error = GeopointError;

    fn try_from(record: CartesianRecord) -> Result<Self> {
        CartesianPoint::new(record.x, record.y, record.z)
    }
}

impl From<CartesianPoint> for CartesianRecord {
    fn from(point: CartesianPoint) -> Self {
        CartesianRecord {
            x: point.x,
            y: point.y,
            z: point.z,
        }
    }
}

impl CartesianPoint {
    /// Creates a new Cartesian point
    ///
    /// # Errors
    ///
    /// Returns [`GeopointError::InvalidArgument`] if any component is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geopoint::coordinates::cartesian::CartesianPoint;
    ///
    /// let point = CartesianPoint::new(1.0, 2.0, 3.0).unwrap();
    /// assert_eq!(point.x(), 1.0);
    /// assert!(CartesianPoint::new(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        for (name, value) in [("x", x), ("y", y), ("z", z)] {
            if value.is_nan() {
                return Err(GeopointError::InvalidArgument(format!(
                    "cartesian component {} is NaN",
                    name
                )));
            }
        }
        Ok(CartesianPoint { x, y, z })
    }

    /// X-component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Calculates the Euclidean distance to another Cartesian point
    ///
    /// # Mathematical Formula
    ///
    /// `distance = sqrt((Δx)² + (Δy)² + (Δz)²)`
    ///
    /// The result is always non-negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geopoint::coordinates::cartesian::CartesianPoint;
    ///
    /// let a = CartesianPoint::new(0.0, 0.0, 0.0).unwrap();
    /// let b = CartesianPoint::new(3.0, 4.0, 0.0).unwrap();
    /// assert_eq!(a.distance(&b), 5.0);
    /// ```
    pub fn distance(&self, other: &CartesianPoint) -> f64 {
        (self.to_vector3() - other.to_vector3()).norm()
    }

    /// Checks delta-tolerant equality with another Cartesian point
    ///
    /// Componentwise comparison within the crate-wide delta.
    pub fn is_equal(&self, other: &CartesianPoint) -> bool {
        equal_within_delta(self.x, other.x)
            && equal_within_delta(self.y, other.y)
            && equal_within_delta(self.z, other.z)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    ///
    /// # Errors
    ///
    /// Returns [`GeopointError::InvalidArgument`] if any component is NaN.
    pub fn from_vector3(vec: Vector3<f64>) -> Result<Self> {
        CartesianPoint::new(vec.x, vec.y, vec.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cartesian_creation() {
        let point = CartesianPoint::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(point.x(), 1.0);
        assert_eq!(point.y(), 2.0);
        assert_eq!(point.z(), 3.0);
    }

    #[test]
    fn test_nan_rejected() {
        assert!(CartesianPoint::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(CartesianPoint::new(0.0, f64::NAN, 0.0).is_err());
        assert!(CartesianPoint::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_infinite_components_allowed() {
        // Only NaN is rejected; the original validation let infinities through.
        assert!(CartesianPoint::new(f64::INFINITY, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_distance() {
        let a = CartesianPoint::new(0.0, 0.0, 0.0).unwrap();
        let b = CartesianPoint::new(3.0, 4.0, 0.0).unwrap();
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_distance_erlangen_nuremberg() {
        let erlangen = CartesianPoint::new(4093.7502, 796.4859, 4816.2704).unwrap();
        let nuremberg = CartesianPoint::new(4080.1160, 796.0507, 4827.8979).unwrap();
        assert_relative_eq!(erlangen.distance(&nuremberg), 17.92426, epsilon = 1e-4);
        assert_relative_eq!(nuremberg.distance(&erlangen), 17.92426, epsilon = 1e-4);
    }

    #[test]
    fn test_delta_equality() {
        let a = CartesianPoint::new(1.0, 2.0, 3.0).unwrap();
        let b = CartesianPoint::new(1.0 + 5e-5, 2.0 - 5e-5, 3.0).unwrap();
        let c = CartesianPoint::new(1.001, 2.0, 3.0).unwrap();
        assert!(a.is_equal(&b));
        assert!(b.is_equal(&a));
        assert!(!a.is_equal(&c));
    }

    #[test]
    fn test_vector3_round_trip() {
        let point = CartesianPoint::new(1.0, 2.0, 3.0).unwrap();
        let vec = point.to_vector3();
        assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
        let back = CartesianPoint::from_vector3(vec).unwrap();
        assert_eq!(point, back);
    }
}
