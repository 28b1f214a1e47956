//! Coordinate representations and cross-representation operations
//!
//! Two interchangeable representations of a position — [`CartesianPoint`]
//! (x/y/z) and [`SphericPoint`] (latitude/longitude/radius) — are unified
//! under the closed [`Coordinate`] sum type. All mixed-representation
//! distance and equality checks convert the Cartesian-facing operand first,
//! making the Cartesian form the hub of the numeric work.

pub mod cartesian;
pub mod spheric;

pub use cartesian::CartesianPoint;
pub use spheric::SphericPoint;

use serde::{Deserialize, Serialize};

use crate::constants::COORDINATE_DELTA;
use crate::{GeopointError, Result};

/// Checks whether two doubles represent the same physical quantity
///
/// True iff `|a - b| < COORDINATE_DELTA`. Used wherever floating-point or
/// projection error makes exact comparison meaningless.
pub fn equal_within_delta(a: f64, b: f64) -> bool {
    (a - b).abs() < COORDINATE_DELTA
}

/// Polymorphic coordinate over the two known representations
///
/// A closed sum type: the set of representations is fixed, and operations
/// dispatch by pattern matching rather than dynamic dispatch. Distance and
/// equality are representation-independent — a spheric point and its
/// Cartesian image are interchangeable operands.
///
/// # Examples
///
/// ```rust
/// use geopoint::coordinates::{Coordinate, SphericPoint};
///
/// let erlangen = Coordinate::Spheric(SphericPoint::with_earth_radius(49.11, 11.01).unwrap());
/// let nuremberg = Coordinate::Spheric(SphericPoint::with_earth_radius(49.27, 11.04).unwrap());
/// assert!((erlangen.distance_to(&nuremberg) - 17.92426).abs() < 1e-4);
///
/// let image = Coordinate::Cartesian(erlangen.to_cartesian());
/// assert!(erlangen.is_equal(&image));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Coordinate {
    /// Cartesian x/y/z representation
    Cartesian(CartesianPoint),
    /// Geographic latitude/longitude/radius representation
    Spheric(SphericPoint),
}

/// Serde/persistence tag for the Cartesian variant
pub const CARTESIAN_TAG: &str = "Cartesian";
/// Serde/persistence tag for the Spheric variant
pub const SPHERIC_TAG: &str = "Spheric";

impl Coordinate {
    /// Calculates the distance to another coordinate
    ///
    /// Two spheric points take the great-circle path (with its Cartesian
    /// fallback for differing radii); any pairing that involves a Cartesian
    /// point converts the other operand to Cartesian form and measures the
    /// Euclidean distance. Symmetric and non-negative in all variant
    /// mixtures.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        match (self, other) {
            (Coordinate::Spheric(a), Coordinate::Spheric(b)) => a.distance(b),
            _ => self.to_cartesian().distance(&other.to_cartesian()),
        }
    }

    /// Checks representation-independent, delta-tolerant equality
    ///
    /// Same-variant spheric points compare in spheric terms; every other
    /// pairing compares the Cartesian images.
    pub fn is_equal(&self, other: &Coordinate) -> bool {
        match (self, other) {
            (Coordinate::Spheric(a), Coordinate::Spheric(b)) => a.is_equal(b),
            _ => self.to_cartesian().is_equal(&other.to_cartesian()),
        }
    }

    /// Converts to the Cartesian representation
    ///
    /// Identity for the Cartesian variant.
    pub fn to_cartesian(&self) -> CartesianPoint {
        match self {
            Coordinate::Cartesian(point) => *point,
            Coordinate::Spheric(point) => point.to_cartesian(),
        }
    }

    /// Reconstructs a coordinate from a persisted (variant tag, fields) pair
    ///
    /// Entry point for persistence collaborators that store coordinates as a
    /// tag plus field values; reconstruction passes through the validating
    /// constructors rather than bypassing them. Cartesian fields are
    /// `[x, y, z]`; spheric fields are `[latitude, longitude, radius]` or
    /// `[latitude, longitude]` for the Earth mean radius.
    ///
    /// # Errors
    ///
    /// Returns [`GeopointError::UnsupportedVariant`] for an unknown tag and
    /// [`GeopointError::InvalidArgument`] for a wrong field count or field
    /// values the constructors reject.
    pub fn from_parts(tag: &str, fields: &[f64]) -> Result<Coordinate> {
        match tag {
            CARTESIAN_TAG => match fields {
                [x, y, z] => Ok(Coordinate::Cartesian(CartesianPoint::new(*x, *y, *z)?)),
                _ => Err(GeopointError::InvalidArgument(format!(
                    "cartesian coordinate takes 3 fields, got {}",
                    fields.len()
                ))),
            },
            SPHERIC_TAG => match fields {
                [lat, lon, radius] => {
                    Ok(Coordinate::Spheric(SphericPoint::new(*lat, *lon, *radius)?))
                }
                [lat, lon] => Ok(Coordinate::Spheric(SphericPoint::with_earth_radius(
                    *lat, *lon,
                )?)),
                _ => Err(GeopointError::InvalidArgument(format!(
                    "spheric coordinate takes 2 or 3 fields, got {}",
                    fields.len()
                ))),
            },
            other => Err(GeopointError::UnsupportedVariant(other.to_string())),
        }
    }
}

impl From<CartesianPoint> for Coordinate {
    fn from(point: CartesianPoint) -> Self {
        Coordinate::Cartesian(point)
    }
}

impl From<SphericPoint> for Coordinate {
    fn from(point: SphericPoint) -> Self {
        Coordinate::Spheric(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn erlangen() -> Coordinate {
        Coordinate::Spheric(SphericPoint::with_earth_radius(49.11, 11.01).unwrap())
    }

    fn nuremberg() -> Coordinate {
        Coordinate::Spheric(SphericPoint::with_earth_radius(49.27, 11.04).unwrap())
    }

    #[test]
    fn test_equal_within_delta() {
        assert!(equal_within_delta(1.0, 1.0));
        assert!(equal_within_delta(1.0, 1.0 + 9e-5));
        assert!(equal_within_delta(1.0 + 9e-5, 1.0));
        assert!(!equal_within_delta(1.0, 1.0 + 1e-4));
        assert!(!equal_within_delta(1.0, 1.1));
    }

    #[test]
    fn test_distance_all_variant_mixtures() {
        let spheric_a = erlangen();
        let spheric_b = nuremberg();
        let cartesian_a = Coordinate::Cartesian(spheric_a.to_cartesian());
        let cartesian_b = Coordinate::Cartesian(spheric_b.to_cartesian());

        for (a, b) in [
            (&spheric_a, &spheric_b),
            (&cartesian_a, &cartesian_b),
            (&spheric_a, &cartesian_b),
            (&cartesian_a, &spheric_b),
        ] {
            assert_relative_eq!(a.distance_to(b), 17.92426, epsilon = 1e-4);
            assert_relative_eq!(b.distance_to(a), 17.92426, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_distance_symmetry_randomized() {
        let mut rng = StdRng::seed_from_u64(7_031);
        for _ in 0..200 {
            let a = Coordinate::Spheric(
                SphericPoint::with_earth_radius(
                    rng.gen_range(-90.0..=90.0),
                    rng.gen_range(-179.0..=180.0),
                )
                .unwrap(),
            );
            let b = if rng.gen_bool(0.5) {
                Coordinate::Spheric(
                    SphericPoint::with_earth_radius(
                        rng.gen_range(-90.0..=90.0),
                        rng.gen_range(-179.0..=180.0),
                    )
                    .unwrap(),
                )
            } else {
                Coordinate::Cartesian(
                    CartesianPoint::new(
                        rng.gen_range(-7000.0..7000.0),
                        rng.gen_range(-7000.0..7000.0),
                        rng.gen_range(-7000.0..7000.0),
                    )
                    .unwrap(),
                )
            };

            let forward = a.distance_to(&b);
            let backward = b.distance_to(&a);
            assert!(forward >= 0.0);
            assert_relative_eq!(forward, backward, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_identity_distance() {
        let mut rng = StdRng::seed_from_u64(90_210);
        for _ in 0..100 {
            let point = Coordinate::Spheric(
                SphericPoint::with_earth_radius(
                    rng.gen_range(-90.0..=90.0),
                    rng.gen_range(-179.0..=180.0),
                )
                .unwrap(),
            );
            assert!(point.distance_to(&point) < 1e-4);
        }
    }

    #[test]
    fn test_conversion_round_trip_tolerance() {
        let spheric = erlangen();
        let image = Coordinate::Cartesian(spheric.to_cartesian());
        assert!(spheric.distance_to(&image) < 1e-4);
        assert!(image.distance_to(&spheric) < 1e-4);
    }

    #[test]
    fn test_cross_representation_equality() {
        let spheric = erlangen();
        let image = Coordinate::Cartesian(spheric.to_cartesian());
        assert!(spheric.is_equal(&image));
        assert!(image.is_equal(&spheric));
        assert!(!spheric.is_equal(&nuremberg()));
    }

    #[test]
    fn test_cartesian_to_cartesian_is_identity() {
        let point = CartesianPoint::new(1.0, 2.0, 3.0).unwrap();
        let coordinate = Coordinate::Cartesian(point);
        assert_eq!(coordinate.to_cartesian(), point);
    }

    #[test]
    fn test_from_parts() {
        let cartesian = Coordinate::from_parts(CARTESIAN_TAG, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            cartesian,
            Coordinate::Cartesian(CartesianPoint::new(1.0, 2.0, 3.0).unwrap())
        );

        let spheric = Coordinate::from_parts(SPHERIC_TAG, &[49.11, 11.01]).unwrap();
        match spheric {
            Coordinate::Spheric(point) => {
                assert_eq!(point.latitude(), 49.11);
                assert_eq!(point.radius(), crate::constants::EARTH_MEAN_RADIUS_KM);
            }
            _ => panic!("expected spheric variant"),
        }
    }

    #[test]
    fn test_from_parts_unknown_tag() {
        let err = Coordinate::from_parts("Cylindrical", &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, GeopointError::UnsupportedVariant(_)));
    }

    #[test]
    fn test_from_parts_validation_still_applies() {
        assert!(Coordinate::from_parts(SPHERIC_TAG, &[91.0, 0.0]).is_err());
        assert!(Coordinate::from_parts(CARTESIAN_TAG, &[1.0, 2.0]).is_err());
        assert!(Coordinate::from_parts(CARTESIAN_TAG, &[f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_serde_tagged_round_trip() {
        let original = erlangen();
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"kind\":\"Spheric\""));
        let decoded: Coordinate = serde_json::from_str(&json).unwrap();
        assert!(original.is_equal(&decoded));
    }

    #[test]
    fn test_serde_rejects_invalid_fields() {
        // Deserialization funnels through the validating constructors.
        let json = r#"{"kind":"Spheric","latitude":99.0,"longitude":0.0,"radius":6371.0}"#;
        assert!(serde_json::from_str::<Coordinate>(json).is_err());
    }
}
