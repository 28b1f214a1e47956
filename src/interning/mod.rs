//! Value interning for coordinates
//!
//! A flyweight store that hands out one shared instance per distinct
//! coordinate value. Lookup keys are the exact bit patterns of the value
//! tuple — two values that are merely delta-equal still intern separately.
//! Entries are never evicted; the cache grows monotonically over the
//! process lifetime, so callers should not mint unboundedly many distinct
//! values.
//!
//! The cache is an ordinary constructible object so tests and embedders can
//! hold private instances, while [`CoordinateCache::global`] exposes the
//! process-wide one used by the convenience constructors.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;
use log::debug;

use crate::coordinates::{CartesianPoint, Coordinate, SphericPoint};
use crate::Result;

lazy_static! {
    static ref GLOBAL_CACHE: CoordinateCache = CoordinateCache::new();
}

/// Bit-exact lookup key for a three-component value tuple
///
/// `f64::to_bits` keys distinguish 0.0 from -0.0 and every other bitwise
/// difference, which is exactly the identity the flyweight store wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ValueKey([u64; 3]);

impl ValueKey {
    fn new(a: f64, b: f64, c: f64) -> Self {
        ValueKey([a.to_bits(), b.to_bits(), c.to_bits()])
    }
}

/// Per-representation flyweight store for coordinate values
///
/// One map per concrete point kind, each behind its own mutex. The insert
/// path is a single critical section, so concurrent callers requesting the
/// same key construct exactly one instance and all observe the same shared
/// reference.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use geopoint::interning::CoordinateCache;
///
/// let cache = CoordinateCache::new();
/// let a = cache.get_spheric_earth(49.11, 11.01).unwrap();
/// let b = cache.get_spheric_earth(49.11, 11.01).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct CoordinateCache {
    cartesian: Mutex<HashMap<ValueKey, Arc<Coordinate>>>,
    spheric: Mutex<HashMap<ValueKey, Arc<Coordinate>>>,
}

impl CoordinateCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        CoordinateCache {
            cartesian: Mutex::new(HashMap::new()),
            spheric: Mutex::new(HashMap::new()),
        }
    }

    /// Process-wide shared cache instance
    pub fn global() -> &'static CoordinateCache {
        &GLOBAL_CACHE
    }

    /// Returns the shared Cartesian coordinate for the exact (x, y, z) triple
    ///
    /// Validates through [`CartesianPoint::new`] and interns the result on
    /// first sight of the key.
    pub fn get_cartesian(&self, x: f64, y: f64, z: f64) -> Result<Arc<Coordinate>> {
        let point = CartesianPoint::new(x, y, z)?;
        let key = ValueKey::new(x, y, z);

        let mut map = self.cartesian.lock().expect("cartesian cache poisoned");
        let shared = map
            .entry(key)
            .or_insert_with(|| {
                debug!("interning new cartesian coordinate ({}, {}, {})", x, y, z);
                Arc::new(Coordinate::Cartesian(point))
            })
            .clone();
        Ok(shared)
    }

    /// Returns the shared spheric coordinate for the exact value triple
    pub fn get_spheric(&self, latitude: f64, longitude: f64, radius: f64) -> Result<Arc<Coordinate>> {
        let point = SphericPoint::new(latitude, longitude, radius)?;
        let key = ValueKey::new(latitude, longitude, radius);

        let mut map = self.spheric.lock().expect("spheric cache poisoned");
        let shared = map
            .entry(key)
            .or_insert_with(|| {
                debug!(
                    "interning new spheric coordinate ({}, {}, r={})",
                    latitude, longitude, radius
                );
                Arc::new(Coordinate::Spheric(point))
            })
            .clone();
        Ok(shared)
    }

    /// Returns the shared spheric coordinate at the Earth mean radius
    pub fn get_spheric_earth(&self, latitude: f64, longitude: f64) -> Result<Arc<Coordinate>> {
        self.get_spheric(latitude, longitude, crate::constants::EARTH_MEAN_RADIUS_KM)
    }

    /// Number of distinct Cartesian values interned so far
    pub fn cartesian_len(&self) -> usize {
        self.cartesian.lock().expect("cartesian cache poisoned").len()
    }

    /// Number of distinct spheric values interned so far
    pub fn spheric_len(&self) -> usize {
        self.spheric.lock().expect("spheric cache poisoned").len()
    }
}

/// Interns a Cartesian coordinate in the process-wide cache
pub fn interned_cartesian(x: f64, y: f64, z: f64) -> Result<Arc<Coordinate>> {
    CoordinateCache::global().get_cartesian(x, y, z)
}

/// Interns a spheric coordinate in the process-wide cache
pub fn interned_spheric(latitude: f64, longitude: f64, radius: f64) -> Result<Arc<Coordinate>> {
    CoordinateCache::global().get_spheric(latitude, longitude, radius)
}

/// Interns an Earth mean radius spheric coordinate in the process-wide cache
pub fn interned_spheric_earth(latitude: f64, longitude: f64) -> Result<Arc<Coordinate>> {
    CoordinateCache::global().get_spheric_earth(latitude, longitude)
}
