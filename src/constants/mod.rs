//! Constants module for coordinate calculations

use std::f64::consts::PI;

// Geographic constants
/// Earth mean radius in kilometers
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

// Tolerances
/// Delta below which two floating-point quantities are treated as equal
pub const COORDINATE_DELTA: f64 = 1e-4;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a half turn
pub const HALF_TURN_DEG: f64 = 180.0;
/// Degrees in a full turn
pub const FULL_TURN_DEG: f64 = 360.0;
