//! Geopoint: polymorphic geographic coordinates with value interning
//!
//! This crate provides a position abstraction with two interchangeable
//! representations — Cartesian (x/y/z) and Spheric (latitude/longitude/
//! radius) — plus mutual conversion, cross-representation distance and
//! delta-tolerant equality, and a flyweight cache that hands out one
//! shared instance per distinct coordinate value.

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod interning;
pub mod location;

// Re-export commonly used types
pub use coordinates::{CartesianPoint, Coordinate, SphericPoint};
pub use interning::CoordinateCache;
pub use location::Location;

/// Main error type for the geopoint library
#[derive(Debug, Error)]
pub enum GeopointError {
    /// Out-of-range or NaN input caught at construction, or a missing
    /// operand; signals a caller error, never retried internally
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operand tagged with a representation outside the closed set
    #[error("Unsupported coordinate variant: {0}")]
    UnsupportedVariant(String),
}

/// Result type for geopoint operations
pub type Result<T> = std::result::Result<T, GeopointError>;
