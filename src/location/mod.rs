//! Named locations holding a shared coordinate
//!
//! The coordinate-holding collaborator surface: a location owns a display
//! name and a reference to an interned coordinate. The interning cache
//! keeps the owning side of every coordinate; locations only clone the
//! shared handle.

use std::sync::Arc;

use crate::coordinates::Coordinate;
use crate::{GeopointError, Result};

/// A named place with an optional coordinate
///
/// # Examples
///
/// ```rust
/// use geopoint::interning::interned_spheric_earth;
/// use geopoint::location::Location;
///
/// let nuremberg = interned_spheric_earth(49.27, 11.04).unwrap();
/// let location = Location::with_coordinate("Nuremberg", nuremberg).unwrap();
/// assert_eq!(location.name(), "Nuremberg");
/// assert!(location.coordinate().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    coordinate: Option<Arc<Coordinate>>,
}

impl Location {
    /// Creates a location without a coordinate
    ///
    /// # Errors
    ///
    /// Returns [`GeopointError::InvalidArgument`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GeopointError::InvalidArgument(
                "location name cannot be empty".to_string(),
            ));
        }
        Ok(Location {
            name,
            coordinate: None,
        })
    }

    /// Creates a location with a coordinate
    pub fn with_coordinate(name: impl Into<String>, coordinate: Arc<Coordinate>) -> Result<Self> {
        let mut location = Location::new(name)?;
        location.coordinate = Some(coordinate);
        Ok(location)
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared coordinate handle, if one has been set
    pub fn coordinate(&self) -> Option<&Arc<Coordinate>> {
        self.coordinate.as_ref()
    }

    /// Replaces the coordinate
    ///
    /// The handle is non-null by construction; absence is expressed by
    /// never setting one, not by a sentinel.
    pub fn set_coordinate(&mut self, coordinate: Arc<Coordinate>) {
        self.coordinate = Some(coordinate);
    }

    /// Distance in kilometers to another location
    ///
    /// # Errors
    ///
    /// Returns [`GeopointError::InvalidArgument`] if either location has no
    /// coordinate.
    pub fn distance_to(&self, other: &Location) -> Result<f64> {
        let from = self.coordinate.as_ref().ok_or_else(|| {
            GeopointError::InvalidArgument(format!("location {} has no coordinate", self.name))
        })?;
        let to = other.coordinate.as_ref().ok_or_else(|| {
            GeopointError::InvalidArgument(format!("location {} has no coordinate", other.name))
        })?;
        Ok(from.distance_to(to))
    }
}
