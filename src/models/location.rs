//! Named locations on the road map.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A named point in the road network, optionally positioned in 2D space.
///
/// Identity is the name alone: two locations compare equal (and hash
/// identically) whenever their names match, regardless of coordinates.
/// Coordinates are payload for the rendering side and never take part in
/// graph semantics, so a bare `Location::new("Arad")` looks up the same
/// node as the coordinate-carrying value the network stores.
///
/// # Examples
///
/// ```
/// use roadnet::models::Location;
///
/// let bare = Location::new("Arad");
/// let placed = Location::with_coordinates("Arad", 91.0, 492.0);
/// assert_eq!(bare, placed);
/// assert_eq!(placed.coordinates(), Some((91.0, 492.0)));
/// assert_eq!(bare.coordinates(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    coordinates: Option<(f64, f64)>,
}

impl Location {
    /// Creates a location with a name only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinates: None,
        }
    }

    /// Creates a location positioned at the given map coordinates.
    pub fn with_coordinates(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            coordinates: Some((x, y)),
        }
    }

    /// The name identifying this location.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map coordinates, if this location was positioned.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.coordinates
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
