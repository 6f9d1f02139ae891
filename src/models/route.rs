//! Routes produced by the search walks.

use std::fmt;

use super::Location;

/// An ordered sequence of locations walked from an origin to a destination,
/// together with the accumulated road distance.
///
/// A route always contains at least its origin; a search that starts at its
/// destination yields a single-stop route with zero distance.
///
/// `Display` joins the stop names with `->`, matching the demo program's
/// output.
///
/// # Examples
///
/// ```
/// use roadnet::models::{Location, Route};
///
/// let mut route = Route::new(Location::new("Arad"));
/// route.push_stop(Location::new("Sibiu"), 140.0);
/// route.push_stop(Location::new("Fagaras"), 99.0);
/// assert_eq!(route.num_stops(), 3);
/// assert_eq!(route.total_distance(), 239.0);
/// assert_eq!(route.to_string(), "Arad->Sibiu->Fagaras");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    stops: Vec<Location>,
    total_distance: f64,
}

impl Route {
    /// Creates a route standing at its origin, with zero distance.
    pub fn new(origin: Location) -> Self {
        Self {
            stops: vec![origin],
            total_distance: 0.0,
        }
    }

    /// Appends a stop reached over a road of the given length.
    pub fn push_stop(&mut self, stop: Location, leg_distance: f64) {
        self.stops.push(stop);
        self.total_distance += leg_distance;
    }

    /// The stops in walking order, origin first.
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// The stop names in walking order.
    pub fn stop_names(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.name()).collect()
    }

    /// Number of stops, origin included.
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    /// The first stop.
    pub fn origin(&self) -> &Location {
        &self.stops[0]
    }

    /// The last stop reached so far.
    pub fn destination(&self) -> &Location {
        &self.stops[self.stops.len() - 1]
    }

    /// Sum of the road distances walked.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}
