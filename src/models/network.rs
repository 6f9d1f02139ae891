//! The road network graph.

use indexmap::IndexMap;
use log::warn;

use crate::error::NetworkError;

use super::Location;

/// Per-node annotation: goal estimate plus the adjacency list.
#[derive(Debug, Clone)]
struct NodeRecord {
    heuristic: f64,
    neighbors: Vec<(Location, f64)>,
}

/// A weighted undirected road network over named locations.
///
/// Each node carries a static heuristic value — the estimated remaining
/// distance to an implicit goal, supplied as input data — and an ordered
/// list of `(neighbor, road distance)` pairs. Edges are undirected: a
/// single [`add_edge`](RoadNetwork::add_edge) inserts both directions, or
/// neither if an endpoint is unknown.
///
/// The network is built once and read-only during search; the search
/// functions in [`crate::search`] take it by shared reference.
///
/// Heuristics and distances are non-negative by convention. Negative
/// values are not rejected but corrupt the walks' comparisons.
///
/// # Examples
///
/// ```
/// use roadnet::models::{Location, RoadNetwork};
///
/// let mut net = RoadNetwork::new();
/// net.add_node(Location::with_coordinates("Arad", 91.0, 492.0), 366.0);
/// net.add_node(Location::with_coordinates("Sibiu", 207.0, 457.0), 253.0);
/// net.add_edge(&Location::new("Arad"), &Location::new("Sibiu"), 140.0).unwrap();
///
/// assert_eq!(net.len(), 2);
/// assert_eq!(net.heuristic(&Location::new("Sibiu")), Some(253.0));
/// let neighbors = net.neighbors(&Location::new("Arad")).unwrap();
/// assert_eq!(neighbors[0].0.name(), "Sibiu");
/// assert_eq!(neighbors[0].1, 140.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    nodes: IndexMap<Location, NodeRecord>,
    edges: Vec<(Location, Location, f64)>,
}

impl RoadNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node with its heuristic value (estimated remaining
    /// distance to the goal).
    ///
    /// Last write wins: re-adding an existing name replaces its heuristic
    /// and resets its neighbor list to empty, discarding any edges
    /// accumulated so far. Roads recorded on *other* nodes still point at
    /// this name, so re-adding a wired-up node leaves the neighbor
    /// relation asymmetric — a warning is logged when that happens.
    pub fn add_node(&mut self, location: Location, heuristic: f64) {
        let record = NodeRecord {
            heuristic,
            neighbors: Vec::new(),
        };
        if let Some(previous) = self.nodes.insert(location, record) {
            if !previous.neighbors.is_empty() {
                warn!(
                    "re-added node discarded {} neighbor entries",
                    previous.neighbors.len()
                );
            }
        }
    }

    /// Adds an undirected road between two named locations.
    ///
    /// Appends `(b, distance)` to `a`'s neighbor list and `(a, distance)`
    /// to `b`'s, in that order. Both endpoints must already be nodes;
    /// otherwise nothing is mutated and the first missing name is
    /// reported. Lookup is by name alone, so bare locations work as
    /// endpoints; the stored neighbor entries are the coordinate-carrying
    /// node keys.
    pub fn add_edge(
        &mut self,
        a: &Location,
        b: &Location,
        distance: f64,
    ) -> Result<(), NetworkError> {
        let a = match self.nodes.get_key_value(a) {
            Some((key, _)) => key.clone(),
            None => return Err(NetworkError::MissingNode(a.name().to_string())),
        };
        let b = match self.nodes.get_key_value(b) {
            Some((key, _)) => key.clone(),
            None => return Err(NetworkError::MissingNode(b.name().to_string())),
        };

        if let Some(record) = self.nodes.get_mut(&a) {
            record.neighbors.push((b.clone(), distance));
        }
        if let Some(record) = self.nodes.get_mut(&b) {
            record.neighbors.push((a.clone(), distance));
        }
        self.edges.push((a, b, distance));
        Ok(())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if a node with this name exists.
    pub fn contains(&self, location: &Location) -> bool {
        self.nodes.contains_key(location)
    }

    /// The heuristic value of a node, if present.
    pub fn heuristic(&self, location: &Location) -> Option<f64> {
        self.nodes.get(location).map(|record| record.heuristic)
    }

    /// The ordered `(neighbor, distance)` pairs of a node, if present.
    pub fn neighbors(&self, location: &Location) -> Option<&[(Location, f64)]> {
        self.nodes
            .get(location)
            .map(|record| record.neighbors.as_slice())
    }

    /// All node locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.nodes.keys()
    }

    /// All undirected roads in insertion order, one triple per
    /// [`add_edge`](RoadNetwork::add_edge) call.
    pub fn edges(&self) -> &[(Location, Location, f64)] {
        &self.edges
    }
}
