//! Tabular dataset ingestion.

use std::io;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::DatasetError;
use crate::models::{Location, RoadNetwork};

/// One node row: a named location, its map coordinates, and its estimated
/// remaining distance to the goal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationRow {
    /// Location name (identity key).
    pub name: String,
    /// X map coordinate.
    pub x: f64,
    /// Y map coordinate.
    pub y: f64,
    /// Estimated remaining distance to the goal.
    pub heuristic: f64,
}

/// One edge row: an undirected road between two named locations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoadRow {
    /// Name of one endpoint.
    pub from: String,
    /// Name of the other endpoint.
    pub to: String,
    /// Road length.
    pub distance: f64,
}

/// Builds a network from ordered row values.
///
/// This is the mechanism-independent seam: any source that yields typed
/// rows works. All node rows are inserted before any road row, and road
/// endpoints are looked up by name alone.
///
/// # Examples
///
/// ```
/// use roadnet::loader::{network_from_rows, LocationRow, RoadRow};
///
/// let nodes = vec![
///     LocationRow { name: "A".into(), x: 0.0, y: 0.0, heuristic: 9.0 },
///     LocationRow { name: "B".into(), x: 1.0, y: 0.0, heuristic: 0.0 },
/// ];
/// let roads = vec![
///     RoadRow { from: "A".into(), to: "B".into(), distance: 9.0 },
/// ];
/// let net = network_from_rows(nodes, roads).unwrap();
/// assert_eq!(net.len(), 2);
/// assert_eq!(net.edges().len(), 1);
/// ```
pub fn network_from_rows<N, R>(nodes: N, roads: R) -> Result<RoadNetwork, DatasetError>
where
    N: IntoIterator<Item = LocationRow>,
    R: IntoIterator<Item = RoadRow>,
{
    let mut network = RoadNetwork::new();
    for row in nodes {
        network.add_node(
            Location::with_coordinates(row.name, row.x, row.y),
            row.heuristic,
        );
    }
    for row in roads {
        network.add_edge(&Location::new(row.from), &Location::new(row.to), row.distance)?;
    }
    Ok(network)
}

/// Reads node rows from headered CSV (`name,x,y,heuristic`).
///
/// A malformed row fails the whole read; nothing downstream sees it.
pub fn read_location_rows<R: io::Read>(reader: R) -> Result<Vec<LocationRow>, DatasetError> {
    let rows: Result<Vec<LocationRow>, csv::Error> =
        csv::Reader::from_reader(reader).into_deserialize().collect();
    Ok(rows?)
}

/// Reads edge rows from headered CSV (`from,to,distance`).
pub fn read_road_rows<R: io::Read>(reader: R) -> Result<Vec<RoadRow>, DatasetError> {
    let rows: Result<Vec<RoadRow>, csv::Error> =
        csv::Reader::from_reader(reader).into_deserialize().collect();
    Ok(rows?)
}

/// Loads a network from a node CSV file and a road CSV file.
pub fn load_network(
    nodes_path: impl AsRef<Path>,
    roads_path: impl AsRef<Path>,
) -> Result<RoadNetwork, DatasetError> {
    let nodes: Result<Vec<LocationRow>, csv::Error> = csv::Reader::from_path(nodes_path)?
        .into_deserialize()
        .collect();
    let roads: Result<Vec<RoadRow>, csv::Error> = csv::Reader::from_path(roads_path)?
        .into_deserialize()
        .collect();
    let (nodes, roads) = (nodes?, roads?);
    debug!("loaded {} locations and {} roads", nodes.len(), roads.len());
    network_from_rows(nodes, roads)
}
