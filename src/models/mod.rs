//! Domain model types for road networks.
//!
//! Provides the core abstractions: named locations with optional map
//! coordinates, the weighted undirected road network with per-location goal
//! estimates, and the routes the search walks produce.

mod location;
mod network;
mod route;

pub use location::Location;
pub use network::RoadNetwork;
pub use route::Route;
