//! Map rendering for inspection.
//!
//! Turns a network (and optionally a route) into a GeoJSON document any
//! map viewer can draw. Purely peripheral: nothing in the models or
//! searches depends on this module.

mod geojson;

pub use geojson::MapDocument;
