//! Tabular dataset ingestion.
//!
//! The loader boundary: typed row records, the mechanism-independent
//! [`network_from_rows`] seam, and headered-CSV readers built on it. The
//! core models never depend on any parsing mechanism.

mod dataset;

pub use dataset::{
    load_network, network_from_rows, read_location_rows, read_road_rows, LocationRow, RoadRow,
};
