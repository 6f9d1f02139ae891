//! # roadnet
//!
//! Heuristic route search over named road networks.
//!
//! Models a weighted undirected road map whose locations carry a static
//! goal estimate, and finds a route between two named locations with
//! greedy single-path search strategies — no backtracking, no optimality
//! guarantee. Data ingestion and map rendering are peripheral
//! collaborators behind narrow interfaces.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Location, RoadNetwork, Route)
//! - [`search`] — Greedy best-first and heuristic-weighted walks
//! - [`loader`] — Tabular dataset ingestion (typed rows, CSV readers)
//! - [`render`] — GeoJSON map documents for inspection
//! - [`error`] — Error taxonomy

pub mod error;
pub mod loader;
pub mod models;
pub mod render;
pub mod search;
