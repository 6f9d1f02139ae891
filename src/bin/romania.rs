//! Romania road map demo.
//!
//! Loads the bundled dataset, runs both searches Arad -> Bucharest, prints
//! each route with its total distance, and writes three GeoJSON map
//! documents: the base map and one per highlighted route.

use std::fs;

use anyhow::Context;
use log::info;

use roadnet::loader::load_network;
use roadnet::models::Location;
use roadnet::render::MapDocument;
use roadnet::search::{greedy_best_first, heuristic_weighted};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let network = load_network("data/romania_cities.csv", "data/romania_roads.csv")
        .context("loading the Romania dataset")?;
    info!(
        "network has {} locations and {} roads",
        network.len(),
        network.edges().len()
    );

    let origin = Location::new("Arad");
    let destination = Location::new("Bucharest");

    fs::write(
        "romania_map.geojson",
        MapDocument::new("Romania road network", &network).to_json_string(),
    )
    .context("writing the base map")?;

    let greedy = greedy_best_first(&network, &origin, &destination)
        .context("greedy best-first search")?;
    println!("Greedy best-first");
    println!("Route: {greedy}");
    println!("Distance: {} miles", greedy.total_distance());
    println!();
    fs::write(
        "romania_greedy.geojson",
        MapDocument::new("Romania road network", &network)
            .with_subtitle(format!(
                "Greedy best-first route, {} miles",
                greedy.total_distance()
            ))
            .with_route(&greedy)
            .to_json_string(),
    )
    .context("writing the greedy route map")?;

    let weighted = heuristic_weighted(&network, &origin, &destination)
        .context("heuristic-weighted search")?;
    println!("Heuristic-weighted");
    println!("Route: {weighted}");
    println!("Distance: {} miles", weighted.total_distance());
    fs::write(
        "romania_weighted.geojson",
        MapDocument::new("Romania road network", &network)
            .with_subtitle(format!(
                "Heuristic-weighted route, {} miles",
                weighted.total_distance()
            ))
            .with_route(&weighted)
            .to_json_string(),
    )
    .context("writing the weighted route map")?;

    Ok(())
}
