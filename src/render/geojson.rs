//! GeoJSON map documents.

use std::collections::{HashMap, HashSet};

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};
use log::warn;

use crate::models::{RoadNetwork, Route};

/// Margin added around the coordinate extrema when computing the
/// document's bounding box.
const BBOX_MARGIN: f64 = 50.0;

const ROAD_COLOR: &str = "#808080";
const ROUTE_COLOR: &str = "#0000ff";
const NODE_COLOR: &str = "#ff0000";
const ROUTE_NODE_COLOR: &str = "#0000ff";

/// A renderable description of the road map, serialized as GeoJSON.
///
/// Collects the network's named coordinates, its road list, and optionally
/// a route to highlight, and emits a `FeatureCollection`: one `LineString`
/// per road carrying its `distance`, one `Point` per positioned location
/// carrying its `name` (with a distinct simplestyle `marker-color` when it
/// lies on the highlighted route), an overlay `LineString` for the route,
/// and a `bbox` of the coordinate extrema padded by a fixed margin. Title
/// and subtitle travel as foreign members.
///
/// The document performs no routing computation; headless consumers skip
/// this module entirely. Locations without coordinates are left out of the
/// drawing with a warning.
///
/// # Examples
///
/// ```
/// use roadnet::models::{Location, RoadNetwork};
/// use roadnet::render::MapDocument;
///
/// let mut net = RoadNetwork::new();
/// net.add_node(Location::with_coordinates("Arad", 91.0, 492.0), 366.0);
/// net.add_node(Location::with_coordinates("Sibiu", 207.0, 457.0), 253.0);
/// net.add_edge(&Location::new("Arad"), &Location::new("Sibiu"), 140.0).unwrap();
///
/// let doc = MapDocument::new("Romania road network", &net);
/// let collection = doc.to_feature_collection();
/// assert_eq!(collection.features.len(), 3); // one road, two locations
/// assert_eq!(collection.bbox, Some(vec![41.0, 407.0, 257.0, 542.0]));
/// ```
#[derive(Debug, Clone)]
pub struct MapDocument {
    title: String,
    subtitle: Option<String>,
    nodes: Vec<(String, Option<(f64, f64)>)>,
    edges: Vec<(String, String, f64)>,
    route: Option<Vec<String>>,
}

impl MapDocument {
    /// Captures the network's locations and roads under the given title.
    pub fn new(title: impl Into<String>, network: &RoadNetwork) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            nodes: network
                .locations()
                .map(|l| (l.name().to_string(), l.coordinates()))
                .collect(),
            edges: network
                .edges()
                .iter()
                .map(|(a, b, w)| (a.name().to_string(), b.name().to_string(), *w))
                .collect(),
            route: None,
        }
    }

    /// Adds a subtitle line.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Highlights a route: its stops get the route marker color and its
    /// legs are drawn as an overlay line.
    pub fn with_route(mut self, route: &Route) -> Self {
        self.route = Some(route.stop_names().iter().map(|n| n.to_string()).collect());
        self
    }

    /// Builds the GeoJSON feature collection.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let coords: HashMap<&str, (f64, f64)> = self
            .nodes
            .iter()
            .filter_map(|(name, c)| c.map(|c| (name.as_str(), c)))
            .collect();
        let on_route: HashSet<&str> = self
            .route
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();

        let mut features = Vec::new();

        for (from, to, distance) in &self.edges {
            match (coords.get(from.as_str()), coords.get(to.as_str())) {
                (Some(&(x1, y1)), Some(&(x2, y2))) => {
                    let mut properties = JsonObject::new();
                    properties.insert("kind".to_string(), JsonValue::from("road"));
                    properties.insert("distance".to_string(), JsonValue::from(*distance));
                    properties.insert("stroke".to_string(), JsonValue::from(ROAD_COLOR));
                    properties.insert("stroke-opacity".to_string(), JsonValue::from(0.5));
                    features.push(feature(
                        Value::LineString(vec![vec![x1, y1], vec![x2, y2]]),
                        properties,
                    ));
                }
                _ => warn!("road {from}-{to} skipped: an endpoint has no coordinates"),
            }
        }

        if let Some(route) = &self.route {
            let line: Vec<Vec<f64>> = route
                .iter()
                .filter_map(|name| match coords.get(name.as_str()) {
                    Some(&(x, y)) => Some(vec![x, y]),
                    None => {
                        warn!("route stop {name} skipped: no coordinates");
                        None
                    }
                })
                .collect();
            if line.len() >= 2 {
                let mut properties = JsonObject::new();
                properties.insert("kind".to_string(), JsonValue::from("route"));
                properties.insert("stroke".to_string(), JsonValue::from(ROUTE_COLOR));
                features.push(feature(Value::LineString(line), properties));
            }
        }

        for (name, coordinates) in &self.nodes {
            match coordinates {
                &Some((x, y)) => {
                    let color = if on_route.contains(name.as_str()) {
                        ROUTE_NODE_COLOR
                    } else {
                        NODE_COLOR
                    };
                    let mut properties = JsonObject::new();
                    properties.insert("kind".to_string(), JsonValue::from("location"));
                    properties.insert("name".to_string(), JsonValue::from(name.as_str()));
                    properties.insert("marker-color".to_string(), JsonValue::from(color));
                    features.push(feature(Value::Point(vec![x, y]), properties));
                }
                None => warn!("location {name} skipped: no coordinates"),
            }
        }

        let mut foreign_members = JsonObject::new();
        foreign_members.insert("title".to_string(), JsonValue::from(self.title.as_str()));
        if let Some(subtitle) = &self.subtitle {
            foreign_members.insert("subtitle".to_string(), JsonValue::from(subtitle.as_str()));
        }

        FeatureCollection {
            bbox: padded_bbox(coords.values()),
            features,
            foreign_members: Some(foreign_members),
        }
    }

    /// Serializes the document as a GeoJSON string.
    pub fn to_json_string(&self) -> String {
        GeoJson::from(self.to_feature_collection()).to_string()
    }
}

fn feature(geometry: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Coordinate extrema padded by [`BBOX_MARGIN`], as `[min x, min y, max x,
/// max y]`. `None` when nothing is positioned.
fn padded_bbox<'a>(coords: impl Iterator<Item = &'a (f64, f64)>) -> Option<Vec<f64>> {
    let mut extrema: Option<(f64, f64, f64, f64)> = None;
    for &(x, y) in coords {
        extrema = Some(match extrema {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => (
                min_x.min(x),
                min_y.min(y),
                max_x.max(x),
                max_y.max(y),
            ),
        });
    }
    extrema.map(|(min_x, min_y, max_x, max_y)| {
        vec![
            min_x - BBOX_MARGIN,
            min_y - BBOX_MARGIN,
            max_x + BBOX_MARGIN,
            max_y + BBOX_MARGIN,
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use crate::search::greedy_best_first;

    fn positioned_network() -> RoadNetwork {
        let mut net = RoadNetwork::new();
        net.add_node(Location::with_coordinates("A", 0.0, 0.0), 10.0);
        net.add_node(Location::with_coordinates("B", 100.0, 0.0), 5.0);
        net.add_node(Location::with_coordinates("C", 100.0, 80.0), 0.0);
        net.add_edge(&Location::new("A"), &Location::new("B"), 5.0)
            .expect("nodes present");
        net.add_edge(&Location::new("B"), &Location::new("C"), 7.0)
            .expect("nodes present");
        net
    }

    fn property<'a>(feature: &'a Feature, key: &str) -> &'a JsonValue {
        feature
            .properties
            .as_ref()
            .expect("properties set")
            .get(key)
            .expect("property present")
    }

    #[test]
    fn test_base_map_features_and_bbox() {
        let net = positioned_network();
        let collection = MapDocument::new("test map", &net).to_feature_collection();
        // Two roads plus three locations.
        assert_eq!(collection.features.len(), 5);
        assert_eq!(collection.bbox, Some(vec![-50.0, -50.0, 150.0, 130.0]));
        let members = collection.foreign_members.expect("title member");
        assert_eq!(members.get("title"), Some(&JsonValue::from("test map")));
        assert_eq!(members.get("subtitle"), None);
    }

    #[test]
    fn test_road_features_carry_distance() {
        let net = positioned_network();
        let collection = MapDocument::new("test map", &net).to_feature_collection();
        let roads: Vec<&Feature> = collection
            .features
            .iter()
            .filter(|f| *property(f, "kind") == "road")
            .collect();
        assert_eq!(roads.len(), 2);
        assert_eq!(property(roads[0], "distance"), &JsonValue::from(5.0));
        assert_eq!(property(roads[1], "distance"), &JsonValue::from(7.0));
    }

    #[test]
    fn test_route_overlay_and_marker_colors() {
        let net = positioned_network();
        let route = greedy_best_first(&net, &Location::new("A"), &Location::new("C"))
            .expect("chain reachable");
        let collection = MapDocument::new("test map", &net)
            .with_subtitle("greedy route")
            .with_route(&route)
            .to_feature_collection();

        // Two roads, one overlay, three locations.
        assert_eq!(collection.features.len(), 6);
        let overlay = collection
            .features
            .iter()
            .find(|f| *property(f, "kind") == "route")
            .expect("route overlay");
        assert_eq!(property(overlay, "stroke"), &JsonValue::from(ROUTE_COLOR));

        for feature in &collection.features {
            if *property(feature, "kind") == "location" {
                // Every location in this fixture lies on the route.
                assert_eq!(
                    property(feature, "marker-color"),
                    &JsonValue::from(ROUTE_NODE_COLOR)
                );
            }
        }
        let members = collection.foreign_members.expect("members set");
        assert_eq!(
            members.get("subtitle"),
            Some(&JsonValue::from("greedy route"))
        );
    }

    #[test]
    fn test_unpositioned_locations_are_skipped() {
        let mut net = RoadNetwork::new();
        net.add_node(Location::with_coordinates("A", 0.0, 0.0), 1.0);
        net.add_node(Location::new("Nowhere"), 0.0);
        net.add_edge(&Location::new("A"), &Location::new("Nowhere"), 3.0)
            .expect("nodes present");
        let collection = MapDocument::new("partial", &net).to_feature_collection();
        // The road and the bare node are dropped; only A is drawn.
        assert_eq!(collection.features.len(), 1);
        assert_eq!(collection.bbox, Some(vec![-50.0, -50.0, 50.0, 50.0]));
    }

    #[test]
    fn test_empty_network_document() {
        let net = RoadNetwork::new();
        let collection = MapDocument::new("empty", &net).to_feature_collection();
        assert!(collection.features.is_empty());
        assert_eq!(collection.bbox, None);
    }
}
