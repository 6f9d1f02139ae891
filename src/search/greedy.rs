//! Greedy best-first walk.

use crate::error::SearchError;
use crate::models::{Location, RoadNetwork, Route};

use super::walk::walk;

/// Walks a single path from `origin` toward `destination`, at each step
/// moving to the neighbor whose own heuristic value (estimated remaining
/// distance to the destination) is lowest, ignoring the cost of the step
/// itself. Ties break by neighbor-list order.
///
/// Returns the ordered stops walked (origin and destination included) and
/// the accumulated road distance. No optimality guarantee: this commits to
/// one path forward and never backtracks.
///
/// There is no cycle guard. A heuristic that keeps preferring an
/// already-visited neighbor loops forever; callers that need a termination
/// guarantee use [`greedy_best_first_bounded`].
///
/// # Errors
///
/// [`SearchError::NoPath`] if the walk reaches a location with no outgoing
/// roads, [`SearchError::MissingNode`] if a visited location was never
/// added to the network.
///
/// # Examples
///
/// ```
/// use roadnet::models::{Location, RoadNetwork};
/// use roadnet::search::greedy_best_first;
///
/// let mut net = RoadNetwork::new();
/// net.add_node(Location::new("Arad"), 366.0);
/// net.add_node(Location::new("Sibiu"), 253.0);
/// net.add_node(Location::new("Bucharest"), 0.0);
/// net.add_edge(&Location::new("Arad"), &Location::new("Sibiu"), 140.0).unwrap();
/// net.add_edge(&Location::new("Sibiu"), &Location::new("Bucharest"), 278.0).unwrap();
///
/// let route = greedy_best_first(&net, &Location::new("Arad"), &Location::new("Bucharest"))
///     .unwrap();
/// assert_eq!(route.to_string(), "Arad->Sibiu->Bucharest");
/// assert_eq!(route.total_distance(), 418.0);
/// ```
pub fn greedy_best_first(
    network: &RoadNetwork,
    origin: &Location,
    destination: &Location,
) -> Result<Route, SearchError> {
    walk(network, origin, destination, None, |net, next, _| {
        net.heuristic(next).unwrap_or(0.0)
    })
}

/// [`greedy_best_first`] with a step ceiling: a safety capability for
/// callers that cannot rule out heuristic cycles. Fails with
/// [`SearchError::StepLimitExceeded`] once `max_steps` hops have been taken
/// without reaching the destination.
pub fn greedy_best_first_bounded(
    network: &RoadNetwork,
    origin: &Location,
    destination: &Location,
    max_steps: usize,
) -> Result<Route, SearchError> {
    walk(
        network,
        origin,
        destination,
        Some(max_steps),
        |net, next, _| net.heuristic(next).unwrap_or(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_equals_destination() {
        let mut net = RoadNetwork::new();
        net.add_node(Location::new("Arad"), 366.0);
        let route = greedy_best_first(&net, &Location::new("Arad"), &Location::new("Arad"))
            .expect("zero-length walk");
        assert_eq!(route.stop_names(), vec!["Arad"]);
        assert_eq!(route.total_distance(), 0.0);
    }

    #[test]
    fn test_three_node_chain() {
        // A - B - C with weights 5 and 7; heuristic(C)=0 < heuristic(B).
        let mut net = RoadNetwork::new();
        net.add_node(Location::new("A"), 10.0);
        net.add_node(Location::new("B"), 5.0);
        net.add_node(Location::new("C"), 0.0);
        net.add_edge(&Location::new("A"), &Location::new("B"), 5.0)
            .expect("nodes present");
        net.add_edge(&Location::new("B"), &Location::new("C"), 7.0)
            .expect("nodes present");

        let route = greedy_best_first(&net, &Location::new("A"), &Location::new("C"))
            .expect("chain reachable");
        assert_eq!(route.stop_names(), vec!["A", "B", "C"]);
        assert_eq!(route.total_distance(), 12.0);
    }

    #[test]
    fn test_isolated_node_is_no_path() {
        let mut net = RoadNetwork::new();
        net.add_node(Location::new("Island"), 50.0);
        net.add_node(Location::new("Goal"), 0.0);
        let err = greedy_best_first(&net, &Location::new("Island"), &Location::new("Goal"))
            .unwrap_err();
        assert_eq!(err, SearchError::NoPath("Island".to_string()));
    }

    #[test]
    fn test_dead_end_mid_walk_is_no_path() {
        // Start -> DeadEnd looks best but has no onward roads. The walk
        // fails there instead of returning a partial route.
        let mut net = RoadNetwork::new();
        net.add_node(Location::new("Start"), 20.0);
        net.add_node(Location::new("DeadEnd"), 1.0);
        net.add_node(Location::new("Goal"), 0.0);
        net.add_edge(&Location::new("Start"), &Location::new("DeadEnd"), 2.0)
            .expect("nodes present");

        // DeadEnd's list only points back to Start, which it will prefer
        // forever; prune the reverse direction by re-adding DeadEnd.
        net.add_node(Location::new("DeadEnd"), 1.0);

        let err = greedy_best_first(&net, &Location::new("Start"), &Location::new("Goal"))
            .unwrap_err();
        assert_eq!(err, SearchError::NoPath("DeadEnd".to_string()));
    }

    #[test]
    fn test_bounded_stops_heuristic_cycle() {
        // A and B each prefer the other; C is never reached.
        let mut net = RoadNetwork::new();
        net.add_node(Location::new("A"), 1.0);
        net.add_node(Location::new("B"), 1.0);
        net.add_node(Location::new("C"), 0.0);
        net.add_edge(&Location::new("A"), &Location::new("B"), 1.0)
            .expect("nodes present");

        let err = greedy_best_first_bounded(
            &net,
            &Location::new("A"),
            &Location::new("C"),
            10,
        )
        .unwrap_err();
        assert_eq!(err, SearchError::StepLimitExceeded(10));
    }

    #[test]
    fn test_bounded_leaves_reachable_routes_alone() {
        let mut net = RoadNetwork::new();
        net.add_node(Location::new("A"), 10.0);
        net.add_node(Location::new("B"), 0.0);
        net.add_edge(&Location::new("A"), &Location::new("B"), 4.0)
            .expect("nodes present");
        let route =
            greedy_best_first_bounded(&net, &Location::new("A"), &Location::new("B"), 10)
                .expect("one hop");
        assert_eq!(route.stop_names(), vec!["A", "B"]);
        assert_eq!(route.total_distance(), 4.0);
    }
}
