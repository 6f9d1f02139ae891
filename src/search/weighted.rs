//! Heuristic-weighted walk.

use crate::error::SearchError;
use crate::models::{Location, RoadNetwork, Route};

use super::walk::walk;

/// Walks a single path from `origin` toward `destination`, at each step
/// moving to the neighbor minimizing `road distance + heuristic value` — a
/// greedy, non-backtracking approximation of A*'s evaluation function.
///
/// This is not classical A*: there is no open or closed set, no path-cost
/// accumulation across the full path, no re-expansion, and no optimality
/// guarantee. It only ever commits to one path forward. Termination,
/// tie-break, and failure semantics match
/// [`greedy_best_first`](super::greedy_best_first), including the absence
/// of a cycle guard; see [`heuristic_weighted_bounded`] for the opt-in
/// ceiling.
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
/// use roadnet::search::heuristic_weighted;
///
/// // Direct road A->D (20) against the two-hop A->B->D (5 + 5).
/// let mut net = RoadNetwork::new();
/// net.add_node(Location::new("A"), 12.0);
/// net.add_node(Location::new("B"), 4.0);
/// net.add_node(Location::new("D"), 0.0);
/// net.add_edge(&Location::new("A"), &Location::new("D"), 20.0).unwrap();
/// net.add_edge(&Location::new("A"), &Location::new("B"), 5.0).unwrap();
/// net.add_edge(&Location::new("B"), &Location::new("D"), 5.0).unwrap();
///
/// let route = heuristic_weighted(&net, &Location::new("A"), &Location::new("D")).unwrap();
/// assert_eq!(route.to_string(), "A->B->D");
/// assert_eq!(route.total_distance(), 10.0);
/// ```
pub fn heuristic_weighted(
    network: &RoadNetwork,
    origin: &Location,
    destination: &Location,
) -> Result<Route, SearchError> {
    walk(network, origin, destination, None, |net, next, leg| {
        leg + net.heuristic(next).unwrap_or(0.0)
    })
}

/// [`heuristic_weighted`] with a step ceiling: a safety capability for
/// callers that cannot rule out heuristic cycles. Fails with
/// [`SearchError::StepLimitExceeded`] once `max_steps` hops have been taken
/// without reaching the destination.
pub fn heuristic_weighted_bounded(
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
        |net, next, leg| leg + net.heuristic(next).unwrap_or(0.0),
    )
}
