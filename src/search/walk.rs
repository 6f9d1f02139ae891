//! Shared single-path walk scaffold.

use log::trace;

use crate::error::SearchError;
use crate::models::{Location, RoadNetwork, Route};

/// Walks one path from `origin` toward `destination`, at each step moving
/// to the neighbor with the lowest score.
///
/// The two search strategies differ only in `score`, called per candidate
/// as `score(network, neighbor, road_distance)`. Ties break by
/// neighbor-list order: only a strictly lower score displaces the current
/// best, so the first minimum wins.
///
/// There is no visited set and no backtracking. `max_steps` is the opt-in
/// ceiling for callers that need a termination guarantee; `None` walks
/// unbounded.
pub(crate) fn walk<F>(
    network: &RoadNetwork,
    origin: &Location,
    destination: &Location,
    max_steps: Option<usize>,
    score: F,
) -> Result<Route, SearchError>
where
    F: Fn(&RoadNetwork, &Location, f64) -> f64,
{
    let mut route = Route::new(origin.clone());
    let mut current = origin.clone();
    let mut steps = 0usize;

    while current != *destination {
        if let Some(limit) = max_steps {
            if steps >= limit {
                return Err(SearchError::StepLimitExceeded(limit));
            }
        }

        let neighbors = network
            .neighbors(&current)
            .ok_or_else(|| SearchError::MissingNode(current.name().to_string()))?;

        // First strict minimum wins; list order breaks ties.
        let mut best: Option<(&Location, f64, f64)> = None;
        for (next, leg) in neighbors {
            let candidate = score(network, next, *leg);
            match best {
                Some((_, _, lowest)) if candidate >= lowest => {}
                _ => best = Some((next, *leg, candidate)),
            }
        }
        let (next, leg, picked) =
            best.ok_or_else(|| SearchError::NoPath(current.name().to_string()))?;
        trace!("{current} -> {next} (road {leg}, score {picked})");

        let next = next.clone();
        route.push_stop(next.clone(), leg);
        current = next;
        steps += 1;
    }

    Ok(route)
}
