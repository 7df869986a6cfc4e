//! Minimum-time routing with an optional passenger pickup.
//!
//! The road list is expanded into the two-layer network from [`crate::layer`],
//! searched once from the start location in the Solo layer, and the cheaper of
//! the two destination copies is walked back to the start.

use fnv::FnvHashSet;
use log::{debug, warn};

use crate::error::{RouteError, RouteResult};
use crate::graph::Graph;
use crate::layer::{Layer, LayeredEdges, LayeredVertex};
use crate::road::{max_location, Location, Road, Time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Solo,
    Carpool,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Solo => "solo",
            TravelMode::Carpool => "carpool",
        }
    }
}

/// One road travelled on the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub from: Location,
    pub to: Location,
    pub mode: TravelMode,
    pub time: Time,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Locations from start to end, both included.
    pub stops: Vec<Location>,
    pub legs: Vec<Leg>,
    pub total_time: Time,
    /// Where the passenger got in, if the route picks one up.
    pub pickup: Option<Location>,
    /// Whether a pickup was possible at all for this input.
    pub layered: bool,
}

/// Returns the locations of a minimum-time route from `start` to `end`.
pub fn find_optimal_route(
    start: Location,
    end: Location,
    passengers: &[Location],
    roads: &[Road],
) -> RouteResult<Vec<Location>> {
    plan_route(start, end, passengers, roads).map(|plan| plan.stops)
}

pub fn plan_route(
    start: Location,
    end: Location,
    passengers: &[Location],
    roads: &[Road],
) -> RouteResult<RoutePlan> {
    let max_location = validate_roads(roads)?;
    for location in [start, end].into_iter().chain(passengers.iter().copied()) {
        if location > max_location {
            return Err(RouteError::LocationOutOfRange {
                location,
                max_location,
            });
        }
    }
    // Carpool ids take the block after the Solo ids, so twice the location count must fit.
    let total_locations = max_location
        .checked_add(1)
        .filter(|total| total.checked_mul(2).is_some())
        .ok_or(RouteError::LocationTooLarge {
            location: max_location,
        })?;

    let passengers: FnvHashSet<Location> = passengers.iter().copied().collect();
    let network = LayeredEdges::build(roads, &passengers, total_locations);
    let mut graph = Graph::from_edges(&network.edges)?;

    let source = LayeredVertex::solo(start);
    graph.shortest_path_from(source.index(total_locations))?;

    let no_route = || RouteError::NoRoute {
        from: start,
        to: end,
    };
    let distance_to = |vertex: LayeredVertex| graph.distance(vertex.index(total_locations));

    // Ties stay in the Solo layer.
    let solo_end = LayeredVertex::solo(end);
    let destination = if network.layered {
        let carpool_end = LayeredVertex::carpool(end);
        match (distance_to(solo_end), distance_to(carpool_end)) {
            (Some(solo), Some(carpool)) if carpool < solo => carpool_end,
            (None, Some(_)) => carpool_end,
            _ => solo_end,
        }
    } else {
        solo_end
    };
    let total_time = distance_to(destination).ok_or_else(no_route)?;

    // Walk the tree edges back from the destination, keeping the weight each one carried.
    let mut path = vec![destination];
    let mut weights = Vec::new();
    let mut current = destination;
    while current != source {
        let edge = graph
            .predecessor_edge(current.index(total_locations))
            .ok_or_else(no_route)?;
        current = LayeredVertex::from_index(edge.from, total_locations);
        path.push(current);
        weights.push(edge.weight);
    }
    path.reverse();
    weights.reverse();

    let legs: Vec<Leg> = path
        .windows(2)
        .zip(&weights)
        .map(|(pair, &time)| {
            let (from, to) = (pair[0], pair[1]);
            Leg {
                from: from.location,
                to: to.location,
                mode: match to.layer {
                    Layer::Solo => TravelMode::Solo,
                    Layer::Carpool => TravelMode::Carpool,
                },
                time,
            }
        })
        .collect();
    let pickup = path
        .windows(2)
        .find(|pair| pair[0].layer == Layer::Solo && pair[1].layer == Layer::Carpool)
        .map(|pair| pair[0].location);
    let stops = path.iter().map(|vertex| vertex.location).collect();

    debug!(
        "route {} -> {}: {} legs, time {}, pickup {:?}",
        start,
        end,
        legs.len(),
        total_time,
        pickup
    );

    Ok(RoutePlan {
        stops,
        legs,
        total_time,
        pickup,
        layered: network.layered,
    })
}

/// Checks travel times and returns the largest location id.
fn validate_roads(roads: &[Road]) -> RouteResult<Location> {
    let max_location = max_location(roads).ok_or(RouteError::EmptyNetwork)?;
    for road in roads {
        for time in [road.solo, road.carpool] {
            if !time.is_finite() || time < 0.0 {
                return Err(RouteError::InvalidTime {
                    from: road.from,
                    to: road.to,
                    time,
                });
            }
        }
        if road.carpool > road.solo {
            warn!(
                "road {} -> {} is slower with a passenger ({} > {}); using the times as given",
                road.from, road.to, road.carpool, road.solo
            );
        }
    }
    Ok(max_location)
}
