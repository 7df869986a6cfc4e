/*
Two-layer expansion of the road network.

Layer Solo is every location before a passenger is aboard, layer Carpool every
location after the pickup. A road (a, b, solo, carpool) becomes:
  - a/Solo -> b/Solo with the solo time,
  - a/Carpool -> b/Carpool with the carpool time,
  - a/Solo -> b/Carpool with the carpool time, when a has a passenger waiting.
There is never an edge from Carpool back to Solo.

When no road leaves a passenger location the Carpool layer cannot be entered, so
only the Solo layer is built.
*/

use fnv::FnvHashSet;
use log::debug;

use crate::graph::{Edge, VertexId};
use crate::road::{Location, Road};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Solo,
    Carpool,
}

/// A location paired with the passenger state it is reached in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayeredVertex {
    pub location: Location,
    pub layer: Layer,
}

impl LayeredVertex {
    pub fn solo(location: Location) -> Self {
        Self {
            location,
            layer: Layer::Solo,
        }
    }

    pub fn carpool(location: Location) -> Self {
        Self {
            location,
            layer: Layer::Carpool,
        }
    }

    /// Dense graph id: Solo vertices take `0..total_locations`, Carpool vertices the next block.
    #[inline(always)]
    pub fn index(self, total_locations: usize) -> VertexId {
        debug_assert!(self.location < total_locations);
        match self.layer {
            Layer::Solo => self.location,
            Layer::Carpool => self.location + total_locations,
        }
    }

    #[inline(always)]
    pub fn from_index(index: VertexId, total_locations: usize) -> Self {
        if index < total_locations {
            Self::solo(index)
        } else {
            Self::carpool(index - total_locations)
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayeredEdges {
    pub edges: Vec<Edge>,
    pub total_locations: usize,
    /// Whether the Carpool layer was built at all.
    pub layered: bool,
}

impl LayeredEdges {
    pub fn build(roads: &[Road], passengers: &FnvHashSet<Location>, total_locations: usize) -> Self {
        let edge = |from: LayeredVertex, to: LayeredVertex, weight| {
            Edge::new(from.index(total_locations), to.index(total_locations), weight)
        };

        // Pickup edges go first so they sit ahead of the plain roads in each adjacency list.
        let mut edges: Vec<Edge> = roads
            .iter()
            .filter(|road| passengers.contains(&road.from))
            .map(|road| {
                edge(
                    LayeredVertex::solo(road.from),
                    LayeredVertex::carpool(road.to),
                    road.carpool,
                )
            })
            .collect();
        let layered = !edges.is_empty();

        let per_road = if layered { 2 } else { 1 };
        edges.reserve(roads.len() * per_road);
        for road in roads {
            edges.push(edge(
                LayeredVertex::solo(road.from),
                LayeredVertex::solo(road.to),
                road.solo,
            ));
            if layered {
                edges.push(edge(
                    LayeredVertex::carpool(road.from),
                    LayeredVertex::carpool(road.to),
                    road.carpool,
                ));
            }
        }

        debug!(
            "layered network: {} locations, {} passengers, {} edges, carpool layer {}",
            total_locations,
            passengers.len(),
            edges.len(),
            if layered { "built" } else { "unreachable" }
        );

        Self {
            edges,
            total_locations,
            layered,
        }
    }
}
