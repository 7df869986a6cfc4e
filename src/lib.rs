//! Minimum-time routing over a road network where carpool lanes open up once a
//! passenger has been picked up.
//!
//! The two passenger states are encoded as two copies of the network joined by
//! one-way pickup edges, which turns the problem into a single Dijkstra search.

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod heap;
pub mod input;
pub mod layer;
pub mod planner;
pub mod road;

pub use error::{GraphError, InputError, RouteError, RouteResult};
pub use graph::{Edge, Graph, VertexId, VertexState};
pub use heap::{HeapError, IndexedMinHeap};
pub use layer::{Layer, LayeredEdges, LayeredVertex};
pub use planner::{find_optimal_route, plan_route, Leg, RoutePlan, TravelMode};
pub use road::{Location, Road, Time};
