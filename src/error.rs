//! Error types for graph search, route planning and road loading.

use thiserror::Error;

use crate::graph::VertexId;
use crate::heap::HeapError;
use crate::road::{Location, Time};

/// Errors produced while running a shortest-path search.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("vertex {vertex} is outside the graph (vertex count {vertex_count})")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    #[error("vertex id {0} leaves no room for a vertex count")]
    VertexIdTooLarge(VertexId),

    // Only reachable through a sizing bug: the queue is sized to the vertex count.
    #[error("priority queue failure: {0}")]
    Heap(#[from] HeapError),
}

/// Errors produced by route planning.
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("road network is empty")]
    EmptyNetwork,

    #[error("location {location} is not in the road network (max location {max_location})")]
    LocationOutOfRange {
        location: Location,
        max_location: Location,
    },

    #[error("location {location} is too large to number both passenger layers")]
    LocationTooLarge { location: Location },

    #[error("road {from} -> {to} has invalid travel time {time}")]
    InvalidTime { from: Location, to: Location, time: Time },

    #[error("no route from {from} to {to}")]
    NoRoute { from: Location, to: Location },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors produced while reading a road CSV.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: u64, field: &'static str },

    #[error("line {line}: cannot parse `{value}` as {field}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },
}

pub type RouteResult<T> = Result<T, RouteError>;
