//! Directed weighted graph with per-vertex shortest-path state.
//!
//! Vertices are dense ids `0..vertex_count`. Search state lives in an arena
//! indexed by vertex id and predecessors are stored as ids into that arena.

use std::fmt;

use log::{debug, trace};

use crate::error::GraphError;
use crate::heap::IndexedMinHeap;
use crate::road::Time;

pub type VertexId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Time,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Time) -> Self {
        Self { from, to, weight }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} with weight {}", self.from, self.to, self.weight)
    }
}

/// Search state of one vertex. `distance` only means something once `discovered` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VertexState {
    pub distance: Time,
    pub predecessor: Option<VertexId>,
    /// Weight of the edge from `predecessor`.
    pub via_weight: Time,
    /// Settled: the distance is final.
    pub visited: bool,
    /// Entered the queue at least once.
    pub discovered: bool,
}

#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<(VertexId, Time)>>,
    states: Vec<VertexState>,
    edge_count: usize,
}

impl Graph {
    /// Builds the adjacency list. The vertex count is one past the largest endpoint.
    pub fn from_edges(edges: &[Edge]) -> Result<Self, GraphError> {
        let vertex_count = match edges.iter().map(|edge| edge.from.max(edge.to)).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or(GraphError::VertexIdTooLarge(max))?,
            None => 0,
        };

        let mut adjacency: Vec<Vec<(VertexId, Time)>> = vec![Vec::new(); vertex_count];
        for edge in edges {
            adjacency[edge.from].push((edge.to, edge.weight));
        }

        Ok(Self {
            adjacency,
            states: vec![VertexState::default(); vertex_count],
            edge_count: edges.len(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn neighbors(&self, vertex: VertexId) -> &[(VertexId, Time)] {
        self.adjacency.get(vertex).map_or(&[][..], Vec::as_slice)
    }

    pub fn state(&self, vertex: VertexId) -> Option<&VertexState> {
        self.states.get(vertex)
    }

    /// Shortest distance found by the last search, `None` if the vertex was never reached.
    pub fn distance(&self, vertex: VertexId) -> Option<Time> {
        self.states
            .get(vertex)
            .filter(|state| state.discovered)
            .map(|state| state.distance)
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.states.get(vertex).and_then(|state| state.predecessor)
    }

    /// The shortest-path tree edge ending at `vertex`, with the weight it was reached by.
    pub fn predecessor_edge(&self, vertex: VertexId) -> Option<Edge> {
        let state = self.states.get(vertex)?;
        state
            .predecessor
            .map(|from| Edge::new(from, vertex, state.via_weight))
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.states.get(vertex).is_some_and(|state| state.visited)
    }

    /// Dijkstra from `source` over non-negative weights.
    ///
    /// Afterwards every vertex reachable from `source` holds its minimum distance
    /// and a predecessor on one shortest path. Any state from an earlier run is
    /// cleared first.
    pub fn shortest_path_from(&mut self, source: VertexId) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        if source >= vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex: source,
                vertex_count,
            });
        }

        self.states.fill(VertexState::default());
        let mut heap = IndexedMinHeap::with_capacity(vertex_count);

        let source_state = &mut self.states[source];
        source_state.distance = 0.0;
        source_state.discovered = true;
        heap.insert(source, 0.0)?;

        let mut settled = 0;
        while let Some((u, _)) = heap.extract_min() {
            self.states[u].visited = true;
            settled += 1;
            let u_distance = self.states[u].distance;

            for &(v, weight) in &self.adjacency[u] {
                let candidate = u_distance + weight;
                let v_state = &mut self.states[v];
                if !v_state.discovered {
                    v_state.discovered = true;
                    v_state.distance = candidate;
                    v_state.predecessor = Some(u);
                    v_state.via_weight = weight;
                    heap.insert(v, candidate)?;
                } else if !v_state.visited && candidate < v_state.distance {
                    trace!("relax {} -> {}: {} -> {}", u, v, v_state.distance, candidate);
                    v_state.distance = candidate;
                    v_state.predecessor = Some(u);
                    v_state.via_weight = weight;
                    heap.decrease_priority(v, candidate)?;
                }
            }
        }

        debug!(
            "shortest paths from {}: settled {} of {} vertices",
            source, settled, vertex_count
        );
        Ok(())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.adjacency.iter().enumerate() {
            writeln!(f, "vertex {}", vertex)?;
            for &(to, weight) in edges {
                writeln!(f, "  {}", Edge::new(vertex, to, weight))?;
            }
        }
        Ok(())
    }
}
