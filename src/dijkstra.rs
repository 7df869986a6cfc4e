use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;

use crate::road::Road;

/// Adjacency list over solo travel times, ignoring carpool lanes entirely.
pub fn solo_adjacency(roads: &[Road]) -> Vec<Vec<(usize, f64)>> {
    let max_node = roads
        .iter()
        .map(|road| std::cmp::max(road.from, road.to))
        .max();

    let mut adj: Vec<Vec<(usize, f64)>> = vec![Vec::new(); max_node.map_or(0, |max| max + 1)];
    for road in roads {
        adj[road.from].push((road.to, road.solo));
    }
    adj
}

/// Dijkstra from `start` to all nodes. Returns distances, `f64::INFINITY` when unreachable.
pub fn dijkstra_all(adj: &[Vec<(usize, f64)>], start: usize) -> Vec<f64> {
    let n = adj.len();
    let mut dist = vec![f64::INFINITY; n];
    if start >= n {
        return dist;
    }

    // Reverse turns the max-queue into a min-queue; push_increase acts as decrease-key.
    let mut pq: PriorityQueue<usize, Reverse<OrderedFloat<f64>>> = PriorityQueue::with_capacity(n);
    dist[start] = 0.0;
    pq.push(start, Reverse(OrderedFloat(0.0)));

    while let Some((node_id, Reverse(OrderedFloat(cost)))) = pq.pop() {
        for &(next, w) in &adj[node_id] {
            let next_cost = cost + w;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                pq.push_increase(next, Reverse(OrderedFloat(next_cost)));
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_graph() {
        let roads: Vec<Road> = [
            (0, 1, 0.0),
            (0, 2, 1.0),
            (0, 7, 5.0),
            (1, 3, 3.0),
            (1, 4, 2.0),
            (2, 4, 3.0),
            (2, 5, 2.0),
            (3, 6, 2.0),
            (4, 6, 2.0),
            (6, 8, 3.0),
            (7, 9, 2.0),
            (8, 10, 1.0),
            (9, 10, 2.0),
        ]
        .iter()
        .map(|&(u, v, w)| Road::new(u, v, w, 0.0))
        .collect();

        let dist = dijkstra_all(&solo_adjacency(&roads), 0);

        assert_eq!(dist, vec![0.0, 0.0, 1.0, 3.0, 2.0, 3.0, 4.0, 5.0, 7.0, 7.0, 8.0]);
    }

    #[test]
    fn unreachable_is_infinite() {
        let roads = [Road::new(0, 1, 2.0, 1.0), Road::new(2, 1, 1.0, 1.0)];
        let dist = dijkstra_all(&solo_adjacency(&roads), 0);
        assert_eq!(dist[1], 2.0);
        assert!(dist[2].is_infinite());
        assert!(dijkstra_all(&[], 0).is_empty());
    }
}
