use crate::error::Result;
use crate::graph::Graph;
use crate::model::Path;
use crate::priority_queue::MinPriorityQueue;
use crate::topology::GraphTopology;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::trace;

/// Tentative cost of a vertex no path has reached yet.
const UNREACHED: u64 = u64::MAX;

/// A route over dense indices, source first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Route {
    pub cost: u64,
    pub nodes: Vec<usize>,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Cheapest path from `a` to `b`, or `None` when `b` is unreachable.
    ///
    /// Runs Dijkstra's algorithm with an indexed binary heap, so a query
    /// costs O((V + E) log V). The search stops as soon as `b` is settled.
    /// Among equal-cost paths the one found first wins; ties in the queue
    /// go to the vertex with the lower construction index.
    pub fn shortest_path(&self, a: &V, b: &V) -> Result<Option<Path<V>>> {
        let source = self.require(a)?;
        let target = self.require(b)?;

        if source == target {
            return Ok(Some(Path::single(a.clone())));
        }

        Ok(dijkstra(self.topology(), source, target).map(|route| {
            let vertices = route
                .nodes
                .iter()
                .map(|&idx| self.vertex_at(idx).clone())
                .collect();
            Path::new(vertices, route.cost)
        }))
    }
}

/// Dijkstra from `source`, stopping once `target` is extracted.
///
/// All per-call state lives here; nothing is stored on the graph.
pub(crate) fn dijkstra(topology: &GraphTopology, source: usize, target: usize) -> Option<Route> {
    let n = topology.num_nodes();
    let mut cost = vec![UNREACHED; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];

    cost[source] = 0;

    let mut pq = MinPriorityQueue::new(n);
    for (node, &c) in cost.iter().enumerate() {
        pq.insert(node, c);
    }

    let mut settled = 0usize;
    while let Some(entry) = pq.extract_min() {
        let u = entry.item;

        // The target's cost is final once it leaves the queue.
        if u == target {
            break;
        }
        // Everything left is unreachable.
        if entry.priority == UNREACHED {
            break;
        }

        finalized[u] = true;
        settled += 1;

        for (w, weight) in topology.neighbors(u) {
            if finalized[w] {
                continue;
            }
            let candidate = cost[u].saturating_add(u64::from(weight));
            if candidate < cost[w] {
                cost[w] = candidate;
                prev[w] = Some(u);
                pq.decrease_key(w, candidate);
            }
        }
    }

    if prev[target].is_none() {
        trace!(source, target, settled, "target unreachable");
        return None;
    }

    let nodes = reconstruct_path(&prev, source, target);
    trace!(source, target, settled, cost = cost[target], hops = nodes.len() - 1, "path found");
    Some(Route {
        cost: cost[target],
        nodes,
    })
}

/// Walk the predecessor chain from target back to source.
fn reconstruct_path(prev: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match prev[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
