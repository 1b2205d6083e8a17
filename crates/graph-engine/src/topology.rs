/// Outgoing adjacency over dense vertex indices.
///
/// Each slot lists `(neighbor, weight)` pairs in the order the edges were
/// supplied. A pair appears twice when the same edge was supplied twice.
#[derive(Debug, Clone, Default)]
pub struct GraphTopology {
    adj: Vec<Vec<(usize, u32)>>,
}

impl GraphTopology {
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.adj.iter().map(|neighbors| neighbors.len()).sum()
    }

    pub fn add_node(&mut self) -> usize {
        let id = self.adj.len();
        self.adj.push(Vec::new());
        id
    }

    /// Append an arc. Both endpoints must already be nodes.
    pub fn add_arc(&mut self, src: usize, dst: usize, weight: u32) {
        debug_assert!(dst < self.adj.len(), "arc target {dst} out of range");
        self.adj[src].push((dst, weight));
    }

    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.adj.get(node).into_iter().flatten().copied()
    }
}
