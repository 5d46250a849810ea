use itertools::Itertools;

use super::*;

/// Iterator over the connected components of a [`ListGraph`], yielding each
/// component as the list of its vertices in visit order.
///
/// Internally a single DFS is restarted at a yet-unvisited vertex once the
/// current region is exhausted.
pub struct ConnectedComponents<'a, L: Label> {
    dfs: Option<Dfs<'a, ListGraph<L>>>,
}

impl<'a, L: Label> ConnectedComponents<'a, L> {
    pub fn new(graph: &'a ListGraph<L>) -> Self {
        Self {
            dfs: graph.vertices().next().map(|v| graph.dfs(v)),
        }
    }
}

impl<L: Label> Iterator for ConnectedComponents<'_, L> {
    type Item = Vec<L>;

    fn next(&mut self) -> Option<Self::Item> {
        let dfs = self.dfs.as_mut()?;
        loop {
            let cc = dfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !dfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<L: Label> ListGraph<L> {
    /// Returns an iterator over the connected components of the graph.
    pub fn connected_components(&self) -> ConnectedComponents<'_, L> {
        ConnectedComponents::new(self)
    }

    /// Counts the disjoint reachability regions partitioning the vertex set.
    /// An isolated vertex forms a region of its own; the empty graph has
    /// zero components.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let mut g = ListGraph::from_edges([('A', 'B'), ('C', 'D')]);
    /// assert_eq!(g.count_connected_components(), 2);
    /// g.add_edge('B', 'C');
    /// assert_eq!(g.count_connected_components(), 1);
    /// ```
    pub fn count_connected_components(&self) -> usize {
        self.connected_components().count()
    }

    /// Returns *true* if any connected region contains a cycle.
    ///
    /// A region with `n` vertices is cyclic iff it carries at least `3` and
    /// at least `n` edges: a spanning tree has exactly `n - 1` edges, so any
    /// region reaching `n` contains a cycle, and the smallest cycle in a
    /// simple graph needs 3 edges.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let mut g = ListGraph::from_edges([('A', 'B'), ('B', 'C')]);
    /// assert!(!g.has_cycle());
    /// g.add_edge('C', 'A');
    /// assert!(g.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        self.connected_components().any(|cc| {
            // a region walk sees every edge of the region, once per endpoint
            let edge_count = cc.iter().map(|v| self.degree_of(v)).sum::<NumNodes>() / 2;
            edge_count >= 3 && edge_count as usize >= cc.len()
        })
    }
}
