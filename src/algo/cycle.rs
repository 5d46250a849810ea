use std::collections::VecDeque;

use super::*;

impl MatrixGraph {
    /// Returns *true* if the graph contains a directed cycle.
    ///
    /// Runs a breadth-first expansion from **every** vertex `r` in ascending
    /// order, collecting into `children[r]` every successor enumerated while
    /// expanding `r`'s reachable region. The sets persist across roots;
    /// after each dequeue of a vertex `curr` that already owns such a set
    /// (i.e. `curr <= r`), `curr` being a member of its *own* set means some
    /// vertex reachable from `curr` points back at it: a cycle.
    ///
    /// Duplicates are allowed on the frontier and filtered at dequeue time;
    /// it is precisely the re-dequeue of an already-visited root that
    /// triggers the membership check.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let mut g = MatrixGraph::from_edges([(0, 1, 1), (1, 2, 1)]);
    /// assert!(!g.has_cycle());
    /// g.add_edge(2, 0, 1);
    /// assert!(g.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        let n = self.number_of_nodes();
        let mut children: Vec<NodeBitSet> = (0..n).map(|_| NodeBitSet::new(n)).collect();

        for root in 0..n {
            let mut visited = NodeBitSet::new(n);
            let mut queue = VecDeque::from(vec![root]);

            while let Some(curr) = queue.pop_front() {
                if !visited.get_bit(curr) {
                    visited.set_bit(curr);
                    for v in self.sorted_neighbors_of(&curr) {
                        children[root as usize].set_bit(v);
                        queue.push_back(v);
                    }
                }

                // `children[curr]` is only meaningful once `curr` has been a root
                if curr <= root && children[curr as usize].get_bit(curr) {
                    return true;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> MatrixGraph {
        MatrixGraph::from_edges([
            (0, 1, 10),
            (4, 0, 12),
            (1, 4, 15),
            (4, 3, 3),
            (3, 1, 5),
            (2, 1, 23),
            (3, 2, 7),
        ])
    }

    #[test]
    fn trivial_graphs_are_acyclic() {
        let mut g = MatrixGraph::new();
        assert!(!g.has_cycle());
        g.add_vertex();
        assert!(!g.has_cycle());
    }

    #[test]
    fn two_cycle() {
        let g = MatrixGraph::from_edges([(0, 1, 1), (1, 0, 1)]);
        assert!(g.has_cycle());
    }

    #[test]
    fn dag_stays_acyclic_until_back_edge() {
        let mut g = MatrixGraph::from_edges([(0, 1, 1), (0, 2, 1), (1, 2, 1)]);
        assert!(!g.has_cycle());
        g.add_edge(2, 0, 1);
        assert!(g.has_cycle());
    }

    #[test]
    fn cycle_flag_follows_edge_removal_and_insertion() {
        let mut g = sample_graph();
        assert!(g.has_cycle()); // 0 -> 1 -> 4 -> 0

        g.remove_edge(3, 1);
        assert!(g.has_cycle());

        g.remove_edge(4, 0);
        assert!(g.has_cycle()); // 1 -> 4 -> 3 -> 2 -> 1 remains

        g.remove_edge(3, 2);
        assert!(!g.has_cycle());

        g.add_edge(4, 3, 1);
        assert!(!g.has_cycle());
        g.add_edge(2, 3, 1);
        assert!(!g.has_cycle());
        g.add_edge(1, 3, 1);
        assert!(!g.has_cycle());

        g.add_edge(4, 0, 1);
        assert!(g.has_cycle()); // closes 0 -> 1 -> 4 -> 0 again
    }

    #[test]
    fn cycle_not_reachable_from_smaller_vertices_is_found() {
        // 0 reaches the cycle but lies outside of it
        let g = MatrixGraph::from_edges([(0, 3, 1), (3, 4, 1), (4, 3, 2)]);
        assert!(g.has_cycle());
    }
}
