use std::collections::VecDeque;

use super::*;

impl MatrixGraph {
    /// Computes a distance from `src` to every vertex by propagating edge
    /// weights along a breadth-first expansion: the first time a vertex `v`
    /// is discovered as some `curr`'s successor, it is assigned
    /// `distance[curr] + weight(curr, v)`, and that assignment is final.
    ///
    /// This is **not** a shortest-path computation: no distance is ever
    /// relaxed, so on graphs where a cheaper walk is discovered later in
    /// queue order, the earlier (more expensive) value survives. The
    /// propagation is exact on trees and on any graph with a unique
    /// discovery order, and that first-write-wins behavior is part of the
    /// contract.
    ///
    /// Vertices never reached from `src` report `None`; `distance[src]` is
    /// always `Some(0)`.
    ///
    /// ** Panics if `src >= n` **
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let g = MatrixGraph::from_edges([(0, 1, 10), (1, 2, 5), (3, 0, 2)]);
    /// assert_eq!(
    ///     g.single_source_distances(0),
    ///     vec![Some(0), Some(10), Some(15), None]
    /// );
    /// ```
    pub fn single_source_distances(&self, src: Node) -> Vec<Option<Weight>> {
        let n = self.number_of_nodes();
        assert!(src < n, "source vertex {src} out of range (graph has {n} vertices)");

        let mut dist: Vec<Option<Weight>> = vec![None; n as usize];
        let mut visited = NodeBitSet::new(n);
        let mut queue = VecDeque::from(vec![src]);

        while let Some(curr) = queue.pop_front() {
            if visited.get_bit(curr) {
                continue;
            }
            visited.set_bit(curr);

            for v in self.sorted_neighbors_of(&curr) {
                if curr == src {
                    dist[v as usize] = Some(self.weight(src, v));
                } else if dist[v as usize].is_none() {
                    // every dequeued vertex other than `src` was enumerated as
                    // a successor before, so its own distance is already set
                    let via = dist[curr as usize].unwrap();
                    dist[v as usize] = Some(via + self.weight(curr, v));
                }
                queue.push_back(v);
            }
        }

        dist[src as usize] = Some(0);
        dist
    }
}
