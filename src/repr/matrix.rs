use itertools::Itertools;

use crate::{edge::*, node::*, ops::*};

/// A directed, edge-weighted graph stored as a dense adjacency matrix.
///
/// The matrix is a single row-major buffer of `n * n` weights where
/// `weights[src][dst] > 0` encodes the edge `src -> dst` and `0` encodes its
/// absence. The diagonal is always `0`: loops are not representable and all
/// attempts to create one are ignored.
///
/// Vertices are the contiguous range `0..n` and are append-only; this
/// representation intentionally has no vertex removal.
///
/// Invalid mutations (out-of-range endpoints, loops, non-positive weights)
/// are silent no-ops rather than errors.
#[derive(Clone, Default)]
pub struct MatrixGraph {
    n: NumNodes,
    weights: Vec<Weight>,
    num_edges: NumEdges,
}

impl MatrixGraph {
    /// Creates an empty graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from an edge list, auto-sizing the vertex count to the
    /// largest referenced index plus one, then inserting the edges in listed
    /// order. Invalid entries are dropped by the usual `add_edge` rules.
    ///
    /// Bare `(src, dst)` pairs carry the default weight `1`.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let g = MatrixGraph::from_edges([(0, 1, 10), (4, 0, 12)]);
    /// assert_eq!(g.number_of_nodes(), 5);
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    pub fn from_edges(edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let edges: Vec<WeightedEdge> = edges.into_iter().map(Into::into).collect_vec();
        let n = edges.iter().map(|e| e.0.max(e.1)).max().unwrap_or(0) + 1;

        let mut graph = Self {
            n,
            weights: vec![0; n as usize * n as usize],
            num_edges: 0,
        };
        for WeightedEdge(src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Appends one vertex (a zeroed row and column) and returns the new
    /// vertex count. Never fails.
    ///
    /// The matrix is reallocated into a fresh `(n + 1) * (n + 1)` buffer so
    /// it always stays square and contiguous.
    pub fn add_vertex(&mut self) -> NumNodes {
        let old = self.n as usize;
        let new = old + 1;

        let mut weights = vec![0; new * new];
        for row in 0..old {
            weights[row * new..row * new + old]
                .copy_from_slice(&self.weights[row * old..(row + 1) * old]);
        }

        self.weights = weights;
        self.n += 1;
        self.n
    }

    /// Sets (or overwrites) the weight of the edge `src -> dst`.
    ///
    /// A no-op if `src == dst`, either index is out of range, or
    /// `weight <= 0`. Repeated calls simply replace the stored weight.
    pub fn add_edge(&mut self, src: Node, dst: Node, weight: Weight) {
        if src == dst || src >= self.n || dst >= self.n || weight <= 0 {
            return;
        }

        let cell = self.cell(src, dst);
        if self.weights[cell] == 0 {
            self.num_edges += 1;
        }
        self.weights[cell] = weight;
    }

    /// Removes the edge `src -> dst` by zeroing its cell.
    /// A no-op on identical or out-of-range indices or an absent edge.
    pub fn remove_edge(&mut self, src: Node, dst: Node) {
        if src == dst || src >= self.n || dst >= self.n {
            return;
        }

        let cell = self.cell(src, dst);
        if self.weights[cell] != 0 {
            self.num_edges -= 1;
            self.weights[cell] = 0;
        }
    }

    /// Returns the weight of the edge `src -> dst`, with `0` meaning absent.
    /// ** Panics if `src >= n || dst >= n` **
    pub fn weight(&self, src: Node, dst: Node) -> Weight {
        assert!(src < self.n && dst < self.n);
        self.weights[self.cell(src, dst)]
    }

    /// Returns an iterator over all edges as `(src, dst, weight)` triples in
    /// row-major order (`src` ascending, then `dst` ascending).
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let g = MatrixGraph::from_edges([(1, 0, 3), (0, 1, 7)]);
    /// let edges: Vec<_> = g.edges().collect();
    /// assert_eq!(edges, vec![WeightedEdge(0, 1, 7), WeightedEdge(1, 0, 3)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        (0..self.n)
            .cartesian_product(0..self.n)
            .filter_map(|(src, dst)| {
                let weight = self.weights[self.cell(src, dst)];
                (weight > 0).then_some(WeightedEdge(src, dst, weight))
            })
    }

    #[inline]
    fn cell(&self, src: Node, dst: Node) -> usize {
        src as usize * self.n as usize + dst as usize
    }
}

impl GraphOrder for MatrixGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl Adjacency for MatrixGraph {
    type Vertex = Node;
    type VisitSet = NodeBitSet;

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.n
    }

    fn contains_vertex(&self, v: &Node) -> bool {
        *v < self.n
    }

    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: &Node, v: &Node) -> bool {
        self.weight(*u, *v) > 0
    }

    /// Scans the row of `u`; the result is ascending by construction.
    /// ** Panics if `u >= n` **
    fn sorted_neighbors_of(&self, u: &Node) -> Vec<Node> {
        assert!(*u < self.n);
        (0..self.n)
            .filter(|&v| self.weights[self.cell(*u, v)] > 0)
            .collect_vec()
    }

    /// Traversing from an out-of-range vertex is a contract violation.
    /// ** Panics if `start >= n` **
    fn validate_start(&self, start: Node) -> Option<Node> {
        assert!(
            start < self.n,
            "traversal start {start} out of range (graph has {} vertices)",
            self.n
        );
        Some(start)
    }
}
