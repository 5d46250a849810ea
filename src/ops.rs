use itertools::Itertools;

use crate::{edge::*, node::*, utils::*};

/// Provides getters pertaining to the size of a graph
pub trait GraphOrder {
    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// The neighbors-of(v) abstraction every traversal and analysis algorithm
/// runs on. Each representation supplies it from its own storage.
pub trait Adjacency: GraphOrder {
    /// Vertex identity: contiguous indices for the matrix-backed graph,
    /// opaque labels for the list-backed graph.
    type Vertex: Label;

    /// Visited-state tracker used by traversals over this representation
    /// (a dense bitset for index vertices, a hash set for labels).
    type VisitSet: Set<Self::Vertex> + FromCapacity;

    /// Returns an iterator over all vertices. Order is unspecified.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Returns *true* if `v` is a vertex of the graph.
    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    /// Returns *true* if the edge (u,v) exists in the graph.
    /// For the undirected representation this is symmetric.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Returns the neighbors of `u` (outgoing neighbors for the directed
    /// representation) in ascending order.
    fn sorted_neighbors_of(&self, u: &Self::Vertex) -> Vec<Self::Vertex>;

    /// Returns the number of (outgoing) neighbors of `u`
    fn degree_of(&self, u: &Self::Vertex) -> NumNodes {
        self.sorted_neighbors_of(u).len() as NumNodes
    }

    /// Admits or rejects a traversal start vertex.
    ///
    /// The two representations deliberately differ here: the matrix-backed
    /// graph treats an out-of-range start as a precondition violation and
    /// panics, while the list-backed graph maps an unknown label to `None`,
    /// which yields an empty traversal.
    fn validate_start(&self, start: Self::Vertex) -> Option<Self::Vertex>;
}

/// Path validation, shared by both representations.
pub trait PathValidation: Adjacency {
    /// Returns *true* if `path` is a valid walk through the graph: every
    /// member must be a vertex and every consecutive pair must be joined by
    /// an edge (in the stated direction for the directed representation).
    ///
    /// The empty path is trivially valid; a single-vertex path is valid iff
    /// that vertex exists.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let g = MatrixGraph::from_edges([(0, 1, 10), (1, 2, 5)]);
    /// assert!(g.is_valid_path(&[0, 1, 2]));
    /// assert!(!g.is_valid_path(&[1, 0]));
    /// assert!(g.is_valid_path(&[]));
    /// ```
    fn is_valid_path(&self, path: &[Self::Vertex]) -> bool {
        path.iter().all(|v| self.contains_vertex(v))
            && path.iter().tuple_windows().all(|(u, v)| self.has_edge(u, v))
    }
}

impl<G: Adjacency> PathValidation for G {}
