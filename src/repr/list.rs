use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::{edge::NumEdges, node::*, ops::*};

/// An undirected, unweighted graph stored as an adjacency list.
///
/// Vertices are opaque labels (see [`Label`]); each label maps to its owned
/// neighbor sequence. Two invariants hold after every mutation:
///
/// - **Symmetry**: `v` is a neighbor of `u` iff `u` is a neighbor of `v`.
/// - **Simplicity**: no duplicate neighbor entries and no loops.
///
/// Unlike [`MatrixGraph`](crate::repr::MatrixGraph), vertices can be removed
/// again; an isolated vertex persists until it is.
#[derive(Clone)]
pub struct ListGraph<L: Label> {
    adj: FxHashMap<L, Vec<L>>,
    num_edges: NumEdges,
}

impl<L: Label> Default for ListGraph<L> {
    fn default() -> Self {
        Self {
            adj: FxHashMap::default(),
            num_edges: 0,
        }
    }
}

impl<L: Label> ListGraph<L> {
    /// Creates an empty graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from a list of endpoint pairs, inserted in listed
    /// order via [`ListGraph::add_edge`].
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let g = ListGraph::from_edges([('A', 'B'), ('A', 'C')]);
    /// assert_eq!(g.number_of_nodes(), 3);
    /// assert!(g.has_edge(&'B', &'A'));
    /// ```
    pub fn from_edges(edges: impl IntoIterator<Item = (L, L)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Inserts `v` as an isolated vertex. Idempotent: an existing vertex
    /// keeps its neighbors.
    pub fn add_vertex(&mut self, v: L) {
        self.adj.entry(v).or_default();
    }

    /// Connects `u` and `v`, creating either vertex if necessary.
    ///
    /// A no-op if `u == v` or the edge already exists; the neighbor lists
    /// stay duplicate-free and symmetric.
    pub fn add_edge(&mut self, u: L, v: L) {
        if u == v {
            return;
        }

        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        // symmetry: presence in one list implies presence in the other
        if self.adj[&u].contains(&v) {
            return;
        }

        self.adj.get_mut(&u).unwrap().push(v.clone());
        self.adj.get_mut(&v).unwrap().push(u);
        self.num_edges += 1;
    }

    /// Disconnects `u` and `v`. A no-op unless both vertices exist and are
    /// currently connected.
    pub fn remove_edge(&mut self, u: &L, v: &L) {
        if !self.adj.contains_key(u) || !self.adj.contains_key(v) {
            return;
        }

        let Some((pos, _)) = self.adj[u].iter().find_position(|x| *x == v) else {
            return;
        };
        self.adj.get_mut(u).unwrap().swap_remove(pos);

        let (pos, _) = self.adj[v].iter().find_position(|x| *x == u).unwrap();
        self.adj.get_mut(v).unwrap().swap_remove(pos);

        self.num_edges -= 1;
    }

    /// Deletes `v` and strips it from every neighbor's list.
    /// A no-op if `v` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let mut g = ListGraph::from_edges([('A', 'B'), ('B', 'C')]);
    /// g.remove_vertex(&'B');
    /// assert_eq!(g.number_of_edges(), 0);
    /// assert_eq!(g.number_of_nodes(), 2);
    /// ```
    pub fn remove_vertex(&mut self, v: &L) {
        let Some(neighbors) = self.adj.remove(v) else {
            return;
        };

        for w in &neighbors {
            let nbs = self.adj.get_mut(w).unwrap();
            let (pos, _) = nbs.iter().find_position(|x| *x == v).unwrap();
            nbs.swap_remove(pos);
        }

        self.num_edges -= neighbors.len() as NumEdges;
    }

    /// Returns an iterator over all edges, each undirected edge reported
    /// exactly once as the pair with the smaller endpoint first. Order is
    /// otherwise unspecified.
    pub fn edges(&self) -> impl Iterator<Item = (L, L)> + '_ {
        self.adj.iter().flat_map(|(u, nbs)| {
            nbs.iter()
                .filter(move |v| u < *v)
                .map(move |v| (u.clone(), v.clone()))
        })
    }
}

impl<L: Label> GraphOrder for ListGraph<L> {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<L: Label> Adjacency for ListGraph<L> {
    type Vertex = L;
    type VisitSet = FxHashSet<L>;

    fn vertices(&self) -> impl Iterator<Item = L> + '_ {
        self.adj.keys().cloned()
    }

    fn contains_vertex(&self, v: &L) -> bool {
        self.adj.contains_key(v)
    }

    /// Unknown labels are simply not connected to anything.
    fn has_edge(&self, u: &L, v: &L) -> bool {
        self.adj.get(u).is_some_and(|nbs| nbs.contains(v))
    }

    fn sorted_neighbors_of(&self, u: &L) -> Vec<L> {
        self.adj
            .get(u)
            .map(|nbs| nbs.iter().cloned().sorted().collect_vec())
            .unwrap_or_default()
    }

    fn degree_of(&self, u: &L) -> NumNodes {
        self.adj.get(u).map_or(0, |nbs| nbs.len() as NumNodes)
    }

    /// An unknown start label yields an empty traversal (in contrast to the
    /// matrix-backed graph, which panics).
    fn validate_start(&self, start: L) -> Option<L> {
        self.contains_vertex(&start).then_some(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_label_pairs;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Edges `AB, AC, BC, BD, CD, CE, DE`
    fn sample_graph() -> ListGraph<char> {
        ListGraph::from_edges([
            ('A', 'B'),
            ('A', 'C'),
            ('B', 'C'),
            ('B', 'D'),
            ('C', 'D'),
            ('C', 'E'),
            ('D', 'E'),
        ])
    }

    fn sorted_edges(g: &ListGraph<char>) -> Vec<(char, char)> {
        g.edges().sorted().collect_vec()
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = ListGraph::new();
        for v in "ABCDE".chars() {
            g.add_vertex(v);
        }
        assert_eq!(g.number_of_nodes(), 5);
        assert_eq!(g.number_of_edges(), 0);

        g.add_vertex('A');
        assert_eq!(g.number_of_nodes(), 5);

        assert_eq!(g.vertices().sorted().collect_vec(), vec!['A', 'B', 'C', 'D', 'E']);
    }

    #[test]
    fn add_edge_creates_vertices_and_stays_simple() {
        let mut g = ListGraph::new();
        g.add_edge('A', 'B');
        g.add_edge('B', 'A'); // idempotent, either orientation
        g.add_edge('A', 'A'); // loops ignored

        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.sorted_neighbors_of(&'A'), vec!['B']);
        assert_eq!(g.sorted_neighbors_of(&'B'), vec!['A']);
    }

    #[test]
    fn seeded_example() {
        let g = sample_graph();
        assert_eq!(g.number_of_nodes(), 5);
        assert_eq!(g.number_of_edges(), 7);
        assert_eq!(
            sorted_edges(&g),
            vec![
                ('A', 'B'),
                ('A', 'C'),
                ('B', 'C'),
                ('B', 'D'),
                ('C', 'D'),
                ('C', 'E'),
                ('D', 'E'),
            ]
        );
    }

    #[test]
    fn remove_edge_requires_existing_connection() {
        let mut g = sample_graph();

        g.remove_edge(&'X', &'B'); // unknown vertex
        g.remove_edge(&'A', &'E'); // not connected
        assert_eq!(g.number_of_edges(), 7);

        g.remove_edge(&'A', &'B');
        assert_eq!(g.number_of_edges(), 6);
        assert!(!g.has_edge(&'A', &'B'));
        assert!(!g.has_edge(&'B', &'A'));
    }

    #[test]
    fn remove_vertex_strips_all_incident_edges() {
        let mut g = sample_graph();

        g.remove_vertex(&'Z'); // unknown: no-op
        assert_eq!(g.number_of_nodes(), 5);

        g.remove_vertex(&'D');
        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(
            sorted_edges(&g),
            vec![('A', 'B'), ('A', 'C'), ('B', 'C'), ('C', 'E')]
        );
        assert_eq!(g.number_of_edges(), 4);
    }

    #[test]
    fn add_then_remove_restores_state() {
        let mut g = sample_graph();
        let before = sorted_edges(&g);

        g.add_edge('A', 'E');
        g.remove_edge(&'A', &'E');

        assert_eq!(sorted_edges(&g), before);
        assert_eq!(g.number_of_edges(), 7);
    }

    #[test]
    fn valid_paths() {
        let g = sample_graph();

        assert!(g.is_valid_path(&[])); // empty path is valid
        assert!(g.is_valid_path(&['D']));
        assert!(!g.is_valid_path(&['Z']));
        assert!(g.is_valid_path(&['A', 'B', 'C']));
        assert!(!g.is_valid_path(&['A', 'D', 'E']));
        assert!(g.is_valid_path(&['A', 'C', 'D', 'E', 'C', 'B']));
    }

    #[test]
    fn symmetry_invariant_under_random_mutations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [8u32, 20, 40] {
            let mut g: ListGraph<u32> = ListGraph::new();

            for (u, v) in random_label_pairs(rng, n, 6 * n as usize) {
                if rng.random_bool(0.3) {
                    g.remove_edge(&u, &v);
                } else {
                    g.add_edge(u, v);
                }

                if rng.random_bool(0.05) {
                    g.remove_vertex(&rng.random_range(0..n));
                }
            }

            // symmetry + simplicity after every batch of mutations
            let mut seen = 0;
            for u in g.vertices() {
                let nbs = g.sorted_neighbors_of(&u);
                assert!(!nbs.contains(&u));
                assert!(nbs.iter().tuple_windows().all(|(a, b)| a < b));
                for v in &nbs {
                    assert!(g.has_edge(v, &u));
                }
                seen += nbs.len();
            }
            assert_eq!(seen as NumEdges, 2 * g.number_of_edges());
            assert_eq!(g.edges().count() as NumEdges, g.number_of_edges());
        }
    }
}
