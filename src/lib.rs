/*!
`adjgraphs` is a small in-memory graph library exposing two graph models
together with a shared family of traversal and analysis algorithms.

# Representations

- [`MatrixGraph`](repr::MatrixGraph): a **directed, edge-weighted** graph
  over index vertices `0..n`, stored as a dense adjacency matrix. Vertices
  are append-only; edges carry strictly positive integer weights.
- [`ListGraph`](repr::ListGraph): an **undirected, unweighted** graph over
  arbitrary vertex labels (`char`, `String`, integers, ...), stored as an
  adjacency list. Vertices and edges come and go dynamically.

The two share no storage but implement a common contract
([`Adjacency`](ops::Adjacency)): vertex/edge enumeration, path validation
and stack/queue-driven traversal, plus cycle detection. On top of that, the
matrix graph offers a single-source distance propagation and the list graph
connected-component counting.

# Determinism

All traversals explore neighbors in **ascending** vertex order, making every
visit sequence reproducible. Mutating operations never fail: invalid inputs
(out-of-range indices, loops, non-positive weights, absent endpoints) are
silent no-ops by contract.

# Usage

There are three core submodules you probably want to interact with:
- [`prelude`] includes the graph types and all basic operation traits,
- [`algo`] includes the traversal iterators ([`algo::Dfs`] / [`algo::Bfs`]),
  the [`algo::Traversal`] trait implemented on the graphs themselves and the
  connected-component machinery,
- [`utils`] includes the [`Set`](utils::Set) abstraction backing the
  visited-state of traversals.

In most use-cases, `use adjgraphs::{prelude::*, algo::*};` suffices:

```
use adjgraphs::{algo::*, prelude::*};

let g = MatrixGraph::from_edges([(0, 1, 10), (1, 2, 5), (2, 0, 1)]);
assert_eq!(g.dfs(0).collect::<Vec<_>>(), vec![0, 1, 2]);
assert!(g.has_cycle());

let h = ListGraph::from_edges([('A', 'B'), ('B', 'C'), ('D', 'E')]);
assert_eq!(h.count_connected_components(), 2);
```
*/

pub mod algo;
pub mod edge;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

/// `adjgraphs::prelude` includes definitions for vertices and edges, the
/// basic graph operation traits as well as both implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
