/*!
# Graph Representations

This module defines the two storage backends of the crate:

- [`MatrixGraph`]: a directed, edge-weighted graph over index vertices
  `0..n`, stored as a dense row-major adjacency matrix. Vertices are
  append-only; edges carry a strictly positive [`Weight`](crate::edge::Weight).
- [`ListGraph`]: an undirected, unweighted graph over arbitrary vertex
  labels, stored as a hash map from label to its neighbor sequence. Vertices
  and edges may be added and removed freely.

The representations share no storage but implement the same
[`Adjacency`](crate::ops::Adjacency) contract, which is what the algorithms
in [`algo`](crate::algo) run on.
*/

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;
