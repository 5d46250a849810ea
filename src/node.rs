/*!
# Vertex Representation

The dense (matrix-backed) graph numbers its vertices `0..n` and we choose
`Node = u32` for them: almost all use-cases involve far less than `2^32`
vertices, which saves space compared to `usize/u64` and lets us manipulate
vertex values directly.

The list-backed graph instead identifies vertices by an opaque *label* (a
short string, a `char`, an integer, ...). Any cloneable, hashable, totally
ordered type works; the [`Label`] bound captures this.
*/

use std::hash::Hash;

use stream_bitset::bitset::BitSetImpl;

/// Vertices of an index-based graph are unsigned integers from `0` to `n - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Bound for vertex labels of the list-backed graph.
///
/// `Clone + Eq + Hash` make labels usable as hash-map keys, `Ord` pins the
/// deterministic (ascending) neighbor exploration order of all traversals.
pub trait Label: Clone + Eq + Ord + Hash {}

impl<T: Clone + Eq + Ord + Hash> Label for T {}
