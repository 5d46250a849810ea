/*!
# Graph Algorithms

This module provides the traversal and analysis algorithms built on top of
the representations in [`repr`](crate::repr). Where possible, algorithms are
provided as **iterators**, making it easy to consume results lazily, and are
exposed as methods on the graphs themselves (see [`Traversal`]).

All algorithms visit neighbors in ascending vertex order, so every traversal
sequence is fully deterministic.
*/

mod connectivity;
mod cycle;
mod distance;
mod traversal;

use crate::{prelude::*, utils::*};

pub use connectivity::*;
pub use traversal::*;
