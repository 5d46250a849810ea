/*!
# Generalized Sets

This module provides an abstraction over `Set` data structures, allowing
algorithms to choose the most efficient implementation based on context.

Examples:
- Sparse sets -> `HashSet`
- Dense sets -> `BitSetImpl`
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use num::ToPrimitive;
use stream_bitset::{PrimIndex, bitset::BitSetImpl};

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        // `HashSet::insert` reports whether the value is new
        !HashSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<I> Set<I> for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn insert(&mut self, value: I) -> bool {
        self.set_bit(value)
    }

    fn contains(&self, value: &I) -> bool {
        self.get_bit(*value)
    }

    fn len(&self) -> usize {
        self.cardinality().to_usize().unwrap()
    }
}
