/*!
# Utilities

Provides the [`Set`] abstraction used by the traversal machinery together
with the [`FromCapacity`] construction helper. Traversals over index-based
graphs track visited vertices in a dense bitset while traversals over
label-based graphs use a hash set; both hide behind the same trait.
*/

use std::collections::HashSet;

use fxhash::{FxBuildHasher, FxHashSet};
use stream_bitset::{PrimIndex, bitset::BitSetImpl};

pub mod set;

pub use set::Set;

/// Helper trait for datastructures that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
///
/// Dense structures (bitsets) need the *total* capacity, i.e. the maximum
/// element, while sparse structures (hash sets) only care about the number of
/// elements actually *used*. If you only have one upper bound, provide it as
/// both arguments.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value) and the
    /// actual capacity that will be used (space-wise).
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<I> FromCapacity for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using `BitSetImpl<I>` as a Set requires initializing to the maximum element
        Self::new(I::from_usize(total).unwrap())
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // Using `FxHashSet<T>` as a Set only requires initializing to the number of elements
        HashSet::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}
