//! Hash states used across the workspace.
//!
//! - [`FixedHashState`]: `foldhash` seeded with a constant, so equal inputs
//!   hash equally in every process. Used for string-keyed lookup tables.
//! - [`NoOpHashState`]: keys that are already well distributed (such as
//!   [`TypeId`](core::any::TypeId)) are used as the hash directly.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHashState

const SEED: u64 = 0x4B45_5957_4159_2D31;

const FIXED_STATE: FixedState = FixedState::with_seed(SEED);

/// The hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A [`BuildHasher`] whose output only depends on the hashed value.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use kw_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("_id");
/// let b = FixedHashState.hash_one("_id");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHashState

/// A hasher that keeps the last written `u64` as its hash.
///
/// Other writes fold bytes in, most significant byte first, so that a single
/// `write_u32(n)` finishes with the same value as `write_u64(n)`.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        self.hash = bytes
            .iter()
            .rev()
            .fold(self.hash, |acc, byte| acc.rotate_left(8).wrapping_add(*byte as u64));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`NoOpHasher`]s, intended for keys that are already hashes.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use kw_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(7_u64), 7);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_narrow_write_matches_u64() {
        let mut narrow = NoOpHashState.build_hasher();
        narrow.write_u32(1234);
        assert_eq!(narrow.finish(), NoOpHashState.hash_one(1234_u64));
    }

    #[test]
    fn fixed_state_is_stable() {
        let first = FixedHashState.hash_one("lastName");
        assert_eq!(first, FixedHashState.hash_one("lastName"));
        assert_ne!(first, FixedHashState.hash_one("firstName"));
    }
}
