//! Lane identifiers and lattice cell addresses.

use std::fmt;

/// One of the two parallel 1-D lattices.
///
/// Particles in lane `A` drift towards higher site indices; particles in lane
/// `B` drift towards site 0, where they may leave the system.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lane {
    A,
    B,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::A, Lane::B];

    /// Dense index (`A = 0`, `B = 1`) for per-lane arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lane::A => f.write_str("A"),
            Lane::B => f.write_str("B"),
        }
    }
}

/// A single `(lane, site)` cell of the lattice.
///
/// Used both as the source key of a proposed transition and as its
/// destination.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell {
    pub lane: Lane,
    pub site: usize,
}

impl Cell {
    #[inline]
    pub const fn new(lane: Lane, site: usize) -> Self {
        Self { lane, site }
    }

    #[inline]
    pub const fn a(site: usize) -> Self {
        Self::new(Lane::A, site)
    }

    #[inline]
    pub const fn b(site: usize) -> Self {
        Self::new(Lane::B, site)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.lane, self.site)
    }
}
