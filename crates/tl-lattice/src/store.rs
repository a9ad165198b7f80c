//! `Lattice` — the occupancy state of both lanes.
//!
//! Storage is Structure-of-Arrays: one `Vec<bool>` per lane, both of length L
//! and indexed by site.  `bool` keeps every cell in {0, 1} by construction;
//! density code converts with `as u64`.
//!
//! The simulation loop owns exactly one `Lattice` and replaces it wholesale
//! once per tick (see `tl-sim`), so readers never observe a half-updated
//! state.

use std::fmt;

use tl_core::{Cell, Lane, TlError, TlResult};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Lattice {
    lanes: [Vec<bool>; 2],
}

impl Lattice {
    /// An empty lattice of `length` sites.
    pub fn empty(length: usize) -> Self {
        Self {
            lanes: [vec![false; length], vec![false; length]],
        }
    }

    /// Wrap explicit per-lane occupancy.  Both lanes must have the same length.
    pub fn from_lanes(a: Vec<bool>, b: Vec<bool>) -> TlResult<Self> {
        if a.len() != b.len() {
            return Err(TlError::invalid(
                "occupancy",
                format!("lane A has {} sites but lane B has {}", a.len(), b.len()),
            ));
        }
        Ok(Self { lanes: [a, b] })
    }

    /// Wrap 0/1 occupancy arrays.  Any value other than 0 or 1 is rejected.
    pub fn from_bits(a: &[u8], b: &[u8]) -> TlResult<Self> {
        fn convert(lane: Lane, bits: &[u8]) -> TlResult<Vec<bool>> {
            bits.iter()
                .enumerate()
                .map(|(i, &bit)| match bit {
                    0 => Ok(false),
                    1 => Ok(true),
                    other => Err(TlError::invalid(
                        "occupancy",
                        format!("{} holds {other}; cells must be 0 or 1", Cell::new(lane, i)),
                    )),
                })
                .collect()
        }
        Self::from_lanes(convert(Lane::A, a)?, convert(Lane::B, b)?)
    }

    /// Number of sites per lane (L).
    #[inline]
    pub fn len(&self) -> usize {
        self.lanes[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view of one lane.
    #[inline]
    pub fn lane(&self, lane: Lane) -> &[bool] {
        &self.lanes[lane.index()]
    }

    /// Occupancy of `lane` at `site`.
    ///
    /// # Panics
    /// Panics if `site >= self.len()`.
    #[inline(always)]
    pub fn get(&self, lane: Lane, site: usize) -> bool {
        self.lanes[lane.index()][site]
    }

    #[inline(always)]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell.lane, cell.site)
    }

    /// Overwrite one cell.
    ///
    /// # Panics
    /// Panics if the site is out of range.
    #[inline(always)]
    pub fn set(&mut self, cell: Cell, occupied: bool) {
        self.lanes[cell.lane.index()][cell.site] = occupied;
    }

    /// Particles in one lane.
    pub fn count(&self, lane: Lane) -> usize {
        self.lane(lane).iter().filter(|&&o| o).count()
    }

    /// Particles in both lanes together.
    pub fn total(&self) -> usize {
        self.count(Lane::A) + self.count(Lane::B)
    }

    /// Occupancy of one lane as 0/1 bytes.
    pub fn bits(&self, lane: Lane) -> Vec<u8> {
        self.lane(lane).iter().map(|&o| o as u8).collect()
    }
}

impl fmt::Display for Lattice {
    /// Two rows, `#` for a particle and `.` for a hole:
    ///
    /// ```text
    /// A: #..#.
    /// B: .#...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lane in Lane::ALL {
            write!(f, "{lane}: ")?;
            for &occupied in self.lane(lane) {
                f.write_str(if occupied { "#" } else { "." })?;
            }
            if lane == Lane::A {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
