//! Initial occupancy: random placement for production runs, explicit
//! placement for scenarios and tests.
//!
//! # Usage
//!
//! ```rust
//! use tl_core::{Cell, Lane};
//! use tl_lattice::LatticeBuilder;
//!
//! let lattice = LatticeBuilder::new(5)
//!     .occupy(Cell::a(0))
//!     .occupy(Cell::b(0))
//!     .build()
//!     .unwrap();
//!
//! assert!(lattice.get(Lane::A, 0) && lattice.get(Lane::B, 0));
//! assert_eq!(lattice.total(), 2);
//! ```

use tl_core::{Cell, Lane, TlError, TlResult, UniformSource};

use crate::Lattice;

// ── Random placement ──────────────────────────────────────────────────────────

impl Lattice {
    /// Place `particles` particles uniformly at random, without replacement,
    /// over the combined `2·length` cell space.
    ///
    /// Position `p < length` occupies `A[p]`; position `p ≥ length` occupies
    /// `B[p − length]`.  Two draws may land on the same site index in
    /// different lanes, so double occupancy of a site is possible.
    ///
    /// The draw is a partial Fisher–Yates shuffle consuming exactly one
    /// variate per particle from `src`.
    pub fn random<S: UniformSource>(length: usize, particles: usize, src: &mut S) -> TlResult<Self> {
        let space = length.saturating_mul(2);
        if particles > space {
            return Err(TlError::invalid(
                "particles",
                format!("{particles} particles do not fit in 2 × {length} cells"),
            ));
        }

        let mut pool: Vec<usize> = (0..space).collect();
        for k in 0..particles {
            let j = k + src.index_below(space - k)?;
            pool.swap(k, j);
        }

        let mut lattice = Lattice::empty(length);
        for &pos in &pool[..particles] {
            let cell = if pos < length { Cell::a(pos) } else { Cell::b(pos - length) };
            lattice.set(cell, true);
        }
        Ok(lattice)
    }
}

// ── LatticeBuilder ────────────────────────────────────────────────────────────

/// Fluent builder for an explicit initial state.
///
/// Cells are validated at [`build`](Self::build) time; occupying the same cell
/// twice is harmless.
pub struct LatticeBuilder {
    length: usize,
    cells:  Vec<Cell>,
}

impl LatticeBuilder {
    pub fn new(length: usize) -> Self {
        Self { length, cells: Vec::new() }
    }

    /// Mark one cell occupied.
    pub fn occupy(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Mark every listed site of `lane` occupied.
    pub fn occupy_sites(mut self, lane: Lane, sites: impl IntoIterator<Item = usize>) -> Self {
        self.cells.extend(sites.into_iter().map(|site| Cell::new(lane, site)));
        self
    }

    /// Fill an entire lane.
    pub fn fill(self, lane: Lane) -> Self {
        let length = self.length;
        self.occupy_sites(lane, 0..length)
    }

    pub fn build(self) -> TlResult<Lattice> {
        let mut lattice = Lattice::empty(self.length);
        for cell in self.cells {
            if cell.site >= self.length {
                return Err(TlError::invalid(
                    "occupancy",
                    format!("{cell} is outside a lattice of {} sites", self.length),
                ));
            }
            lattice.set(cell, true);
        }
        Ok(lattice)
    }
}
