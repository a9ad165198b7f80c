//! `tl-lattice` — two-lane occupancy storage for the `rust_tl` simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`store`]     | `Lattice` — one `Vec<bool>` per lane, shared site indices  |
//! | [`builder`]   | `LatticeBuilder` (explicit placement), `Lattice::random`   |
//!
//! The two lanes are independent exclusion lattices: a site may be occupied
//! in lane A and lane B at the same time.  Only within a lane is occupancy
//! exclusive.

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::LatticeBuilder;
pub use store::Lattice;
