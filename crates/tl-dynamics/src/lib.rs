//! `tl-dynamics` — the synchronous update engine of the two-lane lattice.
//!
//! # One tick
//!
//! ```text
//! current ──► ① propose   — scan sites 0..L, four Bernoulli trials per site,
//!                           last firing trial per (lane, site) wins its slot
//!             ② resolve   — greedy pass in scan order; first claim on a
//!                           destination wins, later claimants are dropped
//!             ③ apply     — accepted moves written into a copy of `current`
//!             ④ boundary  — injection at A[0], ejection at B[0], guarded by
//!                           the PRE-tick state, overriding interior writes
//!          ──► next
//! ```
//!
//! Every decision reads `current` only; every write goes to `next`.  No site
//! can see another site's update from the same tick.
//!
//! # Draw order
//!
//! Variates are pulled from the [`UniformSource`][tl_core::UniformSource] in
//! exactly this order, which makes a run bit-for-bit reproducible for a given
//! stream:
//!
//! 1. for each site `i` ascending: move-A, move-B, switch A→B, switch B→A;
//!    one variate per *eligible* trial, none for an ineligible one;
//! 2. one variate for injection (always drawn);
//! 3. one variate for ejection (drawn only when `B[0]` was occupied).

pub mod boundary;
pub mod engine;
pub mod proposal;
pub mod resolve;
pub mod transition;


pub use boundary::{apply_boundary, BoundaryOutcome};
pub use engine::{TickEngine, TickReport};
pub use proposal::{propose, ProposalSet};
pub use resolve::{apply_accepted, ConflictResolver};
pub use transition::{Transition, TransitionKind};
