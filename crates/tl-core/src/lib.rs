//! `tl-core` — foundational types for the `rust_tl` two-lane lattice simulator.
//!
//! This crate is a dependency of every other `tl-*` crate.  It has no `tl-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`lane`]        | `Lane`, `Cell`                                        |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `Rates`, `SimConfig` and parameter validation         |
//! | [`rng`]         | `UniformSource`, `SimRng`, `ReplaySource`             |
//! | [`error`]       | `TlError`, `TlResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                          |
//! |---------|-----------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `Lane`, `Rates`, `SimConfig`, `Tick` |

pub mod config;
pub mod error;
pub mod lane;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Rates, SimConfig};
pub use error::{TlError, TlResult};
pub use lane::{Cell, Lane};
pub use rng::{ReplaySource, SimRng, UniformSource};
pub use time::Tick;
