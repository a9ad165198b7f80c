//! `TickEngine` — one synchronous update of the whole lattice.

use tl_core::{Rates, TlResult, UniformSource};
use tl_lattice::Lattice;

use crate::boundary::{apply_boundary, BoundaryOutcome};
use crate::proposal::propose;
use crate::resolve::{apply_accepted, ConflictResolver};

/// Per-tick counters returned alongside the next state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Proposals surviving the per-source overwrite.
    pub proposed: usize,
    /// Proposals accepted by the conflict resolver.
    pub accepted: usize,
    pub boundary: BoundaryOutcome,
}

impl TickReport {
    /// Proposals dropped because their destination was already claimed.
    pub fn rejected(&self) -> usize {
        self.proposed - self.accepted
    }
}

/// Computes the next lattice state from the current one.
///
/// The engine owns the rates and the resolver's scratch buffers, nothing
/// else.  [`step`](Self::step) never mutates its input lattice; committing
/// the returned state is the caller's job.
pub struct TickEngine {
    rates:    Rates,
    resolver: ConflictResolver,
}

impl TickEngine {
    pub fn new(rates: Rates, length: usize) -> Self {
        Self { rates, resolver: ConflictResolver::new(length) }
    }

    /// Propose, resolve, apply, then handle the boundaries.
    ///
    /// Fails only if `src` runs out of variates, in which case no state is
    /// returned.
    pub fn step<S: UniformSource>(
        &mut self,
        current: &Lattice,
        src:     &mut S,
    ) -> TlResult<(Lattice, TickReport)> {
        let proposals = propose(current, &self.rates, src)?;
        let accepted = self.resolver.resolve(current.len(), proposals.iter());

        let mut next = current.clone();
        apply_accepted(&accepted, &mut next);
        let boundary = apply_boundary(current, &mut next, &self.rates, src)?;

        let report = TickReport {
            proposed: proposals.len(),
            accepted: accepted.len(),
            boundary,
        };
        Ok((next, report))
    }
}
