//! Conflict resolution: at most one accepted arrival per destination cell.
//!
//! The policy is a greedy first-claim pass over proposals in the order they
//! are given.  With [`ProposalSet::iter`][crate::ProposalSet::iter] order that
//! means the lowest source site wins a contested destination (at equal sites,
//! the lane-A source).  No backtracking: a losing proposal is dropped for the
//! tick even if the winner's own move frees another cell.

use tl_lattice::Lattice;

use crate::Transition;

/// Reusable claim buffers for the greedy pass.
///
/// Holding the buffers across ticks avoids two allocations per tick on the
/// hot path.
#[derive(Clone, Debug, Default)]
pub struct ConflictResolver {
    /// `claimed[lane][site]`, cleared at the start of each pass.
    claimed: [Vec<bool>; 2],
}

impl ConflictResolver {
    pub fn new(length: usize) -> Self {
        Self { claimed: [vec![false; length], vec![false; length]] }
    }

    /// Accept proposals in order, skipping any whose destination was claimed
    /// by an earlier accepted proposal in this pass.
    ///
    /// # Panics
    /// Panics if a destination site lies outside `length`.
    pub fn resolve<I>(&mut self, length: usize, proposals: I) -> Vec<Transition>
    where
        I: IntoIterator<Item = Transition>,
    {
        for lane in &mut self.claimed {
            lane.clear();
            lane.resize(length, false);
        }

        let mut accepted = Vec::new();
        for t in proposals {
            let slot = &mut self.claimed[t.to.lane.index()][t.to.site];
            if !*slot {
                *slot = true;
                accepted.push(t);
            }
        }
        accepted
    }
}

/// Write accepted transitions into the next-state buffer: vacate each source,
/// occupy each destination.
pub fn apply_accepted(accepted: &[Transition], next: &mut Lattice) {
    for t in accepted {
        next.set(t.from, false);
        next.set(t.to, true);
    }
}
