//! Proposal scan: which particles attempt to move this tick.
//!
//! Each `(lane, site)` source owns one slot.  Trials are evaluated in a fixed
//! order per site and a firing trial simply overwrites its slot, so when both
//! the move and the switch of the same particle fire, the switch (evaluated
//! later) is the one that survives.

use tl_core::{Lane, Rates, TlResult, UniformSource};
use tl_lattice::Lattice;

use crate::{Transition, TransitionKind};

/// The surviving proposal of every `(lane, site)` source for one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalSet {
    /// `slots[site][lane.index()]`.
    slots: Vec<[Option<TransitionKind>; 2]>,
}

impl ProposalSet {
    pub fn empty(length: usize) -> Self {
        Self { slots: vec![[None, None]; length] }
    }

    /// Record `kind` for the particle at `site`, replacing any earlier
    /// proposal from the same source cell.
    #[inline]
    pub fn record(&mut self, site: usize, kind: TransitionKind) {
        self.slots[site][kind.source_lane().index()] = Some(kind);
    }

    /// The surviving proposal from `(lane, site)`, if any.
    pub fn get(&self, lane: Lane, site: usize) -> Option<Transition> {
        self.slots[site][lane.index()].map(|kind| kind.at(site))
    }

    /// Proposals in scan order: ascending site, lane A before lane B.
    ///
    /// This is the priority order used by the conflict resolver.
    pub fn iter(&self) -> impl Iterator<Item = Transition> + '_ {
        self.slots.iter().enumerate().flat_map(|(site, pair)| {
            pair.iter().flatten().map(move |kind| kind.at(site))
        })
    }

    /// Number of surviving proposals.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scan every site of `lattice` and collect the proposals that fire.
///
/// Eligibility reads only `lattice`; nothing is written.  A variate is drawn
/// for a trial only when the trial is eligible.
pub fn propose<S: UniformSource>(
    lattice: &Lattice,
    rates:   &Rates,
    src:     &mut S,
) -> TlResult<ProposalSet> {
    let len = lattice.len();
    let a = lattice.lane(Lane::A);
    let b = lattice.lane(Lane::B);
    let mut set = ProposalSet::empty(len);

    for i in 0..len {
        if i + 1 < len && a[i] && !a[i + 1] && src.trial(rates.move_a)? {
            set.record(i, TransitionKind::MoveA);
        }
        if i > 0 && b[i] && !b[i - 1] && src.trial(rates.move_b)? {
            set.record(i, TransitionKind::MoveB);
        }
        if a[i] && !b[i] && src.trial(rates.a_to_b)? {
            set.record(i, TransitionKind::SwitchAToB);
        }
        if b[i] && !a[i] && src.trial(rates.b_to_a)? {
            set.record(i, TransitionKind::SwitchBToA);
        }
    }

    Ok(set)
}
