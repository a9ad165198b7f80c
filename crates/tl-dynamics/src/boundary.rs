//! Open boundaries at site 0: injection into lane A, ejection from lane B.
//!
//! Both guards read the PRE-tick lattice, and both writes land in the
//! next-state buffer after the interior transitions, overriding them.  In
//! particular ejection clears `B[0]` whenever `B[0]` was occupied before the
//! tick and its trial fires, regardless of what the interior pass wrote there.

use tl_core::{Cell, Lane, Rates, TlResult, UniformSource};
use tl_lattice::Lattice;

/// What the boundary step did this tick.
///
/// `*_fired` records that the guard held and the trial succeeded; `injected`
/// and `ejected` record that the write actually changed the next state.  Only
/// the latter change the particle count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryOutcome {
    pub injection_fired: bool,
    pub ejection_fired:  bool,
    pub injected:        bool,
    pub ejected:         bool,
}

impl BoundaryOutcome {
    /// Net change of the total particle count caused by the boundaries.
    pub fn net_flux(&self) -> i64 {
        self.injected as i64 - self.ejected as i64
    }
}

/// Apply injection and ejection to `next`, guarded by `pre`.
///
/// Draw order: the injection variate is always drawn; the ejection variate is
/// drawn only if `B[0]` was occupied before the tick.
pub fn apply_boundary<S: UniformSource>(
    pre:   &Lattice,
    next:  &mut Lattice,
    rates: &Rates,
    src:   &mut S,
) -> TlResult<BoundaryOutcome> {
    let mut out = BoundaryOutcome::default();
    if pre.is_empty() {
        return Ok(out);
    }

    let entry = Cell::a(0);
    if src.trial(rates.entry)? && !pre.get(Lane::A, 0) {
        out.injection_fired = true;
        out.injected = !next.is_occupied(entry);
        next.set(entry, true);
    }

    let exit = Cell::b(0);
    if pre.get(Lane::B, 0) && src.trial(rates.exit_b)? {
        out.ejection_fired = true;
        out.ejected = next.is_occupied(exit);
        next.set(exit, false);
    }

    Ok(out)
}
