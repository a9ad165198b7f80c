//! Transition types produced by the proposal scan.

use std::fmt;

use tl_core::{Cell, Lane};

/// The four event kinds a particle can attempt in one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TransitionKind {
    /// `A[i] → A[i+1]`.
    MoveA,
    /// `B[i] → B[i-1]`.
    MoveB,
    /// `A[i] → B[i]`.
    SwitchAToB,
    /// `B[i] → A[i]`.
    SwitchBToA,
}

impl TransitionKind {
    /// The lane the particle starts in; also the lane of the proposal slot.
    #[inline]
    pub fn source_lane(self) -> Lane {
        match self {
            TransitionKind::MoveA | TransitionKind::SwitchAToB => Lane::A,
            TransitionKind::MoveB | TransitionKind::SwitchBToA => Lane::B,
        }
    }

    /// Materialise the transition for a particle at `site`.
    ///
    /// # Panics
    /// Panics in debug mode for `MoveB` at site 0, which the scan never
    /// proposes.
    #[inline]
    pub fn at(self, site: usize) -> Transition {
        let from = Cell::new(self.source_lane(), site);
        let to = match self {
            TransitionKind::MoveA      => Cell::a(site + 1),
            TransitionKind::MoveB      => Cell::b(site - 1),
            TransitionKind::SwitchAToB => Cell::b(site),
            TransitionKind::SwitchBToA => Cell::a(site),
        };
        Transition { from, to, kind: self }
    }
}

/// A single proposed or accepted particle transition.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Transition {
    pub from: Cell,
    pub to:   Cell,
    pub kind: TransitionKind,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
