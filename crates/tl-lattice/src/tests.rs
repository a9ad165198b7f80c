//! Unit tests for tl-lattice.

#[cfg(test)]
mod store {
    use tl_core::{Cell, Lane};

    use crate::Lattice;

    #[test]
    fn empty_has_no_particles() {
        let l = Lattice::empty(8);
        assert_eq!(l.len(), 8);
        assert_eq!(l.total(), 0);
    }

    #[test]
    fn set_and_count_per_lane() {
        let mut l = Lattice::empty(4);
        l.set(Cell::a(1), true);
        l.set(Cell::a(3), true);
        l.set(Cell::b(1), true);
        assert_eq!(l.count(Lane::A), 2);
        assert_eq!(l.count(Lane::B), 1);
        assert!(l.is_occupied(Cell::b(1)));
        assert!(!l.get(Lane::B, 0));
    }

    #[test]
    fn from_bits_round_trips() {
        let l = Lattice::from_bits(&[1, 0, 1], &[0, 0, 1]).unwrap();
        assert_eq!(l.bits(Lane::A), vec![1, 0, 1]);
        assert_eq!(l.bits(Lane::B), vec![0, 0, 1]);
    }

    #[test]
    fn from_bits_rejects_non_binary() {
        assert!(Lattice::from_bits(&[0, 2], &[0, 0]).is_err());
    }

    #[test]
    fn mismatched_lane_lengths_rejected() {
        assert!(Lattice::from_lanes(vec![false; 3], vec![false; 4]).is_err());
    }

    #[test]
    fn display_rows() {
        let l = Lattice::from_bits(&[1, 0, 0], &[0, 1, 1]).unwrap();
        assert_eq!(l.to_string(), "A: #..\nB: .##");
    }
}

#[cfg(test)]
mod builder {
    use tl_core::{Cell, Lane};

    use crate::LatticeBuilder;

    #[test]
    fn same_site_both_lanes() {
        let l = LatticeBuilder::new(3)
            .occupy(Cell::a(2))
            .occupy(Cell::b(2))
            .build()
            .unwrap();
        assert!(l.get(Lane::A, 2) && l.get(Lane::B, 2));
        assert_eq!(l.total(), 2);
    }

    #[test]
    fn fill_lane() {
        let l = LatticeBuilder::new(6).fill(Lane::B).build().unwrap();
        assert_eq!(l.count(Lane::B), 6);
        assert_eq!(l.count(Lane::A), 0);
    }

    #[test]
    fn out_of_range_cell_rejected() {
        assert!(LatticeBuilder::new(3).occupy(Cell::a(3)).build().is_err());
    }

    #[test]
    fn duplicate_cells_harmless() {
        let l = LatticeBuilder::new(3)
            .occupy_sites(Lane::A, [1, 1, 1])
            .build()
            .unwrap();
        assert_eq!(l.total(), 1);
    }
}

#[cfg(test)]
mod random {
    use proptest::prelude::*;
    use tl_core::{Lane, ReplaySource, SimRng, TlError};

    use crate::Lattice;

    #[test]
    fn places_exact_count() {
        let mut rng = SimRng::new(42);
        let l = Lattice::random(500, 250, &mut rng).unwrap();
        assert_eq!(l.total(), 250);
    }

    #[test]
    fn full_capacity_fills_both_lanes() {
        let mut rng = SimRng::new(1);
        let l = Lattice::random(7, 14, &mut rng).unwrap();
        assert_eq!(l.count(Lane::A), 7);
        assert_eq!(l.count(Lane::B), 7);
    }

    #[test]
    fn over_capacity_rejected() {
        let mut rng = SimRng::new(1);
        assert!(Lattice::random(3, 7, &mut rng).is_err());
    }

    #[test]
    fn consumes_one_variate_per_particle() {
        let mut src = ReplaySource::new(vec![0.0; 3]).unwrap();
        Lattice::random(4, 3, &mut src).unwrap();
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn scripted_draws_map_to_lanes() {
        // Space 0..6 for L = 3.  u = 0.99 on the full pool picks index 5
        // (= B[2]); u = 0.0 on the remaining pool keeps index 1 (= A[1]).
        let mut src = ReplaySource::new(vec![0.99, 0.0]).unwrap();
        let l = Lattice::random(3, 2, &mut src).unwrap();
        assert_eq!(l.bits(Lane::A), vec![0, 1, 0]);
        assert_eq!(l.bits(Lane::B), vec![0, 0, 1]);
    }

    #[test]
    fn short_stream_reports_exhaustion() {
        let mut src = ReplaySource::new(vec![0.5]).unwrap();
        assert_eq!(
            Lattice::random(4, 2, &mut src),
            Err(TlError::ExhaustedRandomness { consumed: 1 }),
        );
    }

    #[test]
    fn double_occupancy_occurs() {
        // With half the combined space filled, some site index is almost
        // surely held in both lanes at once.
        let mut rng = SimRng::new(5);
        let l = Lattice::random(100, 100, &mut rng).unwrap();
        let doubles = (0..100).filter(|&i| l.get(Lane::A, i) && l.get(Lane::B, i)).count();
        assert!(doubles > 0);
    }

    proptest! {
        #[test]
        fn random_total_matches_request(len in 1usize..60, frac in 0.0f64..=1.0, seed in any::<u64>()) {
            let n = ((2 * len) as f64 * frac) as usize;
            let mut rng = SimRng::new(seed);
            let l = Lattice::random(len, n, &mut rng).unwrap();
            prop_assert_eq!(l.len(), len);
            prop_assert_eq!(l.total(), n);
        }
    }
}
