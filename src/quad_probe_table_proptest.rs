#![cfg(test)]

// Property tests for QuadProbeTable kept inside the crate next to the unit
// tests so they can inspect raw slots.

use crate::config::Config;
use crate::quad_probe_table::{InsertError, QuadProbeTable, RemoveError};
use crate::record::{Marker, PositionRecord};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(u8, i32),
    Remove(u8, i32),
    Contains(u8, i32),
}

// Small key space and small tables so collisions, tombstones and probe
// exhaustion all show up often.
fn arb_key() -> impl Strategy<Value = (u8, i32)> {
    (prop_oneof![Just(0u8), Just(b'A'), Just(b'Z')], 0i32..60)
}

fn arb_scenario() -> impl Strategy<Value = (usize, usize, Vec<Op>)> {
    let op = prop_oneof![
        3 => arb_key().prop_map(|(p, n)| Op::Insert(p, n)),
        2 => arb_key().prop_map(|(p, n)| Op::Remove(p, n)),
        2 => arb_key().prop_map(|(p, n)| Op::Contains(p, n)),
    ];
    (1usize..=13, 0usize..=6, proptest::collection::vec(op, 1..80))
}

// Property: the table agrees with a set of live keys.
// Invariants exercised across random operation sequences:
// - Duplicate inserts fail iff the key is live; a successful insert lands on
//   a valid slot holding the key.
// - Probe exhaustion never happens for a live key.
// - Removing a live key succeeds and leaves it absent; removing a dead key
//   never makes anything live.
// - `contains` parity with the model; `len`, `iter` and `load_factor` agree
//   with the model after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_live_set_model((size, max_probes, ops) in arb_scenario()) {
        let mut sut = QuadProbeTable::with_config(
            Config::new().table_size(size).max_probes(max_probes),
        );
        let mut live: HashSet<(u8, i32)> = HashSet::new();

        for op in ops {
            match op {
                Op::Insert(p, n) => {
                    let r = PositionRecord::new(p, n);
                    let already = live.contains(&(p, n));
                    match sut.insert(&r) {
                        Ok(i) => {
                            prop_assert!(!already, "insert must fail on duplicate");
                            let s = sut.slot(i).expect("slot index in range");
                            prop_assert_eq!(s.marker(), Marker::Valid);
                            prop_assert!(s.same_key(&r));
                            live.insert((p, n));
                        }
                        Err(InsertError::DuplicateKey) => {
                            prop_assert!(already, "duplicate error only when key is live");
                        }
                        Err(InsertError::ProbeExhausted { probes }) => {
                            prop_assert!(!already);
                            prop_assert_eq!(probes, max_probes);
                        }
                    }
                }
                Op::Remove(p, n) => {
                    let r = PositionRecord::new(p, n);
                    let was_live = live.remove(&(p, n));
                    match sut.remove(&r) {
                        Ok(i) => {
                            let s = sut.slot(i).expect("slot index in range");
                            prop_assert_eq!(s.marker(), Marker::Deleted);
                            prop_assert!(s.same_key(&r));
                        }
                        Err(RemoveError::NotFound) | Err(RemoveError::AlreadyRemoved) => {
                            prop_assert!(!was_live, "removing a live key must succeed");
                        }
                    }
                    prop_assert!(!sut.contains(&r));
                }
                Op::Contains(p, n) => {
                    let r = PositionRecord::new(p, n);
                    prop_assert_eq!(sut.contains(&r), live.contains(&(p, n)));
                }
            }

            prop_assert_eq!(sut.len(), live.len());
            let seen: HashSet<(u8, i32)> = sut.iter().map(|(_, r)| r.key()).collect();
            prop_assert_eq!(&seen, &live);
            let expected = live.len() as f64 / size as f64;
            prop_assert!((sut.load_factor() - expected).abs() < 1e-12);
        }
    }
}

// Property: every index produced for any key stays inside the table.
proptest! {
    #[test]
    fn prop_probe_indices_in_bounds(prefix in any::<u8>(), number in any::<i32>(), size in 1usize..=64) {
        let mut t = QuadProbeTable::with_size(size);
        let r = PositionRecord::new(prefix, number);
        if let Ok(i) = t.insert(&r) {
            prop_assert!(i < size);
            prop_assert!(t.contains(&r));
        }
    }
}
