//! quad-probe-table: a fixed-capacity open-addressing table of position
//! records, resolving collisions by quadratic probing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: bounded-size associative storage for `(prefix, number)` keyed
//!   records with O(1) expected-time insert, remove and lookup.
//! - Layers:
//!   - `hashing`: digit-sum primary hash and the `QuadraticProbe` index
//!     sequence `(key + i^2) mod size`, bounded by the probe limit.
//!   - `record`: `PositionRecord`, the stored value, with its three-state
//!     occupancy `Marker`.
//!   - `QuadProbeTable`: the slot array and the insert/remove/lookup rules
//!     built on the probe sequence.
//!
//! Constraints
//! - Single-threaded; all mutation goes through `&mut self`.
//! - Capacity is fixed at construction. There is no resize or rehash; a
//!   saturated probe sequence is reported as `InsertError::ProbeExhausted`.
//! - A probe walk examines at most `min(max_probes + 1, size)` slots.
//! - Table operations never panic; only a zero capacity is rejected at
//!   construction.
//!
//! Deletion
//! - Removal is lazy: the slot keeps its key and is tagged
//!   `Marker::Deleted`, so probe chains running through it stay intact.
//!   Insert reuses any slot that is not `Valid`.
//! - A slot that never held a record (`Marker::Empty`) never matches a key,
//!   so the default contents of unused slots cannot be mistaken for a
//!   caller's `(0, 0)` record.
//! - Re-removing a key succeeds when it is matched on its base slot and
//!   fails with `RemoveError::AlreadyRemoved` when matched on a probed
//!   slot.
//!
//! Base index
//! - The digit-sum hash is not bounded by the table size. The base slot is
//!   `hash mod size`; probed slots are `(hash + i^2) mod size`, which is the
//!   same sequence either way.

mod config;
mod hashing;
mod quad_probe_table;
mod quad_probe_table_proptest;
mod record;

// Public surface
pub use config::{Config, DEFAULT_TABLE_SIZE, MAX_PROBING_COUNT};
pub use hashing::{calculate_hashing, digit_sum, QuadraticProbe};
pub use quad_probe_table::{InsertError, Iter, QuadProbeTable, RemoveError};
pub use record::{Marker, PositionRecord};
