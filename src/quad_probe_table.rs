//! QuadProbeTable: fixed-capacity open addressing with quadratic probing and
//! lazy deletion.

use crate::config::Config;
use crate::hashing::{calculate_hashing, QuadraticProbe};
use crate::record::{Marker, PositionRecord};
use core::fmt;

#[derive(Debug, Eq, PartialEq)]
pub enum InsertError {
    DuplicateKey,
    /// Every slot on the probe sequence is occupied by other keys.
    ProbeExhausted { probes: usize },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::DuplicateKey => f.write_str("key already present"),
            InsertError::ProbeExhausted { probes } => {
                write!(f, "no free slot within {probes} probes")
            }
        }
    }
}

impl std::error::Error for InsertError {}

#[derive(Debug, Eq, PartialEq)]
pub enum RemoveError {
    NotFound,
    /// Key matched a probed slot that was already tombstoned.
    AlreadyRemoved,
}

impl fmt::Display for RemoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveError::NotFound => f.write_str("key not found within probe bound"),
            RemoveError::AlreadyRemoved => f.write_str("key already removed"),
        }
    }
}

impl std::error::Error for RemoveError {}

pub struct QuadProbeTable {
    slots: Box<[PositionRecord]>, // fixed length, never resized
    max_probes: usize,
}

impl QuadProbeTable {
    /// Table of [`DEFAULT_TABLE_SIZE`](crate::DEFAULT_TABLE_SIZE) slots.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// # Panics
    /// Panics if `size == 0`.
    pub fn with_size(size: usize) -> Self {
        Self::with_config(Config::new().table_size(size))
    }

    /// # Panics
    /// Panics if `config.table_size == 0`.
    pub fn with_config(config: Config) -> Self {
        assert!(config.table_size > 0, "table size must be positive");
        log::debug!(
            "Creating quadratic probe table with {} slots, probe bound {}",
            config.table_size,
            config.max_probes
        );
        Self {
            slots: vec![PositionRecord::default(); config.table_size].into_boxed_slice(),
            max_probes: config.max_probes,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn max_probes(&self) -> usize {
        self.max_probes
    }

    /// Number of live records. Scans every slot.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_valid()).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(PositionRecord::is_valid)
    }

    /// Raw view of a slot, whatever its marker.
    pub fn slot(&self, index: usize) -> Option<&PositionRecord> {
        self.slots.get(index)
    }

    fn probe(&self, record: &PositionRecord) -> QuadraticProbe {
        let key = calculate_hashing(record.prefix(), record.number());
        QuadraticProbe::new(key, self.slots.len(), self.max_probes)
    }

    // A never-used slot holds a default key and must not match anything.
    #[inline]
    fn matches(slot: &PositionRecord, record: &PositionRecord) -> bool {
        slot.marker() != Marker::Empty && slot.same_key(record)
    }

    /// Index of the first slot on `record`'s probe sequence that matches it.
    fn find_match(&self, record: &PositionRecord) -> Option<(usize, usize)> {
        self.probe(record)
            .find(|&(_, i)| Self::matches(&self.slots[i], record))
    }

    /// Stores a copy of `record` marked valid and returns its slot index.
    ///
    /// One walk over the probe sequence. It ends at the first slot whose key
    /// matches, as in [`contains`](Self::contains); if that slot is valid the
    /// key is a duplicate. Otherwise the record goes to the first slot seen
    /// that is not valid.
    pub fn insert(&mut self, record: &PositionRecord) -> Result<usize, InsertError> {
        let mut free = None;
        for (_, i) in self.probe(record) {
            let slot = &self.slots[i];
            if Self::matches(slot, record) {
                if slot.is_valid() {
                    log::trace!("Rejecting duplicate insert of {record} at slot {i}");
                    return Err(InsertError::DuplicateKey);
                }
                free = free.or(Some(i));
                break;
            }
            if free.is_none() && !slot.is_valid() {
                free = Some(i);
            }
        }

        let Some(i) = free else {
            log::trace!(
                "Insert of {record} exhausted {} probes at load {:.2}",
                self.max_probes,
                self.load_factor()
            );
            return Err(InsertError::ProbeExhausted {
                probes: self.max_probes,
            });
        };

        let slot = &mut self.slots[i];
        *slot = *record;
        slot.set_marker(Marker::Valid);
        Ok(i)
    }

    /// Lazily deletes `record` and returns the slot it occupied.
    ///
    /// A match on the base slot always succeeds, even when that slot is
    /// already tombstoned; a match on a probed slot that is already
    /// tombstoned fails with [`RemoveError::AlreadyRemoved`].
    pub fn remove(&mut self, record: &PositionRecord) -> Result<usize, RemoveError> {
        let Some((attempt, i)) = self.find_match(record) else {
            log::trace!("Remove of {record}: not found within {} probes", self.max_probes);
            return Err(RemoveError::NotFound);
        };

        let slot = &mut self.slots[i];
        if attempt > 0 && slot.marker() == Marker::Deleted {
            log::trace!("Remove of {record}: slot {i} already tombstoned");
            return Err(RemoveError::AlreadyRemoved);
        }
        slot.set_marker(Marker::Deleted);
        Ok(i)
    }

    /// True if `record`'s key is live. Probing stops at the first slot whose
    /// key matches, live or not.
    pub fn contains(&self, record: &PositionRecord) -> bool {
        self.find_match(record)
            .map(|(_, i)| self.slots[i].is_valid())
            .unwrap_or(false)
    }

    /// Fraction of slots holding a live record.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.slots.len() as f64
    }

    /// Live records in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.slots.iter().enumerate(),
        }
    }

    /// Writes `[ A9 E7 ] L=0.02`: live records in slot order, then the load
    /// factor to two decimals.
    pub fn write_summary<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("[ ")?;
        for (_, r) in self.iter() {
            write!(out, "{r} ")?;
        }
        write!(out, "] L={:.2}", self.load_factor())
    }

    /// Writes one `[index] prefix number  marker` line per slot that has
    /// ever held a record.
    pub fn write_slots<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for (i, s) in self.slots.iter().enumerate() {
            if s.marker() == Marker::Empty {
                continue;
            }
            writeln!(
                out,
                "[{i}] {} {}  {}",
                s.prefix() as char,
                s.number(),
                s.marker().as_char()
            )?;
        }
        Ok(())
    }
}

impl Default for QuadProbeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuadProbeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_summary(f)
    }
}

impl fmt::Debug for QuadProbeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadProbeTable")
            .field("capacity", &self.capacity())
            .field("max_probes", &self.max_probes)
            .field("len", &self.len())
            .finish()
    }
}

/// Iterator over live records in `QuadProbeTable`.
pub struct Iter<'a> {
    it: core::iter::Enumerate<core::slice::Iter<'a, PositionRecord>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a PositionRecord);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.by_ref().find(|(_, r)| r.is_valid())
    }
}

impl<'a> IntoIterator for &'a QuadProbeTable {
    type Item = (usize, &'a PositionRecord);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
