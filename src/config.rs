//! Construction parameters for [`QuadProbeTable`](crate::QuadProbeTable).

/// Slot count used by [`QuadProbeTable::new`](crate::QuadProbeTable::new).
///
/// Prime, and larger than the greatest possible digit-sum hash of a
/// `(u8, i32)` key, so base slots never wrap in a default table.
pub const DEFAULT_TABLE_SIZE: usize = 103;

/// Quadratic probe attempts after the base slot before an operation gives
/// up. Shared by insert, remove and lookup.
pub const MAX_PROBING_COUNT: usize = 10;

/// Table configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Number of slots, fixed for the table's lifetime
    pub table_size: usize,

    /// Probe attempts after the base slot
    pub max_probes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            max_probes: MAX_PROBING_COUNT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot count.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    #[must_use]
    pub fn table_size(mut self, n: usize) -> Self {
        assert!(n > 0, "table size must be positive");
        self.table_size = n;
        self
    }

    /// Sets the probe bound. Zero means only the base slot is examined.
    #[must_use]
    pub fn max_probes(mut self, n: usize) -> Self {
        self.max_probes = n;
        self
    }
}
