//! PositionRecord: the value stored in every table slot.

use core::fmt;

/// Occupancy tag of a record or slot.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Marker {
    /// Never held a record.
    #[default]
    Empty,
    /// Holds a live record.
    Valid,
    /// Held a record that was lazily removed.
    Deleted,
}

impl Marker {
    /// Single-character form used by slot dumps.
    pub fn as_char(self) -> char {
        match self {
            Marker::Empty => ' ',
            Marker::Valid => 'v',
            Marker::Deleted => '-',
        }
    }
}

/// A position keyed by `(prefix, number)`.
///
/// The prefix is a byte-sized token, rendered as an ASCII character
/// (`b'A'` prints as `A`). Equality of two records for table purposes is
/// key equality, see [`PositionRecord::same_key`]; the derived `PartialEq`
/// also compares markers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PositionRecord {
    prefix: u8,
    number: i32,
    marker: Marker,
}

impl PositionRecord {
    pub fn new(prefix: u8, number: i32) -> Self {
        Self {
            prefix,
            number,
            marker: Marker::Empty,
        }
    }

    pub fn with_marker(prefix: u8, number: i32, marker: Marker) -> Self {
        Self {
            prefix,
            number,
            marker,
        }
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }
    pub fn set_prefix(&mut self, prefix: u8) {
        self.prefix = prefix;
    }

    pub fn number(&self) -> i32 {
        self.number
    }
    pub fn set_number(&mut self, number: i32) {
        self.number = number;
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
    pub fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }

    pub fn key(&self) -> (u8, i32) {
        (self.prefix, self.number)
    }

    /// True when both records carry the same `(prefix, number)`, whatever
    /// their markers.
    #[inline]
    pub fn same_key(&self, other: &PositionRecord) -> bool {
        self.prefix == other.prefix && self.number == other.number
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.marker == Marker::Valid
    }
}

/// Renders as `<prefix char><number>`, e.g. `A9`.
impl fmt::Display for PositionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix as char, self.number)
    }
}
