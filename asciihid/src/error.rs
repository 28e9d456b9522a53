use core::fmt;

use snafu::Snafu;

/// Lookup table an index was rejected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Table {
    Hid,
    Modifier,
    Numpad,
}

impl Table {
    /// Number of entries, i.e. the exclusive upper bound of valid indices.
    pub const fn size(&self) -> usize {
        match self {
            Table::Hid | Table::Modifier => 128,
            Table::Numpad => 10,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Hid => f.write_str("HID usage"),
            Table::Modifier => f.write_str("modifier"),
            Table::Numpad => f.write_str("numpad"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Index {index} is outside the {table} table (0..{})", table.size()))]
    OutOfDomain { table: Table, index: usize },
    #[snafu(display("Character {ch:?} is not 7-bit ASCII"))]
    NotAscii { ch: char },
    #[snafu(display("ASCII code {ascii} has no keystroke"))]
    Unmapped { ascii: u8 },
    #[snafu(display("Keystroke buffer of {capacity} overflowed"))]
    BufferOverflow { capacity: usize },
}
