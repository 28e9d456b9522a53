mod table;

pub use table::{HID_TABLE, MODIFIER_TABLE, NUMPAD_TABLE, SHIFT};

use crate::{
    error::{Error, OutOfDomainSnafu, Table},
    Key,
};
use table::read;

fn check(table: Table, index: usize) -> Result<usize, Error> {
    if index >= table.size() {
        warn!("{} index {} out of range", table, index);
        return OutOfDomainSnafu { table, index }.fail();
    }
    Ok(index)
}

/// HID usage code of the key that types `ascii`.
///
/// Returns the raw table value: `0x00` when no key types the character and
/// `0x7f` for DEL. Use [`key`] to tell those apart from real usages.
pub fn hid_code(ascii: u8) -> Result<u8, Error> {
    let index = check(Table::Hid, ascii as usize)?;
    Ok(read!(HID_TABLE, index))
}

/// Whether Shift must be held together with [`hid_code`] to type `ascii`.
pub fn shift_modifier(ascii: u8) -> Result<bool, Error> {
    modifier(ascii).map(|m| m != 0x00)
}

/// Raw modifier byte for `ascii`, either [`SHIFT`] or `0x00`.
pub fn modifier(ascii: u8) -> Result<u8, Error> {
    let index = check(Table::Modifier, ascii as usize)?;
    Ok(read!(MODIFIER_TABLE, index))
}

/// HID usage code of the numeric keypad key for `digit`.
pub fn numpad_code(digit: u8) -> Result<u8, Error> {
    let index = check(Table::Numpad, digit as usize)?;
    Ok(read!(NUMPAD_TABLE, index))
}

pub fn hid_code_or_none(ascii: u8) -> u8 {
    hid_code(ascii).unwrap_or(0x00)
}

pub fn shift_modifier_or_none(ascii: u8) -> bool {
    shift_modifier(ascii).unwrap_or(false)
}

pub fn numpad_code_or_none(digit: u8) -> u8 {
    numpad_code(digit).unwrap_or(0x00)
}

/// Typed view of [`hid_code`]. `Ok(None)` when `ascii` has no key.
pub fn key(ascii: u8) -> Result<Option<Key>, Error> {
    hid_code(ascii).map(Key::from_usage)
}

pub fn numpad_key(digit: u8) -> Result<Key, Error> {
    let usage = numpad_code(digit)?;
    // NUMPAD_TABLE only holds Keypad_Digit* usages.
    Ok(Key::from_usage(usage).unwrap_or(Key::Keypad_Digit0_Insert))
}
