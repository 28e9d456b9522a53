#![cfg_attr(not(test), no_std)]

//! ASCII to USB HID keyboard usage lookup for firmware that types text.
//!
//! ```
//! let usage = asciihid::hid_code(b'@').unwrap();
//! let shift = asciihid::shift_modifier(b'@').unwrap();
//! assert_eq!((usage, shift), (0x1f, true));
//! ```

#[macro_use]
mod fmt;

pub mod ascii;
mod error;
mod key;
mod keystroke;

pub use ascii::{
    hid_code, hid_code_or_none, key, modifier, numpad_code, numpad_code_or_none, numpad_key,
    shift_modifier, shift_modifier_or_none, HID_TABLE, MODIFIER_TABLE, NUMPAD_TABLE, SHIFT,
};
pub use error::{Error, Table};
pub use key::Key;
pub use keystroke::{keystrokes, Keystroke};
