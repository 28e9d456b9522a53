//! ASCII to HID keyboard usage tables for a US layout.
//!
//! `HID_TABLE[c]` is the usage of the key that types `c`, `MODIFIER_TABLE[c]`
//! is [`SHIFT`] when that key must be pressed with Shift. Shifted and
//! unshifted characters on the same key share the usage code, e.g. `'2'` and
//! `'@'` are both `0x1f`.
//!
//! On AVR the tables live in program memory and are read with `load_at`.
//!
//! Known legacy values, kept as they are:
//! - `HID_TABLE[0x7f]` (DEL) is `0x7f`, which is not a keyboard usage.
//! - `'\t'` is unmapped.
//! - `'\''` is flagged with Shift (types `"`), `'*'` is not (types `8`).

/// Left Shift bit of the boot keyboard report modifier byte.
pub const SHIFT: u8 = 0x02;

macro_rules! flash_table {
    ($(#[$attr:meta])* $vis:vis static $name:ident: [u8; $len:expr] = $value:expr;) => {
        #[cfg(target_arch = "avr")]
        avr_progmem::progmem! {
            $(#[$attr])*
            $vis static progmem $name: [u8; $len] = $value;
        }

        #[cfg(not(target_arch = "avr"))]
        $(#[$attr])*
        $vis static $name: [u8; $len] = $value;
    };
}

macro_rules! read {
    ($table:ident, $index:expr) => {{
        #[cfg(target_arch = "avr")]
        let value = $table.load_at($index);
        #[cfg(not(target_arch = "avr"))]
        let value = $table[$index];
        value
    }};
}

pub(crate) use read;

flash_table! {
    /// HID usage code by ASCII code, `0x00` for characters without a key.
    pub static HID_TABLE: [u8; 128] = [
        0x00, // 0
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2a, 0x00, 0x28, // 10
        0x00, 0x00, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 20
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x29, 0x00, 0x00, 0x00, // 30
        0x00, 0x2c, 0x1e, 0x34, 0x20, 0x21, 0x22, 0x24, 0x34, 0x26, // 40
        0x27, 0x25, 0x2e, 0x36, 0x2d, 0x37, 0x38, 0x27, 0x1e, 0x1f, // 50
        0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x33, 0x33, 0x36, // 60
        0x2e, 0x37, 0x38, 0x1f, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, // 70
        0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, // 80
        0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, // 90
        0x2f, 0x31, 0x30, 0x23, 0x2d, 0x35, 0x04, 0x05, 0x06, 0x07, // 100
        0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, // 110
        0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, // 120
        0x1c, 0x1d, 0x2f, 0x31, 0x30, 0x35, 0x7f, // 127
    ];
}

flash_table! {
    /// [`SHIFT`] for ASCII codes typed with Shift held, `0x00` otherwise.
    pub static MODIFIER_TABLE: [u8; 128] = [
        0x00, // 0
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 10
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 20
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 30
        0x00, 0x00, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, // 40
        SHIFT, 0x00, SHIFT, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 50
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, SHIFT, 0x00, SHIFT, // 60
        0x00, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, // 70
        SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, // 80
        SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, SHIFT, // 90
        0x00, 0x00, 0x00, SHIFT, SHIFT, 0x00, 0x00, 0x00, 0x00, 0x00, // 100
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 110
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 120
        0x00, 0x00, SHIFT, SHIFT, SHIFT, SHIFT, 0x00, // 127
    ];
}

flash_table! {
    /// Keypad usage code by digit, `NUMPAD_TABLE[0]` is Keypad 0.
    pub static NUMPAD_TABLE: [u8; 10] = [
        0x62, 0x59, 0x5a, 0x5b, 0x5c, 0x5d, 0x5e, 0x5f, 0x60, 0x61,
    ];
}
