use num_enum::TryFromPrimitive;

/// Keyboard page usages reachable from the ASCII and numpad tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[allow(non_camel_case_types)]
pub enum Key {
    A = 0x04,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit1_Exclamation,
    Digit2_At,
    Digit3_Number,
    Digit4_Dollar,
    Digit5_Percent,
    Digit6_Circumflex,
    Digit7_Ampersand,
    Digit8_Asterisk,
    Digit9_LeftParenthesis,
    Digit0_RightParenthesis,
    Enter,
    Escape,
    Delete, // Backspace
    Tab,
    Space,
    HyphenMinus_LowLine,
    Equal_Plus,
    LeftSquareBracket_LeftCurlyBracket,
    RightSquareBracket_RightCurlyBracket,
    Backslash_VerticalBar,
    NonUs_Number_Tilde,
    Semicolon_Colon,
    Apostrophe_Quotation,
    Grave_Tilde,
    Comma_LessThan,
    Period_GreaterThan,
    Slash_Question,
    CapsLock,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    PrintScreen,
    ScrollLock,
    Pause,
    Insert,
    Home,
    PageUp,
    DeleteForward,
    End,
    PageDown,
    RightArrow,
    LeftArrow,
    DownArrow,
    UpArrow,
    Keypad_NumLock_Clear,
    Keypad_Slash,
    Keypad_Asterisk,
    Keypad_HyphenMinus,
    Keypad_Plus,
    Keypad_Enter,
    Keypad_Digit1_End,
    Keypad_Digit2_DownArrow,
    Keypad_Digit3_PageDown,
    Keypad_Digit4_LeftArrow,
    Keypad_Digit5,
    Keypad_Digit6_RightArrow,
    Keypad_Digit7_Home,
    Keypad_Digit8_UpArrow,
    Keypad_Digit9_PageUp,
    Keypad_Digit0_Insert,
    Keypad_Period_Delete,
}

impl Key {
    /// `None` for `0x00` and for anything outside `0x04..=0x63`, including the
    /// `0x7f` stored for DEL.
    pub fn from_usage(usage: u8) -> Option<Key> {
        Key::try_from_primitive(usage).ok()
    }

    pub fn usage(&self) -> u8 {
        *self as u8
    }

    pub fn is_keypad(&self) -> bool {
        *self as u8 >= Key::Keypad_NumLock_Clear as u8
    }

    pub fn is_letter(&self) -> bool {
        *self as u8 <= Key::Z as u8
    }
}

impl From<Key> for u8 {
    fn from(key: Key) -> Self {
        key.usage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_usage_bounds() {
        assert_eq!(Key::from_usage(0x00), None);
        assert_eq!(Key::from_usage(0x03), None);
        assert_eq!(Key::from_usage(0x04), Some(Key::A));
        assert_eq!(Key::from_usage(0x63), Some(Key::Keypad_Period_Delete));
        assert_eq!(Key::from_usage(0x64), None);
        assert_eq!(Key::from_usage(0x7f), None);
    }

    #[test]
    fn test_discriminants_follow_usage_table() {
        assert_eq!(Key::Z.usage(), 0x1d);
        assert_eq!(Key::Digit1_Exclamation.usage(), 0x1e);
        assert_eq!(Key::Digit0_RightParenthesis.usage(), 0x27);
        assert_eq!(Key::Enter.usage(), 0x28);
        assert_eq!(Key::Delete.usage(), 0x2a);
        assert_eq!(Key::Space.usage(), 0x2c);
        assert_eq!(Key::Slash_Question.usage(), 0x38);
        assert_eq!(Key::F12.usage(), 0x45);
        assert_eq!(Key::UpArrow.usage(), 0x52);
        assert_eq!(Key::Keypad_Digit1_End.usage(), 0x59);
        assert_eq!(Key::Keypad_Digit0_Insert.usage(), 0x62);
    }

    #[test]
    fn test_every_usage_in_range_round_trips() {
        for usage in 0x04..=0x63u8 {
            let key = Key::from_usage(usage).unwrap();
            assert_eq!(u8::from(key), usage);
        }
    }

    #[test]
    fn test_classification() {
        assert!(Key::Q.is_letter());
        assert!(!Key::Q.is_keypad());
        assert!(!Key::Digit5_Percent.is_letter());
        assert!(Key::Keypad_Digit5.is_keypad());
        assert!(Key::Keypad_NumLock_Clear.is_keypad());
        assert!(!Key::UpArrow.is_keypad());
    }
}
