use heapless::Vec;

use crate::{
    ascii::{self, SHIFT},
    error::{BufferOverflowSnafu, Error, NotAsciiSnafu, UnmappedSnafu},
    Key,
};

/// A key and whether it is pressed with Shift, enough to type one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keystroke {
    pub key: Key,
    pub shift: bool,
}

impl Keystroke {
    pub const fn new(key: Key, shift: bool) -> Self {
        Keystroke { key, shift }
    }

    /// `Ok(None)` for ASCII codes that have no key, including DEL.
    pub fn from_ascii(ascii: u8) -> Result<Option<Keystroke>, Error> {
        let key = ascii::key(ascii)?;
        let shift = ascii::shift_modifier(ascii)?;
        Ok(key.map(|key| Keystroke { key, shift }))
    }

    pub fn usage(&self) -> u8 {
        self.key.usage()
    }

    /// Modifier byte to send along with [`Keystroke::usage`].
    pub fn modifier(&self) -> u8 {
        if self.shift {
            SHIFT
        } else {
            0x00
        }
    }

    /// Lowest ASCII code typed by this keystroke, e.g. `\n` rather than `\r`
    /// for Enter.
    pub fn to_ascii(&self) -> Option<u8> {
        (0..=0x7f_u8).find(|c| matches!(Keystroke::from_ascii(*c), Ok(Some(k)) if k == *self))
    }
}

impl TryFrom<char> for Keystroke {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if !ch.is_ascii() {
            return NotAsciiSnafu { ch }.fail();
        }
        let ascii = ch as u8;
        match Keystroke::from_ascii(ascii)? {
            Some(keystroke) => Ok(keystroke),
            None => UnmappedSnafu { ascii }.fail(),
        }
    }
}

/// Translates `text` into one keystroke per character.
pub fn keystrokes<const N: usize>(text: &str) -> Result<Vec<Keystroke, N>, Error> {
    let mut strokes = Vec::new();
    for ch in text.chars() {
        let keystroke = Keystroke::try_from(ch)?;
        if strokes.push(keystroke).is_err() {
            warn!("text does not fit in {} keystrokes", N);
            return BufferOverflowSnafu { capacity: N }.fail();
        }
    }
    debug!("{} keystrokes", strokes.len());
    Ok(strokes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii() {
        assert_eq!(
            Keystroke::from_ascii(b'a'),
            Ok(Some(Keystroke::new(Key::A, false)))
        );
        assert_eq!(
            Keystroke::from_ascii(b'?'),
            Ok(Some(Keystroke::new(Key::Slash_Question, true)))
        );
        assert_eq!(Keystroke::from_ascii(0x00), Ok(None));
        assert_eq!(Keystroke::from_ascii(0x7f), Ok(None));
        assert!(Keystroke::from_ascii(0x80).is_err());
    }

    #[test]
    fn test_usage_and_modifier() {
        let at = Keystroke::try_from('@').unwrap();
        assert_eq!(at.usage(), 0x1f);
        assert_eq!(at.modifier(), SHIFT);
        let two = Keystroke::try_from('2').unwrap();
        assert_eq!(two.usage(), 0x1f);
        assert_eq!(two.modifier(), 0x00);
    }

    #[test]
    fn test_try_from_char_errors() {
        assert_eq!(Keystroke::try_from('é'), Err(Error::NotAscii { ch: 'é' }));
        assert_eq!(
            Keystroke::try_from('\t'),
            Err(Error::Unmapped { ascii: b'\t' })
        );
        assert_eq!(
            Keystroke::try_from('\x7f'),
            Err(Error::Unmapped { ascii: 0x7f })
        );
    }

    #[test]
    fn test_to_ascii() {
        for c in (b'a'..=b'z').chain(b'A'..=b'Z') {
            let keystroke = Keystroke::from_ascii(c).unwrap().unwrap();
            assert_eq!(keystroke.to_ascii(), Some(c));
        }
        assert_eq!(Keystroke::new(Key::Enter, false).to_ascii(), Some(b'\n'));
        assert_eq!(Keystroke::new(Key::Digit2_At, true).to_ascii(), Some(b'@'));
        assert_eq!(Keystroke::new(Key::F1, false).to_ascii(), None);
    }

    #[test]
    fn test_keystrokes() {
        let strokes = keystrokes::<8>("Hi, 2!").unwrap();
        assert_eq!(
            strokes.as_slice(),
            &[
                Keystroke::new(Key::H, true),
                Keystroke::new(Key::I, false),
                Keystroke::new(Key::Comma_LessThan, false),
                Keystroke::new(Key::Space, false),
                Keystroke::new(Key::Digit2_At, false),
                Keystroke::new(Key::Digit1_Exclamation, true),
            ]
        );
        assert_eq!(keystrokes::<4>("").unwrap().len(), 0);
    }

    #[test]
    fn test_keystrokes_errors() {
        assert_eq!(
            keystrokes::<4>("hello"),
            Err(Error::BufferOverflow { capacity: 4 })
        );
        assert_eq!(
            keystrokes::<8>("a\tb"),
            Err(Error::Unmapped { ascii: b'\t' })
        );
        assert_eq!(keystrokes::<8>("ä"), Err(Error::NotAscii { ch: 'ä' }));
    }
}
