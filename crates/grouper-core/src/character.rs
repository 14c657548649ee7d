// Byte character classes
//
// Every predicate takes a dense symbol index rather than a `u8`, so it can be
// handed straight to `TransitionTable::set_transitions_where` for groupers
// whose symbol index is the byte value. Indices above 255 are never in any
// class.

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

#[inline]
fn as_byte(index: usize) -> Option<u8> {
    u8::try_from(index).ok()
}

/// Whitespace in the C locale: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab (0x0B).
pub fn is_space(index: usize) -> bool {
    matches!(as_byte(index), Some(b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r'))
}

/// ASCII decimal digit.
pub fn is_digit(index: usize) -> bool {
    as_byte(index).is_some_and(|b| b.is_ascii_digit())
}

/// Byte that may begin an identifier: ASCII letter or underscore.
pub fn is_symbol_start(index: usize) -> bool {
    as_byte(index).is_some_and(|b| b.is_ascii_alphabetic() || b == b'_')
}

/// Byte that may continue an identifier: ASCII letter, digit or underscore.
pub fn is_symbol_char(index: usize) -> bool {
    as_byte(index).is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Coarse class of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteClass {
    Space,
    Digit,
    SymbolStart,
    Other,
}

/// Classify one byte. Classes are disjoint and checked in declaration order.
pub fn byte_class(byte: u8) -> ByteClass {
    let index = byte as usize;
    if is_space(index) {
        ByteClass::Space
    } else if is_digit(index) {
        ByteClass::Digit
    } else if is_symbol_start(index) {
        ByteClass::SymbolStart
    } else {
        ByteClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_bytes() {
        for b in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert!(is_space(b as usize), "{b:#04x}");
        }
        assert!(!is_space(b'a' as usize));
        assert!(!is_space(0x00));
        assert!(!is_space(0xA0)); // no Latin-1 NBSP in the C locale
    }

    #[test]
    fn digits() {
        assert!(is_digit(b'0' as usize));
        assert!(is_digit(b'9' as usize));
        assert!(!is_digit(b'a' as usize));
        assert!(!is_digit(b'/' as usize));
        assert!(!is_digit(b':' as usize));
    }

    #[test]
    fn symbol_start_and_continue() {
        assert!(is_symbol_start(b'a' as usize));
        assert!(is_symbol_start(b'Z' as usize));
        assert!(is_symbol_start(b'_' as usize));
        assert!(!is_symbol_start(b'1' as usize));
        assert!(!is_symbol_start(b'@' as usize));

        assert!(is_symbol_char(b'1' as usize));
        assert!(is_symbol_char(b'_' as usize));
        assert!(is_symbol_char(b'q' as usize));
        assert!(!is_symbol_char(b'-' as usize));
    }

    #[test]
    fn non_ascii_bytes_are_unclassified() {
        for b in 0x80..=0xFFusize {
            assert!(!is_space(b));
            assert!(!is_digit(b));
            assert!(!is_symbol_char(b));
        }
    }

    #[test]
    fn indices_past_a_byte_are_never_in_a_class() {
        assert!(!is_space(256 + b' ' as usize));
        assert!(!is_digit(256 + b'0' as usize));
        assert!(!is_symbol_start(usize::MAX));
    }

    #[test]
    fn byte_class_is_total() {
        assert_eq!(byte_class(b' '), ByteClass::Space);
        assert_eq!(byte_class(b'7'), ByteClass::Digit);
        assert_eq!(byte_class(b'_'), ByteClass::SymbolStart);
        assert_eq!(byte_class(b'#'), ByteClass::Other);
        assert_eq!(byte_class(0xC3), ByteClass::Other);
    }
}
