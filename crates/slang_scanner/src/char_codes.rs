//! Character classes used by the scanner.

pub const LINE_FEED: u8 = b'\n';
pub const DOUBLE_QUOTE: u8 = b'"';
pub const DOT: u8 = b'.';

/// Check if a character is skipped as whitespace (not a line break).
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r')
}

/// Check if a byte is a decimal digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Identifiers start with an ASCII letter or underscore.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Identifiers continue with ASCII letters, digits, or underscores.
#[inline]
pub fn is_identifier_part(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_classes_are_ascii_only() {
        assert!(is_identifier_start('_'));
        assert!(is_identifier_start('z'));
        assert!(!is_identifier_start('é'));
        assert!(!is_identifier_start('1'));
        assert!(is_identifier_part(b'1'));
        assert!(!is_identifier_part(b'$'));
    }

    #[test]
    fn test_whitespace() {
        assert!(is_white_space_single_line('\r'));
        assert!(!is_white_space_single_line('\n'));
    }
}
