//! Character classes used by the ASN.1 lexer.

/// Checks if a character is ASN.1 whitespace.
///
/// Only HT, LF, VT, FF, CR and SPACE count; other Unicode spaces do not.
///
/// # Example
///
/// ```
/// use asnc_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace('\u{0B}'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ')
}

/// Checks if a character ends a line comment.
///
/// LF, VT, FF and CR all end a line.
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Checks if a character can start a word (reference, identifier, keyword).
pub fn is_word_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Checks if a character can continue a word.
///
/// # Example
///
/// ```
/// use asnc_lex::unicode::is_identifier_char;
///
/// assert!(is_identifier_char('a'));
/// assert!(is_identifier_char('7'));
/// assert!(is_identifier_char('-'));
/// assert!(!is_identifier_char('_'));
/// assert!(!is_identifier_char(':'));
/// ```
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}
