//! Token definitions for ASN.1 module text.
//!
//! A [`Token`] is one of: a reserved word ([`Keyword`]), a type or module
//! reference, a value identifier, an integer or real literal, a punctuation
//! mark or digraph, or the end-of-input marker [`Token::Eof`].
//!
//! Every token also has a stable integer [`code`](Token::code) used by the
//! yacc-style parser protocol: `0` is end of input, keywords are numbered
//! `1..=80` in reserved-word table order, and the remaining kinds start at
//! `100`.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

macro_rules! keywords {
    ($($variant:ident => $spelling:literal,)*) => {
        /// A reserved word of the ASN.1 notation.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $spelling, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in reserved-word table order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// The exact spelling of the keyword.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $spelling,)*
                }
            }
        }
    };
}

keywords! {
    Absent => "ABSENT",
    Encoded => "ENCODED",
    Integer => "INTEGER",
    RelativeOid => "RELATIVE-OID",
    AbstractSyntax => "ABSTRACT-SYNTAX",
    End => "END",
    Intersection => "INTERSECTION",
    Sequence => "SEQUENCE",
    All => "ALL",
    Enumerated => "ENUMERATED",
    Iso646String => "ISO646String",
    Set => "SET",
    Application => "APPLICATION",
    Except => "EXCEPT",
    Max => "MAX",
    Size => "SIZE",
    Automatic => "AUTOMATIC",
    Explicit => "EXPLICIT",
    Min => "MIN",
    String => "STRING",
    Begin => "BEGIN",
    Exports => "EXPORTS",
    MinusInfinity => "MINUS-INFINITY",
    Syntax => "SYNTAX",
    Bit => "BIT",
    Extensibility => "EXTENSIBILITY",
    Null => "NULL",
    T61String => "T61String",
    BmpString => "BMPString",
    External => "EXTERNAL",
    NumericString => "NumericString",
    Tags => "TAGS",
    Boolean => "BOOLEAN",
    False => "FALSE",
    Object => "OBJECT",
    TeletexString => "TeletexString",
    By => "BY",
    From => "FROM",
    ObjectDescriptor => "ObjectDescriptor",
    True => "TRUE",
    Character => "CHARACTER",
    GeneralizedTime => "GeneralizedTime",
    Octet => "OCTET",
    TypeIdentifier => "TYPE-IDENTIFIER",
    Choice => "CHOICE",
    GeneralString => "GeneralString",
    Of => "OF",
    Union => "UNION",
    Class => "CLASS",
    GraphicString => "GraphicString",
    Optional => "OPTIONAL",
    Unique => "UNIQUE",
    Component => "COMPONENT",
    Ia5String => "IA5String",
    Pattern => "PATTERN",
    Universal => "UNIVERSAL",
    Components => "COMPONENTS",
    Identifier => "IDENTIFIER",
    Pdv => "PDV",
    UniversalString => "UniversalString",
    Constrained => "CONSTRAINED",
    Implicit => "IMPLICIT",
    PlusInfinity => "PLUS-INFINITY",
    UtcTime => "UTCTime",
    Containing => "CONTAINING",
    Implied => "IMPLIED",
    Present => "PRESENT",
    Utf8String => "UTF8String",
    Default => "DEFAULT",
    Imports => "IMPORTS",
    PrintableString => "PrintableString",
    VideotexString => "VideotexString",
    Definitions => "DEFINITIONS",
    Includes => "INCLUDES",
    Private => "PRIVATE",
    VisibleString => "VisibleString",
    Embedded => "EMBEDDED",
    Instance => "INSTANCE",
    Real => "REAL",
    With => "WITH",
}

impl Keyword {
    /// Parser protocol code, `1..=80`.
    pub fn code(self) -> i32 {
        self as i32 + 1
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static RESERVED_WORDS: LazyLock<FxHashMap<&'static str, Keyword>> =
    LazyLock::new(|| Keyword::ALL.iter().map(|&k| (k.as_str(), k)).collect());

/// Looks up a word in the reserved-word table.
///
/// The lookup is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use asnc_lex::token::{keyword_from_ident, Keyword};
///
/// assert_eq!(keyword_from_ident("SEQUENCE"), Some(Keyword::Sequence));
/// assert_eq!(keyword_from_ident("Sequence"), None);
/// assert_eq!(keyword_from_ident("SEQ"), None);
/// ```
pub fn keyword_from_ident(word: &str) -> Option<Keyword> {
    RESERVED_WORDS.get(word).copied()
}

/// An integer literal: its value and its exact spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Number {
    /// The value, sign applied.
    pub value: i64,
    /// The literal as written, e.g. `"-17"`.
    pub text: String,
}

/// A real literal: its nearest `f64` and its exact spelling.
///
/// ASN.1 real values are not limited to binary floating-point precision, so
/// `text` is the authoritative form; `value` is a convenience.
#[derive(Clone, Debug, PartialEq)]
pub struct Real {
    /// The value rounded to the nearest `f64`.
    pub value: f64,
    /// The literal as written, e.g. `"1.5e-3"`.
    pub text: String,
}

/// A lexical token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A reserved word.
    Keyword(Keyword),
    /// An uppercase-leading name that is not reserved.
    TypeOrModuleReference(String),
    /// A lowercase-leading name.
    ValueIdentifier(String),
    /// An integer literal.
    Number(Number),
    /// A literal with a fraction or an exponent.
    RealNumber(Real),

    /// `::=`
    Assignment,
    /// `...`
    Ellipsis,
    /// `..`
    RangeSeparator,
    /// `[[`
    LeftVersionBrackets,
    /// `]]`
    RightVersionBrackets,

    /// `{`
    OpenCurly,
    /// `}`
    CloseCurly,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `(`
    OpenRound,
    /// `)`
    CloseRound,
    /// `[`
    OpenSquare,
    /// `]`
    CloseSquare,
    /// `-`
    Minus,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `"`
    QuotationMark,
    /// `'`
    Apostrophe,
    /// A literal space, for grammar positions where spacing is significant.
    Space,
    /// `;`
    Semicolon,
    /// `@`
    At,
    /// `|`
    Pipe,
    /// `!`
    Exclamation,
    /// `^`
    Caret,

    /// End of input.
    Eof,
}

impl Token {
    /// Parser protocol code of this token's kind.
    ///
    /// ```
    /// use asnc_lex::token::{Keyword, Token};
    ///
    /// assert_eq!(Token::Eof.code(), 0);
    /// assert_eq!(Token::Keyword(Keyword::Absent).code(), 1);
    /// assert_eq!(Token::Assignment.code(), 104);
    /// ```
    pub fn code(&self) -> i32 {
        match self {
            Token::Eof => 0,
            Token::Keyword(k) => k.code(),
            Token::TypeOrModuleReference(_) => 100,
            Token::ValueIdentifier(_) => 101,
            Token::Number(_) => 102,
            Token::RealNumber(_) => 103,
            Token::Assignment => 104,
            Token::Ellipsis => 105,
            Token::RangeSeparator => 106,
            Token::LeftVersionBrackets => 107,
            Token::RightVersionBrackets => 108,
            Token::OpenCurly => 109,
            Token::CloseCurly => 110,
            Token::Less => 111,
            Token::Greater => 112,
            Token::Comma => 113,
            Token::Dot => 114,
            Token::OpenRound => 115,
            Token::CloseRound => 116,
            Token::OpenSquare => 117,
            Token::CloseSquare => 118,
            Token::Minus => 119,
            Token::Colon => 120,
            Token::Equals => 121,
            Token::QuotationMark => 122,
            Token::Apostrophe => 123,
            Token::Space => 124,
            Token::Semicolon => 125,
            Token::At => 126,
            Token::Pipe => 127,
            Token::Exclamation => 128,
            Token::Caret => 129,
        }
    }

    /// Grammar terminal name of this token's kind.
    ///
    /// Keywords are named by their spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Token::Keyword(k) => k.as_str(),
            Token::TypeOrModuleReference(_) => "TYPEORMODULEREFERENCE",
            Token::ValueIdentifier(_) => "VALUEIDENTIFIER",
            Token::Number(_) => "NUMBER",
            Token::RealNumber(_) => "REALNUMBER",
            Token::Assignment => "ASSIGNMENT",
            Token::Ellipsis => "ELLIPSIS",
            Token::RangeSeparator => "RANGE_SEPARATOR",
            Token::LeftVersionBrackets => "LEFT_VERSION_BRACKETS",
            Token::RightVersionBrackets => "RIGHT_VERSION_BRACKETS",
            Token::OpenCurly => "OPEN_CURLY",
            Token::CloseCurly => "CLOSE_CURLY",
            Token::Less => "LESS",
            Token::Greater => "GREATER",
            Token::Comma => "COMMA",
            Token::Dot => "DOT",
            Token::OpenRound => "OPEN_ROUND",
            Token::CloseRound => "CLOSE_ROUND",
            Token::OpenSquare => "OPEN_SQUARE",
            Token::CloseSquare => "CLOSE_SQUARE",
            Token::Minus => "MINUS",
            Token::Colon => "COLON",
            Token::Equals => "EQUALS",
            Token::QuotationMark => "QUOTATION_MARK",
            Token::Apostrophe => "APOSTROPHE",
            Token::Space => "SPACE",
            Token::Semicolon => "SEMICOLON",
            Token::At => "AT",
            Token::Pipe => "PIPE",
            Token::Exclamation => "EXCLAMATION",
            Token::Caret => "CARET",
            Token::Eof => "EOF",
        }
    }

    /// Returns true for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

/// Writes the token as it appears in source.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(k) => f.write_str(k.as_str()),
            Token::TypeOrModuleReference(name) | Token::ValueIdentifier(name) => f.write_str(name),
            Token::Number(n) => f.write_str(&n.text),
            Token::RealNumber(r) => f.write_str(&r.text),
            Token::Eof => f.write_str("<eof>"),
            punct => f.write_str(punctuation_spelling(punct)),
        }
    }
}

fn punctuation_spelling(token: &Token) -> &'static str {
    match token {
        Token::Assignment => "::=",
        Token::Ellipsis => "...",
        Token::RangeSeparator => "..",
        Token::LeftVersionBrackets => "[[",
        Token::RightVersionBrackets => "]]",
        Token::OpenCurly => "{",
        Token::CloseCurly => "}",
        Token::Less => "<",
        Token::Greater => ">",
        Token::Comma => ",",
        Token::Dot => ".",
        Token::OpenRound => "(",
        Token::CloseRound => ")",
        Token::OpenSquare => "[",
        Token::CloseSquare => "]",
        Token::Minus => "-",
        Token::Colon => ":",
        Token::Equals => "=",
        Token::QuotationMark => "\"",
        Token::Apostrophe => "'",
        Token::Space => " ",
        Token::Semicolon => ";",
        Token::At => "@",
        Token::Pipe => "|",
        Token::Exclamation => "!",
        Token::Caret => "^",
        _ => "",
    }
}
