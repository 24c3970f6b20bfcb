//! Number literal lexing.
//!
//! This module handles integer and real literals:
//!
//! - Integer: `42`, `-17`
//! - Real with fraction: `3.14`, `-0.5`, `1.`
//! - Real with exponent: `2E10`, `1.5e-3`
//!
//! A real literal keeps its exact spelling next to the `f64` value.

use std::io::BufRead;

use crate::error::{LexError, LexResult};
use crate::token::{Number, Real, Token};
use crate::Lexer;

impl<R: BufRead> Lexer<'_, R> {
    /// Lexes an integer or real literal.
    ///
    /// The cursor is on the first digit; when `negative` is set, the minus
    /// sign in front of it has already been consumed.
    pub(crate) fn lex_number(&mut self, negative: bool) -> LexResult<Token> {
        let mut text = String::new();
        if negative {
            text.push('-');
        }
        let mantissa = self.consume_digits(&mut text)?;

        // Departs from a literal "digits then `.`" rule: a `.` followed by a
        // second `.` is left for the range separator, so `1..10` lexes as
        // NUMBER RANGE_SEPARATOR NUMBER instead of the real `1.` then `.10`.
        let mut fraction = None;
        if self.cursor.peek() == Some('.') && self.cursor.peek_n(2) != ".." {
            self.cursor.discard(1)?;
            text.push('.');
            fraction = Some(self.consume_digits(&mut text)?);
        }

        let mut exponent = None;
        if let Some(marker @ ('e' | 'E')) = self.cursor.peek() {
            self.cursor.discard(1)?;
            text.push(marker);
            let exp_negative = self.cursor.peek() == Some('-');
            if exp_negative {
                self.cursor.discard(1)?;
                text.push('-');
            }
            let digits = self.consume_digits(&mut text)?;
            if digits.is_empty() {
                let found = self.cursor.peek();
                return Err(LexError::MalformedExponent { text, found });
            }
            exponent = Some((exp_negative, digits));
        }

        if fraction.is_none() && exponent.is_none() {
            return match text.parse::<i64>() {
                Ok(value) => Ok(Token::Number(Number { value, text })),
                Err(_) => Err(LexError::NumberOverflow { text }),
            };
        }

        let value = real_value(negative, &mantissa, fraction.as_deref(), exponent);
        Ok(Token::RealNumber(Real { value, text }))
    }

    /// Consumes a run of ASCII digits, appending them to `text`.
    fn consume_digits(&mut self, text: &mut String) -> LexResult<String> {
        let mut digits = String::new();
        while let Some(c) = self.cursor.peek().filter(char::is_ascii_digit) {
            self.cursor.discard(1)?;
            digits.push(c);
        }
        text.push_str(&digits);
        Ok(digits)
    }
}

/// Computes `(mantissa.fraction) * 10^exponent` with a single correctly
/// rounded decimal conversion.
fn real_value(
    negative: bool,
    mantissa: &str,
    fraction: Option<&str>,
    exponent: Option<(bool, String)>,
) -> f64 {
    let fraction = match fraction {
        Some(digits) if !digits.is_empty() => digits,
        _ => "0",
    };
    let (exp_sign, exp_digits) = match &exponent {
        Some((true, digits)) => ("-", digits.as_str()),
        Some((false, digits)) => ("", digits.as_str()),
        None => ("", "0"),
    };
    let sign = if negative { "-" } else { "" };
    let normalized = format!("{sign}{mantissa}.{fraction}e{exp_sign}{exp_digits}");
    // Only digits reach this point, so parsing cannot fail; huge exponents
    // saturate to infinity or zero.
    normalized.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asnc_util::Handler;

    fn lex_one(source: &str) -> LexResult<Token> {
        let handler = Handler::new();
        Lexer::from_source(source, &handler).next_token()
    }

    fn lex_all(source: &str) -> LexResult<Vec<Token>> {
        let handler = Handler::new();
        Lexer::from_source(source, &handler).tokenize()
    }

    fn real(source: &str) -> Real {
        match lex_one(source) {
            Ok(Token::RealNumber(real)) => real,
            other => panic!("expected a real for {:?}, got {:?}", source, other),
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(
            lex_one("42"),
            Ok(Token::Number(Number {
                value: 42,
                text: "42".into()
            }))
        );
    }

    #[test]
    fn test_negative_integer() {
        assert_eq!(
            lex_one("-17"),
            Ok(Token::Number(Number {
                value: -17,
                text: "-17".into()
            }))
        );
    }

    #[test]
    fn test_leading_zeros_kept_in_text() {
        assert_eq!(
            lex_one("007"),
            Ok(Token::Number(Number {
                value: 7,
                text: "007".into()
            }))
        );
    }

    #[test]
    fn test_integer_limits() {
        assert_eq!(
            lex_one("9223372036854775807"),
            Ok(Token::Number(Number {
                value: i64::MAX,
                text: "9223372036854775807".into()
            }))
        );
        assert_eq!(
            lex_one("-9223372036854775808"),
            Ok(Token::Number(Number {
                value: i64::MIN,
                text: "-9223372036854775808".into()
            }))
        );
    }

    #[test]
    fn test_integer_overflow() {
        assert_eq!(
            lex_one("9223372036854775808"),
            Err(LexError::NumberOverflow {
                text: "9223372036854775808".into()
            })
        );
    }

    #[test]
    fn test_real_fraction() {
        let r = real("3.14");
        assert_eq!(r.text, "3.14");
        assert_eq!(r.value, 3.14);
    }

    #[test]
    fn test_real_exponent() {
        let r = real("2E10");
        assert_eq!(r.text, "2E10");
        assert_eq!(r.value, 2e10);

        let r = real("1.5e-3");
        assert_eq!(r.text, "1.5e-3");
        assert_eq!(r.value, 0.0015);
    }

    #[test]
    fn test_real_negative() {
        let r = real("-0.25e1");
        assert_eq!(r.text, "-0.25e1");
        assert_eq!(r.value, -2.5);
    }

    #[test]
    fn test_real_bare_dot() {
        let r = real("5.");
        assert_eq!(r.text, "5.");
        assert_eq!(r.value, 5.0);
    }

    #[test]
    fn test_fraction_with_leading_zeros() {
        assert_eq!(real("1.05").value, 1.05);
        assert_eq!(real("0.001").value, 0.001);
    }

    #[test]
    fn test_huge_exponent_saturates() {
        let r = real("1e999");
        assert!(r.value.is_infinite());
        assert_eq!(r.text, "1e999");
        assert_eq!(real("1e-999").value, 0.0);
    }

    #[test]
    fn test_range_is_not_fraction() {
        assert_eq!(
            lex_all("1..10").unwrap(),
            vec![
                Token::Number(Number {
                    value: 1,
                    text: "1".into()
                }),
                Token::RangeSeparator,
                Token::Number(Number {
                    value: 10,
                    text: "10".into()
                }),
            ]
        );
    }

    #[test]
    fn test_ellipsis_after_number() {
        assert_eq!(
            lex_all("1...").unwrap(),
            vec![
                Token::Number(Number {
                    value: 1,
                    text: "1".into()
                }),
                Token::Ellipsis,
            ]
        );
    }

    #[test]
    fn test_malformed_exponent() {
        assert_eq!(
            lex_one("1e-x"),
            Err(LexError::MalformedExponent {
                text: "1e-".into(),
                found: Some('x')
            })
        );
        assert_eq!(
            lex_one("2E"),
            Err(LexError::MalformedExponent {
                text: "2E".into(),
                found: None
            })
        );
    }

    #[test]
    fn test_malformed_exponent_consumes_marker() {
        let handler = Handler::new();
        let mut lexer = Lexer::from_source("3e+", &handler);
        assert!(lexer.next_token().is_err());
        assert_eq!(lexer.token_span().end, 2);
    }

    #[test]
    fn test_minus_minus_digit_is_comment() {
        assert_eq!(lex_all("--5").unwrap(), vec![]);
    }

    #[test]
    fn test_number_followed_by_word() {
        assert_eq!(
            lex_all("10 x").unwrap(),
            vec![
                Token::Number(Number {
                    value: 10,
                    text: "10".into()
                }),
                Token::ValueIdentifier("x".into()),
            ]
        );
    }

    #[test]
    fn test_real_value_reassembly() {
        assert_eq!(real_value(false, "12", Some("5"), None), 12.5);
        assert_eq!(real_value(true, "1", None, Some((true, "2".into()))), -0.01);
        assert_eq!(real_value(false, "7", Some(""), None), 7.0);
    }
}
