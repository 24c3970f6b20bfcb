//! Edge case tests for asnc-lex

#[cfg(test)]
mod tests {
    use crate::{Keyword, LexError, Lexer, LexerOptions, Number, Token};
    use asnc_util::Handler;

    fn lex_all(source: &str) -> Result<Vec<Token>, LexError> {
        let handler = Handler::new();
        Lexer::from_source(source, &handler).tokenize()
    }

    fn number(value: i64, text: &str) -> Token {
        Token::Number(Number {
            value,
            text: text.to_string(),
        })
    }

    // ==================== WORDS ====================

    #[test]
    fn test_edge_single_letter_words() {
        assert_eq!(
            lex_all("a B").unwrap(),
            vec![
                Token::ValueIdentifier("a".into()),
                Token::TypeOrModuleReference("B".into())
            ]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = format!("x{}", "-y".repeat(5000));
        assert_eq!(lex_all(&name).unwrap(), vec![Token::ValueIdentifier(name)]);
    }

    #[test]
    fn test_edge_word_then_comment_needs_space() {
        assert_eq!(
            lex_all("INTEGER -- count").unwrap(),
            vec![Token::Keyword(Keyword::Integer)]
        );
        assert_eq!(
            lex_all("INTEGER-- count"),
            Err(LexError::DoubleHyphen {
                word: "INTEGER--".into()
            })
        );
    }

    #[test]
    fn test_edge_word_then_negative_number() {
        assert_eq!(
            lex_all("a -1").unwrap(),
            vec![Token::ValueIdentifier("a".into()), number(-1, "-1")]
        );
    }

    #[test]
    fn test_edge_digit_after_hyphen_inside_word() {
        assert_eq!(
            lex_all("v-1").unwrap(),
            vec![Token::ValueIdentifier("v-1".into())]
        );
    }

    #[test]
    fn test_edge_all_keywords_in_sequence() {
        let source = Keyword::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let tokens = lex_all(&source).unwrap();
        let expected: Vec<Token> = Keyword::ALL.iter().map(|&k| Token::Keyword(k)).collect();
        assert_eq!(tokens, expected);
    }

    // ==================== NUMBERS ====================

    #[test]
    fn test_edge_zero() {
        assert_eq!(lex_all("0 -0").unwrap(), vec![number(0, "0"), number(0, "-0")]);
    }

    #[test]
    fn test_edge_number_then_word() {
        assert_eq!(
            lex_all("12ab").unwrap(),
            vec![number(12, "12"), Token::ValueIdentifier("ab".into())]
        );
    }

    #[test]
    fn test_edge_exponent_eats_e() {
        assert!(matches!(
            lex_all("1end"),
            Err(LexError::MalformedExponent { .. })
        ));
    }

    #[test]
    fn test_edge_plus_is_not_a_sign() {
        assert_eq!(lex_all("+1"), Err(LexError::UnexpectedChar('+')));
    }

    #[test]
    fn test_edge_range_with_negatives() {
        assert_eq!(
            lex_all("(-5..-1)").unwrap(),
            vec![
                Token::OpenRound,
                number(-5, "-5"),
                Token::RangeSeparator,
                number(-1, "-1"),
                Token::CloseRound,
            ]
        );
    }

    #[test]
    fn test_edge_real_then_dot() {
        match lex_all("1.5.").unwrap().as_slice() {
            [Token::RealNumber(r), Token::Dot] => assert_eq!(r.text, "1.5"),
            other => panic!("unexpected tokens {:?}", other),
        }
    }

    // ==================== COMMENTS ====================

    #[test]
    fn test_edge_comment_between_tokens() {
        assert_eq!(
            lex_all("a/* x */b -- y\nc").unwrap(),
            vec![
                Token::ValueIdentifier("a".into()),
                Token::ValueIdentifier("b".into()),
                Token::ValueIdentifier("c".into()),
            ]
        );
    }

    #[test]
    fn test_edge_line_comment_inside_block() {
        assert_eq!(
            lex_all("/* -- */ x").unwrap(),
            vec![Token::ValueIdentifier("x".into())]
        );
    }

    #[test]
    fn test_edge_block_opener_inside_line_comment() {
        assert_eq!(
            lex_all("-- /*\nx").unwrap(),
            vec![Token::ValueIdentifier("x".into())]
        );
    }

    #[test]
    fn test_edge_lone_slash() {
        assert_eq!(lex_all("/"), Err(LexError::UnexpectedChar('/')));
    }

    #[test]
    fn test_edge_strict_mode_accepts_closed_comments() {
        let handler = Handler::new();
        let options = LexerOptions {
            strict_comments: true,
        };
        let tokens = Lexer::with_options("/* a /* b */ */ x".as_bytes(), &handler, options)
            .tokenize()
            .unwrap();
        assert_eq!(tokens, vec![Token::ValueIdentifier("x".into())]);
        assert!(!handler.has_errors());
    }

    // ==================== ERRORS ====================

    #[test]
    fn test_edge_error_after_tokens_keeps_earlier_tokens() {
        let handler = Handler::new();
        let mut lexer = Lexer::from_source("A ::= B $", &handler);
        let mut seen = Vec::new();
        for item in &mut lexer {
            match item {
                Ok(token) => seen.push(token),
                Err(err) => {
                    assert_eq!(err, LexError::UnexpectedChar('$'));
                    break;
                },
            }
        }
        assert_eq!(seen.len(), 3);
        assert_eq!(lexer.next_token(), Err(LexError::UnexpectedChar('$')));
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_crlf_line_numbers() {
        let handler = Handler::new();
        let mut lexer = Lexer::from_source("a\r\nb\r\n#", &handler);
        let _ = lexer.tokenize();
        let span = lexer.token_span();
        assert_eq!(span.line, 3);
        assert_eq!(span.column, 1);
    }
}
