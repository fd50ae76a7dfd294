//! Edge case tests for hilex-lex

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use hilex_util::{GlyphAtlas, FONT_SIZE};
    use proptest::prelude::*;
    use rayon::prelude::*;

    use crate::{is_space, Language, Lexer, Token, TokenKind};

    fn lex_all(source: &[u8]) -> Vec<Token<'_>> {
        Lexer::new(source, None, None).tokenize()
    }

    /// Source with the whitespace the lexer skips removed, given its tokens.
    fn assert_round_trip(source: &[u8], tokens: &[Token<'_>]) {
        let mut covered = 0;
        for token in tokens {
            assert!(token.offset >= covered, "overlapping token {}", token);
            assert!(
                source[covered..token.offset].iter().all(|&b| is_space(b)),
                "dropped non-whitespace before {}",
                token
            );
            assert_eq!(&source[token.span()], token.text);
            covered = token.offset + token.len();
        }
        assert_eq!(covered, source.len());
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let tokens = lex_all(b"");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_end());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(100_000);
        let tokens = lex_all(name.as_bytes());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Symbol);
        assert_eq!(tokens[0].len(), 100_000);
    }

    #[test]
    fn test_edge_non_utf8_bytes() {
        let tokens = lex_all(&[0xFF, b'x', 0xC3]);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Invalid,
                TokenKind::Symbol,
                TokenKind::Invalid,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_edge_multibyte_utf8_is_per_byte() {
        let source = "é".as_bytes();
        let tokens = lex_all(source);
        assert_eq!(tokens.len(), 3);
        assert!(tokens[..2].iter().all(|t| t.kind == TokenKind::Invalid));
    }

    #[test]
    fn test_edge_nul_byte() {
        let tokens = lex_all(b"a\0b");
        assert_eq!(tokens[1].kind, TokenKind::Invalid);
        assert_eq!(tokens[1].text, b"\0");
        assert_eq!(tokens[2].text, b"b");
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let tokens = lex_all(b"// a\r\nx");
        assert_eq!(tokens[0].text, b"// a\r\n");
        assert_eq!(tokens[1].line, 1);
    }

    #[test]
    fn test_edge_directive_mid_line() {
        let tokens = lex_all(b"x # y\nz");
        assert_eq!(tokens[1].kind, TokenKind::PreprocessorDirective);
        assert_eq!(tokens[1].text, b"# y\n");
        assert_eq!(tokens[2].text, b"z");
    }

    #[test]
    fn test_edge_slash_then_comment() {
        let kinds: Vec<_> = lex_all(b"/ //").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Invalid, TokenKind::Comment, TokenKind::End]
        );
    }

    #[test]
    fn test_edge_string_then_directive_on_next_line() {
        let tokens = lex_all(b"\"abc\n#x");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[1].kind, TokenKind::PreprocessorDirective);
        assert_eq!(tokens[1].line, 1);
    }

    #[test]
    fn test_edge_many_blank_lines() {
        let source = format!("{}x", "\n".repeat(1000));
        let tokens = lex_all(source.as_bytes());
        assert_eq!(tokens[0].line, 1000);
        assert_eq!(tokens[0].position.y, -1000.0 * FONT_SIZE);
    }

    #[test]
    fn test_edge_keyword_prefix_and_suffix() {
        let kinds: Vec<_> = lex_all(b"in int inte _int int_")
            .iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Symbol,
                TokenKind::Keyword,
                TokenKind::Symbol,
                TokenKind::Symbol,
                TokenKind::Symbol,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_edge_metrics_fallback_for_high_bytes() {
        let mut advances = vec![1.0; 128];
        advances[b'?' as usize] = 9.0;
        let atlas = GlyphAtlas::from_advances(advances).unwrap();
        let source = [0xE9, b'x'];
        let tokens = Lexer::new(&source, None, Some(&atlas)).tokenize();
        assert_eq!(tokens[1].position.x, 9.0);
    }

    #[test]
    fn test_edge_parallel_lexers_share_metrics() {
        let atlas = Arc::new(GlyphAtlas::monospace(3.0));
        let sources: Vec<&[u8]> = vec![
            b"int main() { return 0; }",
            b"def f():\n    pass",
            b"fun main() {}",
            b"\"unterminated",
        ];
        let paths = vec!["a.c", "b.py", "c.kt", "d.java"];

        let parallel: Vec<Vec<(TokenKind, f32)>> = sources
            .par_iter()
            .zip(paths.par_iter())
            .map(|(source, path)| {
                Lexer::new(source, Some(Path::new(path)), Some(&*atlas))
                    .map(|t| (t.kind, t.position.x))
                    .collect()
            })
            .collect();

        for ((source, path), expected) in sources.iter().zip(paths).zip(parallel) {
            let sequential: Vec<_> = Lexer::new(source, Some(Path::new(path)), Some(&*atlas))
                .map(|t| (t.kind, t.position.x))
                .collect();
            assert_eq!(sequential, expected);
        }
    }

    #[test]
    fn test_edge_language_override_ignores_path() {
        let lexer = Lexer::with_language(b"val", Language::Kotlin, None);
        assert_eq!(lexer.tokenize()[0].kind, TokenKind::Keyword);
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_terminates_with_progress() {
        proptest!(|(input in proptest::collection::vec(any::<u8>(), 0..512))| {
            let mut lexer = Lexer::new(&input, None, None);
            let mut steps = 0;
            loop {
                let before = lexer.position();
                let token = lexer.next_token();
                let after = lexer.position();
                prop_assert!(after >= before);
                if token.is_end() {
                    prop_assert_eq!(after, input.len());
                    break;
                }
                prop_assert!(after > before);
                prop_assert!(!token.text.is_empty());
                steps += 1;
                prop_assert!(steps <= input.len());
            }
        });
    }

    #[test]
    fn test_property_round_trip_minus_whitespace() {
        proptest!(|(input in proptest::collection::vec(any::<u8>(), 0..512))| {
            let tokens = lex_all(&input);
            assert_round_trip(&input, &tokens);
        });
    }

    #[test]
    fn test_property_round_trip_source_like_text() {
        proptest!(|(input in "[ -~\t\n]{0,300}")| {
            let tokens = lex_all(input.as_bytes());
            assert_round_trip(input.as_bytes(), &tokens);
        });
    }

    #[test]
    fn test_property_identifiers_are_single_tokens() {
        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let tokens = lex_all(input.as_bytes());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert!(matches!(tokens[0].kind, TokenKind::Symbol | TokenKind::Keyword));
            prop_assert_eq!(tokens[0].text, input.as_bytes());
        });
    }

    #[test]
    fn test_property_strings_are_single_tokens() {
        proptest!(|(input in "[^\"\n]{0,100}")| {
            let source = format!("\"{}\"", input);
            let tokens = lex_all(source.as_bytes());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::String);
        });
    }

    #[test]
    fn test_property_x_matches_column_for_monospace() {
        let atlas = GlyphAtlas::monospace(2.0);
        proptest!(|(input in "[ -~\n]{0,300}")| {
            let source = input.as_bytes();
            for token in Lexer::new(source, None, Some(&atlas)) {
                let bol = source[..token.offset]
                    .iter()
                    .rposition(|&b| b == b'\n')
                    .map_or(0, |i| i + 1);
                prop_assert_eq!(token.position.x, 2.0 * (token.offset - bol) as f32);
                prop_assert_eq!(token.position.y, -(token.line as f32) * FONT_SIZE);
            }
        });
    }

    #[test]
    fn test_property_whitespace_is_ignored() {
        proptest!(|(spaces in 0..100usize)| {
            let whitespace = " \t\n".repeat(spaces);
            let source = format!("{}int{}", whitespace, whitespace);
            let tokens = lex_all(source.as_bytes());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Keyword);
        });
    }
}
