use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

#[test]
fn test_next_raw_token_reports_length() {
    assert_eq!(next_raw_token("float x;", 0), (TokenKind::Identifier, 5));
    assert_eq!(next_raw_token("float x;", 5), (TokenKind::Whitespace, 1));
    assert_eq!(next_raw_token("float x;", 7), (TokenKind::Semicolon, 1));
    assert_eq!(next_raw_token("float x;", 8), (TokenKind::Eof, 0));
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        kinds("if iff uniform $genType"),
        vec![
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::Uniform,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_numeric_literals() {
    assert_eq!(
        kinds("1 0x1F 3u 1.5 .5 2. 1e3 2.5f"),
        vec![
            TokenKind::IntLiteral,
            TokenKind::IntLiteral,
            TokenKind::IntLiteral,
            TokenKind::FloatLiteral,
            TokenKind::FloatLiteral,
            TokenKind::FloatLiteral,
            TokenKind::FloatLiteral,
            TokenKind::FloatLiteral,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_longest_operator_wins() {
    assert_eq!(
        kinds("<<= << <= < ^^ ++"),
        vec![
            TokenKind::ShlEq,
            TokenKind::Shl,
            TokenKind::LtEq,
            TokenKind::Lt,
            TokenKind::CaretCaret,
            TokenKind::PlusPlus,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_logical_assignment_operators() {
    assert_eq!(
        kinds("&&= ^^= ||= && ^^"),
        vec![
            TokenKind::AmpAmpEq,
            TokenKind::CaretCaretEq,
            TokenKind::PipePipeEq,
            TokenKind::AmpAmp,
            TokenKind::CaretCaret,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_trivia() {
    let tokens = lex("a // line\n/* block\n */ b");
    let trivia: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind.is_trivia())
        .map(|t| t.kind)
        .collect();
    assert!(trivia.contains(&TokenKind::LineComment));
    assert!(trivia.contains(&TokenKind::BlockComment));
    assert_eq!(
        kinds("a // line\n/* block\n */ b"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_fused_swizzle_literal_is_two_tokens() {
    let tokens = lex(".000r");
    assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[0].span, Span::new(0, 4));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].span, Span::new(4, 5));
}

#[test]
fn test_directive() {
    assert_eq!(
        kinds("#extension GL_foo : enable"),
        vec![
            TokenKind::Directive,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_invalid_character_advances() {
    let tokens = lex("a @ b");
    assert_eq!(tokens[2].kind, TokenKind::Invalid);
    assert_eq!(tokens[2].span.len(), 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn test_non_ascii_is_invalid() {
    let tokens = lex("é");
    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].span.len(), 2);
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_lex {
    use proptest::prelude::*;
    use shade_ir::TokenKind;

    use crate::lex;

    proptest! {
        #[test]
        fn tokens_tile_the_source(source in "\\PC{0,64}") {
            let tokens = lex(&source);
            let mut position = 0;
            for token in &tokens {
                prop_assert_eq!(token.span.offset(), position);
                position += token.span.len();
            }
            prop_assert_eq!(position as usize, source.len());
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }

        #[test]
        fn only_eof_is_empty(source in "[ -~\\n\\t]{0,64}") {
            for token in lex(&source) {
                prop_assert_eq!(token.span.is_empty(), token.kind == TokenKind::Eof);
            }
        }
    }
}
