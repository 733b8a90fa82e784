//! Integration tests for the Minic tokenizer
//!
//! Drives the full path: source text -> scanner -> token sequence ->
//! rendered report.

use minic_lexer::{tokenize, Token, TokenKind};

/// Scans source text and returns the token sequence.
pub fn scan(source: &str) -> Vec<Token> {
    tokenize(source)
}

/// Scans source text and returns the (kind, text) pairs.
pub fn scan_kinds(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

/// Renders the report for source text, one line per token.
pub fn report(source: &str) -> String {
    let mut out = String::new();
    for token in tokenize(source) {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Asserts that the source scans to exactly one token of the given kind
/// spanning the whole input.
pub fn assert_single_token(source: &str, kind: TokenKind) {
    let tokens = scan(source);
    assert_eq!(
        tokens.len(),
        1,
        "expected one token for {:?}, got {:?}",
        source,
        tokens
    );
    assert_eq!(
        tokens[0].kind, kind,
        "wrong kind for {:?}: {:?}",
        source, tokens
    );
    assert_eq!(
        tokens[0].text, source,
        "token does not span {:?}: {:?}",
        source, tokens
    );
}

#[cfg(test)]
mod single_token_tests {
    use super::*;

    #[test]
    fn test_every_keyword() {
        for keyword in [
            "main", "void", "int", "float", "char", "string", "bool", "if", "else", "return",
            "while", "for", "true", "false",
        ] {
            assert_single_token(keyword, TokenKind::Keyword);
        }
    }

    #[test]
    fn test_identifiers_near_keywords() {
        for ident in ["mains", "Int", "iff", "_main", "returns", "whiles"] {
            assert_single_token(ident, TokenKind::Identifier);
        }
    }

    #[test]
    fn test_literals() {
        assert_single_token("123", TokenKind::Int);
        assert_single_token("0x1A", TokenKind::Hex);
        assert_single_token("0b1010", TokenKind::Binary);
        assert_single_token("0o17", TokenKind::Octal);
        assert_single_token("1.5e10", TokenKind::Float);
        assert_single_token("\"ab\"", TokenKind::String);
        assert_single_token("'a'", TokenKind::Char);
        assert_single_token("[12]", TokenKind::Array);
    }

    #[test]
    fn test_malformed_literals() {
        assert_single_token("''", TokenKind::Error);
        assert_single_token("[1a]", TokenKind::Error);
        assert_single_token("1.5e", TokenKind::Error);
        assert_single_token("0x123456789", TokenKind::Error);
    }
}
