//! Scanner for Minic source text.
//!
//! The scanner pulls one character at a time, keeps a pending-lexeme buffer
//! and a line/column cursor, and dispatches on the active scanning state.
//! Malformed constructs become `Error` tokens and scanning resumes in the
//! default state, so one pass reports every problem it can find.

use crate::classify;
use crate::token::{Token, TokenKind};
use minic_error::Position;

/// Scanning states. `Default` is the initial state and the only one a new
/// lexeme can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Default,
    InString,
    InCharLiteral,
    InLineComment,
    InBlockComment,
    InArrayLiteral,
    InExponent,
}

/// The Minic scanner
pub struct Lexer {
    /// Source characters
    chars: Vec<char>,
    /// Current position (index in chars vector)
    pos: usize,
    /// Current line (1-indexed)
    line: u32,
    /// Column of the most recently consumed character (1-indexed)
    column: u32,
    /// Active scanning state
    state: State,
    /// Characters accumulated since the last emission
    lexeme: String,
    /// Position of the first character of `lexeme`
    lexeme_start: Position,
    /// Set when an array literal contains a non-digit; cleared by `]`
    array_error: bool,
    /// Buffer length recorded when an exponent marker is consumed
    exponent_start: usize,
    /// Emitted tokens
    tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new scanner for the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 0,
            state: State::Default,
            lexeme: String::new(),
            lexeme_start: Position::default(),
            array_error: false,
            exponent_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Scans the entire input and returns the token sequence.
    ///
    /// Input that never produces a token (empty, or whitespace and comments
    /// only) yields a single `EndOfInput` marker at line 0, column 0.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.advance() {
            self.process(ch);
            self.check_line_end();
        }
        // The end of the stream terminates a lexeme like any other boundary.
        self.flush_pending();

        if self.tokens.is_empty() {
            self.tokens
                .push(Token::new(TokenKind::EndOfInput, "", Position::new(0, 0)));
        }
        self.tokens
    }

    /// Returns the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consumes the next character, advancing the column cursor.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        self.column += 1;
        Some(ch)
    }

    fn process(&mut self, ch: char) {
        match self.state {
            State::Default => self.process_default(ch),
            State::InString => self.process_in_string(ch),
            State::InCharLiteral => self.process_in_char_literal(ch),
            // discarded until the line end brings us back to Default
            State::InLineComment => {}
            State::InBlockComment => self.process_in_block_comment(ch),
            State::InArrayLiteral => self.process_in_array_literal(ch),
            State::InExponent => self.process_in_exponent(ch),
        }
    }

    /// Line-end protocol, driven by lookahead so the terminator is attributed
    /// to the line it ends. Unterminated literals surface as `Error` here.
    /// A block comment swallows the newline; an exponent run resumes past it.
    fn check_line_end(&mut self) {
        while self.peek() == Some('\n') {
            match self.state {
                State::Default => self.flush_pending(),
                State::InLineComment => self.state = State::Default,
                State::InString | State::InCharLiteral | State::InArrayLiteral => {
                    self.emit(TokenKind::Error);
                    self.state = State::Default;
                }
                State::InBlockComment => self.push_lexeme('\n'),
                State::InExponent => {}
            }
            self.pos += 1;
            self.line += 1;
            self.column = 0;
        }
    }

    /// Default-state dispatch, in priority order: literal openers, comment
    /// openers, an exponent marker, stand-alone separator/operator
    /// characters, then plain accumulation.
    fn process_default(&mut self, ch: char) {
        match ch {
            '"' => {
                self.flush_pending();
                self.state = State::InString;
                self.push_lexeme(ch);
                return;
            }
            '\'' => {
                self.flush_pending();
                self.state = State::InCharLiteral;
                self.push_lexeme(ch);
                return;
            }
            '[' => {
                self.flush_pending();
                self.state = State::InArrayLiteral;
                self.push_lexeme(ch);
                return;
            }
            '/' if self.peek() == Some('/') => {
                self.flush_pending();
                self.state = State::InLineComment;
                return;
            }
            '/' if self.peek() == Some('*') => {
                self.flush_pending();
                self.state = State::InBlockComment;
                return;
            }
            'e' | 'E' if classify::is_exponent_base(&self.lexeme) => {
                self.exponent_start = self.lexeme.len();
                self.state = State::InExponent;
                self.push_lexeme(ch);
                return;
            }
            _ => {}
        }

        if let Some(kind) = classify::char_kind(ch, self.peek(), &self.lexeme) {
            self.flush_pending();
            if !classify::is_ignored_separator(ch) {
                self.push_lexeme(ch);
                self.emit(kind);
            }
            return;
        }

        self.push_lexeme(ch);
    }

    fn process_in_string(&mut self, ch: char) {
        self.push_lexeme(ch);
        if ch == '"' && self.lexeme.len() > 1 && !self.prev_is_backslash() {
            self.emit(TokenKind::String);
            self.state = State::Default;
        }
    }

    // `''` is an error; otherwise the literal closes when the quote is not
    // escaped, or when the buffer length is even (a doubled backslash reads
    // as "escaped backslash, unescaped quote").
    fn process_in_char_literal(&mut self, ch: char) {
        self.push_lexeme(ch);
        if ch != '\'' {
            return;
        }
        if self.lexeme.len() < 3 {
            self.emit(TokenKind::Error);
            self.state = State::Default;
        } else if !self.prev_is_backslash() || self.lexeme.len() % 2 == 0 {
            self.emit(TokenKind::Char);
            self.state = State::Default;
        }
    }

    fn process_in_block_comment(&mut self, ch: char) {
        self.push_lexeme(ch);
        if self.lexeme.len() > 1 && self.lexeme.ends_with("*/") {
            self.lexeme.clear();
            self.state = State::Default;
        }
    }

    fn process_in_array_literal(&mut self, ch: char) {
        self.push_lexeme(ch);
        if ch == ']' {
            let kind = if self.array_error {
                TokenKind::Error
            } else {
                TokenKind::Array
            };
            self.emit(kind);
            self.array_error = false;
            self.state = State::Default;
        } else if !ch.is_ascii_digit() {
            self.array_error = true;
        }
    }

    // The suffix admits at most a sign and two digits after the marker; the
    // literal ends at the next separator, bracket, operator character, or
    // end of stream.
    fn process_in_exponent(&mut self, ch: char) {
        self.push_lexeme(ch);
        let first = self.lexeme.len() == self.exponent_start + 2;
        let admissible = if first {
            ch == '+' || ch == '-' || ch.is_ascii_digit()
        } else {
            ch.is_ascii_digit()
        };
        if !admissible || self.lexeme.len() > self.exponent_start + 4 {
            self.emit(TokenKind::Error);
            self.state = State::Default;
            return;
        }
        if self.at_exponent_boundary() {
            let kind = if ch.is_ascii_digit() {
                TokenKind::Float
            } else {
                // a sign with nothing after it
                TokenKind::Error
            };
            self.emit(kind);
            self.state = State::Default;
        }
    }

    fn at_exponent_boundary(&self) -> bool {
        match self.peek() {
            None => true,
            Some(next) => {
                classify::is_separator(next)
                    || classify::is_bracket(next)
                    || classify::is_operator_char(next)
            }
        }
    }

    /// True when the character before the one just appended is a backslash.
    fn prev_is_backslash(&self) -> bool {
        let bytes = self.lexeme.as_bytes();
        bytes.len() >= 2 && bytes[bytes.len() - 2] == b'\\'
    }

    /// Appends to the pending lexeme, recording the start position when the
    /// buffer was empty.
    fn push_lexeme(&mut self, ch: char) {
        if self.lexeme.is_empty() {
            self.lexeme_start = Position::new(self.line, self.column);
        }
        self.lexeme.push(ch);
    }

    /// Classifies and emits the pending lexeme, if any.
    fn flush_pending(&mut self) {
        if self.lexeme.is_empty() {
            return;
        }
        let kind = classify::classify(&self.lexeme, self.peek());
        self.emit(kind);
    }

    /// Packages the pending lexeme into a token and clears the buffer.
    fn emit(&mut self, kind: TokenKind) {
        let text = std::mem::take(&mut self.lexeme);
        self.tokens.push(Token::new(kind, text, self.lexeme_start));
    }
}

/// Tokenizes source text and returns the token sequence.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    fn lex(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_identifiers_and_keywords() {
        assert_eq!(
            lex("int count"),
            vec![
                (TokenKind::Keyword, "int".into()),
                (TokenKind::Identifier, "count".into()),
            ]
        );
        assert_eq!(kinds("_private"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("x9_y"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            lex("42 0x1A 0b1010 0o17"),
            vec![
                (TokenKind::Int, "42".into()),
                (TokenKind::Hex, "0x1A".into()),
                (TokenKind::Binary, "0b1010".into()),
                (TokenKind::Octal, "0o17".into()),
            ]
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(lex("3.14"), vec![(TokenKind::Float, "3.14".into())]);
        assert_eq!(lex(".5"), vec![(TokenKind::Float, ".5".into())]);
        assert_eq!(lex("1.5e10"), vec![(TokenKind::Float, "1.5e10".into())]);
        assert_eq!(lex("1.5e+1"), vec![(TokenKind::Float, "1.5e+1".into())]);
        assert_eq!(lex("2E5"), vec![(TokenKind::Float, "2E5".into())]);
    }

    #[test]
    fn test_exponent_errors() {
        // no digits after the marker
        assert_eq!(kinds("1.5e"), vec![TokenKind::Error]);
        // sign but no digits
        assert_eq!(lex("1.5e+ "), vec![(TokenKind::Error, "1.5e+".into())]);
        // more than a sign and two digits
        assert_eq!(kinds("1.5e+100"), vec![TokenKind::Error]);
        assert_eq!(kinds("1.5e1234"), vec![TokenKind::Error]);
    }

    #[test]
    fn test_exponent_terminated_by_operator() {
        assert_eq!(
            kinds("1.5e2+x"),
            vec![TokenKind::Float, TokenKind::Addition, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(lex("\"ab\""), vec![(TokenKind::String, "\"ab\"".into())]);
        // escaped quote stays inside the literal
        assert_eq!(
            lex(r#""a\"b""#),
            vec![(TokenKind::String, r#""a\"b""#.into())]
        );
        assert_eq!(lex("\"\""), vec![(TokenKind::String, "\"\"".into())]);
    }

    #[test]
    fn test_unterminated_string_is_error_at_line_end() {
        assert_eq!(
            lex("\"abc\nx"),
            vec![
                (TokenKind::Error, "\"abc".into()),
                (TokenKind::Identifier, "x".into()),
            ]
        );
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(lex("'a'"), vec![(TokenKind::Char, "'a'".into())]);
        assert_eq!(lex("''"), vec![(TokenKind::Error, "''".into())]);
        // escaped quote: the literal keeps going to the next quote
        assert_eq!(lex(r"'\''"), vec![(TokenKind::Char, r"'\''".into())]);
        // doubled backslash closes on the quote right after it
        assert_eq!(lex(r"'\\'"), vec![(TokenKind::Char, r"'\\'".into())]);
    }

    #[test]
    fn test_array_literals() {
        assert_eq!(lex("[12]"), vec![(TokenKind::Array, "[12]".into())]);
        assert_eq!(lex("[1a]"), vec![(TokenKind::Error, "[1a]".into())]);
        assert_eq!(lex("[]"), vec![(TokenKind::Array, "[]".into())]);
    }

    #[test]
    fn test_unterminated_array_is_error_at_line_end() {
        assert_eq!(
            lex("[12\nx"),
            vec![
                (TokenKind::Error, "[12".into()),
                (TokenKind::Identifier, "x".into()),
            ]
        );
        // the error flag is only cleared by a closing bracket, so a cut-off
        // literal that tripped it bleeds into the next one
        assert_eq!(
            lex("[1a\n[34]"),
            vec![
                (TokenKind::Error, "[1a".into()),
                (TokenKind::Error, "[34]".into()),
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+ - * /"),
            vec![
                TokenKind::Addition,
                TokenKind::Subtraction,
                TokenKind::Multiplication,
                TokenKind::Division,
            ]
        );
        assert_eq!(
            kinds("== != <= >= < >"),
            vec![TokenKind::Comparison; 6]
        );
        assert_eq!(
            kinds("&& || !"),
            vec![
                TokenKind::LogicalOperator,
                TokenKind::LogicalOperator,
                TokenKind::NegationOperator,
            ]
        );
    }

    #[test]
    fn test_assignment_vs_comparison() {
        assert_eq!(
            lex("x = 1"),
            vec![
                (TokenKind::Identifier, "x".into()),
                (TokenKind::Assignment, "=".into()),
                (TokenKind::Int, "1".into()),
            ]
        );
        assert_eq!(
            lex("x == 1"),
            vec![
                (TokenKind::Identifier, "x".into()),
                (TokenKind::Comparison, "==".into()),
                (TokenKind::Int, "1".into()),
            ]
        );
    }

    #[test]
    fn test_separators_and_brackets() {
        assert_eq!(
            lex("f(x);"),
            vec![
                (TokenKind::Identifier, "f".into()),
                (TokenKind::Bracket, "(".into()),
                (TokenKind::Identifier, "x".into()),
                (TokenKind::Bracket, ")".into()),
                (TokenKind::Separator, ";".into()),
            ]
        );
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(
            kinds("x // trailing words\ny"),
            vec![TokenKind::Identifier, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(
            kinds("a /* b c */ d"),
            vec![TokenKind::Identifier, TokenKind::Identifier]
        );
        assert_eq!(
            kinds("a /* spans\ntwo lines */ b"),
            vec![TokenKind::Identifier, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_shortest_block_comment() {
        // the opener's `*` also counts toward the closer
        assert_eq!(kinds("/*/"), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
        assert_eq!(tokens[0].position, Position::new(0, 0));
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(kinds("  \t  \n  "), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn test_comment_only_input() {
        assert_eq!(kinds("// nothing here\n"), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn test_error_recovery_continues() {
        assert_eq!(
            kinds("'' x [1a] y"),
            vec![
                TokenKind::Error,
                TokenKind::Identifier,
                TokenKind::Error,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_unclassifiable_lexeme() {
        assert_eq!(lex("a&b"), vec![(TokenKind::Error, "a&b".into())]);
        assert_eq!(lex("&"), vec![(TokenKind::Error, "&".into())]);
    }

    #[test]
    fn test_positions_single_line() {
        let tokens = tokenize("int x = 42;");
        let positions: Vec<(u32, u32)> = tokens
            .iter()
            .map(|t| (t.position.line, t.position.column))
            .collect();
        assert_eq!(positions, vec![(1, 1), (1, 5), (1, 7), (1, 9), (1, 11)]);
    }

    #[test]
    fn test_positions_across_lines() {
        let tokens = tokenize("int x;\n\nx = 1;");
        let positions: Vec<(u32, u32)> = tokens
            .iter()
            .map(|t| (t.position.line, t.position.column))
            .collect();
        assert_eq!(
            positions,
            vec![(1, 1), (1, 5), (1, 6), (3, 1), (3, 3), (3, 5), (3, 6)]
        );
    }

    #[test]
    fn test_position_points_at_opening_delimiter() {
        let tokens = tokenize("x \"ab\"");
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].position, Position::new(1, 3));
    }

    #[test]
    fn test_position_reslicing_reproduces_text() {
        let source = "int main() {\n    float f = 1.5e10;\n    s = \"hi\";\n}\n";
        for token in tokenize(source) {
            let line = source
                .split('\n')
                .nth(token.position.line as usize - 1)
                .unwrap();
            let start = token.position.column as usize - 1;
            assert_eq!(&line[start..start + token.text.len()], token.text);
        }
    }

    #[test]
    fn test_small_program() {
        let source = "int main() {\n    return 0;\n}\n";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Bracket,
                TokenKind::Bracket,
                TokenKind::Bracket,
                TokenKind::Keyword,
                TokenKind::Int,
                TokenKind::Separator,
                TokenKind::Bracket,
            ]
        );
    }
}
