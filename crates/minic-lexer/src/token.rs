//! Tokens for the Minic language
//!
//! Defines the token classifications the scanner can produce and the token
//! record itself.

use minic_error::Position;
use std::fmt;

/// All token classifications for the Minic language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Name shaped like `[A-Za-z_][A-Za-z0-9_]*` that is not a reserved word
    Identifier,
    /// One of the 14 reserved words
    Keyword,
    /// Decimal integer literal: `42`
    Int,
    /// Floating-point literal: `3.14`, `1.5e10`
    Float,
    /// Binary integer literal: `0b1010`
    Binary,
    /// Octal integer literal: `0o17`
    Octal,
    /// Hexadecimal integer literal: `0x1A`
    Hex,
    /// Character literal: `'a'`
    Char,
    /// String literal: `"hello"`
    String,
    /// Array literal of digits: `[123]`
    Array,
    /// `+`
    Addition,
    /// `-`
    Subtraction,
    /// `*`
    Multiplication,
    /// `/`
    Division,
    /// `==`, `!=`, `<=`, `>=`, and unpaired `<` / `>`
    Comparison,
    /// `=`
    Assignment,
    /// `;`, `,`, `:` (whitespace separators terminate lexemes silently)
    Separator,
    /// `(`, `)`, `{`, `}`
    Bracket,
    /// `&&`, `||`
    LogicalOperator,
    /// `!`
    NegationOperator,
    /// Malformed lexeme; scanning resumes right after it
    Error,
    /// Marker emitted when the input produced no other token
    EndOfInput,
}

impl TokenKind {
    /// Canonical name used in the rendered token report.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::Binary => "Binary",
            TokenKind::Octal => "Octal",
            TokenKind::Hex => "Hex",
            TokenKind::Char => "Char",
            TokenKind::String => "String",
            TokenKind::Array => "Array",
            TokenKind::Addition => "Addition",
            TokenKind::Subtraction => "Subtraction",
            TokenKind::Multiplication => "Multiplication",
            TokenKind::Division => "Division",
            TokenKind::Comparison => "Comparison",
            TokenKind::Assignment => "Assignment",
            TokenKind::Separator => "Separator",
            TokenKind::Bracket => "Bracket",
            TokenKind::LogicalOperator => "LogicalOperator",
            TokenKind::NegationOperator => "NegationOperator",
            TokenKind::Error => "Error",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Returns true if the token marks a malformed lexeme
    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error)
    }

    /// Returns true if the token is a literal
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Float
                | TokenKind::Binary
                | TokenKind::Octal
                | TokenKind::Hex
                | TokenKind::Char
                | TokenKind::String
                | TokenKind::Array
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme with its location in the source code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// The exact text matched, including any delimiting quotes or brackets
    pub text: String,
    /// Position of the first character of the lexeme
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Checks if it is an error token
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    /// Checks if it is the end-of-input marker
    pub fn is_end_of_input(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }
}

/// Report line for a token: `<line> <column> <text> <kind-name>`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.position.line, self.position.column, self.text, self.kind
        )
    }
}
