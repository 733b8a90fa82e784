//! minic-lexer - Lexer/Tokenizer for the Minic language
//!
//! This crate converts Minic source text into a sequence of classified
//! tokens, each annotated with the line and column of its first character.
//!
//! # Features
//!
//! - Finite-state scanning: strings, character literals, line and block
//!   comments, digit-array literals, exponent suffixes
//! - Literals: decimal/binary/octal/hex integers, floats, chars, strings
//! - Single-token error recovery: a malformed construct becomes one `Error`
//!   token and scanning continues
//!
//! # Example
//!
//! ```rust
//! use minic_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x = 42;");
//!
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! ```

pub mod classify;
pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
