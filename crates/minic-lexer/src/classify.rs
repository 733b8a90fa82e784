//! Lexeme classification rules and the fixed language vocabulary.
//!
//! Classification is an ordered first-match list: two-character operators,
//! keywords, the numeric literal formats, identifiers, then a
//! single-character fallback. The order encodes priority (keywords outrank
//! identifiers even though both match the identifier shape).

use crate::token::TokenKind;

/// The 14 reserved words.
pub const KEYWORDS: [&str; 14] = [
    "main", "void", "int", "float", "char", "string", "bool", "if", "else", "return", "while",
    "for", "true", "false",
];

/// Characters that terminate a lexeme.
pub const SEPARATORS: [char; 6] = [' ', ';', ',', ':', '\t', '\n'];

/// Separators that terminate a lexeme without producing a token of their own.
pub const IGNORED_SEPARATORS: [char; 3] = [' ', '\t', '\n'];

/// Grouping brackets, always one-character tokens. Square brackets are not
/// here: they delimit the array-literal scanning state instead.
pub const BRACKETS: [char; 4] = ['(', ')', '{', '}'];

/// Numeric literals are bounded to under 11 characters including sign and
/// base prefix; identifiers to under 64.
const MAX_NUMBER_LEN: usize = 10;
const MAX_IDENTIFIER_LEN: usize = 63;

pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(&ch)
}

pub fn is_ignored_separator(ch: char) -> bool {
    IGNORED_SEPARATORS.contains(&ch)
}

pub fn is_bracket(ch: char) -> bool {
    BRACKETS.contains(&ch)
}

/// Characters that resolve to an operator token on their own (possibly after
/// pairing with a following `=`). Used to detect the end of an exponent run.
pub fn is_operator_char(ch: char) -> bool {
    matches!(ch, '=' | '<' | '>' | '!' | '+' | '-' | '*' | '/')
}

fn is_keyword(lexeme: &str) -> bool {
    KEYWORDS.contains(&lexeme)
}

fn is_comparison(lexeme: &str) -> bool {
    matches!(lexeme, "==" | "!=" | "<=" | ">=")
}

fn is_logical_operator(lexeme: &str) -> bool {
    matches!(lexeme, "&&" | "||")
}

/// Strips an optional leading sign.
fn unsigned(lexeme: &str) -> &str {
    lexeme.strip_prefix(&['+', '-'][..]).unwrap_or(lexeme)
}

/// `[+-]? 0b [01]+`, under 11 characters total.
fn is_binary(lexeme: &str) -> bool {
    match unsigned(lexeme).strip_prefix("0b") {
        Some(digits) => {
            lexeme.len() <= MAX_NUMBER_LEN
                && !digits.is_empty()
                && digits.bytes().all(|b| b == b'0' || b == b'1')
        }
        None => false,
    }
}

/// `[+-]? 0o [0-7]+`, under 11 characters total.
fn is_octal(lexeme: &str) -> bool {
    match unsigned(lexeme).strip_prefix("0o") {
        Some(digits) => {
            lexeme.len() <= MAX_NUMBER_LEN
                && !digits.is_empty()
                && digits.bytes().all(|b| (b'0'..=b'7').contains(&b))
        }
        None => false,
    }
}

/// `[+-]? 0x [0-9a-fA-F]+`, under 11 characters total.
fn is_hex(lexeme: &str) -> bool {
    match unsigned(lexeme).strip_prefix("0x") {
        Some(digits) => {
            lexeme.len() <= MAX_NUMBER_LEN
                && !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// `[+-]? [0-9]+`, under 11 characters total.
fn is_int(lexeme: &str) -> bool {
    let digits = unsigned(lexeme);
    lexeme.len() <= MAX_NUMBER_LEN
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]? ([0-9]* '.')? [0-9]+` — digits are required after the dot, so a
/// lone `.` or a trailing dot never qualifies.
fn is_float(lexeme: &str) -> bool {
    let body = unsigned(lexeme);
    let (int_part, frac) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => ("", body),
    };
    !frac.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}

/// `[A-Za-z_][A-Za-z0-9_]*`, under 64 characters.
fn is_identifier(lexeme: &str) -> bool {
    if lexeme.len() > MAX_IDENTIFIER_LEN {
        return false;
    }
    let mut bytes = lexeme.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// A buffer an exponent marker may legally follow: a complete float shape
/// (which bare integers also satisfy) or a digit run ending in a bare dot.
pub fn is_exponent_base(lexeme: &str) -> bool {
    if lexeme.is_empty() {
        return false;
    }
    if is_float(lexeme) {
        return true;
    }
    match lexeme.strip_suffix('.') {
        Some(head) => unsigned(head).bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Resolves a character that forms (or terminates) a token on its own.
///
/// `next` is the unconsumed lookahead and `pending` the buffer accumulated so
/// far; both feed the disambiguation of `=`, `<`, `>`, `!` and `/`. Returns
/// `None` for characters that must keep accumulating (letters, digits, the
/// halves of `==`/`&&`/`||`, …).
pub fn char_kind(ch: char, next: Option<char>, pending: &str) -> Option<TokenKind> {
    if is_separator(ch) {
        return Some(TokenKind::Separator);
    }
    if is_bracket(ch) {
        return Some(TokenKind::Bracket);
    }
    match ch {
        '=' if next != Some('=') && !matches!(pending, "=" | "<" | ">" | "!") => {
            Some(TokenKind::Assignment)
        }
        '<' | '>' if next != Some('=') => Some(TokenKind::Comparison),
        '!' if next != Some('=') => Some(TokenKind::NegationOperator),
        '+' => Some(TokenKind::Addition),
        '-' => Some(TokenKind::Subtraction),
        '*' => Some(TokenKind::Multiplication),
        '/' if next != Some('/') && next != Some('*') => Some(TokenKind::Division),
        _ => None,
    }
}

/// Ordered first-match classification of a completed, non-empty lexeme.
///
/// `next` is the lookahead at the moment of emission; the single-character
/// fallback needs it to resolve deferred operators.
pub fn classify(lexeme: &str, next: Option<char>) -> TokenKind {
    if is_comparison(lexeme) {
        return TokenKind::Comparison;
    }
    if is_logical_operator(lexeme) {
        return TokenKind::LogicalOperator;
    }
    if is_keyword(lexeme) {
        return TokenKind::Keyword;
    }
    if is_binary(lexeme) {
        return TokenKind::Binary;
    }
    if is_octal(lexeme) {
        return TokenKind::Octal;
    }
    if is_hex(lexeme) {
        return TokenKind::Hex;
    }
    if is_int(lexeme) {
        return TokenKind::Int;
    }
    if is_float(lexeme) {
        return TokenKind::Float;
    }
    if is_identifier(lexeme) {
        return TokenKind::Identifier;
    }
    if let Some(ch) = single_char(lexeme) {
        if let Some(kind) = char_kind(ch, next, lexeme) {
            return kind;
        }
    }
    TokenKind::Error
}

fn single_char(lexeme: &str) -> Option<char> {
    let mut chars = lexeme.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
