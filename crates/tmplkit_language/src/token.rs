//! Token types for the expression language.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token types for the expression language.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `|`
    Pipe,

    // Literals
    /// `nil`
    Nil,
    /// `true`
    True,
    /// `false`
    False,
    /// Integer literal like `42` or `-17`
    Int(i64),
    /// Float literal like `3.14` or `1e3`
    Float(f64),
    /// Interpreted `"..."` or raw `` `...` `` string literal
    String(String),

    // Names
    /// Field path like `.a.b`; `.` alone is the empty path
    Field(Vec<String>),
    /// Function name like `add` or `english_title`
    Identifier(String),

    // Meta
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Pipe => "'|'",
            Self::Nil => "nil",
            Self::True => "true",
            Self::False => "false",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Field(_) => "field",
            Self::Identifier(_) => "identifier",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }

    /// Returns true if this token can begin an operand.
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        matches!(
            self,
            Self::LParen
                | Self::Nil
                | Self::True
                | Self::False
                | Self::Int(_)
                | Self::Float(_)
                | Self::String(_)
                | Self::Field(_)
                | Self::Identifier(_)
        )
    }
}
