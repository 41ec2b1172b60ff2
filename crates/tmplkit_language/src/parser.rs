//! Parser for the expression language.
//!
//! The parser converts a stream of tokens into an abstract syntax tree.
//!
//! ```text
//! pipeline := command ('|' command)*
//! command  := identifier operand* | operand
//! operand  := literal | field | identifier | '(' pipeline ')'
//! ```

use tmplkit_foundation::{Error, ErrorKind, Result};

use crate::ast::Ast;
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for expression source text.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
        }
    }

    /// Parses the whole source as one pipeline.
    ///
    /// # Errors
    /// Returns a parse error if the source is empty, malformed, or has
    /// trailing input after the pipeline.
    pub fn parse(&mut self) -> Result<Ast> {
        if self.current.kind == TokenKind::Eof {
            return Err(self.error("missing value for expression"));
        }
        let ast = self.parse_pipeline()?;
        if self.current.kind != TokenKind::Eof {
            return Err(self.unexpected());
        }
        Ok(ast)
    }

    /// Parses `command ('|' command)*`.
    fn parse_pipeline(&mut self) -> Result<Ast> {
        let first = self.parse_command()?;
        if self.current.kind != TokenKind::Pipe {
            return Ok(first);
        }

        let start = first.span();
        let mut stages = vec![first];
        while self.current.kind == TokenKind::Pipe {
            self.advance();
            let stage = self.parse_command()?;
            if !stage.is_call() {
                return Err(self.error_at(
                    stage.span(),
                    &format!("non executable command in pipeline stage {}", stages.len() + 1),
                ));
            }
            stages.push(stage);
        }
        let end = stages.last().map_or(start, Ast::span);
        Ok(Ast::Pipeline(stages, start.to(end)))
    }

    /// Parses one command: a call with its arguments, or a lone operand.
    fn parse_command(&mut self) -> Result<Ast> {
        if let TokenKind::Identifier(name) = &self.current.kind {
            let name = name.clone();
            let start = self.current.span;
            self.advance();

            let mut args = Vec::new();
            while self.current.kind.starts_operand() {
                args.push(self.parse_operand()?);
            }
            let end = args.last().map_or(start, Ast::span);
            return Ok(Ast::Call {
                name,
                args,
                span: start.to(end),
            });
        }

        if !self.current.kind.starts_operand() {
            return Err(match &self.current.kind {
                TokenKind::Error(msg) => self.error(msg),
                TokenKind::Eof => self.error("missing value for command"),
                _ => self.unexpected(),
            });
        }

        let operand = self.parse_operand()?;
        if self.current.kind.starts_operand() {
            return Err(self.error_at(
                operand.span(),
                &format!("can't give argument to non-function {operand}"),
            ));
        }
        Ok(operand)
    }

    /// Parses a single operand.
    fn parse_operand(&mut self) -> Result<Ast> {
        let span = self.current.span;
        let ast = match &self.current.kind {
            TokenKind::Nil => Ast::Nil(span),
            TokenKind::True => Ast::Bool(true, span),
            TokenKind::False => Ast::Bool(false, span),
            TokenKind::Int(n) => Ast::Int(*n, span),
            TokenKind::Float(n) => Ast::Float(*n, span),
            TokenKind::String(s) => Ast::String(s.clone(), span),
            TokenKind::Field(path) => Ast::Field(path.clone(), span),
            TokenKind::Identifier(name) => Ast::Call {
                name: name.clone(),
                args: Vec::new(),
                span,
            },
            TokenKind::LParen => return self.parse_parenthesized(),
            TokenKind::Error(msg) => return Err(self.error(msg)),
            TokenKind::Eof => return Err(self.error("unexpected end of input")),
            TokenKind::RParen | TokenKind::Pipe => return Err(self.unexpected()),
        };
        self.advance();
        Ok(ast)
    }

    /// Parses `'(' pipeline ')'`.
    fn parse_parenthesized(&mut self) -> Result<Ast> {
        let open = self.current.span;
        self.expect(&TokenKind::LParen)?;

        if self.current.kind == TokenKind::RParen {
            return Err(self.error("missing value for parenthesized pipeline"));
        }
        let inner = self.parse_pipeline()?;

        if self.current.kind == TokenKind::Eof {
            return Err(self.error_at(open, "unclosed left paren"));
        }
        self.expect(&TokenKind::RParen)?;
        Ok(inner)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        let matches =
            std::mem::discriminant(&self.current.kind) == std::mem::discriminant(expected);

        if matches {
            self.advance();
            Ok(())
        } else {
            let expected_name = expected.name();
            Err(self.error(&format!(
                "expected {expected_name}, found {}",
                self.current.kind.name()
            )))
        }
    }

    fn unexpected(&self) -> Error {
        match &self.current.kind {
            TokenKind::Error(msg) => self.error(msg),
            kind => self.error(&format!("unexpected {}", kind.name())),
        }
    }

    /// Creates a parse error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    /// Creates a parse error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::new(ErrorKind::Parse {
            message: message.to_string(),
            line: span.line,
            column: span.column,
            context: self.context_at(span),
        })
    }

    /// Gets the source line containing a span.
    fn context_at(&self, span: Span) -> String {
        let at = span.start.min(self.source.len());
        let line_start = self.source[..at].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.source[at..]
            .find('\n')
            .map_or(self.source.len(), |i| at + i);

        self.source[line_start..line_end].to_string()
    }
}

/// Parses expression text into an AST.
///
/// # Errors
/// Returns a parse error if the source is not a single well-formed pipeline.
pub fn parse(source: &str) -> Result<Ast> {
    Parser::new(source).parse()
}
