//! Abstract syntax tree for the expression language.

use std::fmt;

use crate::span::Span;

/// An AST node.
#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    /// `nil`
    Nil(Span),
    /// `true` or `false`
    Bool(bool, Span),
    /// Integer literal like `42`
    Int(i64, Span),
    /// Float literal like `2.5`
    Float(f64, Span),
    /// String literal like `"hello"`
    String(String, Span),
    /// Field path like `.a.b`; empty for `.`
    Field(Vec<String>, Span),
    /// Function call like `add 1 2` or `(gt .x 2)`
    Call {
        /// Function name.
        name: String,
        /// Explicit arguments, in order.
        args: Vec<Ast>,
        /// Source span of the whole call.
        span: Span,
    },
    /// Pipeline like `.title | slug`: each stage after the first is a call
    /// that receives the previous stage's value as its final argument.
    Pipeline(Vec<Ast>, Span),
}

impl Ast {
    /// Returns the source span of this AST node.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Nil(s)
            | Self::Bool(_, s)
            | Self::Int(_, s)
            | Self::Float(_, s)
            | Self::String(_, s)
            | Self::Field(_, s)
            | Self::Pipeline(_, s)
            | Self::Call { span: s, .. } => *s,
        }
    }

    /// Returns true for a function call.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self, Self::Call { .. })
    }

    /// Returns true for a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Nil(_) | Self::Bool(..) | Self::Int(..) | Self::Float(..) | Self::String(..)
        )
    }

    /// Returns the function name if this is a call.
    #[must_use]
    pub fn call_name(&self) -> Option<&str> {
        match self {
            Self::Call { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the integer value if this is an integer literal.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n, _) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string value if this is a string literal.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s, _) => Some(s),
            _ => None,
        }
    }

    /// Calls `f` on each function name in this tree, in source order.
    pub fn for_each_call(&self, f: &mut impl FnMut(&str, Span)) {
        match self {
            Self::Call { name, args, span } => {
                f(name, *span);
                for arg in args {
                    arg.for_each_call(f);
                }
            }
            Self::Pipeline(stages, _) => {
                for stage in stages {
                    stage.for_each_call(f);
                }
            }
            _ => {}
        }
    }
}

/// Prints the node back as expression text, fully parenthesized.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil(_) => f.write_str("nil"),
            Self::Bool(b, _) => write!(f, "{b}"),
            Self::Int(n, _) => write!(f, "{n}"),
            Self::Float(n, _) => write!(f, "{n:?}"),
            Self::String(s, _) => write!(f, "{s:?}"),
            Self::Field(path, _) => {
                if path.is_empty() {
                    f.write_str(".")
                } else {
                    for name in path {
                        write!(f, ".{name}")?;
                    }
                    Ok(())
                }
            }
            Self::Call { name, args, .. } => {
                write!(f, "({name}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
            Self::Pipeline(stages, _) => {
                f.write_str("(")?;
                for (i, stage) in stages.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{stage}")?;
                }
                f.write_str(")")
            }
        }
    }
}
