//! Error types for tmplkit.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Compile-time failures (`Parse`, `Compile`, `UndefinedFunction`) are kept
//! distinct from evaluation failures so a caller can tell "the expression is
//! malformed" from "the expression could not run against this record".

use std::fmt;

use thiserror::Error;

use crate::types::{Arity, Type};

/// The main error type for tmplkit operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Wraps a failure while compiling `source_text`.
    #[must_use]
    pub fn compile(source_text: impl Into<String>, cause: &Error) -> Self {
        Self::new(ErrorKind::Compile {
            source_text: source_text.into(),
            message: cause.to_string(),
        })
    }

    /// Records that this error passed through a call to `frame`.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates an undefined function error.
    #[must_use]
    pub fn undefined_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedFunction(name.into()))
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(function: impl Into<String>, expected: Arity, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            function: function.into(),
            expected,
            actual,
        })
    }

    /// Creates a missing field error for a dotted path.
    #[must_use]
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField(path.into()))
    }

    /// Creates a type mismatch error for a function argument.
    #[must_use]
    pub fn type_mismatch(function: impl Into<String>, expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            function: function.into(),
            expected,
            actual,
        })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            function: function.into(),
            message: message.into(),
        })
    }

    /// Returns true if this error was raised before evaluation began.
    #[must_use]
    pub const fn is_compile_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Parse { .. } | ErrorKind::Compile { .. } | ErrorKind::UndefinedFunction(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed expression text.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// An expression could not be compiled.
    #[error("cannot compile {source_text:?}: {message}")]
    Compile {
        /// The full expression source.
        source_text: String,
        /// The underlying failure.
        message: String,
    },

    /// A call named a function that is not registered.
    #[error("function {0:?} not defined")]
    UndefinedFunction(String),

    /// Wrong number of arguments to a function.
    #[error("wrong number of args for {function}: want {expected}, got {actual}")]
    ArityMismatch {
        /// Function name.
        function: String,
        /// Accepted arity.
        expected: Arity,
        /// Actual number of arguments.
        actual: usize,
    },

    /// A field path does not exist in the record.
    #[error("map has no entry for key {0:?}")]
    MissingField(String),

    /// A field path stepped into a value that is not a map.
    #[error("can't evaluate field {path:?} in type {actual}")]
    NotAMap {
        /// The path being resolved.
        path: String,
        /// The type encountered.
        actual: Type,
    },

    /// A function received an argument of the wrong type.
    #[error("{function}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Function name.
        function: String,
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// A function received an argument it cannot use.
    #[error("{function}: {message}")]
    InvalidArgument {
        /// Function name.
        function: String,
        /// What was wrong with the argument.
        message: String,
    },

    /// A configuration value was not recognized.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A JSON document could not be decoded or encoded.
    #[error("json error: {0}")]
    Json(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Json(err.to_string()))
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source label (file name, record number).
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Function calls active when the error occurred, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
