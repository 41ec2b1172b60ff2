//! Compiled expressions.
//!
//! Compilation parses the source and binds every function name against a
//! [`FunctionRegistry`]. The result holds copies of the function pointers it
//! needs, so it no longer borrows the registry and can be shared freely.

use std::sync::Arc;

use tmplkit_foundation::{Error, ErrorKind, Result, Value};

use crate::LOG_TARGET;
use crate::ast::Ast;
use crate::config::{EvalConfig, MissingKey};
use crate::context::{FieldAccessor, dotted_path};
use crate::parser::parse;
use crate::registry::{FunctionRegistry, NativeFn};

/// A bound, ready-to-run expression tree.
#[derive(Clone, Debug)]
enum Node {
    Const(Value),
    Field(Vec<String>),
    Call {
        func: NativeFn,
        args: Vec<Node>,
    },
    /// `head | stage | stage ...`; each stage receives the running value
    /// as its final argument.
    Pipeline {
        head: Box<Node>,
        stages: Vec<(NativeFn, Vec<Node>)>,
    },
}

/// An expression compiled against a function registry.
#[derive(Clone, Debug)]
pub struct Expression {
    source: Arc<str>,
    root: Node,
    config: EvalConfig,
}

impl Expression {
    /// Compiles `source` with the default [`EvalConfig`].
    ///
    /// # Errors
    /// Returns a compile error carrying `source` when the text does not
    /// parse or names a function `registry` does not contain.
    pub fn compile(source: &str, registry: &FunctionRegistry) -> Result<Self> {
        Self::compile_with_config(source, registry, EvalConfig::default())
    }

    /// Compiles `source` with an explicit configuration.
    ///
    /// # Errors
    /// See [`compile`](Self::compile).
    pub fn compile_with_config(
        source: &str,
        registry: &FunctionRegistry,
        config: EvalConfig,
    ) -> Result<Self> {
        log::debug!(target: LOG_TARGET, "compiling {source:?}");
        let ast = parse(source).map_err(|e| Error::compile(source, &e))?;
        let root = bind(&ast, registry).map_err(|e| Error::compile(source, &e))?;
        Ok(Self {
            source: source.into(),
            root,
            config,
        })
    }

    /// The text this expression was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The configuration used on every evaluation.
    #[must_use]
    pub const fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates against a record.
    ///
    /// # Errors
    /// Returns the first evaluation error: a missing field (under
    /// [`MissingKey::Error`]), a field path into a non-map, an arity
    /// mismatch, or a failure raised by a function. The error's context
    /// lists the calls it passed through.
    pub fn evaluate(&self, record: &dyn FieldAccessor) -> Result<Value> {
        self.eval_node(&self.root, record)
    }

    fn eval_node(&self, node: &Node, record: &dyn FieldAccessor) -> Result<Value> {
        match node {
            Node::Const(value) => Ok(value.clone()),
            Node::Field(path) => match record.field(path)? {
                Some(value) => Ok(value),
                None => match self.config.missing_key {
                    MissingKey::Error => Err(Error::missing_field(dotted_path(path))),
                    MissingKey::Zero => Ok(Value::Nil),
                },
            },
            Node::Call { func, args } => self
                .eval_args(args, record)
                .and_then(|args| func.call(&args))
                .map_err(|e| e.with_frame(func.name)),
            Node::Pipeline { head, stages } => {
                let mut value = self.eval_node(head, record)?;
                for (func, args) in stages {
                    value = self
                        .eval_args(args, record)
                        .and_then(|mut args| {
                            args.push(value);
                            func.call(&args)
                        })
                        .map_err(|e| e.with_frame(func.name))?;
                }
                Ok(value)
            }
        }
    }

    fn eval_args(&self, args: &[Node], record: &dyn FieldAccessor) -> Result<Vec<Value>> {
        args.iter()
            .map(|arg| self.eval_node(arg, record))
            .collect()
    }
}

/// Compiles and evaluates `source` once against `record`.
///
/// # Errors
/// Returns compile errors and evaluation errors alike.
pub fn eval(
    source: &str,
    registry: &FunctionRegistry,
    record: &dyn FieldAccessor,
) -> Result<Value> {
    Expression::compile(source, registry)?.evaluate(record)
}

/// Resolves function names and converts literals.
fn bind(ast: &Ast, registry: &FunctionRegistry) -> Result<Node> {
    Ok(match ast {
        Ast::Nil(_) => Node::Const(Value::Nil),
        Ast::Bool(b, _) => Node::Const(Value::Bool(*b)),
        Ast::Int(n, _) => Node::Const(i32::try_from(*n).map_or(Value::Int64(*n), Value::Int32)),
        Ast::Float(n, _) => Node::Const(Value::Float64(*n)),
        Ast::String(s, _) => Node::Const(Value::from(s.as_str())),
        Ast::Field(path, _) => Node::Field(path.clone()),
        Ast::Call { name, args, .. } => Node::Call {
            func: lookup(name, registry)?,
            args: bind_all(args, registry)?,
        },
        Ast::Pipeline(stages, _) => {
            let mut iter = stages.iter();
            let head = match iter.next() {
                Some(first) => bind(first, registry)?,
                None => Node::Const(Value::Nil),
            };
            let stages = iter
                .map(|stage| match stage {
                    Ast::Call { name, args, .. } => {
                        Ok((lookup(name, registry)?, bind_all(args, registry)?))
                    }
                    other => Err(Error::new(ErrorKind::Internal(format!(
                        "pipeline stage {other} is not a call"
                    )))),
                })
                .collect::<Result<Vec<_>>>()?;
            Node::Pipeline {
                head: Box::new(head),
                stages,
            }
        }
    })
}

fn bind_all(args: &[Ast], registry: &FunctionRegistry) -> Result<Vec<Node>> {
    args.iter().map(|arg| bind(arg, registry)).collect()
}

fn lookup(name: &str, registry: &FunctionRegistry) -> Result<NativeFn> {
    registry
        .get(name)
        .copied()
        .ok_or_else(|| Error::undefined_function(name))
}
