//! Boolean record filters.
//!
//! A filter is an expression evaluated as the condition of
//! `if EXPR then "true" else "false"`: the expression's truthiness is
//! rendered to text and the record is admitted only when that text is
//! `"true"`. Anything the expression evaluates to (a number, a string, a
//! list) therefore works as a condition; see [`Value::is_truthy`].

use tmplkit_foundation::{Result, Value};

use crate::LOG_TARGET;
use crate::config::EvalConfig;
use crate::context::FieldAccessor;
use crate::eval::Expression;
use crate::registry::FunctionRegistry;

/// A compiled, reusable record predicate.
///
/// Holds no per-application state; one filter may be applied to any number
/// of records, from any number of threads.
#[derive(Clone, Debug)]
pub struct Filter {
    expression: Expression,
}

impl Filter {
    /// Compiles a filter expression.
    ///
    /// # Errors
    /// Returns a compile error carrying `source` when the expression is
    /// malformed or names an unknown function.
    pub fn compile(source: &str, registry: &FunctionRegistry) -> Result<Self> {
        Self::compile_with_config(source, registry, EvalConfig::default())
    }

    /// Compiles a filter expression with an explicit configuration.
    ///
    /// # Errors
    /// See [`compile`](Self::compile).
    pub fn compile_with_config(
        source: &str,
        registry: &FunctionRegistry,
        config: EvalConfig,
    ) -> Result<Self> {
        let expression = Expression::compile_with_config(source, registry, config)?;
        Ok(Self { expression })
    }

    /// Decides whether `record` passes.
    ///
    /// # Errors
    /// Returns the evaluation error when the expression cannot run against
    /// this record. An error is never reported as `Ok(false)`.
    pub fn apply(&self, record: &dyn FieldAccessor) -> Result<bool> {
        let value = self.expression.evaluate(record)?;
        let rendered = render_condition(&value);
        log::trace!(target: LOG_TARGET, "{} => {value:?} => {rendered}", self.source());
        Ok(rendered == "true")
    }

    /// The text this filter was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        self.expression.source()
    }
}

fn render_condition(value: &Value) -> &'static str {
    if value.is_truthy() { "true" } else { "false" }
}
