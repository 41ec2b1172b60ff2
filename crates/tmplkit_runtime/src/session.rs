//! Session state for running expressions over records.
//!
//! A session owns the function registry and the evaluation options. Each
//! expression is compiled once and then applied to every record.

use tmplkit_foundation::{Result, Value};
use tmplkit_language::{EvalConfig, Expression, Filter, FunctionRegistry, MissingKey};

use crate::LOG_TARGET;

/// Registry and options shared by every expression a session runs.
#[derive(Clone, Debug)]
pub struct Session {
    registry: FunctionRegistry,
    config: EvalConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with every helper family and strict field access.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(tmplkit_stdlib::all())
    }

    /// Creates a session over a custom registry.
    #[must_use]
    pub fn with_registry(registry: FunctionRegistry) -> Self {
        Self {
            registry,
            config: EvalConfig::default(),
        }
    }

    /// Builder method to set the missing-key policy.
    #[must_use]
    pub fn with_missing_key(mut self, missing_key: MissingKey) -> Self {
        self.config = self.config.with_missing_key(missing_key);
        self
    }

    /// The functions expressions may call.
    #[must_use]
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Mutable access to the registry, for registering extra functions.
    pub fn registry_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.registry
    }

    /// The options every compiled expression uses.
    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Compiles a filter against this session's registry.
    ///
    /// # Errors
    /// Returns a compile error for malformed expressions or unknown functions.
    pub fn compile_filter(&self, source: &str) -> Result<Filter> {
        Filter::compile_with_config(source, &self.registry, self.config.clone())
    }

    /// Compiles an expression against this session's registry.
    ///
    /// # Errors
    /// Returns a compile error for malformed expressions or unknown functions.
    pub fn compile(&self, source: &str) -> Result<Expression> {
        Expression::compile_with_config(source, &self.registry, self.config.clone())
    }

    /// The records that pass `source`, in input order.
    ///
    /// # Errors
    /// Returns the compile error, or the first evaluation error annotated
    /// with the position of the record that raised it.
    pub fn filter<'a>(&self, source: &str, records: &'a [Value]) -> Result<Vec<&'a Value>> {
        let filter = self.compile_filter(source)?;
        let mut matched = Vec::new();
        for (index, record) in records.iter().enumerate() {
            if filter
                .apply(record)
                .map_err(|e| e.with_frame(format!("record {}", index + 1)))?
            {
                matched.push(record);
            }
        }
        log::info!(
            target: LOG_TARGET,
            "{source:?} matched {} of {} records",
            matched.len(),
            records.len()
        );
        Ok(matched)
    }

    /// The value of `source` for each record, in input order.
    ///
    /// # Errors
    /// Returns the compile error, or the first evaluation error annotated
    /// with the position of the record that raised it.
    pub fn eval(&self, source: &str, records: &[Value]) -> Result<Vec<Value>> {
        let expression = self.compile(source)?;
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                expression
                    .evaluate(record)
                    .map_err(|e| e.with_frame(format!("record {}", index + 1)))
            })
            .collect()
    }
}
