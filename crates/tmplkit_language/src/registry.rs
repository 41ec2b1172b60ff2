//! Named native functions callable from expressions.
//!
//! A [`FunctionRegistry`] is built explicitly and handed to the compiler;
//! there is no global table. Registries from different helper families are
//! combined with [`FunctionRegistry::merge`] or [`FunctionRegistry::join`].

use std::collections::BTreeMap;
use std::fmt;

use tmplkit_foundation::{Arity, Error, Result, Value};

/// Signature shared by every native function.
pub type NativeFnPtr = fn(&[Value]) -> Result<Value>;

/// Native function callable from an expression.
#[derive(Clone, Copy)]
pub struct NativeFn {
    /// Name the function is registered under.
    pub name: &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// Function pointer.
    pub func: NativeFnPtr,
}

impl NativeFn {
    /// Creates a native function descriptor.
    #[must_use]
    pub const fn new(name: &'static str, arity: Arity, func: NativeFnPtr) -> Self {
        Self { name, arity, func }
    }

    /// Calls the function after checking the argument count.
    ///
    /// # Errors
    /// Returns an arity mismatch, or whatever the function itself returns.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        if !self.arity.accepts(args.len()) {
            return Err(Error::arity_mismatch(self.name, self.arity, args.len()));
        }
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({}/{})", self.name, self.arity)
    }
}

/// A table of native functions keyed by name.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<&'static str, NativeFn>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function, returning the one it replaced.
    pub fn register(&mut self, function: NativeFn) -> Option<NativeFn> {
        self.functions.insert(function.name, function)
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, name: &'static str, arity: Arity, func: NativeFnPtr) -> Self {
        self.register(NativeFn::new(name, arity, func));
        self
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NativeFn> {
        self.functions.get(name)
    }

    /// Returns true if a function with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Copies every function from `other` into this registry.
    /// Names already present are overwritten.
    pub fn merge(&mut self, other: &FunctionRegistry) {
        self.functions
            .extend(other.functions.iter().map(|(k, v)| (*k, *v)));
    }

    /// Combines registries in order; later registries win on name clashes.
    #[must_use]
    pub fn join<I>(registries: I) -> Self
    where
        I: IntoIterator<Item = FunctionRegistry>,
    {
        let mut joined = Self::new();
        for registry in registries {
            joined.functions.extend(registry.functions);
        }
        joined
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.functions.keys()).finish()
    }
}
