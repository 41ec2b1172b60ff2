//! Cross-layer integration tests
//!
//! JSON records in, filters and expressions compiled against the full
//! helper library, results out.

mod filtering;
mod properties;
