//! Integration tests for Layer 2: Standard library
//!
//! Exercises each helper family through compiled expressions, the way
//! templates call them.

mod families;
mod helpers;
