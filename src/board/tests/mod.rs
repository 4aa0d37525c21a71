//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Move validation, captures, crowning and terminal positions
//! - `search.rs` - Minimax search behavior
//! - `proptest.rs` - Property-based tests over random playouts
