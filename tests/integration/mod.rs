//! Integration test suite for taskrank.
//!
//! These tests drive the public API the way a caller would: raw JSON in,
//! ranked report out, with a fixed reference date.
//!
//! # Test Categories
//!
//! - `ranking`: Strategy behaviour across whole batches
//! - `cycles`: Circular dependency reporting
//! - `pipeline`: Input contract, determinism and round-trips

mod fixtures;

mod cycles;
mod pipeline;
