//! Property-based testing for z-test invariants
//!
//! This module provides generators for valid test inputs and verifies the
//! statistical invariants of the evaluator across them.

pub mod z_test_invariants;
