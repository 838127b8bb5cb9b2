//! Domain types and business logic for ztest
//!
//! This module contains the core statistical types, following type-driven
//! development principles: every constrained input is validated once at the
//! boundary and carried as a newtype afterwards.

pub mod hypothesis;

pub use hypothesis::*;
