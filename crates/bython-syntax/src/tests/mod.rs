//! Crate-level tests for bython-syntax.

mod behaviour;
