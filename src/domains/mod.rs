//! Domains module containing business logic organized by bounded contexts.
//!
//! `schemas` validates untyped tool arguments into typed inputs; `tools`
//! turns those inputs into finance API calls.

pub mod schemas;
pub mod tools;
