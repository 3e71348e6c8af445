//! postaddr Verify - address validation and formatting
//!
//! This crate provides:
//! - The [`FieldVerifier`] tree, refined level by level as an address is walked
//! - [`StandardAddressVerifier`], which walks an address and collects problems
//! - [`FormatInterpreter`] for field order and envelope rendering

pub mod format;
pub mod problems;
pub mod standard;
pub mod template;
pub mod verifier;

#[cfg(test)]
mod testing;

pub use format::FormatInterpreter;
pub use problems::AddressProblems;
pub use standard::{
    country_sublevel, default_problem_map, ProblemMap, StandardAddressVerifier,
    VerificationListener,
};
pub use verifier::FieldVerifier;
