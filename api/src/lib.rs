//! The API interfaces of the Pedeval library: session parameters, the
//! three-polynomial relation prover and verifier, and reference data.
#![deny(unused_import_braces, trivial_numeric_casts)]
#![deny(non_shorthand_field_patterns, unused_attributes, unused_mut)]
#![deny(unused_allocation, unused_comparisons, bare_trait_objects, unused_must_use)]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::upper_case_acronyms, clippy::let_and_return)]

#[macro_use]
extern crate serde_derive;

/// Module for error handling
pub mod errors;
/// Reference polynomials.
pub mod parameters;
/// The batch prover and verifier for three polynomials.
pub mod proofs;
/// Module for generating parameters.
pub mod setup;

pub use pedeval_algebra as algebra;
pub use pedeval_crypto as crypto;
