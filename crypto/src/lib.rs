//! The crate implements the cryptographic core of the Pedeval library:
//! nothing-up-my-sleeve basis points, Pedersen commitments to degree-2
//! polynomials, the Fiat-Shamir challenge, evaluation openings and the
//! linear-relation check across three committed polynomials.
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

#[macro_use]
extern crate serde_derive;

/// The basic cryptographic primitives.
pub mod basic;
/// Deterministic derivation of curve basis points from a seed.
pub mod basis;
/// Module for error handling
pub mod errors;
/// Evaluation proofs and their verifier.
pub mod evaluation;
/// Fixed-degree polynomials and their commitment vectors.
pub mod polynomial;
/// Linear relations across evaluation commitments.
pub mod relation;
/// Fiat-Shamir challenges over commitment vectors.
pub mod transcript;
