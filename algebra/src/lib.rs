//! The algebra layer of the Pedeval library: scalar and group traits, the
//! curve capability interface, and the P-256 backend.
#![deny(unused_import_braces, non_shorthand_field_patterns)]
#![deny(unused_attributes, unused_mut, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::upper_case_acronyms, clippy::op_ref)]

/// Module for error handling
pub mod errors;

/// Module for the prelude
pub mod prelude;

/// Module for test rngs
pub mod rand_helper;

/// Module for the secp256r1 (NIST P-256) curve
pub mod secp256r1;

/// Module for serialization of scalars and group elements
pub mod serialization;

/// Module for traits
pub mod traits;

/// Module for utils
pub mod utils;

pub use ark_std::{borrow, fmt, iter, ops, One, UniformRand, Zero};
