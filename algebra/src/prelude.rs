pub use crate::borrow::Borrow;
pub use crate::errors::AlgebraError;
pub use crate::fmt::Formatter;
pub use crate::iter::Sum;
pub use crate::ops::*;
pub use crate::rand_helper::{test_rng, FailingRng};
pub use crate::serialization::*;
pub use crate::traits::{CurveGroup, Group, PedersenCommitment, Scalar};
pub use crate::utils::*;
pub use crate::{serialize_deserialize, One, UniformRand, Zero};
pub use ark_std::rand::{CryptoRng, Rng, RngCore, SeedableRng};
pub use ark_std::{string::String, vec, vec::Vec};
pub use num_bigint::BigUint;

pub(crate) type Result<T> = core::result::Result<T, AlgebraError>;
