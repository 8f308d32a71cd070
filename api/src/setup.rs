use crate::errors::{PedevalError, Result};
use ark_std::{end_timer, start_timer};
use pedeval_algebra::prelude::*;
use pedeval_algebra::secp256r1::SECP256R1G1;
use pedeval_crypto::basic::pedersen_comm::PedersenGens;
use pedeval_crypto::basis::verify_basis;
use pedeval_crypto::errors::CryptoError;

/// The length of the seed the generators are derived from.
pub const SEED_LEN: usize = 32;

/// The public parameters of a session: the seed and the generator pair
/// `(G, B)` derived from it. Any verifier can recompute the generators.
///
/// The generators always match the seed. Deserialization re-derives them and
/// fails with [`PedevalError::ParameterError`] on a mismatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", try_from = "UncheckedParams<G>")]
pub struct PublicParams<G: CurveGroup> {
    seed: [u8; SEED_LEN],
    gens: PedersenGens<G>,
}

#[derive(Deserialize)]
#[serde(bound = "")]
struct UncheckedParams<G: CurveGroup> {
    seed: [u8; SEED_LEN],
    gens: PedersenGens<G>,
}

impl<G: CurveGroup> TryFrom<UncheckedParams<G>> for PublicParams<G> {
    type Error = PedevalError;

    fn try_from(unchecked: UncheckedParams<G>) -> Result<Self> {
        let params = Self::from_seed(unchecked.seed)?;
        if params.gens != unchecked.gens {
            return Err(PedevalError::ParameterError);
        }
        Ok(params)
    }
}

/// The public parameters over the secp256r1 curve.
pub type SECP256R1PublicParams = PublicParams<SECP256R1G1>;

impl<G: CurveGroup> PublicParams<G> {
    /// Sample a fresh seed and derive the generators from it.
    pub fn new<R: CryptoRng + RngCore>(prng: &mut R) -> Result<Self> {
        let mut seed = [0u8; SEED_LEN];
        prng.try_fill_bytes(&mut seed).map_err(|_| CryptoError::RandomnessError)?;
        Self::from_seed(seed)
    }

    /// Derive the generators from the given seed.
    pub fn from_seed(seed: [u8; SEED_LEN]) -> Result<Self> {
        let timer = start_timer!(|| "Derive public parameters");
        let gens = PedersenGens::from_seed(&seed)?;
        end_timer!(timer);
        Ok(Self { seed, gens })
    }

    /// The seed.
    pub fn seed(&self) -> &[u8; SEED_LEN] {
        &self.seed
    }

    /// The generator pair.
    pub fn gens(&self) -> &PedersenGens<G> {
        &self.gens
    }

    /// Check that the generators are the ones derived from the seed.
    pub fn verify(&self) -> bool {
        verify_basis(&self.seed, &[self.gens.G, self.gens.B])
    }
}
