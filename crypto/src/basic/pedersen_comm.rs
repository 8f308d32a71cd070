use crate::basis::derive_basis_points;
use crate::errors::{CryptoError, Result};
use crate::polynomial::{BlindingVector, CommitmentVector, Polynomial};
use pedeval_algebra::prelude::*;

/// The number of random bytes reduced modulo the group order for one blinding.
pub const BLINDING_SAMPLE_LEN: usize = 64;

#[allow(non_snake_case)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
/// The generator pair of the Pedersen commitment `value * G + blinding * B`.
pub struct PedersenGens<G: Group> {
    /// The generator for the value part.
    pub G: G,
    /// The generator for the blinding part.
    pub B: G,
}

impl<G: Group> PedersenGens<G> {
    /// Use the given generator pair. No discrete-log relation between the two
    /// points may be known.
    #[allow(non_snake_case)]
    pub fn new(G: G, B: G) -> Self {
        Self { G, B }
    }

    /// Commit to a polynomial coefficient-wise, `c_i = a_i * G + r_i * B`.
    pub fn commit_polynomial(
        &self,
        poly: &Polynomial<G::ScalarType>,
        blindings: &BlindingVector<G::ScalarType>,
    ) -> CommitmentVector<G> {
        CommitmentVector(core::array::from_fn(|i| {
            self.commit(poly.coefficients()[i], blindings.coefficients()[i])
        }))
    }
}

impl<G: CurveGroup> PedersenGens<G> {
    /// Derive the generator pair from a public seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let points = derive_basis_points::<G>(seed, 2)?;
        match points.as_slice() {
            [g, b] => Ok(Self::new(*g, *b)),
            _ => Err(CryptoError::ParameterError),
        }
    }

    /// Whether both generators pass the curve check.
    pub fn is_on_curve(&self) -> bool {
        self.G.is_on_curve() && self.B.is_on_curve()
    }
}

impl<G: Group> PedersenCommitment<G> for PedersenGens<G> {
    fn generator(&self) -> G {
        self.G
    }

    fn blinding_generator(&self) -> G {
        self.B
    }

    fn commit(&self, value: G::ScalarType, blinding: G::ScalarType) -> G {
        G::multi_exp(&[&value, &blinding], &[&self.G, &self.B])
    }
}

/// Sample one blinding scalar uniformly modulo the group order.
pub fn sample_blinding<S: Scalar, R: CryptoRng + RngCore>(prng: &mut R) -> Result<S> {
    let mut bytes = [0u8; BLINDING_SAMPLE_LEN];
    prng.try_fill_bytes(&mut bytes).map_err(|_| CryptoError::RandomnessError)?;
    Ok(S::from_be_bytes_mod_order(&bytes))
}

/// Sample the blindings of one polynomial.
pub fn sample_blindings<S: Scalar, R: CryptoRng + RngCore>(
    prng: &mut R,
) -> Result<BlindingVector<S>> {
    Ok(Polynomial::new([
        sample_blinding(prng)?,
        sample_blinding(prng)?,
        sample_blinding(prng)?,
    ]))
}

#[cfg(test)]
mod test {
    use super::*;
    use pedeval_algebra::secp256r1::{SECP256R1Scalar, SECP256R1G1};

    fn gens() -> PedersenGens<SECP256R1G1> {
        PedersenGens::from_seed(b"pedersen commitment test seed").unwrap()
    }

    #[test]
    fn commit_matches_definition() {
        let mut prng = test_rng();
        let pc = gens();
        let v = SECP256R1Scalar::random(&mut prng);
        let r = SECP256R1Scalar::random(&mut prng);

        let expected = pc.generator().mul(&v).add(&pc.blinding_generator().mul(&r));
        assert_eq!(pc.commit(v, r), expected);
        assert!(pc.commit(v, r).is_on_curve());

        // The blinding is not ignored.
        assert_ne!(pc.commit(v, r), pc.commit(v, SECP256R1Scalar::zero()));
    }

    #[test]
    fn commitment_is_homomorphic() {
        let mut prng = test_rng();
        let pc = gens();
        let poly = Polynomial::new([
            SECP256R1Scalar::random(&mut prng),
            SECP256R1Scalar::random(&mut prng),
            SECP256R1Scalar::random(&mut prng),
        ]);
        let blindings = sample_blindings(&mut prng).unwrap();
        let u = SECP256R1Scalar::random(&mut prng);

        let commitments = pc.commit_polynomial(&poly, &blindings);
        assert_eq!(
            commitments.combine(&u),
            pc.commit(poly.evaluate(&u), blindings.evaluate(&u))
        );
    }

    #[test]
    fn blindings_are_fresh() {
        let mut prng = test_rng();
        let a: BlindingVector<SECP256R1Scalar> = sample_blindings(&mut prng).unwrap();
        let b: BlindingVector<SECP256R1Scalar> = sample_blindings(&mut prng).unwrap();
        assert_ne!(a, b);
        assert_ne!(a.0[0], a.0[1]);
    }

    #[test]
    fn failing_rng_is_reported() {
        let res: Result<BlindingVector<SECP256R1Scalar>> = sample_blindings(&mut FailingRng);
        assert_eq!(res, Err(CryptoError::RandomnessError));
    }

    #[test]
    fn generators_serde() {
        let pc = gens();
        let json = serde_json::to_string(&pc).unwrap();
        let pc2: PedersenGens<SECP256R1G1> = serde_json::from_str(&json).unwrap();
        assert_eq!(pc, pc2);
    }
}
