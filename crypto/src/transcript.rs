use crate::polynomial::CommitmentVector;
use digest::Digest;
use pedeval_algebra::prelude::*;
use sha2::Sha256;

/// The length of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// The trait for the challenge transcript over commitment vectors.
pub trait CommitmentTranscript {
    /// Append one point as fixed-width big-endian `x || y`.
    fn append_point<G: CurveGroup>(&mut self, point: &G);

    /// Append every commitment of the vector, in order.
    fn append_commitments<G: CurveGroup>(&mut self, commitments: &CommitmentVector<G>);

    /// Append a digest produced by another transcript.
    fn append_digest(&mut self, digest: &[u8; DIGEST_LEN]);

    /// Finish the transcript and reduce the digest modulo the group order.
    fn get_challenge_scalar<S: Scalar>(self) -> S;
}

impl CommitmentTranscript for Sha256 {
    fn append_point<G: CurveGroup>(&mut self, point: &G) {
        Digest::update(self, encode_point(point));
    }

    fn append_commitments<G: CurveGroup>(&mut self, commitments: &CommitmentVector<G>) {
        for c in commitments.commitments().iter() {
            self.append_point(c);
        }
    }

    fn append_digest(&mut self, digest: &[u8; DIGEST_LEN]) {
        Digest::update(self, digest);
    }

    fn get_challenge_scalar<S: Scalar>(self) -> S {
        S::from_be_bytes_mod_order(&self.finalize())
    }
}

/// Encode the affine coordinates of a point as `x || y`, each fixed-width big-endian.
/// The identity is all zeros.
pub fn encode_point<G: CurveGroup>(point: &G) -> Vec<u8> {
    let width = G::BaseType::bytes_len();
    if point.is_identity() {
        return vec![0u8; 2 * width];
    }
    let mut bytes = point.get_x().to_be_bytes();
    bytes.extend_from_slice(&point.get_y().to_be_bytes());
    bytes
}

/// Hash a commitment vector with SHA-256.
pub fn hash_commitments<G: CurveGroup>(commitments: &CommitmentVector<G>) -> [u8; DIGEST_LEN] {
    let mut transcript = Sha256::new();
    transcript.append_commitments(commitments);
    transcript.finalize().into()
}

/// The Fiat-Shamir challenge of one commitment vector.
pub fn challenge<G: CurveGroup>(commitments: &CommitmentVector<G>) -> G::ScalarType {
    let mut transcript = Sha256::new();
    transcript.append_commitments(commitments);
    transcript.get_challenge_scalar()
}

/// The shared challenge of three commitment vectors, hashing the digest of each in order.
pub fn batch_challenge<G: CurveGroup>(commitments: &[CommitmentVector<G>; 3]) -> G::ScalarType {
    let mut transcript = Sha256::new();
    for v in commitments.iter() {
        transcript.append_digest(&hash_commitments(v));
    }
    transcript.get_challenge_scalar()
}

#[cfg(test)]
mod test {
    use super::*;
    use pedeval_algebra::secp256r1::{SECP256R1Scalar, SECP256R1G1};

    fn random_vector<R: CryptoRng + RngCore>(prng: &mut R) -> CommitmentVector<SECP256R1G1> {
        CommitmentVector([
            SECP256R1G1::random(prng),
            SECP256R1G1::random(prng),
            SECP256R1G1::random(prng),
        ])
    }

    #[test]
    fn challenge_is_deterministic() {
        let mut prng = test_rng();
        let v = random_vector(&mut prng);
        let w = v;
        assert_eq!(challenge(&v), challenge(&w));

        let other = random_vector(&mut prng);
        assert_ne!(challenge(&v), challenge(&other));
    }

    #[test]
    fn challenge_depends_on_order() {
        let mut prng = test_rng();
        let v = random_vector(&mut prng);
        let swapped = CommitmentVector([v.0[1], v.0[0], v.0[2]]);
        assert_ne!(challenge(&v), challenge(&swapped));
    }

    #[test]
    fn challenge_is_the_reduced_digest() {
        let mut prng = test_rng();
        let v = random_vector(&mut prng);

        let mut bytes = vec![];
        for c in v.0.iter() {
            bytes.extend_from_slice(&encode_point(c));
        }
        let digest = Sha256::digest(&bytes);
        assert_eq!(
            challenge(&v),
            SECP256R1Scalar::from_be_bytes_mod_order(&digest)
        );
        assert_eq!(hash_commitments(&v).as_slice(), digest.as_slice());
    }

    #[test]
    fn point_encoding() {
        let base = SECP256R1G1::get_base();
        let bytes = encode_point(&base);
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[..32], base.get_x().to_be_bytes().as_slice());

        assert_eq!(encode_point(&SECP256R1G1::get_identity()), vec![0u8; 64]);
    }

    #[test]
    fn batch_challenge_binds_every_vector() {
        let mut prng = test_rng();
        let vs = [
            random_vector(&mut prng),
            random_vector(&mut prng),
            random_vector(&mut prng),
        ];
        let u = batch_challenge(&vs);
        assert_eq!(u, batch_challenge(&vs));

        let mut tampered = vs;
        tampered[2].0[1] = SECP256R1G1::random(&mut prng);
        assert_ne!(u, batch_challenge(&tampered));

        let reordered = [vs[1], vs[0], vs[2]];
        assert_ne!(u, batch_challenge(&reordered));
    }
}
