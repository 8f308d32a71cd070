//! Nothing-up-my-sleeve basis points.
//!
//! Candidate `i` hashes `seed || i` (the counter as 4 big-endian bytes) to an
//! x-coordinate modulo `p`. Candidates whose `x^3 + a*x + b` is a non-residue
//! are skipped. For the others, the parity of `y` is taken from the lowest bit
//! of `SHA-256(seed || i || "sign")`.

use crate::errors::{CryptoError, Result};
use ark_std::{end_timer, start_timer};
use digest::Digest;
use num_bigint::BigUint;
use pedeval_algebra::prelude::*;
use sha2::Sha256;

/// The domain separator of the sign-bit hash.
pub const SIGN_DOMAIN: &[u8] = b"sign";

fn candidate_x<F: Scalar>(seed: &[u8], counter: u32) -> F {
    let digest = Sha256::new()
        .chain_update(seed)
        .chain_update(counter.to_be_bytes())
        .finalize();
    F::from_be_bytes_mod_order(&digest)
}

fn sign_bit(seed: &[u8], counter: u32) -> bool {
    let digest = Sha256::new()
        .chain_update(seed)
        .chain_update(counter.to_be_bytes())
        .chain_update(SIGN_DOMAIN)
        .finalize();
    digest[0] & 1 == 1
}

/// A square root of `r` modulo `p`, if one exists.
///
/// For `p = 3 mod 4` this is `r^((p+1)/4)`, accepted only if it squares back to `r`.
pub fn modular_sqrt<F: Scalar>(r: &F, p: &BigUint) -> Option<F> {
    if p % 4u32 != BigUint::from(3u32) {
        return r.sqrt();
    }
    let exponent: BigUint = (p + 1u32) >> 2;
    let y = r.pow(&exponent.to_u64_digits());
    if y.square() == *r {
        Some(y)
    } else {
        None
    }
}

/// Try candidate `counter`. `None` means the x-coordinate has no point.
fn try_candidate<G: CurveGroup>(seed: &[u8], counter: u32, p: &BigUint) -> Result<Option<G>> {
    let x = candidate_x::<G::BaseType>(seed, counter);
    let rhs = G::curve_rhs(&x);
    let mut y = match modular_sqrt(&rhs, p) {
        Some(y) => y,
        None => return Ok(None),
    };
    if y.is_odd() != sign_bit(seed, counter) {
        y = y.neg();
    }
    let point = G::from_xy(&x, &y)?;
    Ok(Some(point))
}

/// Derive `count` points from `seed`. The same seed always gives the same points.
pub fn derive_basis_points<G: CurveGroup>(seed: &[u8], count: usize) -> Result<Vec<G>> {
    let timer = start_timer!(|| "Derive basis points");

    let p = G::modulus();
    let mut points = Vec::with_capacity(count);
    let mut counter = 0u32;
    while points.len() < count {
        if let Some(point) = try_candidate::<G>(seed, counter, &p)? {
            points.push(point);
        }
        if points.len() < count {
            counter = counter
                .checked_add(1)
                .ok_or(CryptoError::BasisDerivationExhausted)?;
        }
    }

    end_timer!(timer);
    Ok(points)
}

/// Check that `points` are exactly the first points derived from `seed`.
pub fn verify_basis<G: CurveGroup>(seed: &[u8], points: &[G]) -> bool {
    if !points.iter().all(|p| p.is_on_curve()) {
        return false;
    }
    match derive_basis_points::<G>(seed, points.len()) {
        Ok(expected) => expected.as_slice() == points,
        Err(_) => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pedeval_algebra::secp256r1::{SECP256R1Fq, SECP256R1G1};

    #[test]
    fn derived_points_are_on_curve() {
        let seed = [7u8; 32];
        let points = derive_basis_points::<SECP256R1G1>(&seed, 8).unwrap();
        assert_eq!(points.len(), 8);
        for p in points.iter() {
            assert!(p.is_on_curve());
            assert!(!p.is_identity());
            // y^2 = x^3 - 3x + b
            let x = p.get_x();
            let three = SECP256R1Fq::from(3u32);
            let rhs = x.square().mul(&x).sub(&three.mul(&x)).add(&SECP256R1G1::coeff_b());
            assert_eq!(p.get_y().square(), rhs);
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let mut prng = test_rng();
        let mut seed = [0u8; 32];
        prng.fill_bytes(&mut seed);

        let a = derive_basis_points::<SECP256R1G1>(&seed, 4).unwrap();
        let b = derive_basis_points::<SECP256R1G1>(&seed, 4).unwrap();
        assert_eq!(a, b);

        // A longer derivation extends a shorter one.
        let c = derive_basis_points::<SECP256R1G1>(&seed, 2).unwrap();
        assert_eq!(&a[..2], c.as_slice());

        seed[0] ^= 1;
        let d = derive_basis_points::<SECP256R1G1>(&seed, 4).unwrap();
        assert_ne!(a, d);

        // Pairwise distinct.
        for i in 0..a.len() {
            for j in (i + 1)..a.len() {
                assert_ne!(a[i], a[j]);
            }
        }
    }

    #[test]
    fn sign_follows_the_per_candidate_hash() {
        let seed = b"sign bit seed";
        let p = SECP256R1G1::modulus();
        let mut parities = vec![];
        let mut counter = 0u32;
        while parities.len() < 16 {
            if let Some(point) = try_candidate::<SECP256R1G1>(seed, counter, &p).unwrap() {
                assert_eq!(point.get_y().is_odd(), sign_bit(seed, counter));
                parities.push(point.get_y().is_odd());
            }
            counter += 1;
        }
        // No single global sign.
        assert!(parities.iter().any(|b| *b));
        assert!(parities.iter().any(|b| !*b));
    }

    #[test]
    fn non_residues_are_skipped() {
        let seed = [42u8; 32];
        let p = SECP256R1G1::modulus();
        let mut skipped = 0;
        let mut accepted = 0;
        for counter in 0..32u32 {
            match try_candidate::<SECP256R1G1>(&seed, counter, &p).unwrap() {
                Some(_) => accepted += 1,
                None => skipped += 1,
            }
        }
        // Roughly half of all x-coordinates have a point.
        assert!(skipped > 0);
        assert!(accepted > 0);
    }

    #[test]
    fn fast_sqrt_agrees_with_field_sqrt() {
        let mut prng = test_rng();
        let p = SECP256R1G1::modulus();
        for _ in 0..8 {
            let y = SECP256R1Fq::random(&mut prng);
            let r = y.square();
            let root = modular_sqrt(&r, &p).unwrap();
            assert!(root == y || root == y.neg());
        }
        // -1 is a non-residue modulo p = 3 mod 4.
        assert!(modular_sqrt(&SECP256R1Fq::one().neg(), &p).is_none());
    }

    #[test]
    fn basis_is_publicly_verifiable() {
        let seed = [1u8; 32];
        let points = derive_basis_points::<SECP256R1G1>(&seed, 2).unwrap();
        assert!(verify_basis(&seed, &points));

        let swapped = [points[1], points[0]];
        assert!(!verify_basis(&seed, &swapped));

        let other = derive_basis_points::<SECP256R1G1>(&[2u8; 32], 2).unwrap();
        assert!(!verify_basis(&seed, &other));
    }
}
