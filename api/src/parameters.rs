use pedeval_algebra::prelude::*;
use pedeval_crypto::polynomial::Polynomial;

/// The coefficients of the reference polynomial `f`, lowest degree first.
pub const REFERENCE_F: [u64; 3] = [4, 2, 6];

/// The coefficients of the reference polynomial `g`.
pub const REFERENCE_G: [u64; 3] = [3, 1, 7];

/// The coefficients of the reference polynomial `h`.
pub const REFERENCE_H: [u64; 3] = [3, 5, 2];

/// The reference polynomials `[f, g, h]`.
///
/// `u*f(u) + g(u) - h(u) = 6u^3 + 7u^2`, so the identity `u*f + g = h`
/// fails at every challenge except `u = 0` and `u = -7/6`.
pub fn reference_polynomials<S: Scalar>() -> [Polynomial<S>; 3] {
    [
        Polynomial::from_u64s(REFERENCE_F),
        Polynomial::from_u64s(REFERENCE_G),
        Polynomial::from_u64s(REFERENCE_H),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use pedeval_algebra::secp256r1::SECP256R1Scalar;

    #[test]
    fn reference_identity_gap() {
        let mut prng = test_rng();
        let [f, g, h] = reference_polynomials::<SECP256R1Scalar>();
        for _ in 0..4 {
            let u = SECP256R1Scalar::random(&mut prng);
            let gap = u.mul(&f.evaluate(&u)).add(&g.evaluate(&u)).sub(&h.evaluate(&u));
            let u2 = u.square();
            let expected = SECP256R1Scalar::from(6u32)
                .mul(&u2)
                .mul(&u)
                .add(&SECP256R1Scalar::from(7u32).mul(&u2));
            assert_eq!(gap, expected);
        }

        // The two roots of the gap.
        let zero = SECP256R1Scalar::zero();
        assert_eq!(
            zero.mul(&f.evaluate(&zero)).add(&g.evaluate(&zero)),
            h.evaluate(&zero)
        );
        let root = SECP256R1Scalar::from(7u32)
            .neg()
            .mul(&SECP256R1Scalar::from(6u32).inv().unwrap());
        assert_eq!(
            root.mul(&f.evaluate(&root)).add(&g.evaluate(&root)),
            h.evaluate(&root)
        );
    }
}
