use crate::prelude::*;
use ark_std::fmt::Debug;
use serde::{Deserialize, Serialize};

/// The trait for scalars
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Into<BigUint>
    + for<'a> From<&'a BigUint>
    + Clone
    + One
    + Zero
    + Sized
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Sync
    + Send
{
    /// Return a random scalar
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return the field size as a BigUint
    fn get_field_size_biguint() -> BigUint;

    /// Return the len of the byte representation
    fn bytes_len() -> usize;

    /// Convert to bytes (little-endian, fixed width)
    fn to_bytes(&self) -> Vec<u8>;

    /// Convert from bytes (little-endian)
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Interpret an arbitrary-length big-endian byte string as an integer
    /// and reduce it modulo the field size.
    fn from_be_bytes_mod_order(bytes: &[u8]) -> Self;

    /// Return the modular inverse of the scalar if it exists
    fn inv(&self) -> Result<Self>;

    /// Return the square of the field element
    fn square(&self) -> Self;

    /// Return a square root, if any.
    fn sqrt(&self) -> Option<Self>;

    /// Convert to bytes (big-endian, fixed width)
    fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        bytes
    }

    /// Whether the canonical integer representative is odd.
    fn is_odd(&self) -> bool {
        self.to_bytes().first().map_or(false, |b| b & 1 == 1)
    }

    /// exponent form: least significant limb first, with u64 limbs
    fn pow(&self, exponent: &[u64]) -> Self {
        let mut base = *self;
        let mut result = Self::one();
        for exp_u64 in exponent {
            let mut e = *exp_u64;
            // we have to square the base for 64 times.
            for _ in 0..64 {
                if e % 2 == 1 {
                    result.mul_assign(&base);
                }
                base = base.mul(&base);
                e >>= 1;
            }
        }
        result
    }
}

/// The trait for group elements
pub trait Group:
    Debug
    + Default
    + Copy
    + Sized
    + PartialEq
    + Eq
    + Clone
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Serialize
    + Neg<Output = Self>
    + for<'de> Deserialize<'de>
    + Sync
    + Send
{
    /// The scalar type
    type ScalarType: Scalar;

    /// The number of bytes for a compressed representation of a group element
    const COMPRESSED_LEN: usize;

    /// Return the identity element (i.e., 0 * G)
    fn get_identity() -> Self;

    /// Return the base element (i.e., 1 * G)
    fn get_base() -> Self;

    /// Return a random element
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Convert to bytes in the compressed representation
    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Convert from bytes in the compressed representation
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;

    /// Compute the multiscalar multiplication
    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::get_identity(), |acc, (s, p)| acc.add(&(**p).mul(*s)))
    }
}

/// Trait for Pedersen commitment.
pub trait PedersenCommitment<G: Group> {
    /// Return the generator for the value part.
    fn generator(&self) -> G;
    /// Return the generator for the blinding part.
    fn blinding_generator(&self) -> G;
    /// Compute the Pedersen commitment `value * G + blinding * B`.
    fn commit(&self, value: G::ScalarType, blinding: G::ScalarType) -> G;
}

/// The capability interface of a short Weierstrass curve `y^2 = x^3 + a*x + b`
/// over a prime field: affine coordinates, the on-curve test, and the curve
/// constants. Group arithmetic comes from [`Group`].
pub trait CurveGroup: Group {
    /// The base field type, i.e., integers modulo `p`.
    type BaseType: Scalar;

    /// Get the affine x-coordinate. The identity maps to zero.
    fn get_x(&self) -> Self::BaseType;

    /// Get the affine y-coordinate. The identity maps to zero.
    fn get_y(&self) -> Self::BaseType;

    /// Construct from x and y coordinates without any check.
    fn new(x: &Self::BaseType, y: &Self::BaseType) -> Self;

    /// Construct from x and y coordinates, rejecting pairs off the curve.
    /// `(0, 0)` denotes the identity.
    fn from_xy(x: &Self::BaseType, y: &Self::BaseType) -> Result<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::get_identity());
        }
        let point = Self::new(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(AlgebraError::PointNotOnCurveError)
        }
    }

    /// Check the curve equation (and subgroup membership, where the cofactor is not one).
    fn is_on_curve(&self) -> bool;

    /// Whether this is the identity element.
    fn is_identity(&self) -> bool {
        *self == Self::get_identity()
    }

    /// The curve coefficient `a`.
    fn coeff_a() -> Self::BaseType;

    /// The curve coefficient `b`.
    fn coeff_b() -> Self::BaseType;

    /// The base field modulus `p`.
    fn modulus() -> BigUint {
        Self::BaseType::get_field_size_biguint()
    }

    /// The group order `n`.
    fn order() -> BigUint {
        Self::ScalarType::get_field_size_biguint()
    }

    /// Evaluate the right-hand side `x^3 + a*x + b`.
    fn curve_rhs(x: &Self::BaseType) -> Self::BaseType {
        x.square().mul(x).add(Self::coeff_a().mul(x)).add(Self::coeff_b())
    }
}

#[cfg(test)]
pub(crate) mod group_tests {
    use crate::prelude::*;

    pub(crate) fn test_scalar_operations<S: Scalar>() {
        let a = S::from(40u32);
        let b = S::from(60u32);
        let c = a.add(&b);
        let d = S::from(100u32);
        assert_eq!(c, d);

        let mut x = S::from(0u32);
        x.add_assign(&a);
        x.add_assign(&b);
        assert_eq!(x, d);

        let a = S::from(10u32);
        let b = S::from(40u32);
        let c = a.mul(&b);
        let d = S::from(400u32);
        assert_eq!(c, d);

        let a = S::from(0xFFFFFFFFu32);
        let b = S::from(1u32);
        let c = a.add(&b);
        let d = S::from(0x100000000u64);
        assert_eq!(c, d);

        let a = S::from(40u32);
        let b = S::from(60u32);
        let c = b.sub(&a);
        let d = S::from(20u32);
        assert_eq!(c, d);

        let a = S::from(40u32);
        let b = a.neg();
        let c = b.add(&a);
        assert_eq!(c, S::zero());

        let a = S::from(40u32);
        let b = a.inv().unwrap();
        let c = b.mul(&a);
        assert_eq!(c, S::one());
        assert!(S::zero().inv().is_err());

        let a = S::from(3u32);
        let c = a.pow(&[20]);
        let d = S::from(3486784401u64);
        assert_eq!(c, d);

        let nine = S::from(9u32);
        let root = nine.sqrt().unwrap();
        assert_eq!(root.square(), nine);

        // -1 wraps around to the field size minus one.
        let minus_one: BigUint = S::one().neg().into();
        assert_eq!(minus_one + 1u32, S::get_field_size_biguint());
    }

    pub(crate) fn test_scalar_serialization<S: Scalar>() {
        let a = S::from(100u32);
        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), S::bytes_len());
        let b = S::from_bytes(bytes.as_slice()).unwrap();
        assert_eq!(a, b);

        let be = a.to_be_bytes();
        assert_eq!(be[be.len() - 1], 100);
        assert_eq!(S::from_be_bytes_mod_order(&be), a);
        assert!(!a.is_odd());
        assert!(S::from(101u32).is_odd());
    }

    pub(crate) fn test_reduction_mod_order<S: Scalar>() {
        // The field size itself reduces to zero.
        let modulus = S::get_field_size_biguint().to_bytes_be();
        assert!(S::from_be_bytes_mod_order(&modulus).is_zero());

        let plus_five = S::get_field_size_biguint() + 5u32;
        assert_eq!(
            S::from_be_bytes_mod_order(&plus_five.to_bytes_be()),
            S::from(5u32)
        );
    }
}
