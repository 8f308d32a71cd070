use crate::prelude::*;
use crate::secp256r1::SECP256R1_SCALAR_LEN;
use ark_ff::{BigInteger, Field, PrimeField};
use ark_secp256r1::{Fq, Fr};
use ark_std::fmt::{Debug, Formatter};

/// Wrap an arkworks prime field of secp256r1 and implement [`Scalar`] for it.
macro_rules! secp256r1_field {
    ($(#[$doc:meta])* $name:ident, $inner:ty) => {
        $(#[$doc])*
        #[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) $inner);

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
                <BigUint as Debug>::fmt(&self.0.into_bigint().into(), f)
            }
        }

        impl One for $name {
            #[inline]
            fn one() -> Self {
                Self(<$inner>::one())
            }
        }

        impl Zero for $name {
            #[inline]
            fn zero() -> Self {
                Self(<$inner>::zero())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl Add for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Mul for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl Sum<$name> for $name {
            #[inline]
            fn sum<I: Iterator<Item = $name>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl<'a> Sum<&'a $name> for $name {
            #[inline]
            fn sum<I: Iterator<Item = &'a $name>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl<'a> Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &Self) {
                self.0 += rhs.0;
            }
        }

        impl<'a> Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &Self) {
                self.0 -= rhs.0;
            }
        }

        impl<'a> Mul<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> MulAssign<&'a $name> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: &Self) {
                self.0 *= rhs.0;
            }
        }

        impl Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(value: u32) -> Self {
                Self::from(value as u64)
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(value: u64) -> Self {
                Self(<$inner>::from(value))
            }
        }

        impl From<$name> for BigUint {
            #[inline]
            fn from(value: $name) -> BigUint {
                value.0.into_bigint().into()
            }
        }

        impl<'a> From<&'a BigUint> for $name {
            #[inline]
            fn from(value: &'a BigUint) -> Self {
                Self(<$inner>::from(value.clone()))
            }
        }

        impl Scalar for $name {
            #[inline]
            fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
                Self(<$inner>::rand(rng))
            }

            #[inline]
            fn get_field_size_biguint() -> BigUint {
                <$inner>::MODULUS.into()
            }

            #[inline]
            fn bytes_len() -> usize {
                SECP256R1_SCALAR_LEN
            }

            #[inline]
            fn to_bytes(&self) -> Vec<u8> {
                self.0.into_bigint().to_bytes_le()[..SECP256R1_SCALAR_LEN].to_vec()
            }

            #[inline]
            fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() > Self::bytes_len() {
                    return Err(AlgebraError::DeserializationError);
                }
                Ok(Self(<$inner>::from_le_bytes_mod_order(bytes)))
            }

            #[inline]
            fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
                Self(<$inner>::from_be_bytes_mod_order(bytes))
            }

            #[inline]
            fn inv(&self) -> Result<Self> {
                self.0
                    .inverse()
                    .map(Self)
                    .ok_or(AlgebraError::GroupInversionError)
            }

            #[inline]
            fn square(&self) -> Self {
                Self(self.0.square())
            }

            #[inline]
            fn sqrt(&self) -> Option<Self> {
                self.0.sqrt().map(Self)
            }

            #[inline]
            fn pow(&self, exponent: &[u64]) -> Self {
                Self(self.0.pow(exponent))
            }
        }
    };
}

secp256r1_field!(
    /// The wrapped struct for `ark_secp256r1::Fr`, the integers modulo the group order `n`.
    /// Blindings, challenges and relation weights live here.
    SECP256R1Scalar,
    Fr
);

secp256r1_field!(
    /// The wrapped struct for `ark_secp256r1::Fq`, the base field of the curve,
    /// i.e., integers modulo `p`. Only point coordinates live here.
    SECP256R1Fq,
    Fq
);
