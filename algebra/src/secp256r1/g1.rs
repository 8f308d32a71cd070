use crate::prelude::*;
use crate::secp256r1::{SECP256R1Fq, SECP256R1Scalar};
use ark_ec::{
    short_weierstrass::SWCurveConfig, AffineRepr, CurveGroup as ArkCurveGroup,
    Group as ArkGroup, VariableBaseMSM,
};
use ark_secp256r1::{Affine, Config, Projective};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::fmt::{Debug, Formatter};

/// The wrapped struct for `ark_secp256r1::Projective`
#[derive(Copy, Default, Clone, PartialEq, Eq)]
pub struct SECP256R1G1(pub(crate) Projective);

impl Neg for SECP256R1G1 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Debug for SECP256R1G1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        Debug::fmt(&self.0.into_affine(), f)
    }
}

impl Group for SECP256R1G1 {
    type ScalarType = SECP256R1Scalar;
    const COMPRESSED_LEN: usize = 33;

    #[inline]
    fn get_identity() -> Self {
        Self(Projective::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(Projective::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(Projective::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let affine = Affine::from(self.0);
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        // Writing into a `Vec` never fails.
        affine.serialize_with_mode(&mut buf, Compress::Yes).unwrap();

        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|_| AlgebraError::DeserializationError)?;

        Ok(Self(Projective::from(affine)))
    }

    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        let scalars_raw: Vec<_> = scalars.iter().map(|r| r.0).collect();
        let points_raw =
            Projective::normalize_batch(&points.iter().map(|r| r.0).collect::<Vec<Projective>>());

        Self(Projective::msm_unchecked(&points_raw, &scalars_raw))
    }
}

impl CurveGroup for SECP256R1G1 {
    type BaseType = SECP256R1Fq;

    #[inline]
    fn get_x(&self) -> SECP256R1Fq {
        SECP256R1Fq(self.0.into_affine().x)
    }

    #[inline]
    fn get_y(&self) -> SECP256R1Fq {
        SECP256R1Fq(self.0.into_affine().y)
    }

    #[inline]
    fn new(x: &SECP256R1Fq, y: &SECP256R1Fq) -> Self {
        Self(Affine::new_unchecked(x.0, y.0).into_group())
    }

    #[inline]
    fn is_on_curve(&self) -> bool {
        let affine = self.0.into_affine();
        affine.is_on_curve() && affine.is_in_correct_subgroup_assuming_on_curve()
    }

    #[inline]
    fn coeff_a() -> SECP256R1Fq {
        SECP256R1Fq(<Config as SWCurveConfig>::COEFF_A)
    }

    #[inline]
    fn coeff_b() -> SECP256R1Fq {
        SECP256R1Fq(<Config as SWCurveConfig>::COEFF_B)
    }
}

impl<'a> Add<&'a SECP256R1G1> for SECP256R1G1 {
    type Output = SECP256R1G1;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Sub<&'a SECP256R1G1> for SECP256R1G1 {
    type Output = SECP256R1G1;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<'a> Mul<&'a SECP256R1Scalar> for SECP256R1G1 {
    type Output = SECP256R1G1;

    #[inline]
    fn mul(self, rhs: &SECP256R1Scalar) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<'a> AddAssign<&'a SECP256R1G1> for SECP256R1G1 {
    #[inline]
    fn add_assign(&mut self, rhs: &'a SECP256R1G1) {
        self.0 += rhs.0
    }
}

impl<'a> SubAssign<&'a SECP256R1G1> for SECP256R1G1 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a SECP256R1G1) {
        self.0 -= rhs.0
    }
}

impl<'a> MulAssign<&'a SECP256R1Scalar> for SECP256R1G1 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a SECP256R1Scalar) {
        self.0 *= rhs.0
    }
}
