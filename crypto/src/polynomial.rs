use crate::errors::{CryptoError, Result};
use pedeval_algebra::prelude::*;

/// The number of coefficients of every committed polynomial (degree 2).
pub const NUM_COEFFS: usize = 3;

/// A polynomial `a0 + a1*x + a2*x^2`, coefficients stored lowest degree first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<S: Scalar>(pub [S; NUM_COEFFS]);

/// The blinding scalars `[r0, r1, r2]` of one committed polynomial.
///
/// They evaluate exactly like coefficients, which yields the aggregated
/// blinding `r0 + u*r1 + u^2*r2` of the combined commitment.
pub type BlindingVector<S> = Polynomial<S>;

impl<S: Scalar> Polynomial<S> {
    /// Build a polynomial from its three coefficients.
    pub fn new(coeffs: [S; NUM_COEFFS]) -> Self {
        Self(coeffs)
    }

    /// Build a polynomial from small integer coefficients.
    pub fn from_u64s(coeffs: [u64; NUM_COEFFS]) -> Self {
        Self(coeffs.map(|c| S::from(c)))
    }

    /// Build a polynomial from a slice, which must hold exactly three coefficients.
    pub fn from_slice(coeffs: &[S]) -> Result<Self> {
        let coeffs: [S; NUM_COEFFS] = coeffs
            .try_into()
            .map_err(|_| CryptoError::MalformedInput)?;
        Ok(Self(coeffs))
    }

    /// Return the coefficients.
    pub fn coefficients(&self) -> &[S; NUM_COEFFS] {
        &self.0
    }

    /// Evaluate at `u` with Horner's method: `a0 + u*(a1 + u*a2)`.
    pub fn evaluate(&self, u: &S) -> S {
        self.0
            .iter()
            .rev()
            .fold(S::zero(), |acc, coeff| acc.mul(u).add(coeff))
    }
}

/// Evaluate the polynomial given as a coefficient slice at `u`.
pub fn evaluate_polynomial<S: Scalar>(coeffs: &[S], u: &S) -> Result<S> {
    Ok(Polynomial::from_slice(coeffs)?.evaluate(u))
}

/// The per-coefficient Pedersen commitments `[c0, c1, c2]` of one polynomial.
///
/// Built from outside the crate only through [`CommitmentVector::new`] or
/// [`CommitmentVector::from_slice`], so every point has passed the curve check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CommitmentVector<G: Group>(pub(crate) [G; NUM_COEFFS]);

impl<G: Group> CommitmentVector<G> {
    /// Return the commitments.
    pub fn commitments(&self) -> &[G; NUM_COEFFS] {
        &self.0
    }

    /// Fold the vector into the commitment to the evaluation at `u`,
    /// `c0 + u*(c1 + u*c2)`.
    pub fn combine(&self, u: &G::ScalarType) -> G {
        self.0
            .iter()
            .rev()
            .fold(G::get_identity(), |acc, c| acc.mul(u).add(c))
    }
}

impl<G: CurveGroup> CommitmentVector<G> {
    /// Build a commitment vector, rejecting any point off the curve.
    pub fn new(commitments: [G; NUM_COEFFS]) -> Result<Self> {
        if commitments.iter().all(|c| c.is_on_curve()) {
            Ok(Self(commitments))
        } else {
            Err(CryptoError::Algebra(AlgebraError::PointNotOnCurveError))
        }
    }

    /// Build a commitment vector from a slice, which must hold exactly three
    /// points on the curve.
    pub fn from_slice(commitments: &[G]) -> Result<Self> {
        let commitments: [G; NUM_COEFFS] = commitments
            .try_into()
            .map_err(|_| CryptoError::MalformedInput)?;
        Self::new(commitments)
    }

    /// Whether every commitment passes the curve check.
    pub fn is_on_curve(&self) -> bool {
        self.0.iter().all(|c| c.is_on_curve())
    }
}

/// Combine the commitment vector given as a slice at `u`.
pub fn combine_commitments<G: CurveGroup>(commitments: &[G], u: &G::ScalarType) -> Result<G> {
    Ok(CommitmentVector::from_slice(commitments)?.combine(u))
}
