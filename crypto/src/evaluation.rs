use crate::basic::pedersen_comm::PedersenGens;
use crate::polynomial::{BlindingVector, CommitmentVector, Polynomial};
use pedeval_algebra::prelude::*;

/// The opening of a combined commitment at the challenge point.
///
/// `combined_commitment = evaluated_value * G + aggregated_blinding * B`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvaluationProof<G: Group> {
    /// The commitment to the evaluation, `c0 + u*c1 + u^2*c2`.
    pub combined_commitment: G,
    /// The aggregated blinding `r0 + u*r1 + u^2*r2`.
    pub aggregated_blinding: G::ScalarType,
    /// The evaluation `a0 + u*a1 + u^2*a2`.
    pub evaluated_value: G::ScalarType,
}

/// Open the commitment vector of `poly` at `u`.
pub fn prove_evaluation<G: Group>(
    commitments: &CommitmentVector<G>,
    poly: &Polynomial<G::ScalarType>,
    blindings: &BlindingVector<G::ScalarType>,
    u: &G::ScalarType,
) -> EvaluationProof<G> {
    EvaluationProof {
        combined_commitment: commitments.combine(u),
        aggregated_blinding: blindings.evaluate(u),
        evaluated_value: poly.evaluate(u),
    }
}

/// Check `combined_commitment - aggregated_blinding * B == evaluated_value * G`.
///
/// Every failure, including a point off the curve, is reported as `false`.
pub fn verify_evaluation<G: CurveGroup>(
    gens: &PedersenGens<G>,
    proof: &EvaluationProof<G>,
) -> bool {
    if !gens.is_on_curve() || !proof.combined_commitment.is_on_curve() {
        return false;
    }
    let lhs = proof
        .combined_commitment
        .sub(&gens.B.mul(&proof.aggregated_blinding));
    lhs == gens.G.mul(&proof.evaluated_value)
}
