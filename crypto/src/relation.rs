use crate::basic::pedersen_comm::PedersenGens;
use pedeval_algebra::prelude::*;

/// The public weights `(w_f, w_g, w_h)` of the relation
/// `w_f*f(u) + w_g*g(u) + w_h*h(u) = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinearRelation<S: Scalar> {
    /// The weight of each polynomial, in order.
    pub weights: [S; 3],
}

impl<S: Scalar> LinearRelation<S> {
    /// Use the given weights.
    pub fn new(weights: [S; 3]) -> Self {
        Self { weights }
    }

    /// The relation `u*f(u) + g(u) = h(u)`, i.e., weights `(u, 1, -1)`.
    pub fn scaled_sum(u: &S) -> Self {
        Self::new([*u, S::one(), S::one().neg()])
    }

    /// Compute `sum_i w_i * x_i`.
    pub fn weighted_sum(&self, xs: &[S; 3]) -> S {
        self.weights
            .iter()
            .zip(xs.iter())
            .map(|(w, x)| w.mul(x))
            .sum()
    }

    /// The residue `rho = sum_i w_i * pi_i` of the aggregated blindings.
    /// It is the blinding of the weighted sum of the evaluation commitments.
    pub fn residue(&self, aggregated_blindings: &[S; 3]) -> S {
        self.weighted_sum(aggregated_blindings)
    }

    /// Whether the plain evaluations satisfy the relation.
    pub fn holds_for(&self, evaluations: &[S; 3]) -> bool {
        self.weighted_sum(evaluations).is_zero()
    }
}

/// Check `sum_i w_i * C_i == rho * B`, i.e., that the weighted sum of the
/// evaluation commitments opens to zero with blinding `rho`. With `rho = 0`
/// this is the bare point identity, e.g. `u*C_f + C_g == C_h`.
///
/// Every failure, including a point off the curve, is reported as `false`.
pub fn verify_relation<G: CurveGroup>(
    gens: &PedersenGens<G>,
    relation: &LinearRelation<G::ScalarType>,
    evaluation_commitments: &[G; 3],
    residue: &G::ScalarType,
) -> bool {
    if !gens.is_on_curve() || !evaluation_commitments.iter().all(|c| c.is_on_curve()) {
        return false;
    }
    let weights: Vec<&G::ScalarType> = relation.weights.iter().collect();
    let points: Vec<&G> = evaluation_commitments.iter().collect();
    G::multi_exp(&weights, &points) == gens.B.mul(residue)
}
