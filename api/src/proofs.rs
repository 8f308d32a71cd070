use crate::errors::{PedevalError, Result};
use crate::setup::PublicParams;
use ark_std::{end_timer, start_timer};
use pedeval_algebra::prelude::*;
use pedeval_crypto::basic::pedersen_comm::{sample_blindings, PedersenGens};
use pedeval_crypto::evaluation::{prove_evaluation, verify_evaluation, EvaluationProof};
use pedeval_crypto::polynomial::{BlindingVector, CommitmentVector, Polynomial};
use pedeval_crypto::relation::{verify_relation, LinearRelation};
use pedeval_crypto::transcript::batch_challenge;

/// The number of polynomials proved together.
pub const BATCH_SIZE: usize = 3;

/// The proof that three committed polynomials, evaluated at the shared
/// challenge, satisfy a linear relation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BatchProof<G: Group> {
    /// The per-coefficient commitments of `f`, `g` and `h`.
    pub commitments: [CommitmentVector<G>; BATCH_SIZE],
    /// The opening of each polynomial at the challenge.
    pub openings: [EvaluationProof<G>; BATCH_SIZE],
    /// The blinding of the weighted sum of the evaluation commitments.
    pub residue: G::ScalarType,
}

impl<G: CurveGroup> BatchProof<G> {
    /// Assemble a proof from dynamically sized parts, checking the shape.
    pub fn from_parts(
        commitments: &[Vec<G>],
        openings: &[EvaluationProof<G>],
        residue: G::ScalarType,
    ) -> Result<Self> {
        if commitments.len() != BATCH_SIZE || openings.len() != BATCH_SIZE {
            return Err(PedevalError::InconsistentStructureError);
        }
        Ok(Self {
            commitments: [
                CommitmentVector::from_slice(&commitments[0])?,
                CommitmentVector::from_slice(&commitments[1])?,
                CommitmentVector::from_slice(&commitments[2])?,
            ],
            openings: [openings[0], openings[1], openings[2]],
            residue,
        })
    }

    /// Whether every point in the proof passes the curve check.
    pub fn is_on_curve(&self) -> bool {
        self.commitments.iter().all(|v| v.is_on_curve())
            && self
                .openings
                .iter()
                .all(|o| o.combined_commitment.is_on_curve())
    }
}

/// The outcome of checking a batch proof.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BatchVerification {
    /// Whether each opening verifies against its recomputed combined commitment.
    pub openings: [bool; BATCH_SIZE],
    /// Whether the relation holds across the evaluation commitments.
    pub relation: bool,
}

impl BatchVerification {
    /// Everything verified.
    pub fn is_valid(&self) -> bool {
        self.openings.iter().all(|b| *b) && self.relation
    }

    fn rejected() -> Self {
        Self {
            openings: [false; BATCH_SIZE],
            relation: false,
        }
    }
}

fn commit_all<G: CurveGroup>(
    gens: &PedersenGens<G>,
    polys: &[Polynomial<G::ScalarType>; BATCH_SIZE],
    blindings: &[BlindingVector<G::ScalarType>; BATCH_SIZE],
) -> [CommitmentVector<G>; BATCH_SIZE] {
    #[cfg(feature = "parallel")]
    let commitments = {
        let (c_f, (c_g, c_h)) = rayon::join(
            || gens.commit_polynomial(&polys[0], &blindings[0]),
            || {
                rayon::join(
                    || gens.commit_polynomial(&polys[1], &blindings[1]),
                    || gens.commit_polynomial(&polys[2], &blindings[2]),
                )
            },
        );
        [c_f, c_g, c_h]
    };
    #[cfg(not(feature = "parallel"))]
    let commitments =
        core::array::from_fn(|i| gens.commit_polynomial(&polys[i], &blindings[i]));

    commitments
}

/// Commit to `[f, g, h]`, derive the shared challenge `u`, open each
/// polynomial at `u` and reveal the residue of the relation built from `u`.
///
/// The proof is produced even when the relation does not hold; the
/// verifier rejects it.
pub fn prove_relation<G, R, F>(
    params: &PublicParams<G>,
    polys: &[Polynomial<G::ScalarType>; BATCH_SIZE],
    relation_builder: F,
    prng: &mut R,
) -> Result<(BatchProof<G>, G::ScalarType)>
where
    G: CurveGroup,
    R: CryptoRng + RngCore,
    F: Fn(&G::ScalarType) -> LinearRelation<G::ScalarType>,
{
    let timer = start_timer!(|| "Prove relation");
    let gens = params.gens();

    // The rng is not shared, so all sampling happens up front.
    let blindings: [BlindingVector<G::ScalarType>; BATCH_SIZE] = [
        sample_blindings(prng)?,
        sample_blindings(prng)?,
        sample_blindings(prng)?,
    ];
    let commitments = commit_all(gens, polys, &blindings);

    let u = batch_challenge(&commitments);
    let openings: [EvaluationProof<G>; BATCH_SIZE] = core::array::from_fn(|i| {
        prove_evaluation(&commitments[i], &polys[i], &blindings[i], &u)
    });

    let relation = relation_builder(&u);
    let residue = relation.residue(&openings.map(|o| o.aggregated_blinding));
    end_timer!(timer);

    Ok((
        BatchProof {
            commitments,
            openings,
            residue,
        },
        u,
    ))
}

/// Check a batch proof and report each opening and the relation separately.
///
/// `params` is trusted as is: every way of obtaining [`PublicParams`] checks
/// the generators against the seed.
pub fn check_relation_proof<G, F>(
    params: &PublicParams<G>,
    proof: &BatchProof<G>,
    relation_builder: F,
) -> BatchVerification
where
    G: CurveGroup,
    F: Fn(&G::ScalarType) -> LinearRelation<G::ScalarType>,
{
    let timer = start_timer!(|| "Verify relation proof");
    if !proof.is_on_curve() {
        end_timer!(timer);
        return BatchVerification::rejected();
    }
    let gens = params.gens();

    let u = batch_challenge(&proof.commitments);
    let mut openings = [false; BATCH_SIZE];
    for (ok, (v, opening)) in openings
        .iter_mut()
        .zip(proof.commitments.iter().zip(proof.openings.iter()))
    {
        *ok = v.combine(&u) == opening.combined_commitment && verify_evaluation(gens, opening);
    }

    let relation = relation_builder(&u);
    let evaluation_commitments = proof.openings.map(|o| o.combined_commitment);
    let relation_holds =
        verify_relation(gens, &relation, &evaluation_commitments, &proof.residue);
    end_timer!(timer);

    BatchVerification {
        openings,
        relation: relation_holds,
    }
}

/// Verify a batch proof.
pub fn verify_relation_proof<G, F>(
    params: &PublicParams<G>,
    proof: &BatchProof<G>,
    relation_builder: F,
) -> bool
where
    G: CurveGroup,
    F: Fn(&G::ScalarType) -> LinearRelation<G::ScalarType>,
{
    check_relation_proof(params, proof, relation_builder).is_valid()
}
