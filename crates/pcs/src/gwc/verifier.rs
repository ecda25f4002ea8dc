use bn254::{ff::Field, group::Curve, lincomb::g1_lincomb, G1Point, G1Projective, Scalar};
use itertools::{chain, izip, Itertools};
use polynomial::Domain;
use transcript::{Sha256Hasher, TranscriptReader};

use super::{ShiftMap, PERSONALIZATION};
use crate::{errors::VerifierError, lincomb, srs::Srs};

struct GroupOpening {
    shift: u64,
    u: Scalar,
    commitment: G1Projective,
    y: Scalar,
    witness: G1Point,
}

/// Verifies a proof produced by [`super::create_proof`] against the same
/// `shift_map` the prover used.
///
/// # Errors
/// Returns [`VerifierError::InvalidProof`] if `num_polys` doesn't match the
/// commitments actually written, the message fails to decode, or the
/// combined pairing check fails.
pub fn verify_proof(
    domain: &Domain,
    srs: &Srs,
    num_polys: usize,
    shift_map: &ShiftMap,
    proof: &[u8],
) -> Result<(), VerifierError> {
    let mut transcript = TranscriptReader::<Sha256Hasher>::new(PERSONALIZATION, proof);

    let mut commitments = Vec::with_capacity(num_polys);
    for _ in 0..num_polys {
        commitments.push(transcript.read_point().map_err(|_| VerifierError::InvalidProof)?);
    }

    let z = transcript.challenge();

    let mut groups = Vec::with_capacity(shift_map.len());
    for (shift, indices) in shift_map {
        let u = z * domain.generator.pow_vartime([*shift]);

        let mut ys = Vec::with_capacity(indices.len());
        for _ in indices {
            ys.push(transcript.read_scalar().map_err(|_| VerifierError::InvalidProof)?);
        }

        let alpha_s = transcript.challenge();
        let powers = lincomb::powers_of(alpha_s, indices.len());

        let witness = transcript.read_point().map_err(|_| VerifierError::InvalidProof)?;

        let group_points: Vec<_> = indices
            .iter()
            .map(|&i| commitments.get(i).copied().ok_or(VerifierError::InvalidProof))
            .collect::<Result<_, _>>()?;
        let commitment = lincomb::combine_points(&group_points, &powers);
        let y = lincomb::combine_scalars(&ys, &powers);

        groups.push(GroupOpening {
            shift: *shift,
            u,
            commitment,
            y,
            witness,
        });
    }

    let beta = transcript.challenge();
    let beta_powers: Vec<Scalar> = groups.iter().map(|g| beta.pow_vartime([g.shift])).collect();
    let witness_points: Vec<G1Point> = groups.iter().map(|g| g.witness).collect();

    // \sum beta^s * [commitment_s - y_s*G + u_s*witness_s]
    let lhs_g1 = {
        let commitment_points: Vec<G1Point> = groups.iter().map(|g| g.commitment.to_affine()).collect();
        let points = chain![&commitment_points, [&srs.gen_g1], &witness_points]
            .copied()
            .collect_vec();

        let y_lincomb: Scalar = izip!(&beta_powers, &groups).map(|(b, g)| *b * g.y).sum();
        let witness_scalars = izip!(&beta_powers, &groups).map(|(b, g)| *b * g.u);
        let scalars = chain![beta_powers.iter().copied(), [-y_lincomb], witness_scalars].collect_vec();

        g1_lincomb(&points, &scalars)
            .expect("points.len() == scalars.len()")
            .to_affine()
    };

    // -\sum beta^s * witness_s
    let rhs_g1 = {
        let neg_beta_powers: Vec<Scalar> = beta_powers.iter().map(|b| -b).collect();
        g1_lincomb(&witness_points, &neg_beta_powers)
            .expect("witness_points.len() == neg_beta_powers.len()")
            .to_affine()
    };

    bn254::multi_pairings(&[
        (&lhs_g1, &srs.gen_g2_prepared),
        (&rhs_g1, &srs.tau_g2_prepared),
    ])
    .then_some(())
    .ok_or(VerifierError::InvalidProof)
}
