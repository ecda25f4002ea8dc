use bn254::group::Curve;
use transcript::{Sha256Hasher, TranscriptReader};

use super::{PERSONALIZATION_BATCH, PERSONALIZATION_SINGLE};
use crate::{errors::VerifierError, lincomb, pairing::check_opening, srs::Srs};

/// Verifies a proof produced by [`super::create_proof`].
///
/// # Errors
/// Returns [`VerifierError::InvalidProof`] if the transcript message does not
/// decode, or decodes but fails the pairing check.
pub fn verify_proof(srs: &Srs, proof: &[u8]) -> Result<(), VerifierError> {
    let mut transcript = TranscriptReader::<Sha256Hasher>::new(PERSONALIZATION_SINGLE, proof);

    let commitment = transcript.read_point().map_err(|_| VerifierError::InvalidProof)?;
    let z = transcript.challenge();
    let y = transcript.read_scalar().map_err(|_| VerifierError::InvalidProof)?;
    let witness = transcript.read_point().map_err(|_| VerifierError::InvalidProof)?;

    check_opening(srs, commitment, z, y, witness)
        .then_some(())
        .ok_or(VerifierError::InvalidProof)
}

/// Verifies a proof produced by [`super::create_proof_batch`].
///
/// # Errors
/// Returns [`VerifierError::InvalidProof`] if `num_polys` doesn't match the
/// proof's shape, the message fails to decode, or the pairing check fails.
pub fn verify_proof_batch(srs: &Srs, num_polys: usize, proof: &[u8]) -> Result<(), VerifierError> {
    let mut transcript = TranscriptReader::<Sha256Hasher>::new(PERSONALIZATION_BATCH, proof);

    let mut commitments = Vec::with_capacity(num_polys);
    for _ in 0..num_polys {
        commitments.push(transcript.read_point().map_err(|_| VerifierError::InvalidProof)?);
    }

    let z = transcript.challenge();

    let mut ys = Vec::with_capacity(num_polys);
    for _ in 0..num_polys {
        ys.push(transcript.read_scalar().map_err(|_| VerifierError::InvalidProof)?);
    }

    let alpha = transcript.challenge();
    let powers = lincomb::powers_of(alpha, num_polys);

    let combined_commitment = lincomb::combine_points(&commitments, &powers).to_affine();
    let combined_y = lincomb::combine_scalars(&ys, &powers);

    let witness = transcript.read_point().map_err(|_| VerifierError::InvalidProof)?;

    check_opening(srs, combined_commitment, z, combined_y, witness)
        .then_some(())
        .ok_or(VerifierError::InvalidProof)
}
