use bn254::{ff::Field, group::Curve, G1Projective, Scalar};
use polynomial::{lagrange_interpolate, vanishing_poly, Domain, PolyCoeff};
use transcript::{Sha256Hasher, TranscriptReader, TranscriptWriter};

use super::{shifted_points, PERSONALIZATION_SINGLE};
use crate::{commit::commit_monomial, errors::VerifierError, pairing::check_opening, srs::Srs};

/// Opens `f` at `{z * omega^s : s in shifts}` for a transcript-derived `z`,
/// using the BDFG linearization trick to collapse the whole set into one
/// witness and one final pairing check.
///
/// # Panics
/// Panics if `f` or its quotient is too large for the SRS.
pub fn create_proof(domain: &Domain, srs: &Srs, f: &PolyCoeff, shifts: &[u64]) -> Vec<u8> {
    let mut transcript = TranscriptWriter::<Sha256Hasher>::new(PERSONALIZATION_SINGLE);

    let commitment = commit_monomial(srs, f).expect("polynomial fits the commitment key");
    transcript.write_point(&commitment);

    let z = transcript.challenge();
    let points = shifted_points(domain, z, shifts);

    let ys: Vec<Scalar> = points.iter().map(|t| f.eval(t)).collect();
    for y in &ys {
        transcript.write_scalar(y);
    }

    let r = lagrange_interpolate(&points.iter().copied().zip(ys).collect::<Vec<_>>())
        .expect("shifted points are pairwise distinct");
    let z_t0 = vanishing_poly(&points);
    let h = domain.div(&f.sub(&r), &z_t0);
    let witness = commit_monomial(srs, &h).expect("quotient fits the commitment key");
    transcript.write_point(&witness);

    let z_star = transcript.challenge();
    let r_z_star = r.eval(&z_star);
    let z_t0_z_star = z_t0.eval(&z_star);

    let linearization = f
        .sub(&PolyCoeff::from(vec![r_z_star]))
        .sub(&h.scale(z_t0_z_star));
    let u = domain.div(&linearization, &PolyCoeff::degree_one(z_star));
    let final_witness = commit_monomial(srs, &u).expect("linearization quotient fits the commitment key");
    transcript.write_point(&final_witness);

    transcript.finalize()
}

/// Verifies a proof produced by [`create_proof`] against the same `shifts`.
///
/// # Errors
/// Returns [`VerifierError::InvalidProof`] if the message fails to decode or
/// the final pairing check fails.
pub fn verify_proof(
    domain: &Domain,
    srs: &Srs,
    shifts: &[u64],
    proof: &[u8],
) -> Result<(), VerifierError> {
    let mut transcript = TranscriptReader::<Sha256Hasher>::new(PERSONALIZATION_SINGLE, proof);

    let commitment = transcript.read_point().map_err(|_| VerifierError::InvalidProof)?;
    let z = transcript.challenge();
    let points = shifted_points(domain, z, shifts);

    let mut ys = Vec::with_capacity(points.len());
    for _ in &points {
        ys.push(transcript.read_scalar().map_err(|_| VerifierError::InvalidProof)?);
    }

    let r = lagrange_interpolate(&points.iter().copied().zip(ys).collect::<Vec<_>>())
        .ok_or(VerifierError::InvalidProof)?;
    let z_t0 = vanishing_poly(&points);

    let witness = transcript.read_point().map_err(|_| VerifierError::InvalidProof)?;
    let z_star = transcript.challenge();
    let r_z_star = r.eval(&z_star);
    let z_t0_z_star = z_t0.eval(&z_star);

    let final_witness = transcript.read_point().map_err(|_| VerifierError::InvalidProof)?;

    let linearization_point = G1Projective::from(commitment)
        - G1Projective::from(srs.gen_g1) * r_z_star
        - G1Projective::from(witness) * z_t0_z_star;

    check_opening(
        srs,
        linearization_point.to_affine(),
        z_star,
        Scalar::ZERO,
        final_witness,
    )
    .then_some(())
    .ok_or(VerifierError::InvalidProof)
}
