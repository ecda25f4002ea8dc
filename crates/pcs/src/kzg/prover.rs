use bn254::Scalar;
use polynomial::{Domain, PolyCoeff};
use transcript::{Sha256Hasher, TranscriptWriter};

use super::{PERSONALIZATION_BATCH, PERSONALIZATION_SINGLE};
use crate::{commit::commit_monomial, lincomb, srs::Srs};

/// Opens `f` at a Fiat-Shamir-derived challenge. Returns the transcript's
/// byte message, which doubles as the proof's wire format.
///
/// # Panics
/// Panics if `f` has more coefficients than the SRS supports (a caller
/// contract, per the commitment key's size).
pub fn create_proof(domain: &Domain, srs: &Srs, f: &PolyCoeff) -> Vec<u8> {
    let mut transcript = TranscriptWriter::<Sha256Hasher>::new(PERSONALIZATION_SINGLE);

    let commitment = commit_monomial(srs, f).expect("f fits the commitment key");
    transcript.write_point(&commitment);

    let z = transcript.challenge();
    let y = f.eval(&z);
    let witness_poly = domain.div(&f.sub(&PolyCoeff::from(vec![y])), &PolyCoeff::degree_one(z));
    let witness = commit_monomial(srs, &witness_poly).expect("quotient fits the commitment key");

    transcript.write_scalar(&y);
    transcript.write_point(&witness);

    transcript.finalize()
}

/// Opens `polys` at a single shared Fiat-Shamir-derived challenge.
///
/// # Panics
/// Panics if any polynomial is too large for the SRS.
pub fn create_proof_batch(domain: &Domain, srs: &Srs, polys: &[PolyCoeff]) -> Vec<u8> {
    let mut transcript = TranscriptWriter::<Sha256Hasher>::new(PERSONALIZATION_BATCH);

    let commitments: Vec<_> = polys
        .iter()
        .map(|f| commit_monomial(srs, f).expect("polynomial fits the commitment key"))
        .collect();
    for commitment in &commitments {
        transcript.write_point(commitment);
    }

    let z = transcript.challenge();
    let ys: Vec<Scalar> = polys.iter().map(|f| f.eval(&z)).collect();
    for y in &ys {
        transcript.write_scalar(y);
    }

    let alpha = transcript.challenge();
    let powers = lincomb::powers_of(alpha, polys.len());

    let shifted: Vec<PolyCoeff> = polys
        .iter()
        .zip(&ys)
        .map(|(f, y)| f.sub(&PolyCoeff::from(vec![*y])))
        .collect();
    let combined = lincomb::combine_polys(&shifted, &powers);
    let quotient = domain.div(&combined, &PolyCoeff::degree_one(z));
    let witness = commit_monomial(srs, &quotient).expect("quotient fits the commitment key");
    transcript.write_point(&witness);

    transcript.finalize()
}
