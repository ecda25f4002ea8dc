use bn254::{ff::Field, Scalar};
use polynomial::{Domain, PolyCoeff};
use transcript::{Sha256Hasher, TranscriptWriter};

use super::{ShiftMap, PERSONALIZATION};
use crate::{commit::commit_monomial, lincomb, srs::Srs};

/// Opens each polynomial referenced by `shift_map` at `z * omega^shift`.
///
/// # Panics
/// Panics if any polynomial in `shift_map` is too large for the SRS, or if
/// `shift_map` references an out-of-range polynomial index.
pub fn create_proof(domain: &Domain, srs: &Srs, polys: &[PolyCoeff], shift_map: &ShiftMap) -> Vec<u8> {
    let mut transcript = TranscriptWriter::<Sha256Hasher>::new(PERSONALIZATION);

    let commitments: Vec<_> = polys
        .iter()
        .map(|f| commit_monomial(srs, f).expect("polynomial fits the commitment key"))
        .collect();
    for commitment in &commitments {
        transcript.write_point(commitment);
    }

    let z = transcript.challenge();

    let mut witnesses = Vec::with_capacity(shift_map.len());
    for (shift, indices) in shift_map {
        let u = z * domain.generator.pow_vartime([*shift]);

        let selected: Vec<&PolyCoeff> = indices.iter().map(|&i| &polys[i]).collect();
        let ys: Vec<Scalar> = selected.iter().map(|f| f.eval(&u)).collect();
        for y in &ys {
            transcript.write_scalar(y);
        }

        let alpha_s = transcript.challenge();
        let powers = lincomb::powers_of(alpha_s, selected.len());

        let shifted: Vec<PolyCoeff> = selected
            .iter()
            .zip(&ys)
            .map(|(f, y)| f.sub(&PolyCoeff::from(vec![*y])))
            .collect();
        let group_poly = lincomb::combine_polys(&shifted, &powers);
        let quotient = domain.div(&group_poly, &PolyCoeff::degree_one(u));
        let witness = commit_monomial(srs, &quotient).expect("quotient fits the commitment key");
        transcript.write_point(&witness);
        witnesses.push(witness);
    }

    // Final combining challenge; its own derivation has no further effect on
    // the prover's messages (there is nothing left to write after it), but
    // deriving it keeps the transcript position identical to the verifier's.
    let _beta = transcript.challenge();

    transcript.finalize()
}
