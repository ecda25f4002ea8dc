use bn254::{ff::Field, group::Curve, lincomb::g1_lincomb, G1Point, Scalar};
use itertools::{chain, izip, Itertools};
use polynomial::{lagrange_interpolate, vanishing_poly, Domain, PolyCoeff};
use transcript::{Sha256Hasher, TranscriptReader, TranscriptWriter};

use super::{shifted_points, union_shifts, PERSONALIZATION_BATCH};
use crate::{commit::commit_monomial, errors::VerifierError, lincomb, pairing::check_opening, srs::Srs};

/// Per-polynomial bookkeeping shared between the two transcript passes.
struct OpeningSet {
    r: PolyCoeff,
    z_ti: PolyCoeff,
}

/// Opens several polynomials, each at its own shifted point set, batching
/// every opening into a single linearization polynomial and one final
/// witness.
///
/// # Panics
/// Panics if `polys.len() != shift_lists.len()`, or a polynomial or quotient
/// is too large for the SRS.
pub fn create_proof(domain: &Domain, srs: &Srs, polys: &[PolyCoeff], shift_lists: &[Vec<u64>]) -> Vec<u8> {
    assert_eq!(polys.len(), shift_lists.len());

    let mut transcript = TranscriptWriter::<Sha256Hasher>::new(PERSONALIZATION_BATCH);

    let commitments: Vec<_> = polys
        .iter()
        .map(|f| commit_monomial(srs, f).expect("polynomial fits the commitment key"))
        .collect();
    for commitment in &commitments {
        transcript.write_point(commitment);
    }

    let z = transcript.challenge();

    let mut openings = Vec::with_capacity(polys.len());
    for (f, shifts) in polys.iter().zip(shift_lists) {
        let points = shifted_points(domain, z, shifts);
        let ys: Vec<Scalar> = points.iter().map(|t| f.eval(t)).collect();
        for y in &ys {
            transcript.write_scalar(y);
        }
        let r = lagrange_interpolate(&points.iter().copied().zip(ys).collect::<Vec<_>>())
            .expect("shifted points are pairwise distinct");
        let z_ti = vanishing_poly(&points);
        openings.push(OpeningSet { r, z_ti });
    }

    let alpha = transcript.challenge();
    let powers = lincomb::powers_of(alpha, polys.len());

    let h_polys: Vec<PolyCoeff> = polys
        .iter()
        .zip(&openings)
        .map(|(f, set)| domain.div(&f.sub(&set.r), &set.z_ti))
        .collect();
    let w_poly = lincomb::combine_polys(&h_polys, &powers);
    let witness = commit_monomial(srs, &w_poly).expect("combined quotient fits the commitment key");
    transcript.write_point(&witness);

    let z_star = transcript.challenge();

    let t_points = shifted_points(domain, z, &union_shifts(shift_lists));
    let z_t = vanishing_poly(&t_points);
    let z_t_z_star = z_t.eval(&z_star);

    let mut linearization = PolyCoeff::zero();
    for ((f, set), power) in polys.iter().zip(&openings).zip(&powers) {
        let r_z_star = set.r.eval(&z_star);
        let z_ti_z_star = set.z_ti.eval(&z_star);
        let z_i_prime_z_star = z_t_z_star
            * z_ti_z_star
                .invert()
                .expect("T_i is a subset of T so Z_{T_i} does not vanish at z*");
        let coefficient = *power * z_i_prime_z_star;
        linearization = linearization.add(&f.sub(&PolyCoeff::from(vec![r_z_star])).scale(coefficient));
    }
    linearization = linearization.sub(&w_poly.scale(z_t_z_star));

    let u = domain.div(&linearization, &PolyCoeff::degree_one(z_star));
    let final_witness = commit_monomial(srs, &u).expect("linearization quotient fits the commitment key");
    transcript.write_point(&final_witness);

    transcript.finalize()
}

/// Verifies a proof produced by [`create_proof`] against the same
/// `shift_lists`.
///
/// # Errors
/// Returns [`VerifierError::InvalidProof`] if the message fails to decode or
/// the final pairing check fails.
pub fn verify_proof(
    domain: &Domain,
    srs: &Srs,
    shift_lists: &[Vec<u64>],
    proof: &[u8],
) -> Result<(), VerifierError> {
    let mut transcript = TranscriptReader::<Sha256Hasher>::new(PERSONALIZATION_BATCH, proof);

    let mut commitments = Vec::with_capacity(shift_lists.len());
    for _ in shift_lists {
        commitments.push(transcript.read_point().map_err(|_| VerifierError::InvalidProof)?);
    }

    let z = transcript.challenge();

    let mut openings = Vec::with_capacity(shift_lists.len());
    for shifts in shift_lists {
        let points = shifted_points(domain, z, shifts);
        let mut ys = Vec::with_capacity(points.len());
        for _ in &points {
            ys.push(transcript.read_scalar().map_err(|_| VerifierError::InvalidProof)?);
        }
        let r = lagrange_interpolate(&points.iter().copied().zip(ys).collect::<Vec<_>>())
            .ok_or(VerifierError::InvalidProof)?;
        let z_ti = vanishing_poly(&points);
        openings.push(OpeningSet { r, z_ti });
    }

    let alpha = transcript.challenge();
    let powers = lincomb::powers_of(alpha, shift_lists.len());

    let witness = transcript.read_point().map_err(|_| VerifierError::InvalidProof)?;
    let z_star = transcript.challenge();

    let t_points = shifted_points(domain, z, &union_shifts(shift_lists));
    let z_t = vanishing_poly(&t_points);
    let z_t_z_star = z_t.eval(&z_star);

    // coefficient_i = power_i * z_t(z*) / z_{T_i}(z*)
    let coefficients: Vec<Scalar> = openings
        .iter()
        .map(|set| {
            let z_ti_z_star = set.z_ti.eval(&z_star);
            Option::<Scalar>::from(z_ti_z_star.invert())
                .map(|inv| z_t_z_star * inv)
                .ok_or(VerifierError::InvalidProof)
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .zip(&powers)
        .map(|(z_i_prime_z_star, power)| *power * z_i_prime_z_star)
        .collect();

    // \sum coefficient_i * [commitment_i - r_i(z*)*G] - z_t(z*) * witness
    let linearization_point = {
        let points = chain![&commitments, [&srs.gen_g1], [&witness]]
            .copied()
            .collect_vec();

        let r_lincomb: Scalar = izip!(&coefficients, &openings)
            .map(|(c, set)| *c * set.r.eval(&z_star))
            .sum();
        let scalars = chain![coefficients.iter().copied(), [-r_lincomb], [-z_t_z_star]].collect_vec();

        g1_lincomb(&points, &scalars).expect("points.len() == scalars.len()")
    };

    let final_witness = transcript.read_point().map_err(|_| VerifierError::InvalidProof)?;

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
