//! BDFG: linearized multi-point batch opening. Each polynomial is opened at
//! its own subset of shifted points `{z * omega^s}`; a single linearization
//! polynomial reduces the whole batch to one pairing check.

pub mod batch;
pub mod single;

pub use batch::{create_proof as create_proof_batch, verify_proof as verify_proof_batch};
pub use single::{create_proof, verify_proof};

use bn254::{ff::Field, Scalar};
use polynomial::Domain;

const PERSONALIZATION_SINGLE: &[u8] = b"PCS-BDFG-SINGLE-V1";
const PERSONALIZATION_BATCH: &[u8] = b"PCS-BDFG-BATCH-V1";

/// Canonical, deduplicated `{z * omega^s : s in shifts}`, sorted ascending by
/// shift. Both sides of the protocol must derive this identically since the
/// point set (not just its size) determines the linearization polynomial.
fn shifted_points(domain: &Domain, z: Scalar, shifts: &[u64]) -> Vec<Scalar> {
    let mut sorted = shifts.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
        .iter()
        .map(|s| z * domain.generator.pow_vartime([*s]))
        .collect()
}

/// The sorted, deduplicated union of several shift lists.
fn union_shifts(shift_lists: &[Vec<u64>]) -> Vec<u64> {
    let mut all: Vec<u64> = shift_lists.iter().flatten().copied().collect();
    all.sort_unstable();
    all.dedup();
    all
}

#[cfg(test)]
mod tests {
    use polynomial::PolyCoeff;

    use super::*;
    use crate::srs::Srs;

    #[test]
    fn bdfg_single_n64_end_to_end() {
        let domain = Domain::new(64);
        let srs = Srs::setup(&domain);
        let f = PolyCoeff::random(&mut rand::thread_rng(), 59);
        let shifts = vec![1u64, 2, 3, 10, 11];

        let proof = create_proof(&domain, &srs, &f, &shifts);
        assert!(verify_proof(&domain, &srs, &shifts, &proof).is_ok());
    }

    #[test]
    fn bdfg_single_degrees_match_spec() {
        let domain = Domain::new(64);
        let z = Scalar::from(777u64);
        let shifts = vec![1u64, 2, 3, 10, 11];
        let f = PolyCoeff::random(&mut rand::thread_rng(), 59);

        let points = shifted_points(&domain, z, &shifts);
        let ys: Vec<Scalar> = points.iter().map(|t| f.eval(t)).collect();
        let r = polynomial::lagrange_interpolate(&points.iter().copied().zip(ys).collect::<Vec<_>>())
            .expect("points are pairwise distinct");
        let z_t0 = polynomial::vanishing_poly(&points);
        let h = domain.div(&f.sub(&r), &z_t0);
        assert_eq!(h.degree(), f.degree() - points.len() as isize);

        let z_star = Scalar::from(999u64);
        let r_z_star = r.eval(&z_star);
        let z_t0_z_star = z_t0.eval(&z_star);
        let l = f
            .sub(&PolyCoeff::from(vec![r_z_star]))
            .sub(&h.scale(z_t0_z_star));
        let u = domain.div(&l, &PolyCoeff::degree_one(z_star));
        assert_eq!(u.degree(), f.degree() - 1);
    }

    #[test]
    fn bdfg_single_tampered_proof_is_rejected() {
        let domain = Domain::new(64);
        let srs = Srs::setup(&domain);
        let f = PolyCoeff::random(&mut rand::thread_rng(), 59);
        let shifts = vec![1u64, 2, 3, 10, 11];

        let mut proof = create_proof(&domain, &srs, &f, &shifts);
        *proof.last_mut().unwrap() ^= 0xFF;
        assert!(verify_proof(&domain, &srs, &shifts, &proof).is_err());
    }

    #[test]
    fn bdfg_batch_n64_two_polys_end_to_end() {
        let domain = Domain::new(64);
        let srs = Srs::setup(&domain);
        let mut rng = rand::thread_rng();
        let polys = vec![PolyCoeff::random(&mut rng, 59), PolyCoeff::random(&mut rng, 59)];
        let shift_lists = vec![vec![1u64, 2, 3], vec![1u64, 2]];

        let proof = create_proof_batch(&domain, &srs, &polys, &shift_lists);
        assert!(verify_proof_batch(&domain, &srs, &shift_lists, &proof).is_ok());
    }

    #[test]
    fn bdfg_batch_tampered_proof_is_rejected() {
        let domain = Domain::new(64);
        let srs = Srs::setup(&domain);
        let mut rng = rand::thread_rng();
        let polys = vec![PolyCoeff::random(&mut rng, 59), PolyCoeff::random(&mut rng, 59)];
        let shift_lists = vec![vec![1u64, 2, 3], vec![1u64, 2]];

        let mut proof = create_proof_batch(&domain, &srs, &polys, &shift_lists);
        *proof.last_mut().unwrap() ^= 0xFF;
        assert!(verify_proof_batch(&domain, &srs, &shift_lists, &proof).is_err());
    }

    #[test]
    fn union_shifts_dedupes_and_sorts() {
        assert_eq!(
            union_shifts(&[vec![3, 1, 2], vec![2, 5]]),
            vec![1, 2, 3, 5]
        );
    }
}
