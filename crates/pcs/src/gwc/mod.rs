//! GWC: shift-grouped multi-open. Polynomials are partitioned by which
//! power-of-omega shift of the challenge point they're opened at.

pub mod prover;
pub mod verifier;

pub use prover::create_proof;
pub use verifier::verify_proof;

const PERSONALIZATION: &[u8] = b"PCS-GWC-V1";

/// An ordered association from shift exponent to the indices (into the
/// caller's polynomial list) opened at `z * omega^shift`.
///
/// Sorted ascending by shift exponent so prover and verifier enumerate
/// groups, and polynomial indices within a group, in the same order.
pub type ShiftMap = Vec<(u64, Vec<usize>)>;

#[cfg(test)]
mod tests {
    use polynomial::{Domain, PolyCoeff};

    use super::*;
    use crate::srs::Srs;

    fn shift_map() -> ShiftMap {
        vec![
            (0, vec![1, 0]),
            (1, vec![0, 1, 3, 2]),
            (2, vec![3]),
            (19, vec![3, 2, 1, 0]),
        ]
    }

    #[test]
    fn gwc_n8_four_polys_end_to_end() {
        let domain = Domain::new(8);
        let srs = Srs::setup(&domain);
        let mut rng = rand::thread_rng();
        let polys: Vec<_> = (0..4).map(|_| PolyCoeff::random(&mut rng, 8)).collect();

        let map = shift_map();
        let proof = create_proof(&domain, &srs, &polys, &map);
        assert!(verify_proof(&domain, &srs, polys.len(), &map, &proof).is_ok());
    }

    #[test]
    fn gwc_tampered_proof_is_rejected() {
        let domain = Domain::new(8);
        let srs = Srs::setup(&domain);
        let mut rng = rand::thread_rng();
        let polys: Vec<_> = (0..4).map(|_| PolyCoeff::random(&mut rng, 8)).collect();
        let map = shift_map();

        let mut proof = create_proof(&domain, &srs, &polys, &map);
        let last = proof.len() - 1;
        proof[last] ^= 0xFF;
        assert!(verify_proof(&domain, &srs, polys.len(), &map, &proof).is_err());
    }
}
