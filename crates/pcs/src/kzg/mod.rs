//! Plain KZG: single polynomial at a single point, and a same-point batch.

pub mod prover;
pub mod verifier;

pub use prover::{create_proof, create_proof_batch};
pub use verifier::{verify_proof, verify_proof_batch};

const PERSONALIZATION_SINGLE: &[u8] = b"PCS-KZG-SINGLE-V1";
const PERSONALIZATION_BATCH: &[u8] = b"PCS-KZG-BATCH-V1";

#[cfg(test)]
mod tests {
    use polynomial::{Domain, PolyCoeff};

    use super::*;
    use crate::srs::Srs;

    #[test]
    fn kzg_single_n8_end_to_end() {
        let domain = Domain::new(8);
        let srs = Srs::setup(&domain);
        let f = PolyCoeff::random(&mut rand::thread_rng(), 8);

        let proof = create_proof(&domain, &srs, &f);
        assert!(verify_proof(&srs, &proof).is_ok());
    }

    #[test]
    fn kzg_single_tampered_proof_is_rejected() {
        let domain = Domain::new(8);
        let srs = Srs::setup(&domain);
        let f = PolyCoeff::random(&mut rand::thread_rng(), 8);

        let mut proof = create_proof(&domain, &srs, &f);
        *proof.last_mut().unwrap() ^= 0xFF;
        assert!(verify_proof(&srs, &proof).is_err());
    }

    #[test]
    fn kzg_single_point_batch_n8_k4_end_to_end() {
        let domain = Domain::new(8);
        let srs = Srs::setup(&domain);
        let mut rng = rand::thread_rng();
        let polys: Vec<_> = (0..4).map(|_| PolyCoeff::random(&mut rng, 4)).collect();

        let proof = create_proof_batch(&domain, &srs, &polys);
        assert!(verify_proof_batch(&srs, polys.len(), &proof).is_ok());
    }

    #[test]
    fn kzg_batch_rejects_wrong_count() {
        let domain = Domain::new(8);
        let srs = Srs::setup(&domain);
        let mut rng = rand::thread_rng();
        let polys: Vec<_> = (0..4).map(|_| PolyCoeff::random(&mut rng, 4)).collect();

        let proof = create_proof_batch(&domain, &srs, &polys);
        assert!(verify_proof_batch(&srs, 3, &proof).is_err());
    }

    #[test]
    fn kzg_single_altered_evaluation_is_rejected() {
        let domain = Domain::new(8);
        let srs = Srs::setup(&domain);
        let f = PolyCoeff::random(&mut rand::thread_rng(), 8);
        let mut proof = create_proof(&domain, &srs, &f);

        // The commitment is a 64-byte point; the evaluation scalar follows it.
        proof[64] ^= 0x01;
        assert!(verify_proof(&srs, &proof).is_err());
    }
}
