use bn254::{group::Curve, G1Point, G1Projective, Scalar};

use crate::srs::Srs;

/// Checks `e(F - y*G + z*W, gen_g2) * e(-W, tau_g2) == 1`, the KZG opening
/// relation `w(tau)*(tau - z) == f(tau) - y` verified via pairings.
///
/// Every scheme in this crate reduces its final check to this shape: plain
/// KZG applies it directly, GWC folds several groups into one (F, z, y, W)
/// quadruple with powers of a combining challenge, and BDFG applies it with
/// `y = 0` to its linearization polynomial.
pub fn check_opening(srs: &Srs, commitment: G1Point, z: Scalar, y: Scalar, witness: G1Point) -> bool {
    let lhs_g1 = (G1Projective::from(commitment) - (G1Projective::from(srs.gen_g1) * y)
        + G1Projective::from(witness) * z)
        .to_affine();
    let rhs_g1 = -witness;

    bn254::multi_pairings(&[
        (&lhs_g1, &srs.gen_g2_prepared),
        (&rhs_g1, &srs.tau_g2_prepared),
    ])
}
