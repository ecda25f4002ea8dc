//! Curve facade wrapping `halo2curves`' BN254 implementation.
//!
//! Protocol crates never touch `halo2curves` directly; they go through the
//! type aliases and free functions exported here, the same way the rest of
//! this corpus keeps a pairing library behind a facade crate so the curve
//! backend can be swapped without touching protocol code.

use std::sync::OnceLock;

pub use ff;
pub use group;
pub use pairing;

pub mod batch_inversion;
pub mod lincomb;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

use traits::*;

/// Affine representation of a point in the BN254 G1 curve group.
pub type G1Point = halo2curves::bn256::G1Affine;
/// Projective representation of a point in the BN254 G1 curve group.
pub type G1Projective = halo2curves::bn256::G1;
/// Affine representation of a point in the BN254 G2 curve group.
pub type G2Point = halo2curves::bn256::G2Affine;
/// Projective representation of a point in the BN254 G2 curve group.
pub type G2Projective = halo2curves::bn256::G2;
/// Precomputed G2 point for efficient pairing computations.
pub type G2Prepared = halo2curves::bn256::G2Prepared;
/// Scalar field element for the BN254 curve (`Fr`).
pub type Scalar = halo2curves::bn256::Fr;

/// Subgroup 2-adicity of the BN254 scalar field: `p - 1 = c * 2^TWO_ADICITY`, `c` odd.
pub const TWO_ADICITY: u32 = 28;

/// A field generator used by the reference source to derive the `2^TWO_ADICITY`-th
/// root of unity. Kept for documentation purposes; the root of unity itself is
/// hard-coded below rather than re-derived at runtime.
pub const FIELD_GENERATOR: u64 = 7;

const ROOT_OF_UNITY_DECIMAL: &str =
    "1748695177688661943023146337482803886740723238769601073607632802312037301404";
const COSET_SHIFT_DECIMAL: &str =
    "21888242871839275217838484774961031246154997185409878258781734729429964517155";
const TRAPDOOR_DECIMAL: &str =
    "1443473767099151411963195764052474756349404108963148607823836485406351569209";

fn parse_decimal(s: &str) -> Scalar {
    Scalar::from_str_vartime(s).expect("constant is a valid decimal representation of a scalar")
}

/// The primitive `2^TWO_ADICITY`-th root of unity `ω₀` for the BN254 scalar field.
///
/// A domain of exponent `exp <= TWO_ADICITY` derives its generator as
/// `ω₀^(2^(TWO_ADICITY - exp))`.
pub fn root_of_unity() -> Scalar {
    static CELL: OnceLock<Scalar> = OnceLock::new();
    *CELL.get_or_init(|| parse_decimal(ROOT_OF_UNITY_DECIMAL))
}

/// A fixed non-subgroup element used to shift a domain for coset FFTs.
pub fn coset_shift() -> Scalar {
    static CELL: OnceLock<Scalar> = OnceLock::new();
    *CELL.get_or_init(|| parse_decimal(COSET_SHIFT_DECIMAL))
}

/// The fixed, insecure trapdoor `τ` used to build the SRS.
///
/// This is deliberately reproducible and MUST NOT be used outside of testing.
/// See the crate-level SRS setup documentation for the security caveat.
pub fn insecure_trapdoor() -> Scalar {
    static CELL: OnceLock<Scalar> = OnceLock::new();
    *CELL.get_or_init(|| parse_decimal(TRAPDOOR_DECIMAL))
}

/// Checks whether the product of pairings over the given G1 x G2 pairs equals the identity.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    use pairing::{MillerLoopResult, MultiMillerLoop};
    halo2curves::bn256::Bn256::multi_miller_loop(pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Converts G1 projective points to their affine representation.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    batch_normalize_points(projective_points)
}

/// Converts G2 projective points to their affine representation.
pub fn g2_batch_normalize(projective_points: &[G2Projective]) -> Vec<G2Point> {
    batch_normalize_points(projective_points)
}

/// Generic utility to batch-normalize projective points for any curve implementing `PrimeCurveAffine`.
fn batch_normalize_points<T: PrimeCurveAffine>(points: &[T::Curve]) -> Vec<T>
where
    T::Curve: Curve<AffineRepr = T>,
{
    let mut affine_points = vec![T::identity(); points.len()];
    T::Curve::batch_normalize(points, &mut affine_points);
    affine_points
}

/// Uncompressed affine encoding of a G1 point: `x || y`, each coordinate
/// little-endian, 64 bytes total. The identity point encodes as all zeros.
pub fn g1_to_bytes(point: &G1Point) -> [u8; 64] {
    use halo2curves::CurveAffine;

    let mut out = [0u8; 64];
    if let Some(coords) = Option::from(point.coordinates()) {
        let coords: halo2curves::Coordinates<G1Point> = coords;
        out[..32].copy_from_slice(coords.x().to_repr().as_ref());
        out[32..].copy_from_slice(coords.y().to_repr().as_ref());
    }
    out
}

/// Inverse of [`g1_to_bytes`]. Returns `None` if either coordinate is not a
/// canonical field element or the pair is not on the curve.
pub fn g1_from_bytes(bytes: &[u8; 64]) -> Option<G1Point> {
    use halo2curves::{bn256::Fq, CurveAffine};

    let mut x_repr = <Fq as PrimeField>::Repr::default();
    x_repr.as_mut().copy_from_slice(&bytes[..32]);
    let mut y_repr = <Fq as PrimeField>::Repr::default();
    y_repr.as_mut().copy_from_slice(&bytes[32..]);

    let x = Fq::from_repr(x_repr);
    let y = Fq::from_repr(y_repr);
    if bool::from(x.is_none()) || bool::from(y.is_none()) {
        return None;
    }
    Option::from(G1Point::from_xy(x.unwrap(), y.unwrap()))
}

/// Little-endian 32-byte encoding of a scalar.
pub fn scalar_to_bytes(scalar: &Scalar) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(scalar.to_repr().as_ref());
    out
}

/// Inverse of [`scalar_to_bytes`]. Returns `None` if the bytes are not a
/// canonical representative (i.e. `>= p`).
pub fn scalar_from_bytes(bytes: &[u8; 32]) -> Option<Scalar> {
    let mut repr = <Scalar as PrimeField>::Repr::default();
    repr.as_mut().copy_from_slice(bytes);
    Option::from(Scalar::from_repr(repr))
}

/// Reduces a little-endian 32-byte digest to a scalar by taking it modulo `p`.
///
/// Caveat (see the transcript's challenge derivation): this introduces a small
/// bias since `p` is a 254-bit value and the input space is a full 256 bits.
/// Acceptable for this library's purposes provided prover and verifier agree.
pub fn reduce_bytes_to_scalar(bytes: [u8; 32]) -> Scalar {
    use ff::FromUniformBytes;
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&bytes);
    Scalar::from_uniform_bytes(&wide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_of_unity_has_correct_order() {
        let root = root_of_unity();
        let order = 1u64 << TWO_ADICITY;
        assert_eq!(root.pow_vartime([order]), Scalar::ONE);
        for i in 0..TWO_ADICITY {
            assert_ne!(root.pow_vartime([1u64 << i]), Scalar::ONE);
        }
    }

    #[test]
    fn coset_shift_is_not_in_prime_order_subgroup_of_small_domains() {
        let k = coset_shift();
        // For every exponent we actually use, k^n != 1, so k generates a
        // distinct coset of the subgroup of that size.
        for exp in 1..=10u32 {
            let n = 1u64 << exp;
            assert_ne!(k.pow_vartime([n]), Scalar::ONE);
        }
    }

    #[test]
    fn trapdoor_is_nonzero() {
        assert_ne!(insecure_trapdoor(), Scalar::ZERO);
    }

    #[test]
    fn multi_pairings_sanity() {
        let g1 = G1Point::generator();
        let g2 = G2Point::generator();
        let g2_prep = G2Prepared::from(g2);
        let g1_neg = -g1;

        assert!(multi_pairings(&[(&g1, &g2_prep), (&g1_neg, &g2_prep)]));
        assert!(!multi_pairings(&[(&g1, &g2_prep), (&g1, &g2_prep)]));
    }

    #[test]
    fn g1_bytes_roundtrip() {
        let point = G1Point::from(G1Projective::random(&mut rand::thread_rng()));
        let bytes = g1_to_bytes(&point);
        assert_eq!(g1_from_bytes(&bytes), Some(point));
    }

    #[test]
    fn g1_identity_encodes_as_zero() {
        assert_eq!(g1_to_bytes(&G1Point::identity()), [0u8; 64]);
    }

    #[test]
    fn scalar_bytes_roundtrip() {
        let scalar = Scalar::random(&mut rand::thread_rng());
        let bytes = scalar_to_bytes(&scalar);
        assert_eq!(scalar_from_bytes(&bytes), Some(scalar));
    }

    #[test]
    fn batch_normalize_roundtrip() {
        let mut rng = rand::thread_rng();
        let points: Vec<G1Projective> = (0..32).map(|_| G1Projective::random(&mut rng)).collect();
        let affine = g1_batch_normalize(&points);
        for (p, a) in points.iter().zip(affine.iter()) {
            assert_eq!(G1Point::from(*p), *a);
        }
    }
}
