use bn254::{ff::Field, group::Curve, lincomb::g1_lincomb, G1Point, G1Projective, Scalar};
use itertools::{izip, Itertools};
use polynomial::PolyCoeff;

/// `[1, alpha, alpha^2, ..., alpha^(n-1)]`.
pub fn powers_of(alpha: Scalar, n: usize) -> Vec<Scalar> {
    let mut powers = Vec::with_capacity(n);
    let mut power = Scalar::ONE;
    for _ in 0..n {
        powers.push(power);
        power *= alpha;
    }
    powers
}

/// `sum_i v_i * alpha^i`.
///
/// # Panics
/// Panics if `values.len() != powers.len()`.
pub fn combine_scalars(values: &[Scalar], powers: &[Scalar]) -> Scalar {
    assert_eq!(values.len(), powers.len());
    izip!(values, powers).map(|(v, a)| *v * a).sum()
}

/// `sum_i alpha^i * f_i(X)`.
///
/// # Panics
/// Panics if `polys.len() != powers.len()`.
pub fn combine_polys(polys: &[PolyCoeff], powers: &[Scalar]) -> PolyCoeff {
    assert_eq!(polys.len(), powers.len());
    izip!(polys, powers).fold(PolyCoeff::zero(), |acc, (p, a)| acc.add(&p.scale(*a)))
}

/// `sum_i alpha^i * P_i`.
///
/// # Panics
/// Panics if `points.len() != powers.len()`.
pub fn combine_points(points: &[G1Point], powers: &[Scalar]) -> G1Projective {
    assert_eq!(points.len(), powers.len());
    g1_lincomb(points, powers).expect("lengths match by the assertion above")
}

/// Returns `(sum_i alpha^i * P_i, sum_i alpha^i * z_i * P_i)`, the pair needed
/// by batched verifier pairing equations that combine a commitment sum and an
/// evaluation-point-weighted commitment sum in one pass.
///
/// # Panics
/// Panics if the two slices have different lengths.
pub fn combine_ecc_with_aux(pairs: &[(G1Point, Scalar)], powers: &[Scalar]) -> (G1Projective, G1Projective) {
    assert_eq!(pairs.len(), powers.len());

    let points: Vec<G1Point> = pairs.iter().map(|(p, _)| *p).collect();
    let weighted_scalars = izip!(pairs, powers)
        .map(|((_, z), a)| *z * a)
        .collect_vec();

    let sum_p = combine_points(&points, powers);
    let sum_zp = g1_lincomb(&points, &weighted_scalars).expect("lengths match by construction");
    (sum_p, sum_zp)
}

pub fn to_affine(point: G1Projective) -> G1Point {
    point.to_affine()
}

#[cfg(test)]
mod tests {
    use bn254::group::Group;

    use super::*;

    #[test]
    fn powers_of_basic() {
        let powers = powers_of(Scalar::from(3u64), 4);
        assert_eq!(
            powers,
            vec![
                Scalar::ONE,
                Scalar::from(3u64),
                Scalar::from(9u64),
                Scalar::from(27u64)
            ]
        );
    }

    #[test]
    fn combine_scalars_matches_naive_sum() {
        let values = vec![Scalar::from(2u64), Scalar::from(3u64), Scalar::from(5u64)];
        let powers = powers_of(Scalar::from(7u64), 3);
        let expected = values[0] + values[1] * Scalar::from(7u64) + values[2] * Scalar::from(49u64);
        assert_eq!(combine_scalars(&values, &powers), expected);
    }

    #[test]
    fn combine_ecc_with_aux_matches_manual_computation() {
        let mut rng = rand::thread_rng();
        let p0 = G1Point::from(G1Projective::random(&mut rng));
        let p1 = G1Point::from(G1Projective::random(&mut rng));
        let z0 = Scalar::from(11u64);
        let z1 = Scalar::from(13u64);
        let alpha = Scalar::from(5u64);
        let powers = powers_of(alpha, 2);

        let (sum_p, sum_zp) = combine_ecc_with_aux(&[(p0, z0), (p1, z1)], &powers);

        let expected_p = G1Projective::from(p0) + G1Projective::from(p1) * alpha;
        let expected_zp = G1Projective::from(p0) * z0 + G1Projective::from(p1) * (alpha * z1);
        assert_eq!(sum_p, expected_p);
        assert_eq!(sum_zp, expected_zp);
    }
}
