use crate::{traits::*, G1Point, G1Projective, G2Point, G2Projective, Scalar};

/// `sum_i points[i] * scalars[i]` over G1, computed as a per-point scalar
/// multiplication followed by a sum. Not a batched MSM algorithm (no
/// Pippenger/bucket method) — halo2curves does not expose one for this curve,
/// so this is the naive evaluation.
///
/// Returns `None` if the points and scalars have different lengths.
///
/// Does not filter out identity points; callers aware there are none among
/// their inputs may call this directly to skip the filtering pass `g1_lincomb`
/// performs.
pub fn g1_lincomb_unchecked(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    (points.len() == scalars.len()).then(|| {
        points
            .iter()
            .zip(scalars)
            .map(|(point, scalar)| G1Projective::from(*point) * scalar)
            .sum()
    })
}

/// `sum_i points[i] * scalars[i]` over G2, computed the same naive way as
/// [`g1_lincomb_unchecked`].
///
/// Returns `None` if the points and scalars have different lengths.
pub fn g2_lincomb_unchecked(points: &[G2Point], scalars: &[Scalar]) -> Option<G2Projective> {
    (points.len() == scalars.len()).then(|| {
        points
            .iter()
            .zip(scalars)
            .map(|(point, scalar)| G2Projective::from(*point) * scalar)
            .sum()
    })
}

/// `sum_i points[i] * scalars[i]` over G1.
///
/// Returns `None` if the lengths mismatch. Filters out identity points before
/// delegating to [`g1_lincomb_unchecked`].
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    if points.len() != scalars.len() {
        return None;
    }

    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !(bool::from(point.is_identity())))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    if points_filtered.is_empty() {
        Some(G1Projective::identity())
    } else {
        g1_lincomb_unchecked(&points_filtered, &scalars_filtered)
    }
}

/// `sum_i points[i] * scalars[i]` over G2.
///
/// Returns `None` if the lengths mismatch. Filters out identity points before
/// delegating to [`g2_lincomb_unchecked`].
pub fn g2_lincomb(points: &[G2Point], scalars: &[Scalar]) -> Option<G2Projective> {
    if points.len() != scalars.len() {
        return None;
    }

    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !(bool::from(point.is_identity())))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    if points_filtered.is_empty() {
        Some(G2Projective::identity())
    } else {
        g2_lincomb_unchecked(&points_filtered, &scalars_filtered)
    }
}
