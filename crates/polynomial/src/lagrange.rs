use bn254::{ff::Field, Scalar};

/// Precomputed barycentric weights for a fixed set of evaluation points.
///
/// Building a [`LagrangeBasis`] is `O(n^2)`; each subsequent [`Self::evaluate`]
/// call against a different set of `y` values (but the same `x` values) is
/// `O(n)`. Useful when the same point set is evaluated against many
/// polynomials, e.g. re-checking several openings at the same challenge.
#[derive(Debug, Clone)]
pub struct LagrangeBasis {
    xs: Vec<Scalar>,
    /// `w_i = 1 / prod_{j != i} (x_i - x_j)`
    weights: Vec<Scalar>,
}

impl LagrangeBasis {
    /// # Panics
    /// Panics if `xs` contains duplicates.
    pub fn new(xs: Vec<Scalar>) -> Self {
        let n = xs.len();
        let mut denominators = vec![Scalar::ONE; n];
        for (i, denom) in denominators.iter_mut().enumerate() {
            for (j, xj) in xs.iter().enumerate() {
                if i != j {
                    *denom *= xs[i] - xj;
                }
            }
        }
        bn254::batch_inversion::batch_inverse(&mut denominators);

        Self {
            xs,
            weights: denominators,
        }
    }

    /// Evaluates the unique degree-`< n` polynomial through `(x_i, y_i)` at `z`.
    ///
    /// # Panics
    /// Panics if `ys.len() != ` the number of points this basis was built with.
    pub fn evaluate(&self, ys: &[Scalar], z: Scalar) -> Scalar {
        assert_eq!(ys.len(), self.xs.len(), "ys must match the point set size");

        if let Some(i) = self.xs.iter().position(|x| *x == z) {
            return ys[i];
        }

        let mut diffs: Vec<Scalar> = self.xs.iter().map(|x| z - x).collect();
        bn254::batch_inversion::batch_inverse(&mut diffs);

        let mut numerator = Scalar::ZERO;
        let mut denominator = Scalar::ZERO;
        for i in 0..self.xs.len() {
            let term = self.weights[i] * diffs[i];
            numerator += term * ys[i];
            denominator += term;
        }

        numerator * denominator.invert().expect("z is not one of the interpolation points")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly_coeff::lagrange_interpolate;

    #[test]
    fn matches_direct_interpolation() {
        let points = vec![
            (Scalar::from(0u64), Scalar::from(1u64)),
            (Scalar::from(1u64), Scalar::from(6u64)),
            (Scalar::from(2u64), Scalar::from(17u64)),
            (Scalar::from(5u64), Scalar::from(3u64)),
        ];
        let xs: Vec<_> = points.iter().map(|(x, _)| *x).collect();
        let ys: Vec<_> = points.iter().map(|(_, y)| *y).collect();

        let basis = LagrangeBasis::new(xs);
        let direct = lagrange_interpolate(&points).unwrap();

        let z = Scalar::from(42u64);
        assert_eq!(basis.evaluate(&ys, z), direct.eval(&z));
    }

    #[test]
    fn returns_sample_exactly_at_a_known_point() {
        let xs = vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64)];
        let ys = vec![Scalar::from(10u64), Scalar::from(20u64), Scalar::from(30u64)];
        let basis = LagrangeBasis::new(xs.clone());
        for (x, y) in xs.iter().zip(&ys) {
            assert_eq!(basis.evaluate(&ys, *x), *y);
        }
    }

    #[test]
    fn reused_weights_work_across_different_y_vectors() {
        let xs = vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64)];
        let basis = LagrangeBasis::new(xs);
        let z = Scalar::from(99u64);

        let ys_a = vec![Scalar::from(1u64), Scalar::from(4u64), Scalar::from(9u64)];
        let ys_b = vec![Scalar::from(2u64), Scalar::from(8u64), Scalar::from(18u64)];

        assert_eq!(basis.evaluate(&ys_a, z) * Scalar::from(2u64), basis.evaluate(&ys_b, z));
    }

    #[test]
    #[should_panic]
    fn mismatched_length_panics() {
        let basis = LagrangeBasis::new(vec![Scalar::from(1u64), Scalar::from(2u64)]);
        basis.evaluate(&[Scalar::from(1u64)], Scalar::from(5u64));
    }
}
