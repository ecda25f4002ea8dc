use bn254::{group::Curve, lincomb::g1_lincomb, G1Point, Scalar};
use polynomial::PolyCoeff;

use crate::{errors::SetupError, srs::Srs};

/// `commit(f) = sum_i a_i * bases_i`.
///
/// Linear: `commit(alpha*f + beta*g) == alpha*commit(f) + beta*commit(g)`.
///
/// # Errors
/// Returns [`SetupError::PolynomialTooLarge`] if `f` has more coefficients
/// than the SRS has monomial bases for.
pub fn commit_monomial(srs: &Srs, f: &PolyCoeff) -> Result<G1Point, SetupError> {
    if f.0.len() > srs.max_degree_plus_one() {
        return Err(SetupError::PolynomialTooLarge {
            degree: f.degree().max(0) as usize,
            max_degree: srs.max_degree_plus_one() - 1,
        });
    }
    let bases = &srs.g1_monomial[..f.0.len()];
    let commitment = g1_lincomb(bases, &f.0).expect("bases and coefficients have matching length");
    Ok(commitment.to_affine())
}

/// Commits to a polynomial given as evaluations over the domain the SRS's
/// Lagrange basis was built for.
///
/// # Errors
/// Returns [`SetupError::LengthMismatch`] if `evals.len()` doesn't match the
/// Lagrange basis size.
pub fn commit_lagrange(srs: &Srs, evals: &[Scalar]) -> Result<G1Point, SetupError> {
    if evals.len() != srs.g1_lagrange.len() {
        return Err(SetupError::LengthMismatch {
            name: "evaluations",
            expected: srs.g1_lagrange.len(),
            got: evals.len(),
        });
    }
    let commitment =
        g1_lincomb(&srs.g1_lagrange, evals).expect("bases and evaluations have matching length");
    Ok(commitment.to_affine())
}

#[cfg(test)]
mod tests {
    use bn254::ff::Field;
    use polynomial::Domain;

    use super::*;

    #[test]
    fn commit_is_linear() {
        let domain = Domain::new(8);
        let srs = Srs::setup(&domain);

        let f = PolyCoeff(vec![Scalar::from(1), Scalar::from(2), Scalar::from(3)]);
        let g = PolyCoeff(vec![Scalar::from(4), Scalar::from(5)]);
        let alpha = Scalar::from(7u64);
        let beta = Scalar::from(11u64);

        let lhs = commit_monomial(&srs, &f.scale(alpha).add(&g.scale(beta))).unwrap();

        use bn254::{group::Curve, G1Projective};
        let rhs = (G1Projective::from(commit_monomial(&srs, &f).unwrap()) * alpha
            + G1Projective::from(commit_monomial(&srs, &g).unwrap()) * beta)
            .to_affine();

        assert_eq!(lhs, rhs);
    }

    #[test]
    fn monomial_and_lagrange_commitments_agree() {
        let domain = Domain::new(8);
        let srs = Srs::setup(&domain);

        let f = PolyCoeff::random(&mut rand::thread_rng(), 8);
        let evals = domain.evaluate(&f);

        assert_eq!(
            commit_monomial(&srs, &f).unwrap(),
            commit_lagrange(&srs, &evals).unwrap()
        );
    }

    #[test]
    fn oversized_polynomial_is_rejected() {
        let domain = Domain::new(4);
        let srs = Srs::setup(&domain);
        let f = PolyCoeff::random(&mut rand::thread_rng(), 5);
        assert!(matches!(
            commit_monomial(&srs, &f),
            Err(SetupError::PolynomialTooLarge { .. })
        ));
    }
}
