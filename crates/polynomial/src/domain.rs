use bn254::{ff::Field, group::Group, G1Projective, Scalar};

use crate::{
    coset_fft::CosetFFT,
    fft::{fft_inplace, precompute_omegas, precompute_twiddle_factors_bo},
    poly_coeff::{poly_eval, PolyCoeff},
};

/// A multiplicative subgroup of `Fr` of size `n = 2^exp`, together with the
/// precomputed tables needed to FFT/IFFT over it.
///
/// All domain operations pad shorter inputs with zeros up to `n` and return
/// length-`n` results.
#[derive(Debug, Clone)]
pub struct Domain {
    /// `[1, omega, omega^2, ..., omega^(n-1)]`
    pub roots: Vec<Scalar>,
    pub domain_size: Scalar,
    pub domain_size_inv: Scalar,
    /// Generator of this domain; has order `domain_size`.
    pub generator: Scalar,
    pub generator_inv: Scalar,
    /// Coset shift used for division by the domain's vanishing polynomial.
    pub coset: CosetFFT,
    omegas: Vec<Scalar>,
    omegas_inv: Vec<Scalar>,
    twiddles_bo: Vec<Scalar>,
    twiddles_bo_inv: Vec<Scalar>,
}

impl Domain {
    /// Builds a domain of the given size, rounded up to the next power of two.
    ///
    /// # Panics
    /// Panics if the required exponent exceeds the curve's 2-adicity.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn new(size: usize) -> Self {
        let size = size.next_power_of_two().max(1);

        let generator = Self::compute_generator_for_size(size);
        let generator_inv = generator.invert().expect("generator is non-zero");

        let domain_size = Scalar::from(size as u64);
        let domain_size_inv = domain_size.invert().expect("size is non-zero");

        let mut roots = Vec::with_capacity(size);
        roots.push(Scalar::ONE);
        for i in 1..size {
            roots.push(roots[i - 1] * generator);
        }

        let (omegas, twiddles_bo) = if size > 1 {
            (
                precompute_omegas(&generator, size),
                precompute_twiddle_factors_bo(&generator, size),
            )
        } else {
            (Vec::new(), Vec::new())
        };
        let (omegas_inv, twiddles_bo_inv) = if size > 1 {
            (
                precompute_omegas(&generator_inv, size),
                precompute_twiddle_factors_bo(&generator_inv, size),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            roots,
            domain_size,
            domain_size_inv,
            generator,
            generator_inv,
            coset: CosetFFT::new(bn254::coset_shift()),
            omegas,
            omegas_inv,
            twiddles_bo,
            twiddles_bo_inv,
        }
    }

    fn compute_generator_for_size(size: usize) -> Scalar {
        assert!(size.is_power_of_two());
        let log_size = size.trailing_zeros();
        assert!(
            log_size <= bn254::TWO_ADICITY,
            "domain exponent {log_size} exceeds curve two-adicity {}",
            bn254::TWO_ADICITY
        );
        let exponent = 1u64 << (bn254::TWO_ADICITY - log_size);
        bn254::root_of_unity().pow_vartime([exponent])
    }

    pub fn size(&self) -> usize {
        self.roots.len()
    }

    fn fft(&self, mut values: Vec<Scalar>) -> Vec<Scalar> {
        values.resize(self.size(), Scalar::ZERO);
        if self.size() > 1 {
            fft_inplace(&self.omegas, &self.twiddles_bo, &mut values);
        }
        values
    }

    fn ifft(&self, mut values: Vec<Scalar>) -> Vec<Scalar> {
        values.resize(self.size(), Scalar::ZERO);
        if self.size() > 1 {
            fft_inplace(&self.omegas_inv, &self.twiddles_bo_inv, &mut values);
        }
        for v in &mut values {
            *v *= self.domain_size_inv;
        }
        values
    }

    /// Forward FFT: coefficient form -> evaluations over the domain.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn evaluate(&self, poly: &PolyCoeff) -> Vec<Scalar> {
        self.fft(poly.0.clone())
    }

    /// Inverse FFT: evaluations over the domain -> coefficient form.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn interpolate(&self, evals: &[Scalar]) -> PolyCoeff {
        PolyCoeff::from(self.ifft(evals.to_vec()))
    }

    /// `fft_g1`: evaluates a vector of G1 points (as "coefficients") at the
    /// domain's roots. Used to build a Lagrange-basis SRS from a monomial one.
    pub fn fft_g1(&self, mut points: Vec<G1Projective>) -> Vec<G1Projective> {
        points.resize(self.size(), G1Projective::identity());
        if self.size() > 1 {
            fft_inplace(&self.omegas, &self.twiddles_bo, &mut points);
        }
        points
    }

    /// `ifft_g1`: inverse of [`Self::fft_g1`].
    pub fn ifft_g1(&self, mut points: Vec<G1Projective>) -> Vec<G1Projective> {
        points.resize(self.size(), G1Projective::identity());
        if self.size() > 1 {
            fft_inplace(&self.omegas_inv, &self.twiddles_bo_inv, &mut points);
        }
        for p in &mut points {
            *p *= self.domain_size_inv;
        }
        points
    }

    /// Multiplies polynomials by evaluating all of them on the domain,
    /// multiplying pointwise, and interpolating back.
    ///
    /// # Panics
    /// Panics if the sum of operand degrees does not fit in the domain.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn mul(&self, operands: &[&PolyCoeff]) -> PolyCoeff {
        if operands.iter().any(|p| p.is_zero()) {
            return PolyCoeff::zero();
        }

        let degree_sum: isize = operands.iter().map(|p| p.degree()).sum();
        assert!(
            (degree_sum as usize) < self.size(),
            "sum of operand degrees {degree_sum} does not fit in domain of size {}",
            self.size()
        );

        let mut acc = self.evaluate(operands[0]);
        for operand in &operands[1..] {
            let evals = self.evaluate(operand);
            for (a, b) in acc.iter_mut().zip(&evals) {
                *a *= b;
            }
        }
        self.interpolate(&acc)
    }

    /// Divides `a` by `b` using their evaluations on the domain.
    ///
    /// # Panics
    /// Panics if `b` vanishes anywhere on the domain; route through
    /// [`Self::coset_div`] in that case (e.g. dividing by the domain's own
    /// vanishing polynomial).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn div(&self, a: &PolyCoeff, b: &PolyCoeff) -> PolyCoeff {
        let a_evals = self.evaluate(a);
        let mut b_evals = self.evaluate(b);

        assert!(
            b_evals.iter().all(|e| !bool::from(e.is_zero())),
            "divisor vanishes on the domain; use coset_div instead"
        );

        bn254::batch_inversion::batch_inverse(&mut b_evals);
        let quotient_evals: Vec<Scalar> = a_evals
            .iter()
            .zip(&b_evals)
            .map(|(a, b_inv)| *a * b_inv)
            .collect();

        self.interpolate(&quotient_evals)
    }

    /// Divides `a` by `b` by shifting both into a coset that avoids `b`'s
    /// roots on the domain, dividing there, then shifting back.
    ///
    /// This is how division by the domain's vanishing polynomial
    /// `X^n - 1` (zero on every domain point) must be performed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn coset_div(&self, a: &PolyCoeff, b: &PolyCoeff) -> PolyCoeff {
        let k = self.coset.generator;
        let a_shifted = a.distribute(k);
        let b_shifted = b.distribute(k);
        let quotient_shifted = self.div(&a_shifted, &b_shifted);
        quotient_shifted.distribute(self.coset.generator_inv)
    }

    /// `Z(X) = X^n - 1`, the vanishing polynomial of the domain.
    pub fn vanishing(&self) -> PolyCoeff {
        let n = self.size();
        let mut coeffs = vec![Scalar::ZERO; n + 1];
        coeffs[0] = -Scalar::ONE;
        coeffs[n] = Scalar::ONE;
        PolyCoeff::from(coeffs)
    }

    /// `L_i(X)`: the polynomial that is `1` at `omega^i` and `0` at every
    /// other domain point.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn lagrange_polynomial(&self, i: usize) -> PolyCoeff {
        let mut impulse = vec![Scalar::ZERO; self.size()];
        impulse[i] = Scalar::ONE;
        self.interpolate(&impulse)
    }

    /// Closed form for `L_i(zeta) = (zeta^n - 1) * omega^i / ((zeta - omega^i) * n)`.
    pub fn lagrange_evaluation(&self, i: usize, zeta: Scalar) -> Scalar {
        let root_i = self.roots[i];
        if zeta == root_i {
            return Scalar::ONE;
        }
        let n = self.size() as u64;
        let numerator = (zeta.pow_vartime([n]) - Scalar::ONE) * root_i;
        let denominator = (zeta - root_i) * self.domain_size;
        numerator
            * denominator
                .invert()
                .expect("zeta != root_i implies denominator is non-zero")
    }

    /// Embeds a length-`m` polynomial (`m` a divisor of `n`) into this
    /// domain by interleaving `n/m - 1` zeros between coefficients.
    ///
    /// A prerequisite for coset operations that mix a sub-domain polynomial
    /// with a full-domain one.
    pub fn extend(&self, poly: &PolyCoeff) -> PolyCoeff {
        let n = self.size();
        let m = poly.0.len().next_power_of_two().max(1);
        assert!(n % m == 0, "domain size must be a multiple of the polynomial length");
        let stride = n / m;

        let mut out = vec![Scalar::ZERO; n];
        for (i, c) in poly.0.iter().enumerate() {
            out[i * stride] = *c;
        }
        PolyCoeff::from(out)
    }
}
