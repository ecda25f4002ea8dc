use std::ops::{Deref, DerefMut};

use bn254::{ff::Field, Scalar};
use rand::Rng;

/// A polynomial in monomial form over the scalar field.
///
/// Coefficients are stored in ascending order of degree:
/// `a_0 + a_1*X + a_2*X^2 + ... + a_d*X^d`.
///
/// The representation may carry trailing zero coefficients; `degree()` and
/// equality both ignore them, so two `PolyCoeff`s that differ only by
/// trailing zeros compare equal.
#[derive(Clone, Debug, Default)]
pub struct PolyCoeff(pub Vec<Scalar>);

impl PolyCoeff {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self(Vec::new())
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self(vec![Scalar::ONE])
    }

    /// `(X - z)`, i.e. coefficients `[-z, 1]`.
    pub fn degree_one(z: Scalar) -> Self {
        Self(vec![-z, Scalar::ONE])
    }

    /// A random polynomial with exactly `len` coefficients (no trimming).
    pub fn random<R: Rng>(rng: &mut R, len: usize) -> Self {
        Self((0..len).map(|_| Scalar::random(&mut *rng)).collect())
    }

    /// `true` iff every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| bool::from(c.is_zero()))
    }

    /// Degree of the polynomial, ignoring trailing zero coefficients.
    ///
    /// The zero polynomial has degree `-1`.
    pub fn degree(&self) -> isize {
        for (i, c) in self.0.iter().enumerate().rev() {
            if !bool::from(c.is_zero()) {
                return i as isize;
            }
        }
        -1
    }

    /// Adds two polynomials, padding the shorter one with zeros.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.0.len() >= other.0.len() {
            (&self.0, &other.0)
        } else {
            (&other.0, &self.0)
        };
        let mut result = longer.clone();
        for (r, s) in result.iter_mut().zip(shorter) {
            *r += s;
        }
        Self(result).trimmed()
    }

    /// Additive inverse `-self`.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self(self.0.iter().map(|c| -*c).collect())
    }

    /// `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Scales every coefficient by `k`.
    #[must_use]
    pub fn scale(&self, k: Scalar) -> Self {
        Self(self.0.iter().map(|c| *c * k).collect()).trimmed()
    }

    /// `p(X) -> p(k*X)`, i.e. multiplies coefficient `a_i` by `k^i`.
    #[must_use]
    pub fn distribute(&self, k: Scalar) -> Self {
        let mut power = Scalar::ONE;
        let mut out = Vec::with_capacity(self.0.len());
        for c in &self.0 {
            out.push(*c * power);
            power *= k;
        }
        Self(out).trimmed()
    }

    /// Evaluates the polynomial at `x` using Horner's rule.
    pub fn eval(&self, x: &Scalar) -> Scalar {
        let mut result = Scalar::ZERO;
        for coeff in self.0.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    /// Naive `O(n*m)` polynomial multiplication.
    #[must_use]
    pub fn mul_naive(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut result = vec![Scalar::ZERO; self.0.len() + other.0.len() - 1];
        for (i, a) in self.0.iter().enumerate() {
            for (j, b) in other.0.iter().enumerate() {
                result[i + j] += *a * b;
            }
        }
        Self(result).trimmed()
    }

    /// Drops trailing zero coefficients.
    #[must_use]
    fn trimmed(mut self) -> Self {
        while self.0.last().is_some_and(|c| bool::from(c.is_zero())) {
            self.0.pop();
        }
        self
    }
}

impl PartialEq for PolyCoeff {
    fn eq(&self, other: &Self) -> bool {
        let a = &self.clone().trimmed().0;
        let b = &other.clone().trimmed().0;
        a == b
    }
}
impl Eq for PolyCoeff {}

impl Deref for PolyCoeff {
    type Target = Vec<Scalar>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PolyCoeff {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Scalar>> for PolyCoeff {
    fn from(value: Vec<Scalar>) -> Self {
        Self(value).trimmed()
    }
}

impl From<Vec<i64>> for PolyCoeff {
    fn from(value: Vec<i64>) -> Self {
        Self(
            value
                .into_iter()
                .map(|v| {
                    if v >= 0 {
                        Scalar::from(v as u64)
                    } else {
                        -Scalar::from((-v) as u64)
                    }
                })
                .collect(),
        )
        .trimmed()
    }
}

/// Evaluates a polynomial (as a coefficient slice) at `x` via Horner's rule.
///
/// Free-standing so `domain.rs` can evaluate raw coefficient slices without
/// constructing a `PolyCoeff`.
pub fn poly_eval(coeffs: &[Scalar], x: &Scalar) -> Scalar {
    let mut result = Scalar::ZERO;
    for coeff in coeffs.iter().rev() {
        result = result * x + coeff;
    }
    result
}

/// The vanishing polynomial `Z(X) = prod (X - p_i)` for a set of points.
pub fn vanishing_poly(roots: &[Scalar]) -> PolyCoeff {
    let mut poly = PolyCoeff::one();
    for root in roots {
        poly = poly.mul_naive(&PolyCoeff::degree_one(*root));
    }
    poly
}

/// Lagrange-interpolates `[(x_i, y_i)]` (distinct `x_i`) into the unique
/// polynomial of degree `< points.len()` passing through every sample.
///
/// `O(n^2)`; the domain uses IFFT for interpolation over roots of unity, this
/// is for interpolating over arbitrary point sets (e.g. BDFG's `T_i`).
pub fn lagrange_interpolate(points: &[(Scalar, Scalar)]) -> Option<PolyCoeff> {
    if points.is_empty() {
        return Some(PolyCoeff::zero());
    }

    // Distinctness precondition (invariant violation, not a verifier outcome).
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].0 == points[j].0 {
                return None;
            }
        }
    }

    let n = points.len();
    let mut coeffs = PolyCoeff(vec![Scalar::ZERO; n]);

    for (k, (x_k, y_k)) in points.iter().enumerate() {
        // basis_k(X) = prod_{j != k} (X - x_j) / (x_k - x_j)
        let mut numerator = PolyCoeff::one();
        let mut denominator = Scalar::ONE;
        for (j, (x_j, _)) in points.iter().enumerate() {
            if j == k {
                continue;
            }
            numerator = numerator.mul_naive(&PolyCoeff::degree_one(*x_j));
            denominator *= *x_k - x_j;
        }
        let inv_denominator = denominator
            .invert()
            .expect("points are pairwise distinct so denominator is non-zero");
        let basis_k = numerator.scale(inv_denominator * y_k);
        coeffs = coeffs.add(&basis_k);
    }

    Some(coeffs)
}
