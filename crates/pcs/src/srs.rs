use bn254::{
    ff::Field,
    group::Group,
    traits::PrimeCurveAffine,
    G1Point, G1Projective, G2Point, G2Prepared, Scalar,
};
use polynomial::Domain;

/// Structured reference string: powers of a trapdoor `τ` in G1, plus `τ·H`
/// in G2.
///
/// Built from the fixed, insecure trapdoor constant in `bn254`; see the
/// crate-level documentation for the security caveat. A production
/// deployment would instead parse an externally supplied SRS (e.g. from a
/// ceremony transcript) rather than derive one from a known `τ`.
#[derive(Debug, Clone)]
pub struct Srs {
    /// `[G, τG, τ²G, ..., τ^(n-1)G]`, monomial basis.
    pub g1_monomial: Vec<G1Point>,
    /// Lagrange basis over the domain: the inverse-FFT of `g1_monomial`.
    pub g1_lagrange: Vec<G1Point>,
    pub gen_g1: G1Point,
    pub gen_g2: G2Point,
    pub tau_g2: G2Point,
    pub gen_g2_prepared: G2Prepared,
    pub tau_g2_prepared: G2Prepared,
}

impl Srs {
    /// Builds an SRS large enough for the given domain.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(domain_size = domain.size())))]
    pub fn setup(domain: &Domain) -> Self {
        let tau = bn254::insecure_trapdoor();
        let n = domain.size();

        let gen_g1 = G1Point::generator();
        let mut tau_power = Scalar::ONE;
        let mut g1_monomial_proj = Vec::with_capacity(n);
        for _ in 0..n {
            g1_monomial_proj.push(G1Projective::from(gen_g1) * tau_power);
            tau_power *= tau;
        }
        let g1_monomial = bn254::g1_batch_normalize(&g1_monomial_proj);

        let g1_lagrange_proj = domain.ifft_g1(g1_monomial_proj);
        let g1_lagrange = bn254::g1_batch_normalize(&g1_lagrange_proj);

        let gen_g2 = G2Point::generator();
        let tau_g2 = G2Point::from(bn254::G2Projective::from(gen_g2) * tau);

        Self {
            g1_monomial,
            g1_lagrange,
            gen_g1,
            gen_g2,
            tau_g2,
            gen_g2_prepared: G2Prepared::from(gen_g2),
            tau_g2_prepared: G2Prepared::from(tau_g2),
        }
    }

    pub fn max_degree_plus_one(&self) -> usize {
        self.g1_monomial.len()
    }
}
