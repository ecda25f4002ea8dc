//! Coefficient-form polynomial arithmetic and an FFT-backed evaluation domain
//! over the BN254 scalar field.

pub mod coset_fft;
pub mod domain;
mod fft;
pub mod lagrange;
pub mod poly_coeff;

pub use bn254::Scalar;
pub use coset_fft::CosetFFT;
pub use domain::Domain;
pub use lagrange::LagrangeBasis;
pub use poly_coeff::{lagrange_interpolate, poly_eval, vanishing_poly, PolyCoeff};
