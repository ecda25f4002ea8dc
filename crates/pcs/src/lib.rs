//! Polynomial commitment schemes over BN254: plain KZG, GWC shift-grouped
//! multi-open, and BDFG linearized multi-point batching.

pub mod bdfg;
pub mod commit;
pub mod errors;
pub mod gwc;
pub mod kzg;
pub mod lincomb;
pub mod pairing;
pub mod srs;

pub use errors::{SetupError, VerifierError};
pub use srs::Srs;
