use bn254::{ff::Field, Scalar};

/// A coset generator and its inverse, used to compute a coset FFT/IFFT.
#[derive(Debug, Clone)]
pub struct CosetFFT {
    pub generator: Scalar,
    pub generator_inv: Scalar,
}

impl CosetFFT {
    pub fn new(generator: Scalar) -> Self {
        Self {
            generator,
            generator_inv: generator.invert().expect("coset generator must be non-zero"),
        }
    }
}
