use bn254::{G1Point, Scalar};

use crate::hasher::{Hasher, Sha256Hasher};

const SCALAR_PREFIX: u8 = 0x00;
const POINT_PREFIX: u8 = 0x01;
const CHALLENGE_PREFIX: u8 = 0x02;

/// Byte could not be decoded into a well-formed point or scalar while
/// replaying a read-transcript. This is an invariant violation on malformed
/// input, distinct from a proof that decodes fine but fails verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptError {
    InvalidPoint,
    InvalidScalar,
    UnexpectedEndOfMessage,
}

impl std::fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPoint => write!(f, "bytes do not decode to a point on the curve"),
            Self::InvalidScalar => write!(f, "bytes are not a canonical scalar representative"),
            Self::UnexpectedEndOfMessage => write!(f, "message ended before the expected field"),
        }
    }
}

/// Accumulates prover messages and derives challenges from them.
///
/// Writing a sequence of points/scalars and then reading that same byte
/// sequence back through a [`TranscriptReader`] reproduces an identical
/// challenge stream, provided both sides share a personalization string.
pub struct TranscriptWriter<H: Hasher = Sha256Hasher> {
    hasher: H,
    message: Vec<u8>,
}

impl<H: Hasher> TranscriptWriter<H> {
    pub fn new(personalization: &[u8]) -> Self {
        let mut hasher = H::new();
        hasher.update(personalization);
        Self {
            hasher,
            message: Vec::new(),
        }
    }

    pub fn write_point(&mut self, point: &G1Point) {
        let bytes = bn254::g1_to_bytes(point);
        self.hasher.update(&[POINT_PREFIX]);
        self.hasher.update(&bytes);
        self.message.extend_from_slice(&bytes);
    }

    pub fn write_scalar(&mut self, scalar: &Scalar) {
        let bytes = bn254::scalar_to_bytes(scalar);
        self.hasher.update(&[SCALAR_PREFIX]);
        self.hasher.update(&bytes);
        self.message.extend_from_slice(&bytes);
    }

    /// Squeezes a challenge without consuming the hasher's running state, so
    /// absorption can continue for the next round.
    pub fn challenge(&mut self) -> Scalar {
        squeeze(&mut self.hasher)
    }

    /// The wire-format byte message accumulated so far. This is also the
    /// proof's serialized form; there is no separate framing.
    pub fn finalize(self) -> Vec<u8> {
        self.message
    }
}

/// Replays a byte message through the same absorption sequence as a
/// [`TranscriptWriter`], decoding fields as they are consumed.
pub struct TranscriptReader<'a, H: Hasher = Sha256Hasher> {
    hasher: H,
    remaining: &'a [u8],
}

impl<'a, H: Hasher> TranscriptReader<'a, H> {
    pub fn new(personalization: &[u8], message: &'a [u8]) -> Self {
        let mut hasher = H::new();
        hasher.update(personalization);
        Self {
            hasher,
            remaining: message,
        }
    }

    pub fn read_point(&mut self) -> Result<G1Point, TranscriptError> {
        let bytes = self.take::<64>()?;
        self.hasher.update(&[POINT_PREFIX]);
        self.hasher.update(&bytes);
        bn254::g1_from_bytes(&bytes).ok_or(TranscriptError::InvalidPoint)
    }

    pub fn read_scalar(&mut self) -> Result<Scalar, TranscriptError> {
        let bytes = self.take::<32>()?;
        self.hasher.update(&[SCALAR_PREFIX]);
        self.hasher.update(&bytes);
        bn254::scalar_from_bytes(&bytes).ok_or(TranscriptError::InvalidScalar)
    }

    pub fn challenge(&mut self) -> Scalar {
        squeeze(&mut self.hasher)
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], TranscriptError> {
        if self.remaining.len() < N {
            return Err(TranscriptError::UnexpectedEndOfMessage);
        }
        let (head, tail) = self.remaining.split_at(N);
        self.remaining = tail;
        let mut out = [0u8; N];
        out.copy_from_slice(head);
        Ok(out)
    }
}

fn squeeze<H: Hasher>(hasher: &mut H) -> Scalar {
    hasher.update(&[CHALLENGE_PREFIX, 0u8]);
    let digest = hasher.digest();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest[..32]);
    bn254::reduce_bytes_to_scalar(bytes)
}
