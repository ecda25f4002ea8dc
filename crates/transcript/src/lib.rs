//! Fiat-Shamir transcript: a write side that accumulates prover messages and
//! derives challenges, and a read side that replays the resulting bytes to
//! reproduce the identical challenge stream during verification.

pub mod hasher;
mod transcript;

pub use hasher::{Hasher, Sha256Hasher};
pub use transcript::{TranscriptError, TranscriptReader, TranscriptWriter};
