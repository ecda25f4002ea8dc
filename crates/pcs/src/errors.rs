/// Caller-contract violations: programmer errors, not proof rejections.
///
/// Returned from setup, commit, and prove entry points whenever a
/// precondition on sizes or shapes is violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A polynomial has more coefficients than the commitment key has bases for.
    PolynomialTooLarge { degree: usize, max_degree: usize },
    /// Two collaborators that must share a domain size do not.
    DomainSizeMismatch { expected: usize, got: usize },
    /// A shift list was empty where at least one shift is required.
    EmptyShiftList,
    /// A commitment map had no entries.
    EmptyCommitmentMap,
    /// Two or more points given to Lagrange interpolation share an x-coordinate.
    DuplicateInterpolationPoint,
    /// Parallel input lists did not have matching lengths.
    LengthMismatch { name: &'static str, expected: usize, got: usize },
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolynomialTooLarge { degree, max_degree } => write!(
                f,
                "polynomial of degree {degree} exceeds the commitment key's maximum degree {max_degree}"
            ),
            Self::DomainSizeMismatch { expected, got } => {
                write!(f, "expected domain size {expected}, got {got}")
            }
            Self::EmptyShiftList => write!(f, "shift list must not be empty"),
            Self::EmptyCommitmentMap => write!(f, "commitment map must not be empty"),
            Self::DuplicateInterpolationPoint => {
                write!(f, "interpolation points must have distinct x-coordinates")
            }
            Self::LengthMismatch { name, expected, got } => {
                write!(f, "{name} has length {got}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// The only outcome a `verify_*` entry point reports on a well-formed call.
///
/// No distinction is drawn between a pairing mismatch, a bad algebraic
/// relation, or a malformed input that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierError {
    InvalidProof,
}

impl std::fmt::Display for VerifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProof => write!(f, "proof failed verification"),
        }
    }
}

impl std::error::Error for VerifierError {}
