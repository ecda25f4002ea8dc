use sha2::Digest;

/// A pluggable hash primitive behind the narrow surface the transcript needs.
///
/// `digest` peeks at the current state without consuming it (so the
/// transcript can keep absorbing after squeezing a challenge); `reset`
/// clears the state for reuse.
pub trait Hasher: Clone {
    fn new() -> Self;
    fn update(&mut self, bytes: &[u8]);
    fn digest(&self) -> Vec<u8>;
    fn reset(&mut self);
}

/// Default hasher: wraps `sha2::Sha256`.
#[derive(Clone, Default)]
pub struct Sha256Hasher(sha2::Sha256);

impl Hasher for Sha256Hasher {
    fn new() -> Self {
        Self(sha2::Sha256::new())
    }

    fn update(&mut self, bytes: &[u8]) {
        Digest::update(&mut self.0, bytes);
    }

    fn digest(&self) -> Vec<u8> {
        self.0.clone().finalize().to_vec()
    }

    fn reset(&mut self) {
        Digest::reset(&mut self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_does_not_consume_state() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"hello");
        let first = hasher.digest();
        let second = hasher.digest();
        assert_eq!(first, second);

        hasher.update(b" world");
        let third = hasher.digest();
        assert_ne!(first, third);
    }

    #[test]
    fn reset_clears_state() {
        let mut a = Sha256Hasher::new();
        a.update(b"hello");
        a.reset();

        let b = Sha256Hasher::new();
        assert_eq!(a.digest(), b.digest());
    }
}
