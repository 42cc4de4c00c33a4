/// Everything that can go wrong when unpacking a scalar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The byte sequence length doesn't match the width of the scalar type
    #[error("byte length mismatch, expected exactly {expected} bytes, but got {got}")]
    LengthMismatch { expected: usize, got: usize },
}
