use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the native core.
///
/// The default particle path never produces one of these; they surface only from
/// the strict mass policy, from slice-to-vector conversion, and from the integer
/// helpers in [`crate::core::math`].
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Mass rejected under [`crate::config::MassPolicy::Strict`] (zero, negative, or non-finite).
    #[error("invalid mass: {0} (must be finite and > 0)")]
    InvalidMass(f64),

    /// A vector argument had the wrong number of components.
    #[error("{what} must have length {expected}, got {got}")]
    DimensionMismatch {
        /// Argument name, e.g. `"position"`.
        what: &'static str,
        /// Required length.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// Integer result does not fit in the output type.
    #[error("{op}({n}) overflows u64")]
    Overflow {
        /// Function name.
        op: &'static str,
        /// Input that overflowed.
        n: u32,
    },
}
