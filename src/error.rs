use crate::hint::{Hint, ValueKind};
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The supplied value's active variant disagrees with the kind the hint
    /// declares. Nothing is forwarded to the native library.
    #[error("hint {hint:?} expects a {expected} value, got {actual}")]
    TypeMismatch {
        hint: Hint,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A value fell through every case of a mapping table. Reachable only
    /// through a defect in the tables themselves, never through user input.
    #[error("unhandled enum in {0}")]
    UnhandledEnum(&'static str),

    #[error("{0}")]
    Platform(String),
}
