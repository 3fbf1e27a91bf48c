use thiserror::Error;

/// Everything that can go wrong while normalizing, encoding, or decoding.
///
/// Parse-side variants carry the 1-based line number the problem was seen
/// on. Lenient decoding downgrades `LengthMismatch`, `RowWidthMismatch`,
/// `BlankInsideArray`, and the HTAB form of `IndentStep` to acceptance.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported control character U+{0:04X} in string")]
    InvalidChar(u32),

    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("unsupported map key: {0}")]
    UnsupportedKey(String),

    #[error("line {line}: invalid array header: {reason}")]
    InvalidHeader { line: usize, reason: String },

    #[error("line {line}: invalid key: {reason}")]
    InvalidKey { line: usize, reason: String },

    #[error("line {line}: invalid quoted string: {reason}")]
    InvalidQuotedString { line: usize, reason: String },

    #[error("line {line}: {reason}")]
    IndentStep { line: usize, reason: String },

    #[error("line {line}: unexpected indentation")]
    IndentUnexpected { line: usize },

    #[error("line {line}: length mismatch; expected {expected}, got {actual}")]
    LengthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: row width mismatch; expected {expected} cells, got {actual}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: blank line inside array")]
    BlankInsideArray { line: usize },

    #[error("cannot bind decoded value: {0}")]
    InternalType(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl serde::ser::Error for Error {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}
