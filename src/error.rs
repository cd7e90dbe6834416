use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("Unexpected end of stream")]
    UnexpectedEof,

    #[error("Invalid block header")]
    InvalidHeader,

    #[error("Back-reference offset out of bounds")]
    InvalidOffset,

    #[error("Input buffer too short for declared size")]
    InputTooShort,
}
