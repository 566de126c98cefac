use thiserror::Error;

use crate::value::Kind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Operation `{1}` cannot handle a value of kind `{0}`")]
    UnsupportedKind(Kind, &'static str),

    #[error("Prefix of length `{len}` exceeds a sequence of size `{size}`")]
    PrefixOutOfBounds { len: usize, size: usize },

    #[error("List of size `{size}` did not produce an element at index `{index}`")]
    ElementUnavailable { index: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
