use thiserror::Error;

/// Why a speculative read failed.
///
/// These never escape a parse call: the block loop and the inline scanner
/// catch them and degrade to paragraph or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("expected {expected:?}, found {found:?}")]
    UnexpectedCharacter { expected: char, found: Option<char> },

    #[error("no terminator out of {terminators:?} before the span ended")]
    UnterminatedSpan { terminators: Vec<char> },

    #[error("malformed {construct}")]
    Malformed { construct: &'static str },
}

pub type ReadResult<T> = Result<T, ReadError>;

/// Fails with [`ReadError::Malformed`] unless `condition` holds.
pub fn require(condition: bool, construct: &'static str) -> ReadResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ReadError::Malformed { construct })
    }
}
