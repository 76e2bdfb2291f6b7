use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ShroudError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShroudError {
    #[error("unknown alphabet '{0}'")]
    UnknownAlphabet(String),

    #[error("alphabet '{0}' has no symbols")]
    EmptyAlphabet(String),

    #[error("alphabet '{name}' has {len} symbol(s), padded encoding needs at least two")]
    AlphabetTooSmall { name: String, len: usize },

    #[error("symbol {symbol:?} is not part of alphabet '{alphabet}'")]
    SymbolNotInAlphabet { symbol: char, alphabet: String },

    #[error("secret key must not be empty")]
    EmptyKey,

    #[error("text must not be empty for padded encoding")]
    EmptyText,

    #[error("padding target {target} must exceed text length {len} plus two boundary markers")]
    TargetTooSmall { target: usize, len: usize },
}
