use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A failure raised by the predictive parsing engine. Both kinds are fatal to
/// the parse that raised them.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ParseError<T, N> {
    #[error("unexpected token: expected {expected:?}, got {actual:?}")]
    UnexpectedToken { expected: T, actual: T },
    #[error("no production for non-terminal {non_terminal:?} on lookahead {lookahead:?}")]
    NoProduction { non_terminal: N, lookahead: T },
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("division by zero")]
    DivideByZero,
    #[error("empty input")]
    EmptyInput,
    #[error("grammar is not LL(1): {0}")]
    GrammarNotLL1(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("no productions found for non-terminal '{0}'")]
    NonTerminalNoProductions(String),
    #[error("parse error: {0}")]
    ParseError(String),
}

impl<T, N> From<ParseError<T, N>> for Error
where
    T: fmt::Debug,
    N: fmt::Debug,
{
    fn from(e: ParseError<T, N>) -> Self {
        Error::ParseError(e.to_string())
    }
}
