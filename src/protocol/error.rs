//! PXP error types

use thiserror::Error;

use super::StatusCode;
use crate::numeric::PrimeError;

/// PXP protocol errors
#[derive(Error, Debug)]
pub enum Error {
    /// Too few arguments for a known status code
    #[error("status {status} carries {found} arguments, needs at least {expected}")]
    InvalidArity {
        /// Decoded status code
        status: StatusCode,
        /// Minimum arguments the code requires
        expected: usize,
        /// Arguments found on the wire
        found: usize,
    },

    /// Argument failed numeric parsing
    #[error("status {status} argument {token:?} is not a decimal integer")]
    InvalidArgument {
        /// Status code of the message
        status: StatusCode,
        /// Offending token
        token: String,
    },

    /// Message not valid for the session's current stage
    #[error("unexpected {status} in stage {stage}")]
    UnexpectedMessage {
        /// Stage the session was in
        stage: &'static str,
        /// Status code that arrived
        status: StatusCode,
    },

    /// Candidate prime rejected by validation
    #[error(transparent)]
    InvalidPrime(#[from] PrimeError),

    /// Session reached the result comparison without recorded primes
    #[error("no recorded primes to compare against")]
    MissingPrimes,

    /// LCM computation overflowed
    #[error("lcm of {a} and {b} overflows u64")]
    LcmOverflow {
        /// First operand
        a: u64,
        /// Second operand
        b: u64,
    },

    /// Frame exceeds the single-read limit
    #[error("frame too large: {size} bytes (max {max})")]
    FrameTooLarge {
        /// Encoded frame size
        size: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Peer closed the connection
    #[error("connection closed by peer")]
    ConnectionClosed,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid UTF-8
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
