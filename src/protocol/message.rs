//! PXP message implementation

use super::{Error, Result, StatusCode};

/// PXP message
///
/// A status code plus its ordered string arguments. Messages are immutable
/// once constructed; they are produced, encoded, sent, and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Message status code
    status: StatusCode,
    /// Space-separated arguments following the code on the wire
    args: Vec<String>,
}

impl Message {
    pub(crate) fn from_parts(status: StatusCode, args: Vec<String>) -> Self {
        Self { status, args }
    }

    /// `100 Hello` - client opens the exchange
    #[must_use]
    pub fn hello() -> Self {
        Self::from_parts(StatusCode::Hello, vec!["Hello".to_owned()])
    }

    /// `101 Hello Ack` - server acknowledges the hello
    #[must_use]
    pub fn hello_ack() -> Self {
        Self::from_parts(
            StatusCode::HelloAck,
            vec!["Hello".to_owned(), "Ack".to_owned()],
        )
    }

    /// `105 Primes <first> <second>` - the client's two primes, in entry order
    #[must_use]
    pub fn prime_pair(first: u64, second: u64) -> Self {
        Self::from_parts(
            StatusCode::PrimePair,
            vec!["Primes".to_owned(), first.to_string(), second.to_string()],
        )
    }

    /// `107 LCM <value>` - the server-computed least common multiple
    #[must_use]
    pub fn lcm_result(value: u64) -> Self {
        Self::from_parts(
            StatusCode::LcmResult,
            vec!["LCM".to_owned(), value.to_string()],
        )
    }

    /// `200 OK` - client verdict: the LCM values agree
    #[must_use]
    pub fn accept() -> Self {
        Self::from_parts(StatusCode::Accept, vec!["OK".to_owned()])
    }

    /// `400 Error` - client verdict: the LCM values disagree
    #[must_use]
    pub fn reject() -> Self {
        Self::from_parts(StatusCode::Reject, vec!["Error".to_owned()])
    }

    /// `500` - synthetic sentinel for frames whose status could not be decoded
    #[must_use]
    pub fn malformed() -> Self {
        Self::from_parts(StatusCode::Malformed, Vec::new())
    }

    /// Get the status code
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the arguments
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Parse the two trailing prime tokens of a `105 Primes` message.
    pub fn primes(&self) -> Result<(u64, u64)> {
        let len = self.args.len();
        if len < 2 {
            return Err(Error::InvalidArity {
                status: self.status,
                expected: 2,
                found: len,
            });
        }
        let first = parse_token(self.status, &self.args[len - 2])?;
        let second = parse_token(self.status, &self.args[len - 1])?;
        Ok((first, second))
    }

    /// Parse the trailing numeric token of a `107 LCM` message.
    pub fn lcm_value(&self) -> Result<u64> {
        let token = self.args.last().ok_or(Error::InvalidArity {
            status: self.status,
            expected: 1,
            found: 0,
        })?;
        parse_token(self.status, token)
    }

    /// Encode the message to its wire line
    #[must_use]
    pub fn encode(&self) -> String {
        super::encode(self)
    }

    /// Decode a message from a wire line
    pub fn decode(text: &str) -> Result<Self> {
        super::decode(text)
    }
}

fn parse_token(status: StatusCode, token: &str) -> Result<u64> {
    token.parse().map_err(|_| Error::InvalidArgument {
        status,
        token: token.to_owned(),
    })
}
