//! PXP status codes

use std::fmt;

/// PXP status codes
///
/// The numeric values are load-bearing: they travel on the wire as the first
/// token of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum StatusCode {
    /// Client hello, opens the exchange
    Hello = 100,
    /// Server acknowledgement of the hello
    HelloAck = 101,
    /// The client's two primes
    PrimePair = 105,
    /// Server-computed least common multiple
    LcmResult = 107,
    /// Client verdict: the LCM values agree
    Accept = 200,
    /// Client verdict: the LCM values disagree
    Reject = 400,
    /// Decode-failure sentinel, never sent intentionally
    Malformed = 500,
}

impl StatusCode {
    /// Convert from the wire value
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            100 => Some(Self::Hello),
            101 => Some(Self::HelloAck),
            105 => Some(Self::PrimePair),
            107 => Some(Self::LcmResult),
            200 => Some(Self::Accept),
            400 => Some(Self::Reject),
            500 => Some(Self::Malformed),
            _ => None,
        }
    }

    /// Convert to the wire value
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Check if this status is a client verdict
    #[must_use]
    pub const fn is_verdict(self) -> bool {
        matches!(self, Self::Accept | Self::Reject)
    }

    /// Transcript title for this status
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hello => "Connection Request",
            Self::HelloAck => "Connection Acknowledgement",
            Self::PrimePair => "Prime Number Exchange",
            Self::LcmResult => "LCM Calculation",
            Self::Accept => "Success Message",
            Self::Reject => "Failure Message",
            Self::Malformed => "Bad Request",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hello => "Hello",
            Self::HelloAck => "HelloAck",
            Self::PrimePair => "PrimePair",
            Self::LcmResult => "LcmResult",
            Self::Accept => "Accept",
            Self::Reject => "Reject",
            Self::Malformed => "Malformed",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_roundtrip() {
        let codes = [
            StatusCode::Hello,
            StatusCode::HelloAck,
            StatusCode::PrimePair,
            StatusCode::LcmResult,
            StatusCode::Accept,
            StatusCode::Reject,
            StatusCode::Malformed,
        ];

        for code in codes {
            let value = code.as_u16();
            let decoded = StatusCode::from_u16(value).unwrap();
            assert_eq!(code, decoded);
        }
    }

    #[test]
    fn test_unknown_values_rejected() {
        for value in [0, 1, 99, 102, 106, 201, 404, 999] {
            assert_eq!(StatusCode::from_u16(value), None);
        }
    }

    #[test]
    fn test_verdicts() {
        assert!(StatusCode::Accept.is_verdict());
        assert!(StatusCode::Reject.is_verdict());
        assert!(!StatusCode::Hello.is_verdict());
        assert!(!StatusCode::Malformed.is_verdict());
    }
}
