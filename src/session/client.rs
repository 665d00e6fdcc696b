//! Client side of the PXP exchange.

use tracing::{info, warn};

use crate::numeric::{PrimeError, lcm, validate_prime};
use crate::protocol::{Error, Message, Result, StatusCode};
use crate::transport::Connection;

use super::Outcome;

/// Stages of the client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClientStage {
    Idle,
    AwaitingAck,
    CollectingPrimes,
    AwaitingResult,
    Done(Outcome),
}

impl ClientStage {
    const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingAck => "AwaitingAck",
            Self::CollectingPrimes => "CollectingPrimes",
            Self::AwaitingResult => "AwaitingResult",
            Self::Done(_) => "Done",
        }
    }
}

/// How the client reacted to a frame while awaiting the hello ack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckDisposition {
    /// `101` received; prime collection may begin.
    Acknowledged,
    /// Any other status; keep waiting for the next frame.
    Ignored,
}

/// Supplies candidate primes to the client driver.
///
/// The interactive binary prompts the operator; tests script the values.
pub trait PrimeSource {
    /// Produce the next candidate value.
    fn next_candidate(&mut self) -> Result<u64>;

    /// Observe a candidate that failed validation, before the next request.
    fn rejected(&mut self, candidate: u64, reason: &PrimeError) {
        let _ = (candidate, reason);
    }
}

/// Client session state machine.
///
/// Drives one exchange: send hello, await the acknowledgement, submit two
/// primes, await the server LCM, compare, emit the verdict.
#[derive(Debug)]
pub struct ClientSession {
    stage: ClientStage,
    primes: Option<(u64, u64)>,
}

impl ClientSession {
    /// Create a session in the `Idle` stage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: ClientStage::Idle,
            primes: None,
        }
    }

    /// Open the exchange: `Idle → AwaitingAck`, unconditionally, producing
    /// the `100 Hello` message.
    pub fn hello(&mut self) -> Message {
        debug_assert!(self.stage == ClientStage::Idle, "hello sent twice");
        self.stage = ClientStage::AwaitingAck;
        Message::hello()
    }

    /// Handle a frame while awaiting the hello acknowledgement.
    ///
    /// Only `101` advances the session; every other status is ignored and
    /// the caller reads the next frame.
    pub fn handle_ack(&mut self, message: &Message) -> Result<AckDisposition> {
        if self.stage != ClientStage::AwaitingAck {
            return Err(self.unexpected(message.status()));
        }
        if message.status() == StatusCode::HelloAck {
            self.stage = ClientStage::CollectingPrimes;
            Ok(AckDisposition::Acknowledged)
        } else {
            Ok(AckDisposition::Ignored)
        }
    }

    /// Record the two primes, in entry order, and produce the `105 Primes`
    /// message.
    ///
    /// Both values are re-checked against the protocol constraints; a
    /// validation failure leaves the stage unchanged so the caller can
    /// collect a replacement value.
    pub fn submit_primes(&mut self, first: u64, second: u64) -> Result<Message> {
        if self.stage != ClientStage::CollectingPrimes {
            return Err(self.unexpected(StatusCode::PrimePair));
        }
        validate_prime(first)?;
        validate_prime(second)?;
        self.primes = Some((first, second));
        self.stage = ClientStage::AwaitingResult;
        Ok(Message::prime_pair(first, second))
    }

    /// Compare the server-computed LCM against the locally computed one and
    /// produce the verdict message along with the terminal outcome.
    ///
    /// Any status other than `107` at this point is a protocol violation.
    pub fn handle_result(&mut self, message: &Message) -> Result<(Message, Outcome)> {
        if self.stage != ClientStage::AwaitingResult
            || message.status() != StatusCode::LcmResult
        {
            return Err(self.unexpected(message.status()));
        }
        let server_lcm = message.lcm_value()?;
        let (first, second) = self.primes.ok_or(Error::MissingPrimes)?;
        let local_lcm = lcm(first, second).ok_or(Error::LcmOverflow {
            a: first,
            b: second,
        })?;
        info!(local_lcm, server_lcm, "locally computed LCM");

        let (verdict, outcome) = if server_lcm == local_lcm {
            (Message::accept(), Outcome::Success)
        } else {
            (Message::reject(), Outcome::Failure)
        };
        self.stage = ClientStage::Done(outcome);
        Ok((verdict, outcome))
    }

    /// Terminal verdict, once the session reached it.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.stage {
            ClientStage::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    fn unexpected(&self, status: StatusCode) -> Error {
        Error::UnexpectedMessage {
            stage: self.stage.name(),
            status,
        }
    }
}

impl Default for ClientSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive a full client session over an established connection.
///
/// Candidates failing validation are reported back to the source and
/// replaced; the retry loop is unbounded by design.
pub fn run(conn: &mut Connection, source: &mut dyn PrimeSource) -> Result<Outcome> {
    let mut session = ClientSession::new();

    conn.send(&session.hello())?;

    loop {
        let message = conn.recv()?;
        if session.handle_ack(&message)? == AckDisposition::Acknowledged {
            break;
        }
        warn!(status = %message.status(), "ignoring frame while awaiting hello ack");
    }

    let first = collect_prime(source)?;
    let second = collect_prime(source)?;
    conn.send(&session.submit_primes(first, second)?)?;

    let message = conn.recv()?;
    let (verdict, outcome) = session.handle_result(&message)?;
    conn.send(&verdict)?;

    Ok(outcome)
}

fn collect_prime(source: &mut dyn PrimeSource) -> Result<u64> {
    loop {
        let candidate = source.next_candidate()?;
        match validate_prime(candidate) {
            Ok(()) => return Ok(candidate),
            Err(reason) => source.rejected(candidate, &reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_opens_the_session() {
        let mut session = ClientSession::new();
        let msg = session.hello();
        assert_eq!(msg.status(), StatusCode::Hello);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn non_ack_frames_are_ignored_while_awaiting_ack() {
        let mut session = ClientSession::new();
        let _ = session.hello();

        let disposition = session.handle_ack(&Message::lcm_result(42)).unwrap();
        assert_eq!(disposition, AckDisposition::Ignored);

        let disposition = session.handle_ack(&Message::hello_ack()).unwrap();
        assert_eq!(disposition, AckDisposition::Acknowledged);
    }

    #[test]
    fn invalid_candidates_do_not_advance_the_stage() {
        let mut session = ClientSession::new();
        let _ = session.hello();
        session.handle_ack(&Message::hello_ack()).unwrap();

        let err = session.submit_primes(1032, 1033).expect_err("1032 is composite");
        assert!(matches!(
            err,
            Error::InvalidPrime(PrimeError::NotPrime(1032))
        ));

        let err = session.submit_primes(1031, 7001).expect_err("7001 is out of range");
        assert!(matches!(
            err,
            Error::InvalidPrime(PrimeError::OutOfRange(7001))
        ));

        // Still collecting; a valid pair goes through.
        let msg = session.submit_primes(1031, 1033).unwrap();
        assert_eq!(msg.encode(), "105 Primes 1031 1033");
    }

    #[test]
    fn matching_lcm_yields_accept_and_success() {
        let mut session = ClientSession::new();
        let _ = session.hello();
        session.handle_ack(&Message::hello_ack()).unwrap();
        session.submit_primes(1031, 1033).unwrap();

        let (verdict, outcome) = session
            .handle_result(&Message::lcm_result(1_065_023))
            .unwrap();
        assert_eq!(verdict.status(), StatusCode::Accept);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(session.outcome(), Some(Outcome::Success));
    }

    #[test]
    fn mismatched_lcm_yields_reject_and_failure() {
        let mut session = ClientSession::new();
        let _ = session.hello();
        session.handle_ack(&Message::hello_ack()).unwrap();
        session.submit_primes(1031, 1033).unwrap();

        let (verdict, outcome) = session
            .handle_result(&Message::lcm_result(999_999))
            .unwrap();
        assert_eq!(verdict.status(), StatusCode::Reject);
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(session.outcome(), Some(Outcome::Failure));
    }

    #[test]
    fn non_result_frame_while_awaiting_result_is_a_violation() {
        let mut session = ClientSession::new();
        let _ = session.hello();
        session.handle_ack(&Message::hello_ack()).unwrap();
        session.submit_primes(1031, 1033).unwrap();

        let err = session
            .handle_result(&Message::hello_ack())
            .expect_err("only 107 is valid here");
        assert!(matches!(err, Error::UnexpectedMessage { .. }));
    }
}
