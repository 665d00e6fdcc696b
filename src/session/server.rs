//! Server side of the PXP exchange.

use tracing::info;

use crate::numeric::lcm;
use crate::protocol::{Error, Message, Result, StatusCode};
use crate::transport::Connection;

use super::Outcome;

/// Stages of the server session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServerStage {
    AwaitingHello,
    AwaitingPrimes,
    AwaitingVerdict,
    Closed,
}

impl ServerStage {
    const fn name(self) -> &'static str {
        match self {
            Self::AwaitingHello => "AwaitingHello",
            Self::AwaitingPrimes => "AwaitingPrimes",
            Self::AwaitingVerdict => "AwaitingVerdict",
            Self::Closed => "Closed",
        }
    }
}

/// Server reaction to one dispatched frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// Send this reply and keep reading.
    Reply(Message),
    /// Verdict received; close the connection with this outcome.
    Closed(Outcome),
}

/// Server session state machine.
///
/// An exhaustive transition table keyed on (stage, status); any pair outside
/// the table - the `500` sentinel included - is a protocol violation that
/// ends the session.
#[derive(Debug)]
pub struct ServerSession {
    stage: ServerStage,
}

impl ServerSession {
    /// Create a session awaiting the client hello.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: ServerStage::AwaitingHello,
        }
    }

    /// Dispatch one decoded frame.
    pub fn handle(&mut self, message: &Message) -> Result<ServerEvent> {
        match (self.stage, message.status()) {
            (ServerStage::AwaitingHello, StatusCode::Hello) => {
                self.stage = ServerStage::AwaitingPrimes;
                Ok(ServerEvent::Reply(Message::hello_ack()))
            }
            (ServerStage::AwaitingPrimes, StatusCode::PrimePair) => {
                let (first, second) = message.primes()?;
                let value = lcm(first, second).ok_or(Error::LcmOverflow {
                    a: first,
                    b: second,
                })?;
                info!(first, second, value, "computed LCM");
                self.stage = ServerStage::AwaitingVerdict;
                Ok(ServerEvent::Reply(Message::lcm_result(value)))
            }
            (ServerStage::AwaitingVerdict, StatusCode::Accept) => {
                self.stage = ServerStage::Closed;
                Ok(ServerEvent::Closed(Outcome::Success))
            }
            (ServerStage::AwaitingVerdict, StatusCode::Reject) => {
                self.stage = ServerStage::Closed;
                Ok(ServerEvent::Closed(Outcome::Failure))
            }
            (_, status) => Err(Error::UnexpectedMessage {
                stage: self.stage.name(),
                status,
            }),
        }
    }
}

impl Default for ServerSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Serve one connection to completion.
///
/// An explicit receive/dispatch/reply loop; the session ends at the client
/// verdict or on the first protocol violation.
pub fn serve(conn: &mut Connection) -> Result<Outcome> {
    let mut session = ServerSession::new();
    loop {
        let message = conn.recv()?;
        match session.handle(&message)? {
            ServerEvent::Reply(reply) => conn.send(&reply)?,
            ServerEvent::Closed(outcome) => return Ok(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_past_hello() -> ServerSession {
        let mut session = ServerSession::new();
        session.handle(&Message::hello()).unwrap();
        session
    }

    #[test]
    fn hello_is_acknowledged() {
        let mut session = ServerSession::new();
        let event = session.handle(&Message::hello()).unwrap();
        assert_eq!(event, ServerEvent::Reply(Message::hello_ack()));
    }

    #[test]
    fn prime_pair_yields_lcm_result() {
        let mut session = session_past_hello();
        let event = session.handle(&Message::prime_pair(1031, 1033)).unwrap();
        assert_eq!(event, ServerEvent::Reply(Message::lcm_result(1_065_023)));
    }

    #[test]
    fn verdicts_close_the_session() {
        let mut session = session_past_hello();
        session.handle(&Message::prime_pair(1031, 1033)).unwrap();
        let event = session.handle(&Message::accept()).unwrap();
        assert_eq!(event, ServerEvent::Closed(Outcome::Success));

        let mut session = session_past_hello();
        session.handle(&Message::prime_pair(1031, 1033)).unwrap();
        let event = session.handle(&Message::reject()).unwrap();
        assert_eq!(event, ServerEvent::Closed(Outcome::Failure));
    }

    #[test]
    fn out_of_order_primes_are_rejected() {
        let mut session = ServerSession::new();
        let err = session
            .handle(&Message::prime_pair(1031, 1033))
            .expect_err("primes before hello");
        assert!(matches!(
            err,
            Error::UnexpectedMessage {
                stage: "AwaitingHello",
                status: StatusCode::PrimePair,
            }
        ));
    }

    #[test]
    fn malformed_sentinel_is_a_violation_everywhere() {
        let mut session = ServerSession::new();
        let err = session.handle(&Message::malformed()).expect_err("sentinel");
        assert!(matches!(err, Error::UnexpectedMessage { .. }));

        let mut session = session_past_hello();
        let err = session.handle(&Message::malformed()).expect_err("sentinel");
        assert!(matches!(err, Error::UnexpectedMessage { .. }));
    }

    #[test]
    fn duplicate_hello_is_rejected() {
        let mut session = session_past_hello();
        let err = session.handle(&Message::hello()).expect_err("second hello");
        assert!(matches!(
            err,
            Error::UnexpectedMessage {
                stage: "AwaitingPrimes",
                status: StatusCode::Hello,
            }
        ));
    }
}
