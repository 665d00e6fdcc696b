//! PXP (Prime eXchange Protocol) - Two-party prime/LCM verification over TCP
//!
//! This library provides a reference implementation of the PXP exchange: a
//! client collects two prime numbers, sends them to a server, the server
//! computes their least common multiple, and the client confirms or disputes
//! the result against its own locally computed value.
//!
//! # Quick Start
//!
//! ```rust
//! use pxp::{Message, StatusCode};
//!
//! // Construct a message
//! let msg = Message::prime_pair(1031, 1033);
//!
//! // Encode to its wire line
//! let line = msg.encode();
//! assert_eq!(line, "105 Primes 1031 1033");
//!
//! // Decode from text
//! let decoded = Message::decode(&line)?;
//! assert_eq!(decoded.status(), StatusCode::PrimePair);
//! # Ok::<(), pxp::Error>(())
//! ```
//!
//! # Structure
//!
//! - [`protocol`] - status codes, messages, and the text codec
//! - [`numeric`] - primality, GCD, and LCM utilities shared by both sides
//! - [`session`] - the mirrored client and server state machines
//! - [`transport`] - blocking TCP framing for single-read messages

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod numeric;
pub mod protocol;
pub mod session;
pub mod transport;

pub use protocol::{Error, MAX_FRAME_SIZE, Message, Result, StatusCode};
pub use session::{ClientSession, Outcome, ServerSession};
pub use transport::{Connection, Listener, TransportConfig};

/// PXP protocol version
pub const VERSION: &str = "1.0";
