//! Session state machines for the two PXP endpoints.
//!
//! Both sides are explicit stage machines in mirrored form: handlers keyed
//! on (stage, status) advance the exchange and reject out-of-order frames
//! instead of mis-dispatching them.

pub mod client;
pub mod server;

pub use client::{AckDisposition, ClientSession, PrimeSource};
pub use server::{ServerEvent, ServerSession};

/// Final verdict of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Client- and server-computed LCM values agreed.
    Success,
    /// The values disagreed.
    Failure,
}
