//! PXP protocol core implementation
//!
//! This module provides the wire format, status codes, and codec for PXP.

mod codec;
mod error;
mod message;
mod types;

pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use message::Message;
pub use types::StatusCode;

/// Maximum frame size in bytes; every message fits one read/write call.
pub const MAX_FRAME_SIZE: usize = 1024;
