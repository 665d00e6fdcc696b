//! Framed connection over a blocking TCP stream.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::info;

use crate::protocol::{self, Error, MAX_FRAME_SIZE, Message, Result};

/// Transport configuration options.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Optional read timeout for sockets.
    pub read_timeout: Option<Duration>,
    /// Optional write timeout for sockets.
    pub write_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            read_timeout: Some(Duration::from_secs(30)),
            write_timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// PXP connection over TCP.
///
/// Each message travels as one bounded read or write of at most
/// [`MAX_FRAME_SIZE`] bytes; the stream carries no further framing.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Connect to a remote endpoint.
    pub fn connect(addr: impl ToSocketAddrs, config: &TransportConfig) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        Self::from_stream(stream, config)
    }

    /// Wrap an accepted stream.
    pub(crate) fn from_stream(stream: TcpStream, config: &TransportConfig) -> Result<Self> {
        stream.set_read_timeout(config.read_timeout)?;
        stream.set_write_timeout(config.write_timeout)?;
        Ok(Self { stream })
    }

    /// Send a message as a single frame.
    pub fn send(&mut self, message: &Message) -> Result<()> {
        let line = message.encode();
        if line.len() > MAX_FRAME_SIZE {
            return Err(Error::FrameTooLarge {
                size: line.len(),
                max: MAX_FRAME_SIZE,
            });
        }
        self.stream.write_all(line.as_bytes())?;
        self.stream.flush()?;
        transcript("sent", message);
        Ok(())
    }

    /// Receive one frame and decode it.
    ///
    /// A zero-length read means the peer closed the connection.
    pub fn recv(&mut self) -> Result<Message> {
        let mut buf = [0u8; MAX_FRAME_SIZE];
        let len = self.stream.read(&mut buf)?;
        if len == 0 {
            return Err(Error::ConnectionClosed);
        }
        let text = String::from_utf8(buf[..len].to_vec())?;
        let message = protocol::decode(&text)?;
        transcript("received", &message);
        Ok(message)
    }

    /// Remote peer address.
    pub fn peer_addr(&self) -> Result<SocketAddr> {
        Ok(self.stream.peer_addr()?)
    }
}

/// Per-message transcript: direction, title, and parsed fields, as
/// structured logging.
fn transcript(direction: &'static str, message: &Message) {
    info!(
        direction,
        code = message.status().as_u16(),
        title = message.status().title(),
        args = ?message.args(),
        "frame"
    );
}
