//! Accepting endpoint for the server side.

use std::net::{SocketAddr, TcpListener, ToSocketAddrs};

use crate::protocol::Result;

use super::{Connection, TransportConfig};

/// Listening endpoint; yields one [`Connection`] per accepted client.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    config: TransportConfig,
}

impl Listener {
    /// Bind to the provided address.
    pub fn bind(addr: impl ToSocketAddrs, config: TransportConfig) -> Result<Self> {
        let inner = TcpListener::bind(addr)?;
        Ok(Self { inner, config })
    }

    /// Block until the next client connects.
    pub fn accept(&self) -> Result<(Connection, SocketAddr)> {
        let (stream, addr) = self.inner.accept()?;
        let conn = Connection::from_stream(stream, &self.config)?;
        Ok((conn, addr))
    }

    /// Local listening address.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }
}
