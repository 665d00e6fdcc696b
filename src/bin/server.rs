//! PXP server binary.
//!
//! Accepts client connections, computes the LCM of each submitted prime
//! pair, and records the client's verdict. Each connection is served on its
//! own worker thread so sessions do not block one another.

use std::thread;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use pxp::session::{Outcome, server};
use pxp::transport::{Listener, TransportConfig};

#[derive(Parser, Debug)]
#[command(name = "pxp-server")]
#[command(version)]
#[command(about = "PXP server - prime/LCM verification", long_about = None)]
struct Cli {
    /// Listening port
    #[arg(value_parser = clap::value_parser!(u16).range(1024..))]
    port: u16,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    banner("PXP Server");

    let listener = Listener::bind(("0.0.0.0", cli.port), TransportConfig::default())
        .with_context(|| format!("binding port {}", cli.port))?;
    info!(port = cli.port, "awaiting connections");

    loop {
        let (mut conn, addr) = listener.accept()?;
        info!(%addr, "client connected");

        thread::spawn(move || match server::serve(&mut conn) {
            Ok(Outcome::Success) => info!(%addr, "session succeeded"),
            Ok(Outcome::Failure) => info!(%addr, "session failed: LCM mismatch"),
            Err(err) => error!(%addr, error = %err, "session aborted"),
        });
    }
}

fn banner(title: &str) {
    let width = title.len().max(26) + 2;
    println!("╭{}╮", "─".repeat(width));
    println!("│{title:^width$}│");
    println!("╰{}╯", "─".repeat(width));
}
