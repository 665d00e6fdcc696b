//! PXP client binary.
//!
//! Collects two primes from the operator, sends them to the server, and
//! verifies the returned LCM against a locally computed one.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use pxp::numeric::{PRIME_MAX, PRIME_MIN, PrimeError};
use pxp::session::{Outcome, PrimeSource, client};
use pxp::transport::{Connection, TransportConfig};

#[derive(Parser, Debug)]
#[command(name = "pxp-client")]
#[command(version)]
#[command(about = "PXP client - prime/LCM verification", long_about = None)]
struct Cli {
    /// Server hostname or address
    host: String,

    /// Server port
    port: u16,
}

/// Interactive prime source: prompts on stdout, reads candidates from stdin.
struct StdinPrompt;

impl PrimeSource for StdinPrompt {
    fn next_candidate(&mut self) -> pxp::Result<u64> {
        loop {
            print!("Enter a prime number between {PRIME_MIN} and {PRIME_MAX}: ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                return Err(pxp::Error::Io(io::ErrorKind::UnexpectedEof.into()));
            }
            match line.trim().parse::<u64>() {
                Ok(value) => return Ok(value),
                Err(_) => println!("{} is not a decimal integer", line.trim()),
            }
        }
    }

    fn rejected(&mut self, _candidate: u64, reason: &PrimeError) {
        println!("{reason}");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    banner("PXP Client");
    println!(
        "Collects two primes in [{PRIME_MIN}, {PRIME_MAX}], sends them to the server,\n\
         and verifies the LCM the server computes against a local one.\n"
    );

    let mut conn = Connection::connect(
        (cli.host.as_str(), cli.port),
        &TransportConfig::default(),
    )
    .with_context(|| format!("connecting to {}:{}", cli.host, cli.port))?;

    let outcome = client::run(&mut conn, &mut StdinPrompt)?;

    match outcome {
        Outcome::Success => banner("Operation Successful"),
        Outcome::Failure => banner("Operation Unsuccessful"),
    }

    Ok(())
}

fn banner(title: &str) {
    let width = title.len().max(26) + 2;
    println!("╭{}╮", "─".repeat(width));
    println!("│{title:^width$}│");
    println!("╰{}╯", "─".repeat(width));
}
