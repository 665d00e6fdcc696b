//! PXP message codec (encode/decode)
//!
//! Wire format: one newline-less ASCII line per frame, space-separated
//! tokens, the first token a decimal status code.

use super::{Error, Message, Result, StatusCode};

/// Encode a message to its wire line
///
/// # Format
///
/// ```text
/// <code> <arg0> <arg1> ...
/// ```
///
/// The format has no escaping, so arguments must never themselves contain
/// whitespace. This is a design constraint of the wire vocabulary, not a
/// defect: every constructor on [`Message`] produces whitespace-free tokens.
#[must_use]
pub fn encode(message: &Message) -> String {
    let mut line = message.status().as_u16().to_string();
    for arg in message.args() {
        debug_assert!(
            !arg.chars().any(char::is_whitespace),
            "argument contains whitespace"
        );
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Decode a message from a wire line
///
/// A first token that is empty, non-numeric, or outside the closed status
/// enumeration decodes to the synthetic `500 Malformed` sentinel with no
/// arguments rather than an error, so both endpoints can branch on
/// "malformed" like any other status.
///
/// # Errors
///
/// Returns [`Error::InvalidArity`] when a known code arrives with fewer
/// arguments than its payload requires (`105` needs two trailing tokens,
/// `107` one).
pub fn decode(text: &str) -> Result<Message> {
    let mut tokens = text.split_whitespace();
    let status = tokens
        .next()
        .and_then(|token| token.parse::<u16>().ok())
        .and_then(StatusCode::from_u16);

    let Some(status) = status else {
        return Ok(Message::malformed());
    };

    let args: Vec<String> = tokens.map(str::to_owned).collect();

    let expected = match status {
        StatusCode::PrimePair => 2,
        StatusCode::LcmResult => 1,
        _ => 0,
    };
    if args.len() < expected {
        return Err(Error::InvalidArity {
            status,
            expected,
            found: args.len(),
        });
    }

    Ok(Message::from_parts(status, args))
}
