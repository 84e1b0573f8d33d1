//! Parsing of the whitespace-delimited batch input.

use crate::config::Config;
use crate::error::Error;
use std::str::SplitWhitespace;

// Upper bound on up-front reservation; the declared count is untrusted.
const PREALLOCATE_MAX: usize = 4096;

/// A batch of messages together with the delivery window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub timestamps: Vec<i64>,
    pub messages: Vec<String>,
    pub window: i64,
}

/// Parses `n`, `n` timestamps, `n` messages and the window, in that order.
///
/// The window may be omitted when the config provides a default.
pub fn parse_batch(input: &str, config: &Config) -> Result<Batch, Error> {
    let mut tokens = input.split_whitespace();

    let declared = next_token(&mut tokens, "message count")?;
    let count: usize = declared.parse().map_err(|_| Error::InvalidInteger {
        what: "message count",
        token: declared.to_string(),
    })?;
    if count > config.max_messages {
        return Err(Error::TooManyMessages {
            declared: count,
            max: config.max_messages,
        });
    }

    let mut timestamps: Vec<i64> = Vec::with_capacity(count.min(PREALLOCATE_MAX));
    for index in 0..count {
        let timestamp = parse_integer(&mut tokens, "timestamp")?;
        if let Some(&previous) = timestamps.last()
            && timestamp < previous
        {
            if config.reject_unsorted {
                return Err(Error::UnsortedTimestamps {
                    index,
                    previous,
                    current: timestamp,
                });
            }
            log::warn!("Timestamp {timestamp} at index {index} is earlier than {previous}");
        }
        timestamps.push(timestamp);
    }

    let mut messages = Vec::with_capacity(count.min(PREALLOCATE_MAX));
    for _ in 0..count {
        messages.push(next_token(&mut tokens, "message")?.to_string());
    }

    let window = match (tokens.next(), config.default_window) {
        (Some(token), _) => token.parse().map_err(|_| Error::InvalidInteger {
            what: "window",
            token: token.to_string(),
        })?,
        (None, Some(window)) => {
            log::debug!("No window in input, using configured default {window}");
            window
        }
        (None, None) => return Err(Error::UnexpectedEof { expected: "window" }),
    };

    let trailing = tokens.count();
    if trailing > 0 {
        log::warn!("Ignoring {trailing} trailing token(s) after the window");
    }

    Ok(Batch {
        timestamps,
        messages,
        window,
    })
}

fn next_token<'a>(
    tokens: &mut SplitWhitespace<'a>,
    expected: &'static str,
) -> Result<&'a str, Error> {
    tokens.next().ok_or(Error::UnexpectedEof { expected })
}

fn parse_integer(tokens: &mut SplitWhitespace<'_>, what: &'static str) -> Result<i64, Error> {
    let token = next_token(tokens, what)?;
    token.parse().map_err(|_| Error::InvalidInteger {
        what,
        token: token.to_string(),
    })
}
