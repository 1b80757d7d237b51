//! Whitespace token scanner over a fully buffered input.
//!
//! Purpose
//! - One reader for every puzzle: buffer the whole input once, then serve
//!   whitespace-separated tokens parsed on demand via `FromStr`.
//!
//! Contract
//! - `try_next` returns `Ok(None)` on clean end-of-input.
//! - `next` demands a token; a missing one is `ScanError::Exhausted`.
//! - Unparsable tokens surface as `ScanError::Token` (fatal, no recovery).

use std::io::{self, Read};
use std::str::FromStr;

use thiserror::Error;

/// Fatal tokenization errors. Judge input is trusted; anything that fails
/// here is a precondition violation, not a recoverable state.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input ended while a token was still required.
    #[error("input exhausted while a token was still required")]
    Exhausted,
    /// A token did not parse as the requested type.
    #[error("token `{token}` is not a valid {expected}")]
    Token { token: String, expected: &'static str },
}

/// Token scanner over a fully buffered input.
pub struct Scanner {
    buf: String,
    pos: usize,
}

impl Scanner {
    /// Buffer everything `input` has to offer. Puzzle inputs are small, and
    /// a single up-front read keeps token serving allocation-free.
    pub fn from_reader(mut input: impl Read) -> io::Result<Self> {
        let mut buf = String::new();
        input.read_to_string(&mut buf)?;
        Ok(Self { buf, pos: 0 })
    }

    fn next_token(&mut self) -> Option<&str> {
        let bytes = self.buf.as_bytes();
        let mut start = self.pos;
        while start < bytes.len() && bytes[start].is_ascii_whitespace() {
            start += 1;
        }
        if start == bytes.len() {
            self.pos = start;
            return None;
        }
        let mut end = start;
        while end < bytes.len() && !bytes[end].is_ascii_whitespace() {
            end += 1;
        }
        self.pos = end;
        Some(&self.buf[start..end])
    }

    /// Next token parsed as `T`, or `None` on clean end-of-input.
    pub fn try_next<T: FromStr>(&mut self) -> Result<Option<T>, ScanError> {
        match self.next_token() {
            None => Ok(None),
            Some(tok) => match tok.parse() {
                Ok(value) => Ok(Some(value)),
                Err(_) => Err(ScanError::Token {
                    token: tok.to_string(),
                    expected: std::any::type_name::<T>(),
                }),
            },
        }
    }

    /// Next token parsed as `T`; the input must not be exhausted yet.
    pub fn next<T: FromStr>(&mut self) -> Result<T, ScanError> {
        self.try_next()?.ok_or(ScanError::Exhausted)
    }
}
