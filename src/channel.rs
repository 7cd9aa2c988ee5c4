//! Text channels feeding and receiving scalar text.
//!
//! [`ChannelAdapter`] is the seam between the codec and the outside world:
//! one token in, one string out. [`StreamChannels`] implements it over any
//! buffered reader and a pair of writers, which covers both the process
//! console and in-memory buffers.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Output endpoint selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Regular output, standard output on the console.
    Primary,
    /// Error and diagnostic output, standard error on the console.
    Diagnostic,
}

/// Source of input tokens and sink for rendered text.
pub trait ChannelAdapter {
    /// Reads the next whitespace-delimited token.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    /// Propagates failures of the underlying input.
    fn read_token(&mut self) -> io::Result<Option<String>>;

    /// Writes `text` to `channel`, followed by a line terminator when
    /// `newline` is set.
    ///
    /// # Errors
    /// Propagates failures of the underlying output.
    fn write_text(&mut self, channel: Channel, text: &str, newline: bool) -> io::Result<()>;
}

/// [`ChannelAdapter`] over a line-buffered reader and two writers.
///
/// Input is consumed a line at a time; tokens left on a line are served by
/// later reads before the next line is requested.
#[derive(Debug)]
pub struct StreamChannels<R, O, E> {
    input: R,
    primary: O,
    diagnostic: E,
    pending: VecDeque<String>,
}

impl StreamChannels<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    /// Channels bound to standard input, output and error.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R, O, E> StreamChannels<R, O, E> {
    #[must_use]
    pub fn new(input: R, primary: O, diagnostic: E) -> Self {
        Self {
            input,
            primary,
            diagnostic,
            pending: VecDeque::new(),
        }
    }

    /// Primary output sink.
    #[must_use]
    pub fn primary(&self) -> &O {
        &self.primary
    }

    /// Diagnostic output sink.
    #[must_use]
    pub fn diagnostic(&self) -> &E {
        &self.diagnostic
    }
}

impl<R: BufRead, O: Write, E: Write> ChannelAdapter for StreamChannels<R, O, E> {
    // Bytes that are not UTF-8 become replacement characters so the codec
    // rejects the token instead of the whole stream failing.
    fn read_token(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        while self.pending.is_empty() {
            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
        Ok(self.pending.pop_front())
    }

    fn write_text(&mut self, channel: Channel, text: &str, newline: bool) -> io::Result<()> {
        let sink: &mut dyn Write = match channel {
            Channel::Primary => &mut self.primary,
            Channel::Diagnostic => &mut self.diagnostic,
        };
        sink.write_all(text.as_bytes())?;
        if newline {
            sink.write_all(b"\n")?;
        }
        sink.flush()
    }
}
