//! In-memory channels for exercising the console in tests.

use std::io::Cursor;

use crate::channel::StreamChannels;
use crate::console::ScalarConsole;

/// Channels reading from a fixed string and writing into byte buffers.
pub type MemoryChannels = StreamChannels<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

/// Builds channels that serve `input` as the input stream.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use scalario::ChannelAdapter;
/// use scalario::test_util::memory_channels;
///
/// let mut channels = memory_channels("ff 17");
/// assert_eq!(channels.read_token().ok().flatten().as_deref(), Some("ff"));
/// # }
/// ```
#[must_use]
pub fn memory_channels(input: &str) -> MemoryChannels {
    memory_channels_from_bytes(input.as_bytes())
}

/// Builds channels serving raw bytes, which need not be valid UTF-8.
#[must_use]
pub fn memory_channels_from_bytes(input: &[u8]) -> MemoryChannels {
    StreamChannels::new(Cursor::new(input.to_vec()), Vec::new(), Vec::new())
}

/// Console over [`memory_channels`].
#[must_use]
pub fn memory_console(input: &str) -> ScalarConsole<MemoryChannels> {
    ScalarConsole::new(memory_channels(input))
}

/// Text written to the primary channel so far.
#[must_use]
pub fn primary_text(console: &ScalarConsole<MemoryChannels>) -> String {
    String::from_utf8_lossy(console.channels().primary()).into_owned()
}

/// Text written to the diagnostic channel so far.
#[must_use]
pub fn diagnostic_text(console: &ScalarConsole<MemoryChannels>) -> String {
    String::from_utf8_lossy(console.channels().diagnostic()).into_owned()
}
