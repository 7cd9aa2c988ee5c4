//! Shared test utilities for integration tests.
//!
//! These helpers mirror `scalario::test_util` without requiring the
//! `test-support` feature, so integration tests compile against the published
//! library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use std::io::Cursor;

use scalario::{ScalarConsole, StreamChannels};

pub type MemoryChannels = StreamChannels<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

/// Console reading from `input` and writing into byte buffers.
pub fn memory_console(input: &str) -> ScalarConsole<MemoryChannels> {
    ScalarConsole::new(StreamChannels::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        Vec::new(),
    ))
}

pub fn primary_text(console: &ScalarConsole<MemoryChannels>) -> String {
    String::from_utf8_lossy(console.channels().primary()).into_owned()
}

pub fn diagnostic_text(console: &ScalarConsole<MemoryChannels>) -> String {
    String::from_utf8_lossy(console.channels().diagnostic()).into_owned()
}
