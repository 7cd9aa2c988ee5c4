//! Library crate for scalario.
//!
//! Exposes integer scalars tagged with their width and signedness, the
//! numeral bases they are displayed in, and the text codec converting
//! between the two, plus a console layer reading and writing scalars over
//! abstract text channels.

#![forbid(unsafe_code)]

pub mod base;
pub mod channel;
pub mod codec;
pub mod console;
pub mod error;
pub mod kind;
pub mod scalar;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use base::{Base, BaseDescriptor, PrintWidths};
pub use channel::{Channel, ChannelAdapter, StreamChannels};
pub use codec::{format_value, parse_scalar, parse_token};
pub use console::{ConsoleError, ScalarConsole};
pub use error::{ScalarError, TypeMismatch};
pub use kind::{ScalarKind, Signedness, Width};
pub use scalar::{NativeInt, RawScalar, ScalarValue};
