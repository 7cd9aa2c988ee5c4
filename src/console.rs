//! Typed scalar input and output over a [`ChannelAdapter`].
//!
//! [`ScalarConsole`] reads tokens and turns them into scalars of a requested
//! kind and base, and writes scalars or plain messages to the primary or
//! diagnostic channel. A token that fails to convert is reported on the
//! diagnostic channel before the error is handed back; the console never
//! retries on its own.

use num_traits::Unsigned;
use thiserror::Error;

use crate::base::Base;
use crate::channel::{Channel, ChannelAdapter};
use crate::codec::{format_value, parse_scalar};
use crate::error::ScalarError;
use crate::kind::ScalarKind;
use crate::scalar::{NativeInt, ScalarValue};

/// Failure raised by [`ScalarConsole`].
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input channel closed before a token arrived.
    #[error("input channel closed before a token was read")]
    EndOfInput,
    /// The token could not be converted, or the kind/base pair is invalid.
    #[error(transparent)]
    Scalar(#[from] ScalarError),
    /// Reading from or writing to a channel failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Scalar-aware wrapper around a pair of text channels.
#[derive(Debug)]
pub struct ScalarConsole<C> {
    channels: C,
}

impl<C: ChannelAdapter> ScalarConsole<C> {
    /// Wraps `channels`.
    #[must_use]
    pub fn new(channels: C) -> Self {
        Self { channels }
    }

    /// Underlying channels.
    #[must_use]
    pub fn channels(&self) -> &C {
        &self.channels
    }

    /// Reads the next raw token.
    ///
    /// # Errors
    /// [`ConsoleError::EndOfInput`] when no token is left, or
    /// [`ConsoleError::Io`] when the input fails.
    pub fn read_token(&mut self) -> Result<String, ConsoleError> {
        self.channels
            .read_token()?
            .ok_or(ConsoleError::EndOfInput)
    }

    /// Reads a token and converts it to a scalar of `kind` in `base`.
    ///
    /// # Errors
    /// Any [`ScalarError`] from the codec, after a diagnostic line has been
    /// written, plus the errors of [`Self::read_token`].
    pub fn read_scalar(
        &mut self,
        kind: ScalarKind,
        base: Base,
    ) -> Result<ScalarValue, ConsoleError> {
        let token = self.read_token()?;
        let parsed = parse_scalar(&token, kind, base);
        if let Err(err) = &parsed {
            log::warn!("conversion of console input failed: {err}");
            let message = format!(
                "Failed to convert user input '{token}' to {kind} value; base is {}",
                base.name()
            );
            self.log_err(&message, true)?;
        }
        Ok(parsed?)
    }

    /// Reads a signed 32-bit decimal value.
    ///
    /// # Errors
    /// See [`Self::read_scalar`].
    pub fn read_dec_signed(&mut self) -> Result<i32, ConsoleError> {
        self.read_native(Base::Decimal)
    }

    /// Reads an unsigned 32-bit decimal value.
    ///
    /// # Errors
    /// See [`Self::read_scalar`].
    pub fn read_dec(&mut self) -> Result<u32, ConsoleError> {
        self.read_native(Base::Decimal)
    }

    /// Reads an unsigned 32-bit binary value.
    ///
    /// # Errors
    /// See [`Self::read_scalar`].
    pub fn read_bin(&mut self) -> Result<u32, ConsoleError> {
        self.read_native(Base::Binary)
    }

    /// Reads an unsigned 32-bit octal value.
    ///
    /// # Errors
    /// See [`Self::read_scalar`].
    pub fn read_oct(&mut self) -> Result<u32, ConsoleError> {
        self.read_native(Base::Octal)
    }

    /// Reads an unsigned 32-bit hexadecimal value.
    ///
    /// # Errors
    /// See [`Self::read_scalar`].
    pub fn read_hex(&mut self) -> Result<u32, ConsoleError> {
        self.read_native(Base::Hexadecimal)
    }

    fn read_native<T: NativeInt>(&mut self, base: Base) -> Result<T, ConsoleError> {
        let value = self.read_scalar(T::KIND, base)?;
        Ok(value.get::<T>()?)
    }

    /// Writes a message to the primary channel.
    ///
    /// # Errors
    /// [`ConsoleError::Io`] when the write fails.
    pub fn log_msg(&mut self, text: &str, newline: bool) -> Result<(), ConsoleError> {
        Ok(self.channels.write_text(Channel::Primary, text, newline)?)
    }

    /// Writes a message to the diagnostic channel.
    ///
    /// # Errors
    /// [`ConsoleError::Io`] when the write fails.
    pub fn log_err(&mut self, text: &str, newline: bool) -> Result<(), ConsoleError> {
        Ok(self
            .channels
            .write_text(Channel::Diagnostic, text, newline)?)
    }

    /// Formats `value` in its own base and writes it to `channel`.
    ///
    /// # Errors
    /// [`ConsoleError::Scalar`] when the value cannot be formatted in its
    /// base; nothing is written in that case.
    pub fn put_scalar(
        &mut self,
        channel: Channel,
        value: &ScalarValue,
        newline: bool,
    ) -> Result<(), ConsoleError> {
        let text = format_value(value)?;
        Ok(self.channels.write_text(channel, &text, newline)?)
    }

    /// Writes an unsigned integer in binary to the primary channel.
    ///
    /// # Errors
    /// [`ConsoleError::Io`] when the write fails.
    pub fn out_bin<T: NativeInt + Unsigned>(&mut self, value: T) -> Result<(), ConsoleError> {
        self.put_native(Channel::Primary, value, Base::Binary)
    }

    /// Writes an unsigned integer in binary to the diagnostic channel.
    ///
    /// # Errors
    /// [`ConsoleError::Io`] when the write fails.
    pub fn err_bin<T: NativeInt + Unsigned>(&mut self, value: T) -> Result<(), ConsoleError> {
        self.put_native(Channel::Diagnostic, value, Base::Binary)
    }

    /// Writes an unsigned integer in hexadecimal to the diagnostic channel.
    ///
    /// # Errors
    /// [`ConsoleError::Io`] when the write fails.
    pub fn err_hex<T: NativeInt + Unsigned>(&mut self, value: T) -> Result<(), ConsoleError> {
        self.put_native(Channel::Diagnostic, value, Base::Hexadecimal)
    }

    fn put_native<T: NativeInt>(
        &mut self,
        channel: Channel,
        value: T,
        base: Base,
    ) -> Result<(), ConsoleError> {
        self.put_scalar(channel, &ScalarValue::with_value(value, base), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypeMismatch;
    use crate::test_util::{diagnostic_text, memory_console, primary_text};
    use rstest::rstest;

    #[rstest]
    #[case::binary("101", Base::Binary, 5)]
    #[case::octal("17", Base::Octal, 15)]
    #[case::decimal("42", Base::Decimal, 42)]
    #[case::hex("FF", Base::Hexadecimal, 255)]
    fn reads_unsigned_in_each_base(#[case] input: &str, #[case] base: Base, #[case] expected: u32) {
        let mut console = memory_console(input);
        let value = match base {
            Base::Binary => console.read_bin(),
            Base::Octal => console.read_oct(),
            Base::Decimal => console.read_dec(),
            Base::Hexadecimal => console.read_hex(),
        };
        assert_eq!(value.ok(), Some(expected));
        assert!(diagnostic_text(&console).is_empty());
    }

    #[test]
    fn reads_signed_decimal() {
        let mut console = memory_console("-17\n");
        assert_eq!(console.read_dec_signed().ok(), Some(-17));
    }

    #[test]
    fn reports_malformed_token_on_diagnostic_channel() {
        let mut console = memory_console("12a 7");
        let err = console.read_dec();
        assert!(matches!(
            err,
            Err(ConsoleError::Scalar(ScalarError::MalformedInput { .. }))
        ));
        assert_eq!(
            diagnostic_text(&console),
            "Failed to convert user input '12a' to u32 value; base is decimal\n"
        );
        assert!(primary_text(&console).is_empty());
        assert_eq!(console.read_dec().ok(), Some(7));
    }

    #[test]
    fn reports_signed_hex_request() {
        let mut console = memory_console("ff");
        let err = console.read_scalar(ScalarKind::I16, Base::Hexadecimal);
        assert!(matches!(
            err,
            Err(ConsoleError::Scalar(ScalarError::TypeMismatch(
                TypeMismatch::SignedNonDecimal { .. }
            )))
        ));
        assert!(diagnostic_text(&console).contains("base is hexadecimal"));
    }

    #[test]
    fn reports_non_utf8_token_and_continues() {
        let mut console = ScalarConsole::new(crate::test_util::memory_channels_from_bytes(
            b"\xff 9\n",
        ));
        assert!(matches!(
            console.read_dec(),
            Err(ConsoleError::Scalar(ScalarError::MalformedInput { .. }))
        ));
        assert_eq!(
            diagnostic_text(&console),
            "Failed to convert user input '\u{fffd}' to u32 value; base is decimal\n"
        );
        assert_eq!(console.read_dec().ok(), Some(9));
    }

    #[test]
    fn end_of_input_is_distinct() {
        let mut console = memory_console("  \n");
        assert!(matches!(console.read_token(), Err(ConsoleError::EndOfInput)));
    }

    #[test]
    fn writes_binary_and_hex_values() {
        let mut console = memory_console("");
        let writes = [
            console.out_bin(5_u8),
            console.log_msg("", true),
            console.err_hex(0xBEEF_u16),
            console.log_err(" ", false),
            console.err_bin(1_u16),
        ];
        assert!(writes.iter().all(Result::is_ok), "writes failed: {writes:?}");
        assert_eq!(primary_text(&console), "00000101\n");
        assert_eq!(diagnostic_text(&console), "beef 0000000000000001");
    }

    #[test]
    fn put_scalar_refuses_signed_binary() {
        let mut console = memory_console("");
        let value = ScalarValue::with_value(-3_i8, Base::Binary);
        let result = console.put_scalar(Channel::Primary, &value, true);
        assert!(matches!(result, Err(ConsoleError::Scalar(_))));
        assert!(primary_text(&console).is_empty());
    }

    #[test]
    fn put_scalar_writes_decimal_with_newline() {
        let mut console = memory_console("");
        let value = ScalarValue::with_value(-7_i32, Base::Decimal);
        assert!(console.put_scalar(Channel::Primary, &value, true).is_ok());
        assert_eq!(primary_text(&console), "-7\n");
    }
}
