//! CLI entry point for the `scalario` tool.
//!
//! Reads unsigned 32-bit decimal values from standard input until it is
//! exhausted and prints each one in every supported base. Tokens that do not
//! convert are reported on standard error and skipped.

use std::io::{self, Write};
use std::process::ExitCode;

use scalario::{
    Base, ChannelAdapter, ConsoleError, ScalarConsole, ScalarKind, ScalarValue, StreamChannels,
    format_value,
};

fn main() -> ExitCode {
    let mut console = ScalarConsole::new(StreamChannels::stdio());
    loop {
        let result = console
            .read_scalar(ScalarKind::U32, Base::Decimal)
            .and_then(|value| echo_all_bases(&mut console, value));
        match result {
            Ok(()) | Err(ConsoleError::Scalar(_)) => {}
            Err(ConsoleError::EndOfInput) => return ExitCode::SUCCESS,
            Err(ConsoleError::Io(err)) => {
                let _ = writeln!(io::stderr(), "scalario: console I/O failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
}

fn echo_all_bases<C: ChannelAdapter>(
    console: &mut ScalarConsole<C>,
    mut value: ScalarValue,
) -> Result<(), ConsoleError> {
    let mut fields = Vec::with_capacity(Base::ALL.len());
    for base in Base::ALL {
        value.set_base(base);
        fields.push(format!("{}={}", base.name(), format_value(&value)?));
    }
    console.log_msg(&fields.join(" "), true)
}
