use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Line-oriented terminal port.
///
/// The binary wires it to stdin/stdout; tests use a `Cursor` of scripted
/// lines and a `Vec<u8>` that captures everything printed.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write to console")
    }

    /// Print `text` without a newline and read the reply.
    /// Returns `None` once the input is exhausted. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD, so a garbled line is just bad input.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text).context("Failed to write to console")?;
        self.output.flush().context("Failed to flush console")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_prompt_strips_line_endings() {
        let mut console = Console::new(Cursor::new("first\r\n  second  \n"), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("  second  "));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some(""));
        assert_eq!(console.prompt("").unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let input: &[u8] = &[0xff, 0xfe, b'\n', b'o', b'k', b'\n'];
        let mut console = Console::new(input, Vec::new());

        assert_eq!(console.prompt("").unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("ok"));
        assert_eq!(console.prompt("").unwrap(), None);
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("hello").unwrap();
        console.say(42).unwrap();

        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "hello\n42\n");
    }
}
