use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::output::Output;

/// The session's only contact with the outside world.
pub trait IoPort {
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Show `prompt` and block for one line of input. `None` means the input
    /// source is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn flush_output(&mut self, out: Output) -> io::Result<()> {
        for block in &out.blocks {
            self.write_line(block.text())?;
        }
        Ok(())
    }
}

/// Line-oriented port over any reader/writer pair.
pub struct ConsolePort<R, W> {
    input: R,
    output: W,
}

impl ConsolePort<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        ConsolePort::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePort<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsolePort { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> IoPort for ConsolePort<R, W> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // bytes that aren't UTF-8 are player typos, not port failures
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_until_eof() {
        let mut port = ConsolePort::new(Cursor::new("look\r\ntake lamp\n"), Vec::new());
        assert_eq!(port.read_line("> ").unwrap().as_deref(), Some("look"));
        assert_eq!(port.read_line("> ").unwrap().as_deref(), Some("take lamp"));
        assert_eq!(port.read_line("> ").unwrap(), None);
        assert_eq!(String::from_utf8(port.into_output()).unwrap(), "> > > ");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_an_error() {
        let mut port = ConsolePort::new(Cursor::new(b"caf\xe9\nin\n".to_vec()), Vec::new());
        assert_eq!(
            port.read_line("> ").unwrap().as_deref(),
            Some("caf\u{FFFD}")
        );
        assert_eq!(port.read_line("> ").unwrap().as_deref(), Some("in"));
        assert_eq!(port.read_line("> ").unwrap(), None);
    }

    #[test]
    fn flushes_blocks_one_per_line() {
        let mut out = Output::new();
        out.describe("A room.");
        out.say("Taken.");

        let mut port = ConsolePort::new(Cursor::new(""), Vec::new());
        port.flush_output(out).unwrap();
        assert_eq!(
            String::from_utf8(port.into_output()).unwrap(),
            "A room.\nTaken.\n"
        );
    }
}
