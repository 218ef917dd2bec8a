use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::Error;

/// Line based channel between the game and the player.
pub trait Console {
    fn display(&mut self, text: &str);

    /// Returns the line as typed, without the line terminator.
    fn read_line(&mut self) -> Result<String, Error>;
}

pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        StdConsole::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StdConsole { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn display(&mut self, text: &str) {
        if let Err(error) = writeln!(self.writer, "{text}").and_then(|_| self.writer.flush()) {
            log::error!("Could not write to the console. Error: '{error}'.");
        }
    }

    /// Bytes that are not UTF-8 are replaced, so a badly encoded line is
    /// rejected by the game like any other malformed input.
    fn read_line(&mut self) -> Result<String, Error> {
        let mut buffer = Vec::new();
        match self.reader.read_until(b'\n', &mut buffer) {
            Ok(0) => Err(Error::InputClosed),
            Ok(_) => {
                let line = String::from_utf8_lossy(&buffer);
                Ok(line.trim_end_matches(['\n', '\r']).to_string())
            }
            Err(error) => Err(Error::log_and_create_internal(&format!(
                "Could not read from the console. Error: '{error}'."
            ))),
        }
    }
}
