use std::io::{self, BufRead, Write};

/// Line-oriented prompting over any reader/writer pair.
///
/// Every read returns `Ok(None)` once the input is exhausted.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for a line of text, without the trailing newline
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for a non-negative integer, asking again until one is entered
    pub fn int(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid input! Please enter a valid number.")?,
            }
        }
    }

    /// Like `int`, but an empty answer means "leave unchanged"
    pub fn optional_int(&mut self, prompt: &str) -> io::Result<Option<Option<u32>>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            if answer.trim().is_empty() {
                return Ok(Some(None));
            }
            match answer.trim().parse() {
                Ok(value) => return Ok(Some(Some(value))),
                Err(_) => writeln!(self.output, "Invalid input! Please enter a valid number.")?,
            }
        }
    }
}
