use std::io::{self, BufRead, Write};

/// Line-oriented prompt channel over any `BufRead`/`Write` pair.
///
/// The interactive session owns exactly one of these for its whole lifetime;
/// tests drive it with in-memory buffers instead of stdin/stdout.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line, trimmed of the
    /// trailing newline. `None` when the input stream is exhausted.
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Like `line`, but EOF reads as a blank answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.line(prompt)?.unwrap_or_default())
    }

    /// Show the current value as the default; a blank answer keeps it.
    pub fn ask_default(&mut self, label: &str, current: &str) -> io::Result<String> {
        let answer = self.ask(&format!("{label} ({current}): "))?;
        if answer.is_empty() {
            Ok(current.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Blank answer maps to `None` (field left unchanged by the caller).
    pub fn ask_opt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let answer = self.ask(prompt)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// Accumulate lines under a repeated prompt until a blank line (or EOF).
    pub fn ask_lines(&mut self, prompt: &str) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();
        loop {
            match self.line(prompt)? {
                None => break,
                Some(l) if l.is_empty() => break,
                Some(l) => lines.push(l),
            }
        }
        Ok(lines)
    }

    /// Print one line of output.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
