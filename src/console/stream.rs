use super::Console;
use std::io::BufRead;
use std::io::Write;

/// Console over a plain reader and writer.
pub struct Stream<R, W> {
    input: R,
    output: W,
}

impl<R, W> Stream<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for Stream<R, W> {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        let ref mut line = String::new();
        match self.input.read_line(line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
        }
    }
    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
