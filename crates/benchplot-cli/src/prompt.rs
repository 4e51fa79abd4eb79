//! Interactive prompts for values missing from the command line.

use std::io::{self, BufRead, Write};

/// Prompt for the input file path.
pub const INPUT_PROMPT: &str = "Enter the path of the input text file: ";

/// Prompt for the execution mode selector.
pub const MODE_PROMPT: &str = "Enter the mode (1 = Sequential, 2 = OMP, 3 = MPI): ";

/// Reads answers from `input` after writing questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompter that asks on stderr, leaving stdout for machine-readable output.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question and return the trimmed answer.
    ///
    /// End of input is an `UnexpectedEof` error.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer on standard input",
            ));
        }
        tracing::debug!(question, answer = line.trim(), "prompt answered");
        Ok(line.trim().to_string())
    }

    pub fn input_path(&mut self) -> io::Result<String> {
        self.ask(INPUT_PROMPT)
    }

    pub fn mode(&mut self) -> io::Result<String> {
        self.ask(MODE_PROMPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_trimmed_answers_in_order() {
        let input = b"  data/omp.txt \n2\n";
        let mut out = Vec::new();
        let mut p = Prompter::new(&input[..], &mut out);
        assert_eq!(p.input_path().unwrap(), "data/omp.txt");
        assert_eq!(p.mode().unwrap(), "2");
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, format!("{INPUT_PROMPT}{MODE_PROMPT}"));
    }

    #[test]
    fn eof_is_an_error() {
        let mut out = Vec::new();
        let mut p = Prompter::new(&b""[..], &mut out);
        let err = p.mode().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn empty_line_is_empty_answer() {
        let mut out = Vec::new();
        let mut p = Prompter::new(&b"\n"[..], &mut out);
        assert_eq!(p.ask("? ").unwrap(), "");
    }
}
