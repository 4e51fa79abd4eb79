//! Application configuration from CLI flags, environment, and prompts.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;

use benchplot_cli::prompt::Prompter;
use benchplot_core::constants::DEFAULT_CHUNK_SIZE;

/// benchplot: average matrix benchmark timings and plot them on log-log axes.
///
/// Values missing from the command line are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "benchplot", version, about)]
pub struct AppConfig {
    /// Timing file, one value per line.
    pub input: Option<PathBuf>,

    /// Execution mode: 1 = Sequential, 2 = OMP, 3 = MPI.
    #[arg(short, long, env = "BENCHPLOT_MODE")]
    pub mode: Option<String>,

    /// Samples per chunk (two per benchmark run).
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, env = "BENCHPLOT_CHUNK_SIZE")]
    pub chunk_size: usize,

    /// Print tables instead of opening the chart viewer.
    #[arg(long)]
    pub text: bool,

    /// Print the regrouped series as JSON.
    #[arg(long, conflicts_with = "text")]
    pub json: bool,

    /// Suppress shape warnings.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Where the charts go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Viewer,
    Text,
    Json,
}

/// Settings for one run, fixed once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Raw mode selector; validated when the averages are regrouped.
    pub mode: String,
    pub chunk_size: usize,
    pub output: OutputKind,
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Output kind requested by the flags, falling back to text when stdout
    /// is not a terminal.
    #[must_use]
    pub fn output_kind(&self, stdout_is_terminal: bool) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else if self.text || !stdout_is_terminal {
            OutputKind::Text
        } else {
            OutputKind::Viewer
        }
    }

    /// Fill in the input path and mode, prompting for whichever is missing.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> io::Result<RunConfig> {
        let input = match &self.input {
            Some(path) => path.clone(),
            None => PathBuf::from(prompter.input_path()?),
        };
        let mode = match &self.mode {
            Some(mode) => mode.trim().to_string(),
            None => prompter.mode()?,
        };

        Ok(RunConfig {
            input,
            mode,
            chunk_size: self.chunk_size,
            output: self.output_kind(io::stdout().is_terminal()),
            quiet: self.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("benchplot").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert!(config.input.is_none());
        assert_eq!(config.chunk_size, 200);
        assert!(!config.text);
        assert!(!config.json);
    }

    #[test]
    fn flags_parse() {
        let config = parse(&["times.txt", "-m", "3", "--chunk-size", "100", "--text", "-q"]);
        assert_eq!(config.input, Some(PathBuf::from("times.txt")));
        assert_eq!(config.mode.as_deref(), Some("3"));
        assert_eq!(config.chunk_size, 100);
        assert!(config.text);
        assert!(config.quiet);
    }

    #[test]
    fn json_conflicts_with_text() {
        let result = AppConfig::try_parse_from(["benchplot", "--json", "--text"]);
        assert!(result.is_err());
    }

    #[test]
    fn output_kind_selection() {
        assert_eq!(parse(&[]).output_kind(true), OutputKind::Viewer);
        assert_eq!(parse(&[]).output_kind(false), OutputKind::Text);
        assert_eq!(parse(&["--text"]).output_kind(true), OutputKind::Text);
        assert_eq!(parse(&["--json"]).output_kind(false), OutputKind::Json);
    }

    #[test]
    fn resolve_prompts_for_missing_values() {
        let config = parse(&["--json"]);
        let mut shown = Vec::new();
        let mut prompter = Prompter::new(&b"data/seq.txt\n 1 \n"[..], &mut shown);
        let run = config.resolve(&mut prompter).unwrap();
        assert_eq!(run.input, PathBuf::from("data/seq.txt"));
        assert_eq!(run.mode, "1");
        assert_eq!(run.output, OutputKind::Json);
        assert!(String::from_utf8(shown).unwrap().contains("Enter the mode"));
    }

    #[test]
    fn resolve_skips_prompts_when_given() {
        let config = parse(&["t.txt", "--mode", "2"]);
        let mut shown = Vec::new();
        let mut prompter = Prompter::new(&b""[..], &mut shown);
        let run = config.resolve(&mut prompter).unwrap();
        assert_eq!(run.mode, "2");
        assert!(shown.is_empty());
    }
}
