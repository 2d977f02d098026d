use std::io::{self, BufRead, Write};

use crate::{
    Error,
    evaluate_line,
    interpreter::{lexer::tokenize, parser::core::parse_line},
};

/// Prompt shown by the interactive loop unless configured otherwise.
pub const DEFAULT_PROMPT: &str = "calc> ";

/// What to print for each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Print the integer result.
    #[default]
    Evaluate,
    /// Print the token stream, e.g. `Token(INTEGER, 1) Token(PLUS, '+') ...`.
    Tokens,
    /// Print the parsed tree fully parenthesized.
    Ast,
}

/// Settings for [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Text written before reading each line. May be empty.
    pub prompt: String,
    /// What to print for each line.
    pub mode:   Mode,
}

impl Default for Options {
    fn default() -> Self {
        Self { prompt: DEFAULT_PROMPT.to_string(),
               mode:   Mode::default(), }
    }
}

/// Line counts gathered by [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Non-blank lines that were handed to the pipeline.
    pub evaluated: usize,
    /// How many of those failed.
    pub failed:    usize,
}

/// Produces the output text for one line in the given mode.
///
/// # Errors
/// The first error raised by the phases the mode runs.
///
/// # Example
/// ```
/// use intcalc::repl::{Mode, render_line};
///
/// assert_eq!(render_line("10 - 2 - 3", Mode::Evaluate).unwrap(), "5");
/// assert_eq!(render_line("10 - 2 - 3", Mode::Ast).unwrap(), "((10 - 2) - 3)");
/// assert_eq!(render_line("7", Mode::Tokens).unwrap(), "Token(INTEGER, 7) Token(EOF, None)");
/// ```
pub fn render_line(source: &str, mode: Mode) -> Result<String, Error> {
    Ok(match mode {
        Mode::Evaluate => evaluate_line(source)?.to_string(),
        Mode::Tokens => tokenize(source)?.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(" "),
        Mode::Ast => parse_line(source)?.to_string(),
    })
}

/// Reads lines from `input` until it is exhausted, printing one result per
/// line to `output` and one message per failure to `errors`.
///
/// The trailing line terminator is stripped and blank lines are skipped
/// without running the pipeline. A failed line does not stop the loop.
///
/// # Errors
/// Only I/O errors on the three streams are returned.
///
/// # Example
/// ```
/// use intcalc::repl::{Options, run};
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let summary = run("1 + 2\n\n5 / 0\n".as_bytes(), &mut out, &mut err, &Options::default()).unwrap();
///
/// assert_eq!(summary.evaluated, 2);
/// assert_eq!(summary.failed, 1);
/// assert_eq!(String::from_utf8(out).unwrap(), "calc> 3\ncalc> calc> calc> ");
/// assert_eq!(String::from_utf8(err).unwrap(), "Error: Division by zero.\n");
/// ```
pub fn run<R, W, E>(mut input: R,
                    mut output: W,
                    mut errors: E,
                    options: &Options)
                    -> io::Result<Summary>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut summary = Summary::default();
    let mut buffer = String::new();

    loop {
        write!(output, "{}", options.prompt)?;
        output.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            break;
        }

        let line = buffer.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        summary.evaluated += 1;
        match render_line(line, options.mode) {
            Ok(rendered) => writeln!(output, "{rendered}")?,
            Err(e) => {
                summary.failed += 1;
                writeln!(errors, "Error: {e}")?;
            },
        }
    }

    tracing::debug!(evaluated = summary.evaluated, failed = summary.failed, "input exhausted");
    Ok(summary)
}
