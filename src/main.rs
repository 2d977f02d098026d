use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use intcalc::repl::{self, DEFAULT_PROMPT, Mode, Options};
use tracing_subscriber::{Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// intcalc evaluates integer arithmetic expressions with `+ - * /`, prefix
/// signs and parentheses.
///
/// Without an expression or a file, intcalc reads expressions from standard
/// input, one per line, until end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every non-blank line of this file instead of reading standard
    /// input.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prompt printed before each line in interactive mode.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Prints the token stream of each line instead of its value.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed tree of each line, fully parenthesized, instead of
    /// its value.
    #[arg(long)]
    ast: bool,

    /// Most verbose level of diagnostics written to standard error.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// A single expression to evaluate.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::OFF,
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

impl Args {
    const fn mode(&self) -> Mode {
        if self.tokens {
            Mode::Tokens
        } else if self.ast {
            Mode::Ast
        } else {
            Mode::Evaluate
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter = tracing_subscriber::filter::Targets::new().with_default(LevelFilter::from(level));

    let stderr_log_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr)
                                                           .without_time()
                                                           .with_filter(filter);

    if tracing_subscriber::registry().with(stderr_log_layer)
                                     .try_init()
                                     .is_err()
    {
        eprintln!("Failed to initialize tracing.");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level);

    let mode = args.mode();

    if let Some(expression) = &args.expression {
        return match repl::render_line(expression, mode) {
            Ok(rendered) => {
                println!("{rendered}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let summary = if let Some(path) = &args.file {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        };
        let options = Options { prompt: String::new(),
                                mode };
        repl::run(BufReader::new(file), io::stdout().lock(), io::stderr().lock(), &options)
    } else {
        let options = Options { prompt: args.prompt.clone(),
                                mode };
        repl::run(io::stdin().lock(), io::stdout().lock(), io::stderr().lock(), &options)
    };

    match summary {
        Ok(summary) if args.file.is_some() && summary.failed > 0 => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}
