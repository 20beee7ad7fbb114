mod cli;
mod output;
mod repl;
mod rlpl;

use std::{path::PathBuf, process::ExitCode, time::Instant};

use calc_core::{
    eval::prelude::{evaluate_with, format_outcome, EvalOptions, INTEGER_TOLERANCE, ZERO_TOLERANCE},
    utils::prelude::Error
};
use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use cli::{print_error, print_evaluated, print_wrote};
use output::{RunOptions, DEFAULT_SUFFIX};

/// Evaluates arithmetic expressions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluates an expression file, or every `.txt` file of a directory,
    /// and writes one result file per input
    Run {
        /// Path of an expression file
        #[arg(required_unless_present = "dir", conflicts_with = "dir")]
        input: Option<PathBuf>,
        /// Directory whose `.txt` files are evaluated
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Directory receiving the result files [default: <name>_<suffix>/]
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Tag appended to every output file name
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,
        /// Print a diagnostic for every expression that fails
        #[arg(long, default_value_t = false)]
        explain: bool,
        #[command(flatten)]
        tolerances: Tolerances,
    },
    /// Evaluates an expression given on the command line
    Eval {
        /// Expression to evaluate
        #[arg(allow_hyphen_values = true)]
        expression: String,
        #[command(flatten)]
        tolerances: Tolerances,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Eval Print Loop
    Repl {
        #[command(flatten)]
        tolerances: Tolerances,
    },
}

#[derive(Args)]
struct Tolerances {
    /// Divisors closer to zero than this are an error
    #[arg(long, default_value_t = ZERO_TOLERANCE)]
    zero_tolerance: f64,
    /// Results closer than this to an integer print as that integer
    #[arg(long, default_value_t = INTEGER_TOLERANCE)]
    integer_tolerance: f64,
    /// Only an exact zero divisor is an error (overrides --zero-tolerance)
    #[arg(long, default_value_t = false)]
    exact: bool,
}

impl Tolerances {
    fn options(&self) -> EvalOptions {
        let base = if self.exact {
            EvalOptions::exact()
        } else {
            EvalOptions {
                zero_tolerance: self.zero_tolerance,
                ..EvalOptions::default()
            }
        };

        EvalOptions {
            integer_tolerance: self.integer_tolerance,
            ..base
        }
    }
}

fn main() -> ExitCode {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let result = match args.command {
        Command::Run { input, dir, output_dir, suffix, explain, tolerances } => {
            let options = RunOptions {
                output_dir,
                suffix,
                eval: tolerances.options(),
                explain,
            };

            run(input, dir, &options)
        },
        Command::Eval { expression, tolerances } => {
            eval(expression, &tolerances.options());
            Ok(())
        },
        Command::Rlpl => rlpl::start().map_err(stdin_error),
        Command::Repl { tolerances } => repl::start(tolerances.options()).map_err(stdin_error),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(input: Option<PathBuf>, dir: Option<PathBuf>, options: &RunOptions) -> Result<(), Error> {
    if let Some(output_dir) = &options.output_dir {
        output::ensure_directory(output_dir)?;
    }

    let start = Instant::now();

    let written = match (input, dir) {
        (Some(input), _) => vec![output::process_file(&input, options)?],
        (None, Some(dir)) => {
            let written = output::process_directory(&dir, options)?;

            if written.is_empty() {
                print_error(&Error::NoInput { path: dir });
            }

            written
        },
        (None, None) => vec![],
    };

    for path in &written {
        print_wrote(path);
    }

    print_evaluated(written.len(), start.elapsed());

    Ok(())
}

fn eval(expression: String, options: &EvalOptions) {
    let outcome = evaluate_with(expression.as_bytes(), options);

    println!("{}", format_outcome(&outcome, options));

    if let Err(error) = outcome {
        print_error(&Error::Parse {
            path: PathBuf::from("<expression>"),
            src: expression.into_bytes(),
            error,
        });
    }
}

fn stdin_error(err: std::io::Error) -> Error {
    Error::StdIo {
        path: PathBuf::from("<stdin>"),
        err: err.kind(),
    }
}
