use clap::{Parser as ClapParser, ValueEnum};
use deriv_compute::symbolic::Expr;
use deriv_parser::Parser;
use deriv_rs::{differentiate_batch, differentiate_with, Derivation, Error, Options};
use env_logger::Env;
use log::info;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf, process::ExitCode};

/// Differentiates mathematical expressions written in prefix notation.
#[derive(ClapParser)]
#[command(
    name = "deriv",
    version,
    about = "Symbolic differentiation of prefix-notation expressions",
    after_help = r#"
Expressions are fully parenthesized, with the operator first:
  (+ 2 x)   (* (sin x) (^ x 2))   (ln (/ 1 x))

Examples:
  deriv --expr "(^ x 2)"        # prints (* 2 x)
  deriv exprs.txt --steps       # one expression per line, with simplification steps
  echo "(sin x)" | deriv        # read expressions from stdin
  deriv                         # start the interactive prompt

Environment Variables:
  DERIV_LOG_LEVEL=debug         Set log level (error, warn, info, debug, trace)
  RUST_LOG=deriv_compute=trace  Fine-grained filtering when no log level is given
"#
)]
struct Cli {
    /// File containing expressions to differentiate, one per line
    file: Option<PathBuf>,

    /// A single expression to differentiate
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// How many times to differentiate each expression
    #[arg(short, long, default_value_t = 1)]
    order: usize,

    /// Print the simplification steps taken for each expression
    #[arg(long)]
    steps: bool,

    /// Print the derivative without simplifying it
    #[arg(long)]
    no_simplify: bool,

    /// Also evaluate each derivative at this value of the variable
    #[arg(long, allow_hyphen_values = true)]
    at: Option<f64>,

    /// Set log level
    #[arg(long, value_enum, env = "DERIV_LOG_LEVEL")]
    log_level: Option<LogLevel>,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings shared by every input line.
struct Session {
    parser: Parser,
    options: Options,
    steps: bool,
    at: Option<f64>,
}

impl Session {
    /// Prints the result of differentiating one line of input, or reports its error. Returns
    /// true if the line was differentiated successfully.
    fn report(&self, input: &str, result: Result<Derivation, Error>) -> bool {
        match result {
            Ok(derivation) => {
                println!("{}", derivation.output);
                if self.steps {
                    derivation.steps.iter().for_each(|step| println!("  {}", step));
                }
                if let Some(x) = self.at {
                    println!("  = {} at x = {}", Expr::lit(derivation.eval(x)), Expr::lit(x));
                }
                true
            },
            Err(err) => {
                err.report_to_stderr("input", input);
                false
            },
        }
    }

    /// Differentiates one line of input. Returns true if it was differentiated successfully.
    fn run(&mut self, input: &str) -> bool {
        let result = differentiate_with(&mut self.parser, input, self.options);
        self.report(input, result)
    }

    /// Differentiates every non-blank line of the given source. Returns true if every line was
    /// differentiated successfully.
    fn run_all(&mut self, source: &str) -> bool {
        differentiate_batch(&mut self.parser, source, self.options)
            .into_iter()
            .fold(true, |ok, (line, result)| self.report(line, result) && ok)
    }

    /// Runs the interactive prompt until end of input.
    fn repl(&mut self) -> Result<(), ReadlineError> {
        let mut rl = DefaultEditor::new()?;

        loop {
            let input = match rl.readline("> ") {
                Ok(input) => input,
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
                Err(err) => return Err(err),
            };
            if input.trim().is_empty() {
                continue;
            }

            rl.add_history_entry(&input)?;
            self.run(&input);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level {
        logger.filter_level(level.into());
    }
    logger.init();

    let mut session = Session {
        parser: Parser::new(),
        options: Options { order: cli.order, simplify: !cli.no_simplify },
        steps: cli.steps,
        at: cli.at,
    };

    let ok = if let Some(expr) = cli.expr {
        session.run(&expr)
    } else if let Some(path) = cli.file {
        // run source file
        info!("reading expressions from {}", path.display());
        match fs::read_to_string(&path) {
            Ok(source) => session.run_all(&source),
            Err(err) => {
                eprintln!("error: could not read {}: {}", path.display(), err);
                false
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut source = String::new();
        match io::stdin().read_to_string(&mut source) {
            Ok(_) => session.run_all(&source),
            Err(err) => {
                eprintln!("error: could not read stdin: {}", err);
                false
            },
        }
    } else {
        // run the repl / interactive mode
        match session.repl() {
            Ok(()) => true,
            Err(err) => {
                eprintln!("{}", err);
                false
            },
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
