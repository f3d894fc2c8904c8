//! c0-drv - The `cc0` compiler driver.
//!
//! Wires the four pipeline crates together: `c0-lex` tokenizes, `c0-par`
//! parses, `c0-sem` analyzes and emits p-code, `c0-obj` serializes the
//! result to `s0` text or `o0` bytes. The driver itself owns none of that
//! logic — it only parses the command line, reads the one input file,
//! drives the phases in order, and turns whichever layer's error comes back
//! into a source-pointing message on stderr.
//!
//! There is no error recovery anywhere in this pipeline: the first failure
//! in any phase aborts the whole compile, matching every phase's own
//! fail-fast policy.

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};
use thiserror::Error;

use c0_util::{Span, SourceMap};

/// Command-line interface for `cc0`.
///
/// `-s`/`-c` pick the output format and are mutually exclusive; `clap`
/// enforces that via the `emit` group. Neither is required at the `clap`
/// level because `-a`/`-A` stand on their own (they print the tree and
/// never reach codegen) — [`run`] enforces that exactly one of `-s`/`-c`
/// is present whenever an emit is actually needed.
#[derive(Parser, Debug)]
#[command(name = "cc0", version, about = "A single-pass compiler for C0")]
#[command(group(ArgGroup::new("emit").args(["assembly", "object"])))]
pub struct Cli {
    /// The C0 source file to compile.
    pub input: PathBuf,

    /// Emit textual s0 assembly.
    #[arg(short = 's')]
    pub assembly: bool,

    /// Emit a binary o0 object.
    #[arg(short = 'c')]
    pub object: bool,

    /// Output file path.
    #[arg(short = 'o', default_value = "./out")]
    pub output: PathBuf,

    /// Print the collapsed abstract syntax tree and exit.
    #[arg(short = 'a')]
    pub print_ast: bool,

    /// Print the full, uncollapsed syntax tree and exit.
    #[arg(short = 'A')]
    pub print_ast_full: bool,

    /// Increase log verbosity; repeatable. Overridden by `RUST_LOG` if set.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Everything that can go wrong between reading the input file and writing
/// the output one, wrapped in a single type so the driver has one thing to
/// match on.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] c0_lex::LexError),

    #[error(transparent)]
    Parse(#[from] c0_par::ParseError),

    #[error(transparent)]
    Sema(#[from] c0_sem::SemaError),

    #[error("no output format requested: pass -s for assembly or -c for an object file")]
    MissingEmitFormat,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CompileError {
    /// The span to underline when rendering this error, if it has one —
    /// flag and I/O failures have no source location to point at.
    fn span(&self) -> Option<Span> {
        match self {
            CompileError::Lex(e) => Some(e.span()),
            CompileError::Parse(e) => e.span(),
            CompileError::Sema(e) => e.span(),
            CompileError::MissingEmitFormat | CompileError::Io(_) => None,
        }
    }
}

/// Runs the compile pipeline for one parsed [`Cli`] invocation: load-input,
/// tokenize, parse, (optionally print the tree and stop), analyze,
/// serialize, write-output.
pub fn run(cli: &Cli) -> Result<(), CompileError> {
    let source = std::fs::read_to_string(&cli.input)?;

    let tokens = {
        let _span = tracing::debug_span!("tokenize").entered();
        c0_lex::Lexer::new(&source).all_tokens()?
    };
    tracing::info!(tokens = tokens.len(), "tokenized");

    let ast = {
        let _span = tracing::debug_span!("parse").entered();
        c0_par::parse(&tokens)?
    };
    tracing::info!("parsed");

    if cli.print_ast_full {
        println!("{}", ast.print_full());
        return Ok(());
    }
    if cli.print_ast {
        println!("{}", ast.print_collapsed());
        return Ok(());
    }

    if !cli.assembly && !cli.object {
        return Err(CompileError::MissingEmitFormat);
    }

    let model = {
        let _span = tracing::debug_span!("analyze").entered();
        c0_sem::generate(&ast)?
    };
    tracing::info!(functions = model.functions.len(), "analyzed");

    let _span = tracing::debug_span!("serialize").entered();
    if cli.assembly {
        std::fs::write(&cli.output, c0_obj::to_s0(&model))?;
    } else {
        std::fs::write(&cli.output, c0_obj::to_o0(&model)?)?;
    }
    tracing::info!(path = %cli.output.display(), "wrote output");
    Ok(())
}

/// The binary's entry point: parse arguments, set up logging, run the
/// pipeline, and render any failure as a `file:line:col` pointer plus a
/// caret-underlined source excerpt before exiting non-zero.
pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        render_error(&cli.input, &err);
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn render_error(input: &Path, err: &CompileError) {
    if let Some(span) = err.span() {
        if let Ok(source) = std::fs::read_to_string(input) {
            let mut source_map = SourceMap::new();
            source_map.add_file(input.display().to_string(), source);
            if let Some(rendered) = source_map.format_span(span) {
                eprintln!("{rendered}");
            }
        }
    }
    eprintln!("error: {err}");
}
