use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use std::path::{Path, PathBuf};

use jformat::error::{DiagnosticError, ErrorCollector, JformatError};
use jformat::lexer::Lexer;
use jformat::sources::{collect_sources, parse_source_file, SourceFile, DEFAULT_EXTENSION};

#[derive(Parser)]
#[command(name = "jformat")]
#[command(author, version, about = "Parse and re-render Java sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse every source under a directory and print the canonical rendering
    Parse {
        /// Directory (or single file) to scan
        root: PathBuf,

        /// Extension of the files to parse
        #[arg(long, default_value = DEFAULT_EXTENSION)]
        extension: String,

        /// Print the AST as JSON instead of source text
        #[arg(long)]
        dump_ast: bool,

        /// Print the tokens of each file before parsing it
        #[arg(long)]
        dump_tokens: bool,

        /// Continue with the next file after a failure
        #[arg(long)]
        keep_going: bool,
    },

    /// Parse every source under a directory and report only the failures
    Check {
        /// Directory (or single file) to scan
        root: PathBuf,

        /// Extension of the files to check
        #[arg(long, default_value = DEFAULT_EXTENSION)]
        extension: String,
    },

    /// Print the token stream of a single file
    Tokens {
        /// The source file to tokenize
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger_builder(env_logger::Env::default().default_filter_or("info"), cli.verbose).init();

    let result = match cli.command {
        Commands::Parse {
            root,
            extension,
            dump_ast,
            dump_tokens,
            keep_going,
        } => parse(root, &extension, dump_ast, dump_tokens, keep_going),
        Commands::Check { root, extension } => check(root, &extension),
        Commands::Tokens { file } => tokens(file),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` (or `env`'s default) decides the level unless `--verbose` raises it to Debug
fn logger_builder(env: env_logger::Env<'_>, verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
}

/// Loaded sources and the failures collected while processing them
struct BatchState {
    files: SimpleFiles<String, String>,
    errors: ErrorCollector,
    processed: usize,
}

impl BatchState {
    fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            errors: ErrorCollector::new(),
            processed: 0,
        }
    }

    fn load(&mut self, path: PathBuf) -> Result<(SourceFile, usize)> {
        let source = SourceFile::load(path)?;
        let file_id = self
            .files
            .add(source.path.display().to_string(), source.text.clone());
        self.processed += 1;
        Ok((source, file_id))
    }

    fn report_error(&self, diagnostic: &Diagnostic<usize>) -> Result<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();
        codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, diagnostic)?;
        Ok(())
    }

    /// Report every collected failure and a summary line
    fn finish(&self) -> Result<()> {
        for error in self.errors.errors() {
            self.report_error(&error.to_diagnostic())?;
        }

        if self.errors.has_errors() {
            anyhow::bail!(
                "{} of {} files failed to parse",
                self.errors.error_count(),
                self.processed
            );
        }

        println!(
            "{}: {} files parsed without errors",
            "success".green().bold(),
            self.processed
        );
        Ok(())
    }
}

fn sources_under(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let paths = collect_sources(root, extension)
        .with_context(|| format!("Failed to enumerate sources under {:?}", root))?;
    if paths.is_empty() {
        log::warn!("No .{} files found under {:?}", extension, root);
    }
    Ok(paths)
}

fn parse(
    root: PathBuf,
    extension: &str,
    dump_ast: bool,
    dump_tokens: bool,
    keep_going: bool,
) -> Result<()> {
    let mut state = BatchState::new();

    for path in sources_under(&root, extension)? {
        let (source, file_id) = state.load(path)?;
        println!("{}", format!("// {}", source.path.display()).dimmed());

        if dump_tokens {
            println!("{}", "=== Tokens ===".blue().bold());
            print_tokens(&source.text);
            println!();
        }

        match parse_source_file(&source) {
            Ok(declaration) => {
                if dump_ast {
                    println!("{}", serde_json::to_string_pretty(&declaration)?);
                } else {
                    println!("{}", declaration);
                }
            }
            Err(e) if keep_going => state.errors.add_error(e, file_id),
            Err(e) => {
                state.report_error(&DiagnosticError::new(e, file_id).to_diagnostic())?;
                anyhow::bail!("Parsing {:?} failed", source.path);
            }
        }
    }

    state.finish()
}

fn check(root: PathBuf, extension: &str) -> Result<()> {
    log::info!("Checking {:?}", root);

    let mut state = BatchState::new();
    for path in sources_under(&root, extension)? {
        let (source, file_id) = state.load(path)?;
        if let Err(e) = parse_source_file(&source) {
            log::debug!("{}: {}", source.path.display(), e);
            state.errors.add_error(e, file_id);
        }
    }

    state.finish()
}

fn tokens(file: PathBuf) -> Result<()> {
    let mut state = BatchState::new();
    let (source, file_id) = state.load(file)?;

    if let Some(e) = print_tokens(&source.text) {
        state.report_error(&DiagnosticError::new(JformatError::Lexer(e), file_id).to_diagnostic())?;
        anyhow::bail!("Lexical analysis of {:?} failed", source.path);
    }
    Ok(())
}

/// Print tokens with their positions, returning the lexical error that ended the stream
fn print_tokens(text: &str) -> Option<jformat::error::LexerError> {
    for (i, token) in Lexer::new(text).enumerate() {
        match token {
            Ok(token) => println!("{:4}: {:>7} {}", i, token.position.to_string(), token.token),
            Err(e) => {
                println!("{:4}: {}", i, e.to_string().red());
                return Some(e);
            }
        }
    }
    None
}
