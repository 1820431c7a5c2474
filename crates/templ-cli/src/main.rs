use clap::{Parser, Subcommand};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::path::Path;
use templ_parser::TemplateFile;

#[derive(Parser)]
#[command(name = "templ")]
#[command(about = "templ — HTML templates for Go, parser front end")]
#[command(version)]
struct Cli {
    /// Log parser progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a .templ file for syntax errors
    Check {
        /// Input .templ file
        path: String,
    },

    /// Print the syntax tree of a .templ file
    Ast {
        /// Input .templ file
        path: String,
    },
}

/// Writes `log` records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        if let Err(e) = log::set_logger(&LOGGER) {
            eprintln!("Warning: could not install logger: {e}");
        }
        log::set_max_level(LevelFilter::Trace);
    }

    match cli.command {
        Command::Check { path } => cmd_check(&path),
        Command::Ast { path } => cmd_ast(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_or_exit(path: &str) -> TemplateFile {
    let source = read_source(path);
    match templ_parser::Parser::parse(&source) {
        Ok(file) => file,
        Err(e) => {
            let from = e.range.from;
            eprintln!("{path}:{}:{}: {}", from.line + 1, from.col + 1, e.message);
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str) {
    let file = parse_or_exit(path);
    eprintln!("OK: {path} ({} templates)", file.templates().count());
}

fn cmd_ast(path: &str) {
    let file = parse_or_exit(path);
    println!("{file:#?}");
}
