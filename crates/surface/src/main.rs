use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use surface::commands::{cmd_exports, cmd_imports, cmd_langs, cmd_symbols};

#[derive(Parser)]
#[command(
    name = "surface",
    about = "Inspect the public API surface of source modules",
    version
)]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the symbols a file or directory defines
    Symbols {
        path: PathBuf,

        /// Only show public symbols
        #[arg(long)]
        public: bool,
    },

    /// List the names a module effectively exports
    Exports { path: PathBuf },

    /// List the modules a file imports
    Imports { path: PathBuf },

    /// List supported languages
    Langs,
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal is a standard POSIX function. We reset SIGPIPE to default
    // behavior (terminate on broken pipe) instead of Rust's default (ignore, causing
    // write errors). This prevents panics when output is piped to commands like `head`.
    // No memory safety concerns - just changes signal disposition.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Symbols { path, public } => cmd_symbols(&path, public, cli.json),
        Command::Exports { path } => cmd_exports(&path, cli.json),
        Command::Imports { path } => cmd_imports(&path, cli.json),
        Command::Langs => cmd_langs(cli.json),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:#}", e);
            exit(1);
        }
    }
}
