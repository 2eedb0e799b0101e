//! canopy - a directory-tree utility.
//!
//! Usage:
//!   canopy list <ROOT>                     Print every path under a root
//!   canopy by-extension <ROOT> <EXT>       Print files ending in EXT
//!   canopy count-files <ROOT>              Count regular files
//!   canopy count-directories <ROOT>        Count directories
//!   canopy total-size <ROOT>               Sum file sizes in bytes
//!   canopy copy <ROOT> <DEST> [EXT]        Mirror a tree, optionally skipping EXT
//!   canopy move <ROOT> <DEST>              Mirror a tree and delete the sources
//!   canopy delete <ROOT> <EXT>             Delete files ending in EXT

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use canopy_core::Extension;
use canopy_ops::{Summary, Task, TreeOp, execute};

#[derive(Parser)]
#[command(
    name = "canopy",
    version,
    about = "A directory-tree utility",
    long_about = "canopy walks a directory tree once and applies a single \
                  operation to it: listing, counting, measuring, copying, \
                  moving, or extension-filtered deletion.\n\n\
                  Per-node failures are reported on stderr and do not stop \
                  the walk; only traversal-level errors abort the run."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every path under the root
    List {
        /// Directory to walk
        root: PathBuf,
    },

    /// Print files whose name ends in the extension
    ByExtension {
        /// Directory to walk
        root: PathBuf,

        /// Extension to match, e.g. ".txt"
        ext: String,
    },

    /// Count regular files
    CountFiles {
        /// Directory to walk
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Count directories
    CountDirectories {
        /// Directory to walk
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Sum the byte sizes of regular files
    TotalSize {
        /// Directory to walk
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Also show a human-readable size
        #[arg(long)]
        human: bool,
    },

    /// Mirror the tree under a destination, optionally skipping one extension
    Copy {
        /// Source directory
        root: PathBuf,

        /// Destination directory (created if missing)
        dest: PathBuf,

        /// Extension to exclude from the copy, e.g. ".log"
        exclude_ext: Option<String>,
    },

    /// Mirror the tree under a destination, then delete the sources
    Move {
        /// Source directory
        root: PathBuf,

        /// Destination directory (created if missing)
        dest: PathBuf,
    },

    /// Delete every file whose name ends in the extension
    Delete {
        /// Directory to walk
        root: PathBuf,

        /// Extension to match, e.g. ".tmp"
        ext: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::List { root } => run(root, TreeOp::List, OutputFormat::Text, false),
        Command::ByExtension { root, ext } => {
            let ext = Extension::parse(&ext)?;
            run(
                root,
                TreeOp::ListByExtension { ext },
                OutputFormat::Text,
                false,
            )
        }
        Command::CountFiles { root, format } => run(root, TreeOp::CountFiles, format, false),
        Command::CountDirectories { root, format } => {
            run(root, TreeOp::CountDirectories, format, false)
        }
        Command::TotalSize {
            root,
            format,
            human,
        } => run(root, TreeOp::TotalSize, format, human),
        Command::Copy {
            root,
            dest,
            exclude_ext,
        } => {
            let exclude = exclude_ext.as_deref().map(Extension::parse).transpose()?;
            run(
                root,
                TreeOp::CopyTree { dest, exclude },
                OutputFormat::Text,
                false,
            )
        }
        Command::Move { root, dest } => {
            run(root, TreeOp::MoveTree { dest }, OutputFormat::Text, false)
        }
        Command::Delete { root, ext } => {
            let ext = Extension::parse(&ext)?;
            run(
                root,
                TreeOp::DeleteByExtension { ext },
                OutputFormat::Text,
                false,
            )
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(root: PathBuf, op: TreeOp, format: OutputFormat, human: bool) -> Result<()> {
    let task = Task::new(root, op);
    let outcome = execute(&task).context("Operation failed")?;

    if let Some(summary) = outcome.summary {
        print_summary(&summary, format, human)?;
    }
    Ok(())
}

fn print_summary(summary: &Summary, format: OutputFormat, human: bool) -> Result<()> {
    match format {
        OutputFormat::Text => match summary {
            Summary::Files(n) => println!("Total files: {n}"),
            Summary::Directories(n) => println!("Total directories: {n}"),
            Summary::Bytes(n) => {
                if human {
                    println!("Total size: {n} bytes ({})", format_size(*n));
                } else {
                    println!("Total size: {n} bytes");
                }
            }
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
    }
    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
