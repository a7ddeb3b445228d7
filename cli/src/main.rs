//! fk - file kit
//!
//! Copy, hash, and compare files and directory trees, powered by filekit.

use clap::{Args, Parser, Subcommand};
use filekit::{
    Algorithm, CompareOptions, CopyOptions, CopyStats, Error as FilekitError, ErrorCode,
    FanOutReport, copy_dir, copy_file, copy_file_to_many, digest, dirs_equal, files_equal,
    files_equal_to_many, generate_random_file,
};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// fk - copy, hash, and compare files
///
/// Copies never overwrite an existing destination.
#[derive(Parser, Debug)]
#[command(name = "fk", version, about, long_about = None)]
struct Cli {
    /// Verbose output (debug logging and copy statistics)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the content digest of one or more files
    Digest {
        /// Digest algorithm
        #[arg(short = 'a', long, default_value = "sha256")]
        algorithm: Algorithm,

        /// Emit a JSON array instead of text lines
        #[arg(long)]
        json: bool,

        /// Files to hash
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Copy a file, or a directory tree with -r
    Cp {
        /// Copy directories recursively
        #[arg(short = 'r', long)]
        recursive: bool,

        #[command(flatten)]
        copy: CopyFlags,

        /// Source file or directory
        source: PathBuf,

        /// Destination path (must not exist)
        destination: PathBuf,
    },

    /// Copy one file to several destinations in parallel
    Fanout {
        /// Number of parallel copy operations
        #[arg(short = 'j', long, default_value = "16")]
        jobs: usize,

        #[command(flatten)]
        copy: CopyFlags,

        /// Emit a JSON report instead of text lines
        #[arg(long)]
        json: bool,

        /// Source file
        source: PathBuf,

        /// Destination paths (none may exist)
        #[arg(required = true)]
        destinations: Vec<PathBuf>,
    },

    /// Compare files or directory trees by content
    ///
    /// Exits 0 when everything matches and 1 on the first difference.
    Cmp {
        /// Compare directory trees (extra entries in DEST are ignored)
        #[arg(short = 'r', long)]
        recursive: bool,

        /// Digest algorithm
        #[arg(short = 'a', long, default_value = "sha1")]
        algorithm: Algorithm,

        /// Reference file or directory
        source: PathBuf,

        /// Paths that must match SOURCE
        #[arg(required = true)]
        destinations: Vec<PathBuf>,
    },

    /// Write a file of random bytes (1 KiB blocks)
    Mkrand {
        /// Number of 1 KiB blocks
        #[arg(short = 'b', long, default_value = "1024")]
        blocks: usize,

        /// File to create (truncated if it exists)
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct CopyFlags {
    /// Do not preserve permissions
    #[arg(long)]
    no_perms: bool,

    /// Call fsync on every file before it is moved into place
    #[arg(long)]
    fsync: bool,
}

impl CopyFlags {
    fn to_options(self) -> CopyOptions {
        let mut options = CopyOptions::default();
        if self.no_perms {
            options = options.without_permissions();
        }
        if self.fsync {
            options = options.with_fsync();
        }
        options
    }
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("Source is a directory. Use -r/--recursive to copy directories: {path}")]
    SourceIsDirectoryWithoutRecursive { path: PathBuf },

    #[error("Source is a directory. Use -r/--recursive to compare directory trees: {path}")]
    CompareDirectoryWithoutRecursive { path: PathBuf },

    #[error("Recursive compare takes exactly one destination, got {count}")]
    TreeCompareArity { count: usize },

    #[error("Failed to digest {path}: {source}")]
    Digest { path: PathBuf, source: FilekitError },

    #[error("Failed to copy {path}: {source}")]
    Copy { path: PathBuf, source: FilekitError },

    #[error("Failed to compare {path}: {source}")]
    Compare { path: PathBuf, source: FilekitError },

    #[error("Failed to write {path}: {source}")]
    Generate { path: PathBuf, source: FilekitError },

    #[error("Failed to copy to {failed} of {total} destinations")]
    PartialFanOut { failed: usize, total: usize },

    #[error("Failed to serialize JSON output: {source}")]
    JsonSerialize { source: serde_json::Error },
}

impl CliError {
    fn code(&self) -> &'static str {
        match self {
            Self::SourceIsDirectoryWithoutRecursive { .. }
            | Self::CompareDirectoryWithoutRecursive { .. }
            | Self::TreeCompareArity { .. } => "invalid_input",
            Self::Digest { source, .. }
            | Self::Copy { source, .. }
            | Self::Compare { source, .. }
            | Self::Generate { source, .. } => source.code().as_str(),
            Self::PartialFanOut { .. } => "partial_copy",
            Self::JsonSerialize { .. } => "internal",
        }
    }

    fn exit_code(&self) -> i32 {
        match self {
            Self::SourceIsDirectoryWithoutRecursive { .. }
            | Self::CompareDirectoryWithoutRecursive { .. }
            | Self::TreeCompareArity { .. } => 2,
            Self::Digest { source, .. }
            | Self::Copy { source, .. }
            | Self::Compare { source, .. }
            | Self::Generate { source, .. } => exit_code_for(source.code()),
            Self::PartialFanOut { .. } => 1,
            Self::JsonSerialize { .. } => 4,
        }
    }
}

/// 0 success, 1 difference or partial failure, 2 wrong path type,
/// 3 destination exists, 4 I/O
fn exit_code_for(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::NotAFile | ErrorCode::NotADirectory => 2,
        ErrorCode::AlreadyExists => 3,
        ErrorCode::Io | ErrorCode::NoSpace => 4,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(0) => {}
        Ok(status) => std::process::exit(status),
        Err(error) => {
            eprintln!("error[{}]: {}", error.code(), error);
            std::process::exit(error.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Returns the process exit status for a run that did not error.
fn run(cli: Cli) -> CliResult<i32> {
    match cli.command {
        Command::Digest {
            algorithm,
            json,
            files,
        } => run_digest(algorithm, json, &files),
        Command::Cp {
            recursive,
            copy,
            source,
            destination,
        } => run_copy(recursive, copy.to_options(), &source, &destination, cli.verbose),
        Command::Fanout {
            jobs,
            copy,
            json,
            source,
            destinations,
        } => {
            let options = copy.to_options().with_parallel(jobs);
            run_fanout(&source, &destinations, &options, json)
        }
        Command::Cmp {
            recursive,
            algorithm,
            source,
            destinations,
        } => {
            let options = CompareOptions::default().with_algorithm(algorithm);
            run_compare(recursive, &source, &destinations, &options)
        }
        Command::Mkrand { blocks, path } => {
            generate_random_file(&path, blocks).map_err(|source| CliError::Generate {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), blocks, "generated random file");
            Ok(0)
        }
    }
}

fn run_digest(algorithm: Algorithm, json: bool, files: &[PathBuf]) -> CliResult<i32> {
    let mut records = Vec::with_capacity(files.len());

    for file in files {
        let hex = digest(file, algorithm).map_err(|source| CliError::Digest {
            path: file.clone(),
            source,
        })?;
        if json {
            records.push(json!({
                "path": display_path(file),
                "algorithm": algorithm,
                "digest": hex,
            }));
        } else {
            println!("{hex}  {}", file.display());
        }
    }

    if json {
        print_json_value(&Value::Array(records))?;
    }
    Ok(0)
}

fn run_copy(
    recursive: bool,
    options: CopyOptions,
    source: &Path,
    destination: &Path,
    verbose: bool,
) -> CliResult<i32> {
    if source.is_dir() {
        if !recursive {
            return Err(CliError::SourceIsDirectoryWithoutRecursive {
                path: source.to_path_buf(),
            });
        }
        let stats = copy_dir(source, destination, &options).map_err(|source_err| {
            CliError::Copy {
                path: source.to_path_buf(),
                source: source_err,
            }
        })?;
        if verbose {
            print_stats(&stats);
        }
    } else {
        let bytes = copy_file(source, destination, &options).map_err(|source_err| {
            CliError::Copy {
                path: source.to_path_buf(),
                source: source_err,
            }
        })?;
        if verbose {
            eprintln!("Copied 1 file ({})", format_bytes(bytes));
        }
    }
    Ok(0)
}

fn run_fanout(
    source: &Path,
    destinations: &[PathBuf],
    options: &CopyOptions,
    json: bool,
) -> CliResult<i32> {
    let report = copy_file_to_many(source, destinations, options);

    if json {
        print_json_value(&fanout_json(source, &report))?;
    } else {
        for outcome in &report.outcomes {
            match &outcome.result {
                Ok(bytes) => println!(
                    "copied {} ({})",
                    outcome.dst.display(),
                    format_bytes(*bytes)
                ),
                Err(e) => println!("failed {}: {}", outcome.dst.display(), e),
            }
        }
    }

    let failed = report.failures().count();
    if failed > 0 {
        return Err(CliError::PartialFanOut {
            failed,
            total: report.outcomes.len(),
        });
    }
    Ok(0)
}

fn fanout_json(source: &Path, report: &FanOutReport) -> Value {
    let results: Vec<Value> = report
        .outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(bytes) => json!({
                "destination": display_path(&outcome.dst),
                "outcome": "copied",
                "bytes_copied": bytes,
            }),
            Err(e) => json!({
                "destination": display_path(&outcome.dst),
                "outcome": "failed",
                "error_code": e.code(),
                "error_message": e.to_string(),
            }),
        })
        .collect();

    json!({
        "schema_version": "1.0",
        "source": display_path(source),
        "results": results,
        "bytes_copied": report.bytes_copied(),
    })
}

fn run_compare(
    recursive: bool,
    source: &Path,
    destinations: &[PathBuf],
    options: &CompareOptions,
) -> CliResult<i32> {
    let compare_err = |source_err: FilekitError| CliError::Compare {
        path: source.to_path_buf(),
        source: source_err,
    };

    let same = if recursive {
        match destinations {
            [dst] => dirs_equal(source, dst, options).map_err(compare_err)?,
            _ => {
                return Err(CliError::TreeCompareArity {
                    count: destinations.len(),
                });
            }
        }
    } else if source.is_dir() {
        return Err(CliError::CompareDirectoryWithoutRecursive {
            path: source.to_path_buf(),
        });
    } else {
        match destinations {
            [dst] => files_equal(source, dst, options).map_err(compare_err)?,
            _ => files_equal_to_many(source, destinations, options).map_err(compare_err)?,
        }
    };

    if same {
        println!("same");
        Ok(0)
    } else {
        println!("different");
        Ok(1)
    }
}

fn print_stats(stats: &CopyStats) {
    eprintln!(
        "Copied {} files into {} directories ({}) in {:.2?}",
        stats.files_copied,
        stats.dirs_created,
        format_bytes(stats.bytes_copied),
        stats.duration
    );
}

fn print_json_value(value: &Value) -> CliResult<()> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|source| CliError::JsonSerialize { source })?;
    println!("{rendered}");
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GiB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MiB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KiB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
