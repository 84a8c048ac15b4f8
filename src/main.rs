//! CLI entry point for pith

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pith::paths::{normalize_path, path_key};
use pith::{
    BundleConfig, DependencyOffer, DependencyReport, DependencyWalker, FileRecord, OutputConfig,
    ProjectConfig, Selection, assemble_bundle, estimate_tokens, extract_imports,
    print_dependencies, print_imports, print_json, scan_project,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pith")]
#[command(about = "Follows local imports from selected files and packs them as prompt context")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Project root; selected files are relative to it
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// List all files (ignore .gitignore and hidden-file rules)
    #[arg(short, long, global = true)]
    all: bool,

    /// Ignore files matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", global = true)]
    ignore: Vec<String>,

    /// Maximum file size to load (default: 1MB)
    /// Larger files are listed but cannot be selected. Use suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(long = "max-file-size", value_name = "SIZE", global = true)]
    max_file_size: Option<String>,

    /// Number of parallel workers for reading files
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0", global = true)]
    jobs: usize,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the local files the given files depend on
    Deps {
        /// Selected files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Write the given files as one context bundle
    Pack {
        /// Selected files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Include every discovered dependency not rejected with --skip-dep
        #[arg(long = "with-deps")]
        with_deps: bool,

        /// Reject one discovered dependency (can be used multiple times)
        #[arg(long = "skip-dep", value_name = "FILE", requires = "with_deps")]
        skip_dep: Vec<PathBuf>,

        /// Omit the file map
        #[arg(long = "no-tree")]
        no_tree: bool,

        /// Instructions appended to the bundle
        #[arg(long, value_name = "TEXT", conflicts_with = "instructions_file")]
        instructions: Option<String>,

        /// Read the instructions from a file
        #[arg(long = "instructions-file", value_name = "FILE")]
        instructions_file: Option<PathBuf>,

        /// Write the bundle to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show every import declaration found in one file
    Imports {
        /// File to scan
        file: PathBuf,
    },
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: {}", s))
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Absolute form of `path`, taken relative to `base` when it is relative.
fn absolute(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// A scanned project and the settings every subcommand shares.
struct Session {
    root: String,
    root_dir: PathBuf,
    files: Vec<FileRecord>,
    output: OutputConfig,
}

impl Session {
    fn open(args: &Args) -> Result<Self, String> {
        let mut config = ProjectConfig {
            show_all: args.all,
            ignore_patterns: args.ignore.clone(),
            parallel_workers: args.jobs,
            ..Default::default()
        };
        if let Some(ref size_str) = args.max_file_size {
            config.max_file_size = parse_file_size(size_str)
                .map_err(|e| format!("invalid --max-file-size '{}': {}", size_str, e))?;
        }

        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let root_dir = absolute(&cwd, &args.root);
        let files = scan_project(&root_dir, &config).map_err(|e| e.to_string())?;

        Ok(Self {
            root: normalize_path(&root_dir.to_string_lossy()),
            root_dir,
            files,
            output: OutputConfig {
                use_color: should_use_color(args.color),
            },
        })
    }

    /// Normalized absolute path string of a command-line file argument.
    fn path_of(&self, file: &Path) -> String {
        normalize_path(&absolute(&self.root_dir, file).to_string_lossy())
    }

    fn find(&self, file: &Path) -> Result<&FileRecord, String> {
        let key = path_key(&self.path_of(file));
        self.files
            .iter()
            .find(|record| record.key() == key)
            .ok_or_else(|| format!("'{}' is not a file in the project", file.display()))
    }

    fn select(&self, files: &[PathBuf]) -> Result<Selection, String> {
        let mut selection = Selection::new();
        for file in files {
            let record = self.find(file)?;
            selection.select(record).map_err(|e| e.to_string())?;
        }
        Ok(selection)
    }
}

fn run_deps(session: &Session, files: &[PathBuf], json: bool) -> Result<(), String> {
    let selected = session.select(files)?.to_records();
    let closure = DependencyWalker::default().walk(&selected, &session.files, &session.root);
    let report = DependencyReport::new(&session.root, &selected, &closure);

    let result = if json {
        print_json(&report)
    } else {
        print_dependencies(&report, &session.output)
    };
    result.map_err(|e| format!("error writing output: {}", e))
}

struct PackOptions<'a> {
    with_deps: bool,
    skip_dep: &'a [PathBuf],
    no_tree: bool,
    instructions: Option<String>,
    output: Option<&'a Path>,
}

fn run_pack(session: &Session, files: &[PathBuf], options: PackOptions<'_>) -> Result<(), String> {
    let mut selection = session.select(files)?;

    if options.with_deps {
        let selected = selection.to_records();
        let closure = DependencyWalker::default().walk(&selected, &session.files, &session.root);
        let mut offer = DependencyOffer::from_closure(&closure);
        for skip in options.skip_dep {
            if !offer.reject(&session.path_of(skip)) {
                log::warn!("'{}' is not a discovered dependency", skip.display());
            }
        }
        let added = selection.merge_offer(&offer, &session.files);
        log::info!("added {} of {} discovered dependencies", added, offer.len());
    }

    let config = BundleConfig {
        include_tree: !options.no_tree,
        instructions: options.instructions,
    };
    let records: Vec<&FileRecord> = selection.iter().collect();
    let bundle = assemble_bundle(&session.root, &records, &config);

    match options.output {
        Some(path) => fs::write(path, &bundle)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?,
        None => io::stdout()
            .write_all(bundle.as_bytes())
            .map_err(|e| format!("error writing output: {}", e))?,
    }

    eprintln!(
        "pith: {} file{}, ~{} tokens",
        records.len(),
        if records.len() == 1 { "" } else { "s" },
        estimate_tokens(&bundle)
    );
    Ok(())
}

fn run_imports(session: &Session, file: &Path) -> Result<(), String> {
    let record = session.find(file)?;
    let content = record
        .text()
        .ok_or_else(|| format!("'{}' has no readable text content", file.display()))?;

    let declarations = extract_imports(content, &record.path);
    print_imports(&declarations, &session.output)
        .map_err(|e| format!("error writing output: {}", e))
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = Session::open(&args).and_then(|session| match &args.command {
        Command::Deps { files, json } => run_deps(&session, files, *json),
        Command::Pack {
            files,
            with_deps,
            skip_dep,
            no_tree,
            instructions,
            instructions_file,
            output,
        } => {
            let instructions = match instructions_file {
                Some(path) => Some(
                    fs::read_to_string(path)
                        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?,
                ),
                None => instructions.clone(),
            };
            let options = PackOptions {
                with_deps: *with_deps,
                skip_dep,
                no_tree: *no_tree,
                instructions,
                output: output.as_deref(),
            };
            run_pack(&session, files, options)
        }
        Command::Imports { file } => run_imports(&session, file),
    });

    if let Err(e) = result {
        eprintln!("pith: {}", e);
        process::exit(1);
    }
}
