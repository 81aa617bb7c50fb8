//! CLI entry point for dendro

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use dendro::{OutputConfig, TreeFormatter, TreeStats, TreeWalker, WalkerConfig, print_json};

/// Patterns hidden by default; `--all` disables them along with
/// the hidden-file filter.
const DEFAULT_EXCLUDES: &[&str] = &[
    "^node_modules$",
    r"^\.git$",
    r"^\.DS_Store$",
    "^dist$",
    "^build$",
    "^coverage$",
];

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
#[command(name = "dendro")]
#[command(about = "Display a directory tree with file type icons")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden files and skip the default excludes
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Disable file type icons
    #[arg(long = "no-icons")]
    no_icons: bool,

    /// Show resolved paths next to entries
    #[arg(short = 'p', long = "show-paths")]
    show_paths: bool,

    /// Exclude entries matching a regex (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Hide the directory/file count summary
    #[arg(long = "no-stats")]
    no_stats: bool,

    /// Output the tree as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();

    let args = Args::parse();

    let mut patterns = args.exclude.clone();
    if !args.all {
        patterns.extend(DEFAULT_EXCLUDES.iter().map(|p| p.to_string()));
    }
    let exclude_patterns = match WalkerConfig::compile_patterns(&patterns) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("dendro: invalid exclude pattern: {}", e);
            process::exit(1);
        }
    };

    let walker_config = WalkerConfig {
        max_depth: args.level,
        show_hidden: args.all,
        exclude_patterns,
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let tree = match TreeWalker::new(walker_config).walk(&root) {
        Some(t) => t,
        None => {
            eprintln!("dendro: cannot access '{}'", args.path.display());
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&tree)
    } else {
        let output_config = OutputConfig {
            show_icons: !args.no_icons,
            show_paths: args.show_paths,
            use_color: should_use_color(args.color),
        };
        TreeFormatter::new(output_config)
            .print(Some(&tree))
            .map(|()| {
                if !args.no_stats {
                    let stats = TreeStats::collect(Some(&tree));
                    println!();
                    println!("{} directories, {} files", stats.directories, stats.files);
                }
            })
    };

    if let Err(e) = result {
        eprintln!("dendro: error writing output: {}", e);
        process::exit(1);
    }
}
