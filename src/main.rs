use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use unscramble::index::build::repopulate_with_progress;
use unscramble::index::stats::show_stats;
use unscramble::output::{print_lookup, print_signature};
use unscramble::utils::{config_path, AppConfig};
use unscramble::{compute_signature, Unscrambler};

#[derive(Parser)]
#[command(name = "unscramble")]
#[command(about = "Unscramble words using a letter-signature index")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Words to unscramble (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Index file (defaults to the configured index)
    #[arg(short, long, global = true)]
    index: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build or rebuild the index from a dictionary (one word per line)
    Index {
        /// Dictionary to read (defaults to the configured dictionary)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Don't show progress
        #[arg(short, long)]
        quiet: bool,
    },
    /// Look up words made of the same letters
    Lookup {
        /// Scrambled words
        #[arg(required = true)]
        words: Vec<String>,

        /// Fuzzy neighbors on each side (defaults to the configured size)
        #[arg(short, long)]
        window: Option<usize>,

        /// Only exact anagrams (same as --window 0)
        #[arg(short, long)]
        exact: bool,

        /// When to use colors
        #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
        color: ColorWhen,
    },
    /// Print the signature of each word
    Sig {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Show index statistics
    Stats,
    /// Show the config file location and effective settings
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorWhen {
    Auto,
    Never,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "unscramble=warn",
        1 => "unscramble=info",
        2 => "unscramble=debug",
        _ => "unscramble=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load().context("Failed to load config")?;

    match cli.command {
        Some(Commands::Index { dict, quiet }) => {
            let dict = dict.unwrap_or_else(|| config.default_dict_file.clone());
            let index = cli
                .index
                .unwrap_or_else(|| config.default_index_file.clone());
            let stats = repopulate_with_progress(&dict, &index, quiet)
                .with_context(|| format!("Failed to build index from {}", dict.display()))?;
            if !quiet {
                println!(
                    "Indexed {} words ({} duplicates, {} unstorable skipped) into {} signatures",
                    stats.words_indexed, stats.duplicates, stats.rejected, stats.entries
                );
                println!("Index stored at: {}", index.display());
            }
        }
        Some(Commands::Lookup {
            words,
            window,
            exact,
            color,
        }) => {
            let window = if exact {
                0
            } else {
                window.unwrap_or(config.default_window_size)
            };
            run_lookup(&config, cli.index, &words, window, color == ColorWhen::Auto)?;
        }
        Some(Commands::Sig { words }) => {
            for word in &words {
                let word = word.to_lowercase();
                print_signature(&word, compute_signature(&word), true)?;
            }
        }
        Some(Commands::Stats) => {
            let u = open(&config, cli.index)?;
            show_stats(u.reader());
        }
        Some(Commands::Config { init }) => {
            if init {
                let path = config.save().context("Failed to write config")?;
                println!("Wrote {}", path.display());
            } else {
                match config_path() {
                    Some(path) => println!("Config file: {}", path.display()),
                    None => println!("Config file: (no data directory on this platform)"),
                }
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        None => {
            if cli.query.is_empty() {
                anyhow::bail!("Missing query. Try 'unscramble --help'.");
            }
            run_lookup(
                &config,
                cli.index,
                &cli.query,
                config.default_window_size,
                true,
            )?;
        }
    }

    Ok(())
}

fn open(config: &AppConfig, index: Option<PathBuf>) -> Result<Unscrambler> {
    Unscrambler::with_config(config, index.as_deref())
        .context("Failed to load index. Run 'unscramble index' first.")
}

fn run_lookup(
    config: &AppConfig,
    index: Option<PathBuf>,
    words: &[String],
    window: usize,
    color: bool,
) -> Result<()> {
    let u = open(config, index)?;
    let heading = words.len() > 1;
    for word in words {
        let query = word.to_lowercase();
        let result = u.lookup(&query, window);
        print_lookup(&query, &result, color, heading)?;
    }
    Ok(())
}
