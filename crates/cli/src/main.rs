use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use savepath_core::{
    load_config, score_paths, suggest_path, validate_config, Suggestion, TorrentDescriptor,
};

/// Exit code when no path could be inferred and the user has to choose.
const EXIT_NO_SUGGESTION: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "savepath")]
#[command(version)]
#[command(about = "Suggest a storage path for a torrent", long_about = None)]
struct Cli {
    /// Configuration file with storage paths and inference settings
    #[arg(short, long, env = "SAVEPATH_CONFIG", default_value = "savepath.toml")]
    config: PathBuf,

    /// Category reported by the torrent site
    #[arg(long)]
    category: Option<String>,

    /// Print the keyword score of every path
    #[arg(long)]
    explain: bool,

    /// Print the suggestion as JSON
    #[arg(long)]
    json: bool,

    /// Release title
    name: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    // Logs go to stderr, stdout is reserved for the suggestion
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    info!("Loading configuration from {:?}", cli.config);
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    validate_config(&config).context("Configuration validation failed")?;
    info!("{} storage path(s) configured", config.paths.len());

    let torrent = TorrentDescriptor {
        name: cli.name,
        category: cli.category,
    };

    if cli.explain {
        let table = config.inference.keyword_table();
        for score in score_paths(&torrent, &config.paths, &table) {
            println!("{:>4}  {}  [{}]", score.score, score.name, score.reasons.join(", "));
        }
    }

    let Some(suggestion) = suggest_path(&torrent, &config.paths, &config.inference) else {
        if cli.json {
            println!("null");
        } else {
            println!("no suggestion, choose a path manually");
        }
        return Ok(ExitCode::from(EXIT_NO_SUGGESTION));
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&suggestion)
            .context("Failed to serialize suggestion")?;
        println!("{}", json);
    } else {
        print_suggestion(&suggestion);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_suggestion(suggestion: &Suggestion) {
    if suggestion.is_downloader_default() {
        println!("{} (download client decides)", suggestion.name);
        return;
    }

    println!("{}\t{}", suggestion.name, suggestion.path);
    if let (Some(original), Some(series)) =
        (&suggestion.original_path, &suggestion.series_subfolder)
    {
        println!("series folder '{}' under {}", series, original);
    }
}
