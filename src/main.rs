//! badgecraft CLI
//!
//! Usage:
//!   badgecraft generate [--output DIR] [--limit N]
//!   badgecraft grid <KEYS> [--per-line N]
//!   badgecraft list [--search TERM] [--limit N]
//!   badgecraft serve [--address ADDR] [--port PORT]

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use badgecraft::catalog::BadgeCatalog;
use badgecraft::grid::GridConfig;
use badgecraft::icon::IconLibrary;
use badgecraft::query::{clamp_per_line, parse_keys};
use badgecraft::renderer::BadgeMetrics;
use badgecraft::service::BadgeService;
use badgecraft::theme::Theme;

/// How often batch generation reports progress
const PROGRESS_INTERVAL: usize = 50;

#[derive(Parser)]
#[command(name = "badgecraft")]
#[command(about = "SVG badge and badge-grid generator")]
struct Cli {
    /// Badge catalog JSON file
    #[arg(long, global = true, default_value = "badges.json")]
    config: PathBuf,

    /// Directory of icon SVG documents
    #[arg(long, global = true, default_value = "icons")]
    icons: PathBuf,

    /// Theme TOML file overriding fonts and error colors
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every configured badge into an output directory
    Generate {
        /// Output directory for badge files
        #[arg(short, long, default_value = "badges")]
        output: PathBuf,

        /// Render at most this many badges
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Compose a badge grid and print it to stdout
    Grid {
        /// Comma-separated badge keys
        keys: String,

        /// Badges per row (clamped to 1-20, default 4)
        #[arg(short, long)]
        per_line: Option<String>,
    },
    /// Print the catalog listing as JSON
    List {
        /// Filter keys and labels by substring
        #[arg(short, long)]
        search: Option<String>,

        /// Keep at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Serve badges over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        address: IpAddr,

        /// Port to bind
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let theme = match &cli.theme {
        Some(path) => Theme::from_file(path)
            .with_context(|| format!("failed to load theme '{}'", path.display()))?,
        None => Theme::default(),
    };
    let catalog = BadgeCatalog::load_or_empty(&cli.config);
    let icons = IconLibrary::new(&cli.icons);
    let service = BadgeService::new(
        catalog,
        icons,
        BadgeMetrics::default(),
        GridConfig::default(),
        theme,
    );

    match cli.command {
        Command::Generate { output, limit } => generate(&service, &output, limit),
        Command::Grid { keys, per_line } => {
            let keys = parse_keys(&keys);
            let per_line = clamp_per_line(per_line.as_deref());
            println!("{}", service.grid(&keys, per_line).svg);
            Ok(())
        }
        Command::List { search, limit } => {
            let listing = service.listing(search.as_deref(), limit);
            println!("{}", serde_json::to_string_pretty(&listing)?);
            Ok(())
        }
        Command::Serve { address, port } => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("failed to start async runtime")?;
            runtime.block_on(badgecraft::server::serve(service, SocketAddr::new(address, port)))
        }
    }
}

/// Logs go to stderr so piped SVG output stays clean
fn init_logging(quiet: bool) {
    let default_level = if quiet { "error" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Serialize)]
struct GenerationReport {
    results: GenerationResults,
    configuration: ReportedMetrics,
    missing_icons: Vec<String>,
}

#[derive(Serialize)]
struct GenerationResults {
    success: usize,
    errors: usize,
    total: usize,
}

#[derive(Serialize)]
struct ReportedMetrics {
    height: u32,
    padding: u32,
    icon_size: u32,
    text_padding: u32,
    border_radius: u32,
}

fn generate(service: &BadgeService, output: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    let all = service.catalog().all();
    let definitions = match limit {
        Some(limit) => &all[..limit.min(all.len())],
        None => all,
    };
    if definitions.is_empty() {
        anyhow::bail!("no badges found in configuration");
    }

    std::fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory '{}'", output.display()))?;

    info!(total = definitions.len(), "generating badges");

    let mut success = 0usize;
    let mut errors = 0usize;
    let mut missing_icons = Vec::new();

    for definition in definitions {
        if !service.icons().icon_path(&definition.key).exists() {
            warn!(badge = %definition.key, "missing icon, rendering without one");
            missing_icons.push(definition.key.clone());
        }

        let badge = service.render_definition(definition);
        let path = output.join(format!("{}_badge.svg", definition.key));
        match std::fs::write(&path, &badge.svg) {
            Ok(()) => {
                success += 1;
                if success % PROGRESS_INTERVAL == 0 {
                    info!(done = success, total = definitions.len(), "progress");
                }
            }
            Err(err) => {
                warn!(badge = %definition.key, error = %err, "failed to write badge");
                errors += 1;
            }
        }
    }

    let metrics = service.metrics();
    let report = GenerationReport {
        results: GenerationResults {
            success,
            errors,
            total: definitions.len(),
        },
        configuration: ReportedMetrics {
            height: metrics.height,
            padding: metrics.padding,
            icon_size: metrics.icon_size,
            text_padding: metrics.text_padding,
            border_radius: metrics.border_radius,
        },
        missing_icons,
    };
    let report_path = output.join("generation_report.json");
    std::fs::write(&report_path, serde_json::to_string_pretty(&report)?)
        .with_context(|| format!("failed to write report '{}'", report_path.display()))?;

    info!(
        success,
        errors,
        missing = report.missing_icons.len(),
        output = %output.display(),
        "generation finished"
    );

    if errors > 0 {
        anyhow::bail!("{errors} badge(s) failed to generate");
    }
    Ok(())
}
