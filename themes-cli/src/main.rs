//! Themes CLI - Major themes release notes from enhancement issues

mod commands;

use std::time::Duration;

use clap::{Parser, Subcommand};
use themes_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ListArgs;

/// Generate the major themes section of release notes
#[derive(Parser, Debug)]
#[command(name = "themes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Organization owning the enhancements repository
    #[arg(long, global = true)]
    org: Option<String>,

    /// Enhancements repository (name, owner/repo, or GitHub URL)
    #[arg(long, global = true)]
    repo: Option<String>,

    /// Enhancements repository branch
    #[arg(long, global = true)]
    branch: Option<String>,

    /// Deadline for all GitHub requests (e.g. 30s, 2m)
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Fetch themes for a list of issue numbers
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports can be piped
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let (org, repo) = commands::resolve_target(cli.org.clone(), cli.repo.clone())?;
    let config = Config::load_with_env()?.with_cli_overrides(
        org,
        repo,
        cli.branch.clone(),
        cli.timeout,
    );

    if cli.verbose {
        tracing::info!(
            org = %config.github.org,
            repo = %config.github.repo,
            branch = %config.github.branch,
            timeout = ?config.github.timeout,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("themes {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::List(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Config) => {
            println!("Themes Configuration");
            println!("====================");
            println!();
            println!("GitHub:");
            println!("  org: {}", config.github.org);
            println!("  repo: {}", config.github.repo);
            println!("  branch: {}", config.github.branch);
            match config.github.timeout {
                Some(timeout) => println!("  timeout: {}", humantime::format_duration(timeout)),
                None => println!("  timeout: (none)"),
            }
            println!();
            println!("Output:");
            println!("  format: {}", config.output.format);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Themes - Major themes release notes from enhancement issues");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
