//! List command - Fetch major themes for a set of enhancement issues

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use themes_core::{list_major_themes, Config, OutputFormat, RequestContext, ThemeReport};
use themes_github::GitHubClient;
use tracing::{info, warn};

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Comma-separated enhancement issue numbers (e.g. 753,3761)
    #[arg(env = "THEMES_ISSUES")]
    pub issues: String,

    /// Output format (defaults to the configured format)
    #[arg(short, long)]
    pub format: Option<FormatArg>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = GitHubClient::from_secrets()?;

        let ctx = RequestContext::background();
        let interrupt = ctx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling GitHub requests");
                interrupt.cancel();
            }
        });

        let themes =
            list_major_themes(&client, &self.issues, config.request_options(ctx)).await?;

        let report = ThemeReport::new(&config.github.org, &config.github.repo, themes);
        let format = self.format.map(OutputFormat::from).unwrap_or(config.output.format);
        let rendered = report.render(format)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)?;
                info!(
                    path = %path.display(),
                    count = report.themes.len(),
                    %format,
                    "Wrote major themes report"
                );
            }
            None => println!("{}", rendered),
        }

        Ok(())
    }
}
