use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use engine_logging::DEFAULT_LOG_FILE;

/// Analyse any web page with the Web Analyser service.
#[derive(Debug, Parser)]
#[command(name = "web_analyser", version, about)]
pub struct Cli {
    /// URL to analyse once and print; omit to open the interactive form.
    pub url: Option<String>,

    /// Output format for a one-shot analysis.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Base URL of the analysis API (overrides API_BASE_URL).
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Origin that a relative API base is resolved against (overrides ANALYSER_ORIGIN).
    #[arg(long)]
    pub origin: Option<String>,

    /// Query the service status endpoint and exit.
    #[arg(long)]
    pub check: bool,

    /// Log file path.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Debug-level logging; also mirrors logs to stderr outside the interactive form.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn is_interactive(&self) -> bool {
        self.url.is_none() && !self.check
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The report exactly as returned.
    Markdown,
    /// Rendered for a plain terminal.
    Text,
    /// Rendered HTML fragment.
    Html,
}
