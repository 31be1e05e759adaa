use std::path::PathBuf;

use clap::Parser;
use uivert::logging::LoggingConfig;
use uivert::{StageConfig, Validation};

#[derive(Parser, Debug)]
#[command(
    name = "uivert-probe",
    author,
    version,
    about = "Run a UI draw through the vertex stage and print the transformed vertices"
)]
pub struct Cli {
    /// Draw description (JSON). Reads stdin when omitted or `-`.
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Where to write the shaded vertices (JSON). Writes stdout when omitted.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip the screen-size check and shade exactly as the GPU would.
    #[arg(long)]
    pub unchecked: bool,

    /// Shade on the thread pool once a draw reaches this many vertices.
    #[arg(long, value_name = "N", default_value_t = StageConfig::default().parallel_threshold)]
    pub parallel_threshold: usize,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Log filter in env_logger syntax (e.g. `debug` or `uivert=trace`).
    #[arg(long = "log", env = "UIVERT_LOG", value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn stage_config(&self) -> StageConfig {
        StageConfig {
            validation: if self.unchecked {
                Validation::Unchecked
            } else {
                Validation::Checked
            },
            parallel_threshold: self.parallel_threshold,
            ..StageConfig::default()
        }
    }

    /// Explicit `--log` filter, else `RUST_LOG`, else info.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            filter: self.log_filter.clone(),
            ..LoggingConfig::default()
        }
    }

    /// `None` means stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
