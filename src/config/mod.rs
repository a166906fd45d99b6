pub mod cli;

use crate::core::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "scoreboard")]
#[command(about = "Aggregates per-domain readiness checklists into a Markdown scoreboard")]
pub struct CliConfig {
    #[arg(long, default_value = "domains.txt")]
    pub domains_file: String,

    #[arg(long, default_value = "docs/PROGRESS.md")]
    pub output_file: String,

    #[arg(long, default_value = ".", help = "Directory the domain tree lives under")]
    pub root: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn domains_file(&self) -> &str {
        &self.domains_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}
