pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "json-consolidate")]
#[command(about = "Consolidates JSON array files into per-value counts keyed by an identifier field")]
pub struct CliConfig {
    /// Directory to scan for input files
    pub root_path: String,

    /// Field whose value identifies a unique record across files
    pub id_field: String,

    /// Field whose values are counted per unique record
    pub summary_field: String,

    /// Field used to pick a winner when summaries conflict (higher wins)
    pub resolver_field: String,

    #[arg(long, default_value = "*.json", help = "File pattern to include in processing")]
    pub pattern: String,

    #[arg(long, default_value = "4", help = "Concurrent file reads")]
    pub threads: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn root_path(&self) -> &str {
        &self.root_path
    }

    fn file_pattern(&self) -> &str {
        &self.pattern
    }

    fn id_field(&self) -> &str {
        &self.id_field
    }

    fn summary_field(&self) -> &str {
        &self.summary_field
    }

    fn resolver_field(&self) -> &str {
        &self.resolver_field
    }

    fn threads(&self) -> usize {
        self.threads
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("root_path", &self.root_path)?;
        validation::validate_non_empty_string("id_field", &self.id_field)?;
        validation::validate_non_empty_string("summary_field", &self.summary_field)?;
        validation::validate_non_empty_string("resolver_field", &self.resolver_field)?;
        validation::validate_non_empty_string("pattern", &self.pattern)?;
        validation::validate_positive_number("threads", self.threads, 1)?;
        Ok(())
    }
}
