pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{consolidate::ConsolidationTable, engine::ConsolidateEngine};
pub use crate::domain::model::{Record, SummaryReport};
pub use crate::utils::error::{ConsolidateError, Result};
