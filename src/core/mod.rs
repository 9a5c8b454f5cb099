pub mod consolidate;
pub mod engine;
pub mod loader;

pub use crate::domain::model::{Record, SummaryReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
