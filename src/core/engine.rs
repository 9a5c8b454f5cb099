use crate::core::consolidate::ConsolidationTable;
use crate::core::loader;
use crate::domain::model::{Record, SummaryReport};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{ConsolidateError, Result};
use glob::Pattern;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

pub struct ConsolidateEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S, C> ConsolidateEngine<S, C>
where
    S: Storage + Clone + 'static,
    C: ConfigProvider,
{
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Runs one consolidation pass: select files, parse them with bounded
    /// concurrency, fold every record in original combined order, then
    /// derive the per-summary counts.
    pub async fn run(&self) -> Result<SummaryReport> {
        let start = Instant::now();

        let files = self.select_files().await?;
        tracing::info!(
            "Selected {} files under {}",
            files.len(),
            self.config.root_path()
        );

        let mut table = ConsolidationTable::new(
            self.config.id_field(),
            self.config.summary_field(),
            self.config.resolver_field(),
        );

        // Reads and parses may overlap up to the thread budget, but results
        // are awaited and folded strictly in selection order: the merge
        // rule's first-seen-wins tie break depends on that total order.
        let semaphore = Arc::new(Semaphore::new(self.config.threads().max(1)));
        let mut handles = Vec::with_capacity(files.len());
        for file in files {
            let storage = self.storage.clone();
            let semaphore = Arc::clone(&semaphore);
            handles.push(tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore closed");
                tracing::info!("Reading file {}", file);
                let bytes = storage.read_file(&file).await?;
                let records = loader::parse_records(&file, &bytes)?;
                Ok::<(String, Vec<Record>), ConsolidateError>((file, records))
            }));
        }

        for handle in handles {
            let (file, records) = handle.await??;
            tracing::info!("File {} has {} records", file, records.len());
            for record in &records {
                table.fold(record);
            }
            tracing::debug!("Unique records so far {}", table.len());
        }

        let report = SummaryReport {
            unique_records: table.len(),
            counts: table.summary_counts(),
            elapsed: start.elapsed(),
        };

        tracing::info!("Final consolidation result");
        tracing::info!(
            "Total number of unique records in all the files {}",
            report.unique_records
        );
        tracing::info!(
            "Consolidation result based on {}",
            self.config.summary_field()
        );
        for (summary, count) in &report.counts {
            tracing::info!("{}={}", summary, count);
        }
        tracing::info!("Tool execution completed in {:?}", report.elapsed);

        Ok(report)
    }

    /// Non-recursive listing of the root, filtered by the file pattern.
    /// Matched names are sorted so selection order (and with it the tie
    /// break) does not depend on directory iteration order.
    async fn select_files(&self) -> Result<Vec<String>> {
        let pattern = Pattern::new(self.config.file_pattern()).map_err(|e| {
            ConsolidateError::InvalidConfigValue {
                field: "file_pattern".to_string(),
                value: self.config.file_pattern().to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut selected: Vec<String> = self
            .storage
            .list_dir()
            .await?
            .into_iter()
            .filter(|name| pattern.matches(name))
            .collect();
        selected.sort();

        for name in &selected {
            tracing::debug!("Selecting {}", name);
        }
        Ok(selected)
    }
}
