use crate::domain::ports::Storage;
use crate::utils::error::{ConsolidateError, Result};
use async_trait::async_trait;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn list_dir(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.base_path).map_err(|source| {
            ConsolidateError::DirectoryRead {
                path: self.base_path.clone(),
                source,
            }
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ConsolidateError::DirectoryRead {
                path: self.base_path.clone(),
                source,
            })?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if is_file {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    async fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(name);
        fs::read(full_path).map_err(|source| ConsolidateError::FileRead {
            file: name.to_string(),
            source,
        })
    }
}
