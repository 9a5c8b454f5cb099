use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Names of the plain files directly under the storage root, in no
    /// particular order.
    async fn list_dir(&self) -> Result<Vec<String>>;
    async fn read_file(&self, name: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn root_path(&self) -> &str;
    fn file_pattern(&self) -> &str;
    fn id_field(&self) -> &str;
    fn summary_field(&self) -> &str;
    fn resolver_field(&self) -> &str;
    fn threads(&self) -> usize;
}
