use crate::domain::model::{TransformResult, UserRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn user_map_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<UserRecord>>;
    async fn transform(&self, records: Vec<UserRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;

    /// Path that `load` writes the main output to.
    fn output_path(&self) -> String;
}
