use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    /// Extract and transform only; nothing is written.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting user mapping process...");

        // Extract
        tracing::info!("Extracting user records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", records.len());

        // Transform
        tracing::info!("Transforming user records...");
        let result = self.pipeline.transform(records).await?;
        tracing::info!(
            "Transformed {} records ({} app users, {} people)",
            result.total_count(),
            result.app_user_count,
            result.human_user_count()
        );

        if self.dry_run {
            let output_path = self.pipeline.output_path();
            tracing::info!("🔍 Dry run: skipping write to {}", output_path);
            return Ok(output_path);
        }

        // Load
        tracing::info!("Loading results...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
