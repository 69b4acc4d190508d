use clap::Parser;
use jira_user_mapper::core::ConfigProvider;
use jira_user_mapper::utils::error::{EtlError, ErrorSeverity};
use jira_user_mapper::utils::{logger, validation::Validate};
use jira_user_mapper::{CliConfig, EtlEngine, LocalStorage, TomlConfig, UserMappingPipeline};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting jira-user-mapper");
    tracing::debug!("CLI config: {:?}", cli);

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => run(config, cli.dry_run).await,
                Err(e) => Err(e),
            }
        }
        None => run(cli.clone(), cli.dry_run).await,
    };

    match outcome {
        Ok(output_path) => {
            if cli.dry_run {
                println!("🔍 Dry run complete, nothing written to {}", output_path);
            } else {
                println!("✅ User mapping completed successfully!");
                println!("📁 Output saved to: {}", output_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ User mapping failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(exit_code(&e));
        }
    }
}

async fn run<C>(config: C, dry_run: bool) -> Result<String, EtlError>
where
    C: ConfigProvider + Validate + 'static,
{
    config.validate()?;

    tracing::info!("📥 Input: {}", config.input_path());
    tracing::info!("📤 Output: {}", config.output_path());
    if let Some(user_map) = config.user_map_path() {
        tracing::info!("🗺️ User map: {}", user_map);
    }

    let storage = LocalStorage::new(".");
    let pipeline = UserMappingPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline).with_dry_run(dry_run);

    engine.run().await
}

fn exit_code(error: &EtlError) -> i32 {
    match error.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
