pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{
    classifier::AppUserClassifier, etl::EtlEngine, pipeline::UserMappingPipeline,
    transformer::RecordTransformer,
};
pub use domain::model::{MappedUser, UserRecord};
pub use utils::error::{EtlError, Result};
