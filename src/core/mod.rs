pub mod classifier;
pub mod etl;
pub mod pipeline;
pub mod slug;
pub mod transformer;
pub mod username;

pub use crate::domain::model::{MappedUser, TransformResult, UserRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
