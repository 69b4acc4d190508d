use crate::core::transformer::RecordTransformer;
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult, UserRecord};
use crate::domain::model::{MappedUser, OUTPUT_HEADERS};
use crate::utils::error::{EtlError, Result};

pub const USER_ID_COLUMN: &str = "JiraUserId";
pub const DISPLAY_NAME_COLUMN: &str = "JiraFirstLastName";
pub const EMAIL_COLUMN: &str = "JiraUserEmail";

pub struct UserMappingPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    transformer: RecordTransformer,
}

impl<S: Storage, C: ConfigProvider> UserMappingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_transformer(storage, config, RecordTransformer::default())
    }

    pub fn with_transformer(storage: S, config: C, transformer: RecordTransformer) -> Self {
        Self {
            storage,
            config,
            transformer,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for UserMappingPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<UserRecord>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading user mapping input from: {}", input_path);

        let data = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), input_path);

        parse_user_records(&data)
    }

    async fn transform(&self, records: Vec<UserRecord>) -> Result<TransformResult> {
        let mapped_users = self.transformer.transform_all(&records);
        let app_user_count = mapped_users.iter().filter(|user| user.is_app_user).count();

        let csv_output = render_csv(&mapped_users)?;
        let user_map_output = render_user_map(&mapped_users);

        Ok(TransformResult {
            mapped_users,
            csv_output,
            user_map_output,
            app_user_count,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing {} mapped users ({} bytes) to {}",
            result.total_count(),
            result.csv_output.len(),
            output_path
        );
        self.storage
            .write_file(output_path, result.csv_output.as_bytes())
            .await?;

        if let Some(user_map_path) = self.config.user_map_path() {
            tracing::debug!(
                "Writing user map with {} entries to {}",
                result.human_user_count(),
                user_map_path
            );
            self.storage
                .write_file(user_map_path, result.user_map_output.as_bytes())
                .await?;
        }

        Ok(output_path.to_string())
    }

    fn output_path(&self) -> String {
        self.config.output_path().to_string()
    }
}

/// Column positions of the required fields in the input header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    user_id: usize,
    display_name: usize,
    email: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| EtlError::MissingFieldError {
                    line: 1,
                    field: name.to_string(),
                })
        };

        Ok(Self {
            user_id: find(USER_ID_COLUMN)?,
            display_name: find(DISPLAY_NAME_COLUMN)?,
            email: find(EMAIL_COLUMN)?,
        })
    }
}

/// Parse the Jira user export. Columns are looked up by header name, so
/// extra columns and any column order are accepted.
pub fn parse_user_records(data: &[u8]) -> Result<Vec<UserRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();

        let field = |index: usize, name: &str| {
            row.get(index).ok_or_else(|| EtlError::MissingFieldError {
                line,
                field: name.to_string(),
            })
        };

        records.push(UserRecord::new(
            field(columns.user_id, USER_ID_COLUMN)?,
            field(columns.display_name, DISPLAY_NAME_COLUMN)?,
            field(columns.email, EMAIL_COLUMN)?,
        ));
    }

    tracing::debug!("Parsed {} user records", records.len());
    Ok(records)
}

/// Render mapped users as CSV. The header row is always present.
pub fn render_csv(users: &[MappedUser]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_HEADERS)?;
    for user in users {
        writer.serialize(user)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// `email=username` lines for every human user, in input order.
pub fn render_user_map(users: &[MappedUser]) -> String {
    users
        .iter()
        .filter(|user| !user.is_app_user)
        .map(|user| format!("{}={}\n", user.email, user.azure_devops_user))
        .collect()
}
