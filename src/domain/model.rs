use serde::{Serialize, Serializer};

/// Output column order, also used for the header row.
pub const OUTPUT_HEADERS: [&str; 5] = [
    "JiraUserId",
    "JiraFirstLastName",
    "JiraUserEmail",
    "AzureDevOpsUser",
    "AppUser",
];

/// One row of the Jira user export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
}

impl UserRecord {
    /// Surrounding whitespace is trimmed from every field.
    pub fn new(user_id: &str, display_name: &str, email: &str) -> Self {
        Self {
            user_id: user_id.trim().to_string(),
            display_name: display_name.trim().to_string(),
            email: email.trim().to_string(),
        }
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}

/// A user record with the derived Azure DevOps username and app-user flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedUser {
    #[serde(rename = "JiraUserId")]
    pub user_id: String,
    #[serde(rename = "JiraFirstLastName")]
    pub display_name: String,
    #[serde(rename = "JiraUserEmail")]
    pub email: String,
    #[serde(rename = "AzureDevOpsUser")]
    pub azure_devops_user: String,
    #[serde(rename = "AppUser", serialize_with = "serialize_flag")]
    pub is_app_user: bool,
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub mapped_users: Vec<MappedUser>,
    pub csv_output: String,
    pub user_map_output: String,
    pub app_user_count: usize,
}

impl TransformResult {
    pub fn total_count(&self) -> usize {
        self.mapped_users.len()
    }

    pub fn human_user_count(&self) -> usize {
        self.total_count().saturating_sub(self.app_user_count)
    }
}
