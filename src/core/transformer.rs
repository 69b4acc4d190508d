use crate::core::classifier::AppUserClassifier;
use crate::core::username::derive_username;
use crate::domain::model::{MappedUser, UserRecord};

/// Maps Jira user records to their Azure DevOps counterparts.
#[derive(Debug, Clone, Default)]
pub struct RecordTransformer {
    classifier: AppUserClassifier,
}

impl RecordTransformer {
    pub fn new(classifier: AppUserClassifier) -> Self {
        Self { classifier }
    }

    pub fn transform(&self, record: &UserRecord) -> MappedUser {
        let azure_devops_user = derive_username(record);

        // 沒有 email 的帳號一律視為 app user
        let is_app_user = !record.has_email() || self.classifier.is_app_user(&record.display_name);

        tracing::debug!(
            user_id = %record.user_id,
            azure_devops_user = %azure_devops_user,
            is_app_user,
            "mapped user record"
        );

        MappedUser {
            user_id: record.user_id.clone(),
            display_name: record.display_name.clone(),
            email: record.email.clone(),
            azure_devops_user,
            is_app_user,
        }
    }

    /// Output order matches input order, one output per input.
    pub fn transform_all(&self, records: &[UserRecord]) -> Vec<MappedUser> {
        records.iter().map(|record| self.transform(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_with_email() {
        let transformer = RecordTransformer::default();
        let mapped = transformer.transform(&UserRecord::new("10001", "John Doe", "john.doe@example.com"));

        assert_eq!(
            mapped,
            MappedUser {
                user_id: "10001".to_string(),
                display_name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                azure_devops_user: "John.Doe".to_string(),
                is_app_user: false,
            }
        );
    }

    #[test]
    fn test_integration_without_email() {
        let transformer = RecordTransformer::default();
        let mapped = transformer.transform(&UserRecord::new("10002", "GitHub Integration", ""));

        assert_eq!(mapped.azure_devops_user, "github-integration");
        assert!(mapped.is_app_user);
    }

    #[test]
    fn test_missing_email_always_flags_app_user() {
        let transformer = RecordTransformer::default();
        let mapped = transformer.transform(&UserRecord::new("10004", "Jane Smith", "   "));

        assert_eq!(mapped.email, "");
        assert_eq!(mapped.azure_devops_user, "jane-smith");
        assert!(mapped.is_app_user);
    }

    #[test]
    fn test_bot_name_with_email_flags_app_user() {
        let transformer = RecordTransformer::default();
        let mapped = transformer.transform(&UserRecord::new("10005", "Deploy Bot", "deploy.bot@example.com"));

        assert_eq!(mapped.azure_devops_user, "Deploy.Bot");
        assert!(mapped.is_app_user);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let transformer = RecordTransformer::default();
        let mapped = transformer.transform(&UserRecord::new(" 42 ", "  Jane Smith ", " jane@example.com "));

        assert_eq!(mapped.user_id, "42");
        assert_eq!(mapped.display_name, "Jane Smith");
        assert_eq!(mapped.email, "jane@example.com");
        assert_eq!(mapped.azure_devops_user, "Jane");
        assert!(!mapped.is_app_user);
    }

    #[test]
    fn test_transform_all_preserves_count_and_order() {
        let transformer = RecordTransformer::default();
        let records = vec![
            UserRecord::new("3", "Charlie Brown", "charlie@example.com"),
            UserRecord::new("1", "Slack", ""),
            UserRecord::new("2", "Alice Jones", "alice.jones@example.com"),
            UserRecord::new("1", "Slack", ""),
        ];

        let mapped = transformer.transform_all(&records);

        assert_eq!(mapped.len(), records.len());
        let ids: Vec<&str> = mapped.iter().map(|m| m.user_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2", "1"]);
    }

    #[test]
    fn test_custom_classifier() {
        let transformer = RecordTransformer::new(AppUserClassifier::new(["doe"]));
        let mapped = transformer.transform(&UserRecord::new("10001", "John Doe", "john.doe@example.com"));

        assert!(mapped.is_app_user);
    }
}
