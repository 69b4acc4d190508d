/// Substrings that mark a display name as belonging to a bot, integration
/// or other non-human account. Matched case-insensitively.
pub const DEFAULT_APP_INDICATORS: &[&str] = &[
    "addon",
    "app",
    "integration",
    "bot",
    "service",
    "system",
    "automation",
    "connector",
    "plugin",
    "cloud",
    "pipelines",
    "github",
    "gitlab",
    "jira",
    "confluence",
    "atlassian",
    "microsoft",
    "teams",
    "slack",
    "trello",
    "bitbucket",
    "former user",
    "build_service",
    "jenkins",
    "opsgenie",
];

/// Decides whether a display name looks like an app user.
///
/// The indicator list is plain substring matching, so short tokens such as
/// `app` also hit ordinary names ("Happy Gilmore"). Callers that need a
/// narrower list can build the classifier with [`AppUserClassifier::new`].
#[derive(Debug, Clone)]
pub struct AppUserClassifier {
    indicators: Vec<String>,
}

impl AppUserClassifier {
    pub fn new<I, S>(indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            indicators: indicators
                .into_iter()
                .map(|indicator| indicator.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    pub fn is_app_user(&self, display_name: &str) -> bool {
        self.matched_indicator(display_name).is_some()
    }

    /// First indicator contained in the name, if any.
    pub fn matched_indicator(&self, display_name: &str) -> Option<&str> {
        let name_lower = display_name.to_lowercase();
        self.indicators
            .iter()
            .find(|indicator| name_lower.contains(indicator.as_str()))
            .map(String::as_str)
    }
}

impl Default for AppUserClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_APP_INDICATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_vendor_and_role_names() {
        let classifier = AppUserClassifier::default();

        assert!(classifier.is_app_user("Atlassian Jira Bot"));
        assert!(classifier.is_app_user("GitHub Integration"));
        assert!(classifier.is_app_user("Automation for Jira"));
        assert!(classifier.is_app_user("Azure Pipelines"));
        assert!(classifier.is_app_user("Project Collection Build_Service"));
        assert!(classifier.is_app_user("Former User"));
        assert!(classifier.is_app_user("Opsgenie Integration"));
    }

    #[test]
    fn test_ordinary_names_are_people() {
        let classifier = AppUserClassifier::default();

        assert!(!classifier.is_app_user("Jane Smith"));
        assert!(!classifier.is_app_user("John Doe"));
        assert!(!classifier.is_app_user(""));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let classifier = AppUserClassifier::default();

        assert!(classifier.is_app_user("SLACK"));
        assert!(classifier.is_app_user("sLaCk Connector"));
        assert!(classifier.is_app_user("FORMER USER"));
    }

    #[test]
    fn test_substring_match_hits_embedded_tokens() {
        let classifier = AppUserClassifier::default();

        // "app" inside "Happy" is enough
        assert_eq!(classifier.matched_indicator("Happy Gilmore"), Some("app"));
    }

    #[test]
    fn test_custom_indicator_list() {
        let classifier = AppUserClassifier::new(["Robot"]);

        assert_eq!(classifier.indicators().to_vec(), vec!["robot".to_string()]);
        assert!(classifier.is_app_user("Friendly ROBOT"));
        assert!(!classifier.is_app_user("Atlassian Jira Bot"));
    }

    #[test]
    fn test_empty_indicator_list_never_matches() {
        let classifier = AppUserClassifier::new(Vec::<String>::new());
        assert!(!classifier.is_app_user("GitHub Bot"));
    }
}
