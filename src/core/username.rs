use crate::core::slug::normalize_name_to_slug;
use crate::domain::model::UserRecord;

/// Pick the Azure DevOps username for a record.
///
/// With an email, the local part is used with the first letter of each
/// period-delimited segment upper-cased (`john.doe@x` -> `John.Doe`). The
/// rest of each segment keeps its casing and no slug filtering is applied.
/// Without an email, the display name is slugged instead.
pub fn derive_username(record: &UserRecord) -> String {
    if record.has_email() {
        username_from_email(&record.email)
    } else {
        normalize_name_to_slug(&record.display_name)
    }
}

pub fn username_from_email(email: &str) -> String {
    let local_part = email.split('@').next().unwrap_or_default();

    if local_part.contains('.') {
        local_part
            .split('.')
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(".")
    } else {
        capitalize_first(local_part)
    }
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_email_prefix() {
        assert_eq!(username_from_email("john.doe@example.com"), "John.Doe");
        assert_eq!(username_from_email("a.b.c@example.com"), "A.B.C");
    }

    #[test]
    fn test_plain_email_prefix() {
        assert_eq!(username_from_email("jsmith@example.com"), "Jsmith");
    }

    #[test]
    fn test_rest_of_segment_keeps_casing() {
        assert_eq!(username_from_email("mcDonald.JR@example.com"), "McDonald.JR");
        assert_eq!(username_from_email("deAngelo@example.com"), "DeAngelo");
    }

    #[test]
    fn test_email_branch_does_not_slug() {
        assert_eq!(username_from_email("first_last+jira@example.com"), "First_last+jira");
        assert_eq!(username_from_email("john..doe@example.com"), "John..Doe");
    }

    #[test]
    fn test_prefix_stops_at_first_at_sign() {
        assert_eq!(username_from_email("odd@name@example.com"), "Odd");
        assert_eq!(username_from_email("@example.com"), "");
        assert_eq!(username_from_email("noatsign"), "Noatsign");
    }

    #[test]
    fn test_record_without_email_uses_slug() {
        let record = UserRecord::new("10003", "Former User (Jira)", "");
        assert_eq!(derive_username(&record), "former-user-jira");
    }

    #[test]
    fn test_record_with_email_ignores_name() {
        let record = UserRecord::new("10001", "Someone Else", "john.doe@example.com");
        assert_eq!(derive_username(&record), "John.Doe");
    }
}
