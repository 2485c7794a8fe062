//! Utility functions

/// Hides most of the local part of an email address so it can be logged.
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) if at_pos > 0 => {
            let (local, domain) = email.split_at(at_pos);
            let keep = if local.chars().count() <= 2 { 1 } else { 2 };
            let visible: String = local.chars().take(keep).collect();
            format!("{}***{}", visible, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_keeps_domain() {
        assert_eq!(mask_email("john.doe@example.com"), "jo***@example.com");
        assert_eq!(mask_email("jd@example.com"), "j***@example.com");
    }

    #[test]
    fn test_mask_email_without_local_part() {
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email("@example.com"), "***");
        assert_eq!(mask_email(""), "***");
    }
}
