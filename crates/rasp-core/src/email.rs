//! E-mail domain completion for the sign-up form.

/// Domains offered when the user starts typing after `@`.
pub const DEFAULT_EMAIL_DOMAINS: [&str; 6] = [
    "gmail.com",
    "hotmail.com",
    "outlook.com",
    "yahoo.com",
    "icloud.com",
    "live.com",
];

/// Complete addresses for a partially typed e-mail.
///
/// Nothing is suggested until an `@` is present, or once the typed domain
/// already contains a `.`. Otherwise each domain that starts with the typed
/// fragment (case-insensitive) is returned as `local@domain`, in the order
/// of `domains`.
pub fn suggest_email_domains<S: AsRef<str>>(input: &str, domains: &[S]) -> Vec<String> {
    let Some((local, typed)) = input.split_once('@') else {
        return Vec::new();
    };
    if typed.contains('.') {
        return Vec::new();
    }
    let typed = typed.to_lowercase();
    domains
        .iter()
        .map(|domain| domain.as_ref())
        .filter(|domain| domain.to_lowercase().starts_with(&typed))
        .map(|domain| format!("{local}@{domain}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_at_sign_no_suggestions() {
        assert!(suggest_email_domains("ana", &DEFAULT_EMAIL_DOMAINS).is_empty());
    }

    #[test]
    fn bare_at_suggests_everything() {
        let s = suggest_email_domains("ana@", &DEFAULT_EMAIL_DOMAINS);
        assert_eq!(s.len(), DEFAULT_EMAIL_DOMAINS.len());
        assert_eq!(s[0], "ana@gmail.com");
    }

    #[test]
    fn filters_by_prefix_case_insensitively() {
        assert_eq!(
            suggest_email_domains("ana@HO", &DEFAULT_EMAIL_DOMAINS),
            vec!["ana@hotmail.com".to_string()]
        );
        assert_eq!(
            suggest_email_domains("ana@l", &DEFAULT_EMAIL_DOMAINS),
            vec!["ana@live.com".to_string()]
        );
        assert!(suggest_email_domains("ana@zz", &DEFAULT_EMAIL_DOMAINS).is_empty());
    }

    #[test]
    fn dotted_domain_stops_suggestions() {
        assert!(suggest_email_domains("ana@gmail.", &DEFAULT_EMAIL_DOMAINS).is_empty());
        assert!(suggest_email_domains("ana@empresa.com.br", &DEFAULT_EMAIL_DOMAINS).is_empty());
    }

    #[test]
    fn custom_domain_list() {
        let domains = vec!["uol.com.br".to_string(), "bol.com.br".to_string()];
        assert_eq!(
            suggest_email_domains("ze@u", &domains),
            vec!["ze@uol.com.br".to_string()]
        );
    }
}
