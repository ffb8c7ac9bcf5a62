//! Field validation rules shared by the auth forms
//!
//! Each rule is a pure function from field content to an optional error
//! message. Same input, same output: the forms re-run the full rule set on
//! every change and at submit time.

pub const USERNAME_MESSAGE: &str =
    "Username must be between 3 and 24 characters and can only contain letters, numbers, and dashes";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str =
    "Password must be at least 6 characters and contain at least one uppercase letter and one number";
pub const CONFIRM_MESSAGE: &str = "Passwords do not match";
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Password is required";

/// Username: 3 to 24 characters, letters, digits, and dashes only
pub fn username_rule(value: &str) -> Option<&'static str> {
    let length = value.chars().count();
    let charset_ok = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if (3..=24).contains(&length) && charset_ok {
        None
    } else {
        Some(USERNAME_MESSAGE)
    }
}

/// Email: non-empty and shaped like `local@domain.tld`. Not RFC validation.
pub fn email_rule(value: &str) -> Option<&'static str> {
    if is_email_shaped(value) {
        None
    } else {
        Some(EMAIL_MESSAGE)
    }
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Password: at least 6 characters with one uppercase letter and one digit
pub fn password_rule(value: &str) -> Option<&'static str> {
    let strong = value.chars().count() >= 6
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit());
    if strong {
        None
    } else {
        Some(PASSWORD_MESSAGE)
    }
}

/// Confirm password must equal the current password. The caller passes both
/// current values, so an edit to either side re-checks the pair.
pub fn confirm_rule(password: &str, confirm: &str) -> Option<&'static str> {
    if password == confirm {
        None
    } else {
        Some(CONFIRM_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod username {
        use super::*;

        #[test]
        fn test_too_short_is_rejected() {
            assert_eq!(username_rule("ab"), Some(USERNAME_MESSAGE));
        }

        #[test]
        fn test_short_with_dash_and_digit_is_accepted() {
            assert_eq!(username_rule("ab-9"), None);
        }

        #[test]
        fn test_empty_is_rejected() {
            assert_eq!(username_rule(""), Some(USERNAME_MESSAGE));
        }

        #[test]
        fn test_bounds_are_inclusive() {
            assert_eq!(username_rule("abc"), None);
            assert_eq!(username_rule(&"a".repeat(24)), None);
            assert_eq!(username_rule(&"a".repeat(25)), Some(USERNAME_MESSAGE));
        }

        #[test]
        fn test_disallowed_characters_are_rejected() {
            assert_eq!(username_rule("ken ji"), Some(USERNAME_MESSAGE));
            assert_eq!(username_rule("ken_ji"), Some(USERNAME_MESSAGE));
            assert_eq!(username_rule("けんじ"), Some(USERNAME_MESSAGE));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_simple_address_is_accepted() {
            assert_eq!(email_rule("kenji@example.com"), None);
        }

        #[test]
        fn test_subdomains_are_accepted() {
            assert_eq!(email_rule("kenji@mail.example.co.jp"), None);
        }

        #[test]
        fn test_empty_is_rejected() {
            assert_eq!(email_rule(""), Some(EMAIL_MESSAGE));
        }

        #[test]
        fn test_missing_at_or_tld_is_rejected() {
            assert_eq!(email_rule("kenji.example.com"), Some(EMAIL_MESSAGE));
            assert_eq!(email_rule("kenji@example"), Some(EMAIL_MESSAGE));
            assert_eq!(email_rule("kenji@example."), Some(EMAIL_MESSAGE));
            assert_eq!(email_rule("@example.com"), Some(EMAIL_MESSAGE));
        }

        #[test]
        fn test_whitespace_is_rejected() {
            assert_eq!(email_rule("ken ji@example.com"), Some(EMAIL_MESSAGE));
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_missing_uppercase_and_digit_is_rejected() {
            assert_eq!(password_rule("abcdef"), Some(PASSWORD_MESSAGE));
        }

        #[test]
        fn test_upper_and_digit_is_accepted() {
            assert_eq!(password_rule("Abcdef1"), None);
        }

        #[test]
        fn test_too_short_is_rejected() {
            assert_eq!(password_rule("Ab1"), Some(PASSWORD_MESSAGE));
        }

        #[test]
        fn test_exactly_six_with_upper_and_digit_is_accepted() {
            assert_eq!(password_rule("Abcde1"), None);
        }
    }

    mod confirm {
        use super::*;

        #[test]
        fn test_matching_pair_is_accepted() {
            assert_eq!(confirm_rule("Abcdef1", "Abcdef1"), None);
        }

        #[test]
        fn test_mismatch_is_rejected() {
            assert_eq!(confirm_rule("Abcdef1", "Abcdef2"), Some(CONFIRM_MESSAGE));
        }

        #[test]
        fn test_empty_confirm_against_filled_password_is_rejected() {
            assert_eq!(confirm_rule("Abcdef1", ""), Some(CONFIRM_MESSAGE));
        }
    }

    #[test]
    fn test_rules_are_deterministic() {
        for _ in 0..3 {
            assert_eq!(username_rule("ab"), Some(USERNAME_MESSAGE));
            assert_eq!(email_rule("kenji@example.com"), None);
            assert_eq!(password_rule("Abcdef1"), None);
            assert_eq!(confirm_rule("a", "b"), Some(CONFIRM_MESSAGE));
        }
    }
}
