//! User creation and login rules.

use std::collections::BTreeMap;

use super::ValidationError;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Validate a user-creation request. An empty string counts as missing;
/// all missing required fields are reported together in `details`.
pub fn validate_new_user(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    let mut missing = BTreeMap::new();
    if name.is_empty() {
        missing.insert("name".to_string(), "Name is required".to_string());
    }
    if email.is_empty() {
        missing.insert("email".to_string(), "Email is required".to_string());
    }
    if password.is_empty() {
        missing.insert("password".to_string(), "Password is required".to_string());
    }
    if !missing.is_empty() {
        return Err(ValidationError::with_details(
            "Name, email, and password are required",
            missing,
        ));
    }

    let name_len = name.chars().count();
    if name_len < NAME_MIN_CHARS || name_len > NAME_MAX_CHARS {
        return Err(ValidationError::new(
            "Name must be between 2 and 100 characters",
        ));
    }

    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(ValidationError::new(
            "Password must be at least 8 characters long",
        ));
    }

    Ok(())
}

/// Validate a login request. Both fields are required; missing ones are
/// reported with a single aggregate message.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::new("Email and password are required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_enumerated_together() {
        let err = validate_new_user("", "jane@x.io", "").unwrap_err();
        assert_eq!(err.message, "Name, email, and password are required");
        let details = err.details.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["name"], "Name is required");
        assert_eq!(details["password"], "Password is required");
        assert!(!details.contains_key("email"));
    }

    #[test]
    fn all_fields_missing() {
        let err = validate_new_user("", "", "").unwrap_err();
        assert_eq!(err.details.unwrap().len(), 3);
    }

    #[test]
    fn name_length_bounds() {
        let err = validate_new_user("J", "jane@x.io", "supersecret1").unwrap_err();
        assert_eq!(err.message, "Name must be between 2 and 100 characters");
        assert!(err.details.is_none());

        let long = "j".repeat(101);
        assert!(validate_new_user(&long, "jane@x.io", "supersecret1").is_err());
        let max = "j".repeat(100);
        assert!(validate_new_user(&max, "jane@x.io", "supersecret1").is_ok());
    }

    #[test]
    fn password_minimum_length() {
        let err = validate_new_user("Jane Roe", "jane@x.io", "short").unwrap_err();
        assert_eq!(err.message, "Password must be at least 8 characters long");
        assert!(validate_new_user("Jane Roe", "jane@x.io", "12345678").is_ok());
    }

    #[test]
    fn missing_fields_win_over_length_checks() {
        // A one-char name is too short, but the absent password is the
        // aggregated failure that must be reported first.
        let err = validate_new_user("J", "jane@x.io", "").unwrap_err();
        assert_eq!(err.message, "Name, email, and password are required");
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("jane@x.io", "").is_err());
        assert!(validate_login("", "supersecret1").is_err());
        assert!(validate_login("jane@x.io", "supersecret1").is_ok());
    }
}
