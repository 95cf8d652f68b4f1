//! Post creation rules.

use super::ValidationError;
use crate::domain::Category;

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 200;
pub const CONTENT_MIN_CHARS: usize = 10;

/// Validate a post-creation request and resolve its category.
/// Required fields aggregate into a single message; the remaining rules
/// short-circuit on the first failure.
pub fn validate_new_post(
    title: &str,
    content: &str,
    category: &str,
) -> Result<Category, ValidationError> {
    if title.is_empty() || content.is_empty() || category.is_empty() {
        return Err(ValidationError::new(
            "Title, content, and category are required",
        ));
    }

    let title_len = title.chars().count();
    if title_len < TITLE_MIN_CHARS || title_len > TITLE_MAX_CHARS {
        return Err(ValidationError::new(
            "Title must be between 5 and 200 characters",
        ));
    }

    if content.chars().count() < CONTENT_MIN_CHARS {
        return Err(ValidationError::new(
            "Content must be at least 10 characters long",
        ));
    }

    Category::parse(category).ok_or_else(|| {
        ValidationError::new(format!(
            "Invalid category. Must be one of: {}",
            Category::ALL.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_share_one_message() {
        let err = validate_new_post("", "1234567890", "technology").unwrap_err();
        assert_eq!(err.message, "Title, content, and category are required");
        assert!(err.details.is_none());

        let err = validate_new_post("Five Char", "1234567890", "").unwrap_err();
        assert_eq!(err.message, "Title, content, and category are required");
    }

    #[test]
    fn title_bounds() {
        let err = validate_new_post("Four", "1234567890", "technology").unwrap_err();
        assert_eq!(err.message, "Title must be between 5 and 200 characters");

        let long = "t".repeat(201);
        assert!(validate_new_post(&long, "1234567890", "technology").is_err());
        assert!(validate_new_post("Five Char", "1234567890", "technology").is_ok());
    }

    #[test]
    fn content_minimum() {
        let err = validate_new_post("Five Char", "123456789", "technology").unwrap_err();
        assert_eq!(err.message, "Content must be at least 10 characters long");
    }

    #[test]
    fn unknown_category_always_fails() {
        let err = validate_new_post("Five Char", "1234567890", "politics").unwrap_err();
        assert_eq!(
            err.message,
            "Invalid category. Must be one of: technology, lifestyle, business, sports"
        );
    }

    #[test]
    fn every_listed_category_is_accepted() {
        for name in Category::ALL {
            let category = validate_new_post("Five Char", "1234567890", name).unwrap();
            assert_eq!(category.as_str(), name);
        }
    }
}
