//! Write-path validation of candidate variable names

use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// One admissible segment: an alphanumeric or slash start, optionally
/// followed by up to 62 inner characters and an alphanumeric, underscore or
/// period tail. A valid name is a concatenation of such segments with no
/// leftover characters.
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9A-Za-z/](?:[_.A-Za-z0-9-]{0,62}[_.A-Za-z0-9])?").unwrap()
});

/// Check whether a name is acceptable for storage.
///
/// Rules are applied in order and the first failure is reported:
/// 1. at most 256 characters;
/// 2. stripping the first `/` must leave something (rejects `""` and `"/"`);
/// 3. the whole name must be covered by admissible segments; any characters
///    left over are echoed verbatim in the error.
///
/// Slashes are allowed wherever a segment starts, including mid-string; the
/// remote service uses them in hierarchical variable names.
pub fn validate_variable_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > 256 {
        return Err(ValidationError::TooLong);
    }

    if name.replacen('/', "", 1).is_empty() {
        return Err(ValidationError::NoContent);
    }

    let leftover = SEGMENT.replace_all(name, "");
    if !leftover.is_empty() {
        return Err(ValidationError::DisallowedCharacters(leftover.into_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(validate_variable_name(""), Err(ValidationError::NoContent));
    }

    #[test]
    fn test_lone_slash_rejected() {
        assert_eq!(validate_variable_name("/"), Err(ValidationError::NoContent));
    }

    #[test]
    fn test_length_limit() {
        assert_eq!(validate_variable_name(&"a".repeat(256)), Ok(()));
        assert_eq!(
            validate_variable_name(&"a".repeat(257)),
            Err(ValidationError::TooLong)
        );
    }

    #[test]
    fn test_disallowed_characters_reported() {
        assert_eq!(
            validate_variable_name("a$b"),
            Err(ValidationError::DisallowedCharacters("$".to_string()))
        );
        let err = validate_variable_name("a$b!").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Variable name contains disallowed characters - $!"
        );
    }

    #[test]
    fn test_valid_names() {
        assert!(validate_variable_name("valid_name-1.2").is_ok());
        assert!(validate_variable_name("FOO_BAR").is_ok());
        assert!(validate_variable_name("nested/path/name").is_ok());
    }

    #[test]
    fn test_length_checked_before_charset() {
        // over-long and containing junk; the length rule wins
        let name = format!("{}$", "a".repeat(257));
        assert_eq!(validate_variable_name(&name), Err(ValidationError::TooLong));
    }
}
