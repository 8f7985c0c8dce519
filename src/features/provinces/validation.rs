//! Pure validation rules applied before writes and name-based lookups.

use crate::core::error::{AppError, Result};
use crate::features::provinces::models::Province;

/// Minimum accepted length for province and country names, in characters.
pub const MIN_NAME_LENGTH: usize = 3;

/// Rejects an absent name or one shorter than [`MIN_NAME_LENGTH`].
/// The raw string is measured; no trimming happens first.
pub fn validate_name(name: Option<&str>) -> Result<()> {
    match name {
        Some(n) if n.chars().count() >= MIN_NAME_LENGTH => Ok(()),
        _ => Err(AppError::Validation(format!(
            "name is required and must be at least {} characters long",
            MIN_NAME_LENGTH
        ))),
    }
}

/// Applies the name rule to a province entity. The country reference is
/// deliberately not checked here; the store enforces it on write.
pub fn validate_province(province: &Province) -> Result<()> {
    if province.name.chars().count() < MIN_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "a province name of at least {} characters is required",
            MIN_NAME_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::provinces::models::{Country, Province};

    fn province_named(name: &str) -> Province {
        Province {
            id: None,
            name: name.to_string(),
            country: Country {
                id: Some(1),
                name: "Argentina".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_name_accepts_three_or_more_characters() {
        assert!(validate_name(Some("Rio")).is_ok());
        assert!(validate_name(Some("Buenos Aires")).is_ok());
    }

    #[test]
    fn test_validate_name_rejects_short_names() {
        assert!(validate_name(Some("ab")).is_err());
        assert!(validate_name(Some("x")).is_err());
        assert!(validate_name(Some("")).is_err());
    }

    #[test]
    fn test_validate_name_rejects_absent_name() {
        assert!(validate_name(None).is_err());
    }

    #[test]
    fn test_validate_name_counts_characters_not_bytes() {
        // Two characters, four bytes in UTF-8
        assert!(validate_name(Some("ñú")).is_err());
        assert!(validate_name(Some("ñús")).is_ok());
    }

    #[test]
    fn test_validate_province_boundary() {
        assert!(validate_province(&province_named("ab")).is_err());
        assert!(validate_province(&province_named("")).is_err());
        assert!(validate_province(&province_named("abc")).is_ok());
        assert!(validate_province(&province_named("Cordoba")).is_ok());
    }
}
