use email_address::EmailAddress;

use crate::shared::store::PatchField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Trimmed, non-blank text.
pub fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::new(field, "must not be blank"));
    }
    Ok(value.to_string())
}

/// Trimmed text; blank collapses to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn percentage(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if !(0..=100).contains(&value) {
        return Err(ValidationError::new(field, "must be between 0 and 100"));
    }
    Ok(value)
}

pub fn non_negative(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(field, "must not be negative"));
    }
    Ok(value)
}

pub fn email(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = required_text(field, value)?;
    if !EmailAddress::is_valid(&value) {
        return Err(ValidationError::new(field, "is not a valid email address"));
    }
    Ok(value)
}

/// Patch on a NOT NULL column: explicit null is rejected, values are checked.
pub fn patch_required<T, U>(
    field: &'static str,
    patch: PatchField<T>,
    check: impl FnOnce(T) -> Result<U, ValidationError>,
) -> Result<PatchField<U>, ValidationError> {
    match patch {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Err(ValidationError::new(field, "cannot be null")),
        PatchField::Value(v) => check(v).map(PatchField::Value),
    }
}

/// Patch on a nullable text column: blank values clear it like null.
pub fn patch_optional_text(patch: PatchField<String>) -> PatchField<String> {
    match patch {
        PatchField::Value(v) => optional_text(Some(v)).into(),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("title", "  Engineer ").unwrap(), "Engineer");
    }

    #[test]
    fn test_required_text_rejects_blank() {
        let err = required_text("title", "   ").unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text(Some("  ".to_string())), None);
        assert_eq!(optional_text(Some(" x ".to_string())).as_deref(), Some("x"));
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(percentage("proficiency", 0).is_ok());
        assert!(percentage("proficiency", 100).is_ok());
        assert!(percentage("proficiency", 101).is_err());
        assert!(percentage("proficiency", -1).is_err());
    }

    #[test]
    fn test_email_checks_format() {
        assert_eq!(email("email", " a@b.io ").unwrap(), "a@b.io");
        assert!(email("email", "not-an-email").is_err());
    }

    #[test]
    fn test_patch_required_rejects_null() {
        let result = patch_required("name", PatchField::<String>::Null, |v| {
            required_text("name", &v)
        });
        assert_eq!(result.unwrap_err().message, "cannot be null");
    }

    #[test]
    fn test_patch_required_unset_stays_unset() {
        let result =
            patch_required("name", PatchField::<String>::Unset, |v| required_text("name", &v));
        assert!(result.unwrap().is_unset());
    }

    #[test]
    fn test_patch_required_checks_value() {
        let result = patch_required("proficiency", PatchField::Value(150), |v| {
            percentage("proficiency", v)
        });
        assert!(result.is_err());

        let trimmed = patch_required("name", PatchField::Value(" Rust ".to_string()), |v| {
            required_text("name", &v)
        });
        assert_eq!(trimmed.unwrap(), PatchField::Value("Rust".to_string()));
    }

    #[test]
    fn test_patch_optional_text_blank_clears() {
        assert!(patch_optional_text(PatchField::Value("  ".to_string())).is_null());
        assert!(patch_optional_text(PatchField::Unset).is_unset());
    }
}
