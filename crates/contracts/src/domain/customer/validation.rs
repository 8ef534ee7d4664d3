//! Field-level validation for the customer form.
//!
//! The rules are the backend's acceptance criteria: a well-formed draft is
//! the precondition for issuing a create or update request at all.

use thiserror::Error;

use crate::domain::customer::aggregate::CustomerDraft;

/// Minimum accepted length of the customer name.
pub const NAME_MIN_LEN: usize = 8;

/// Exact number of digits in a national ID (CPF).
pub const NATIONAL_ID_LEN: usize = 11;

/// Form fields of the customer draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Identifier,
    Name,
    Email,
    NationalId,
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field is required")]
    Required,

    #[error("must be at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("must be a valid e-mail address")]
    InvalidEmail,

    #[error("must be exactly {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("must contain only digits")]
    NonNumeric,
}

/// Validity of one form field as reported to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// The user has not edited the field yet; no messages are shown.
    #[default]
    Untouched,
    Valid,
    Invalid(Vec<ValidationError>),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    /// Rejection reasons, empty unless the field is invalid.
    pub fn reasons(&self) -> &[ValidationError] {
        match self {
            FieldStatus::Invalid(reasons) => reasons,
            _ => &[],
        }
    }
}

pub fn check_name(value: &str) -> Result<(), Vec<ValidationError>> {
    if value.is_empty() {
        return Err(vec![ValidationError::Required]);
    }
    let actual = value.chars().count();
    if actual < NAME_MIN_LEN {
        return Err(vec![ValidationError::TooShort {
            min: NAME_MIN_LEN,
            actual,
        }]);
    }
    Ok(())
}

pub fn check_email(value: &str) -> Result<(), Vec<ValidationError>> {
    if value.is_empty() {
        return Err(vec![ValidationError::Required]);
    }
    if !is_email_shaped(value) {
        return Err(vec![ValidationError::InvalidEmail]);
    }
    Ok(())
}

pub fn check_national_id(value: &str) -> Result<(), Vec<ValidationError>> {
    if value.is_empty() {
        return Err(vec![ValidationError::Required]);
    }
    let mut reasons = Vec::new();
    let actual = value.chars().count();
    if actual != NATIONAL_ID_LEN {
        reasons.push(ValidationError::WrongLength {
            expected: NATIONAL_ID_LEN,
            actual,
        });
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        reasons.push(ValidationError::NonNumeric);
    }
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(reasons)
    }
}

/// Check a single field of the draft.
pub fn check_field(draft: &CustomerDraft, field: Field) -> Result<(), Vec<ValidationError>> {
    match field {
        Field::Identifier => match draft.id {
            Some(_) => Ok(()),
            None => Err(vec![ValidationError::Required]),
        },
        Field::Name => check_name(&draft.name),
        Field::Email => check_email(&draft.email),
        Field::NationalId => check_national_id(&draft.national_id),
    }
}

/// Check the given fields of the draft; `Ok` means the draft may be
/// submitted against those fields.
pub fn validate_fields(
    draft: &CustomerDraft,
    fields: &[Field],
) -> Result<(), Vec<(Field, ValidationError)>> {
    let mut failures = Vec::new();
    for &field in fields {
        if let Err(reasons) = check_field(draft, field) {
            failures.extend(reasons.into_iter().map(|reason| (field, reason)));
        }
    }
    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

// An e-mail shape: one '@', non-empty local part, and a dotted domain with
// non-empty labels. Full RFC compliance is the backend's problem.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CustomerDraft {
        CustomerDraft {
            id: None,
            name: "Ana Souza".into(),
            email: "a@x.com".into(),
            national_id: "12345678901".into(),
        }
    }

    #[test]
    fn test_short_name_is_rejected() {
        // "Short" has 5 characters, below the 8-character minimum.
        let err = check_name("Short").unwrap_err();
        assert_eq!(err, vec![ValidationError::TooShort { min: 8, actual: 5 }]);
    }

    #[test]
    fn test_empty_name_is_required() {
        assert_eq!(check_name("").unwrap_err(), vec![ValidationError::Required]);
    }

    #[test]
    fn test_eight_character_name_is_accepted() {
        assert!(check_name("Ana Sous").is_ok());
        assert!(check_name("Ana Souza").is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(check_email("a@x.com").is_ok());
        assert!(check_email("ana.souza@mail.example.br").is_ok());
        assert_eq!(
            check_email("").unwrap_err(),
            vec![ValidationError::Required]
        );
        for bad in ["ana", "a@x", "@x.com", "a@.com", "a@x.", "a b@x.com", "a@x@y.com"] {
            assert_eq!(
                check_email(bad).unwrap_err(),
                vec![ValidationError::InvalidEmail],
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_national_id_length_and_digits() {
        assert!(check_national_id("12345678901").is_ok());
        assert_eq!(
            check_national_id("123").unwrap_err(),
            vec![ValidationError::WrongLength {
                expected: 11,
                actual: 3
            }]
        );
        assert_eq!(
            check_national_id("1234567890a").unwrap_err(),
            vec![ValidationError::NonNumeric]
        );
        assert_eq!(
            check_national_id("").unwrap_err(),
            vec![ValidationError::Required]
        );
    }

    #[test]
    fn test_valid_create_draft_passes() {
        assert!(validate_fields(&valid_draft(), CustomerDraft::CREATE_FIELDS).is_ok());
    }

    #[test]
    fn test_update_requires_identifier() {
        let draft = valid_draft();
        let failures = validate_fields(&draft, CustomerDraft::UPDATE_FIELDS).unwrap_err();
        assert_eq!(
            failures,
            vec![(Field::Identifier, ValidationError::Required)]
        );

        let mut with_id = draft;
        with_id.id = Some(7);
        assert!(validate_fields(&with_id, CustomerDraft::UPDATE_FIELDS).is_ok());
    }

    #[test]
    fn test_failures_accumulate_across_fields() {
        let draft = CustomerDraft {
            id: None,
            name: "Short".into(),
            email: "ana".into(),
            national_id: "12".into(),
        };
        let failures = validate_fields(&draft, CustomerDraft::CREATE_FIELDS).unwrap_err();
        assert_eq!(failures.len(), 3);
        assert!(failures.iter().any(|(field, _)| *field == Field::Name));
        assert!(failures.iter().any(|(field, _)| *field == Field::Email));
        assert!(failures.iter().any(|(field, _)| *field == Field::NationalId));
    }

    #[test]
    fn test_field_status_reasons() {
        let status = FieldStatus::Invalid(vec![ValidationError::Required]);
        assert!(!status.is_valid());
        assert_eq!(status.reasons(), &[ValidationError::Required]);
        assert!(FieldStatus::Valid.reasons().is_empty());
        assert_eq!(FieldStatus::default(), FieldStatus::Untouched);
    }
}
