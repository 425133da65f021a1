use serde::{Deserialize, Serialize};

use crate::models::BookingField;
use crate::services::booking::{is_valid_email, is_valid_phone};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

/// Input type of a single form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

impl FieldKind {
    pub fn for_field(field: BookingField) -> Self {
        match field {
            BookingField::Email => FieldKind::Email,
            BookingField::Phone => FieldKind::Tel,
            _ => FieldKind::Text,
        }
    }
}

/// Checks one control as the guest leaves it. The value is trimmed first.
pub fn check_field(kind: FieldKind, value: &str) -> Result<(), &'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Err(REQUIRED_MESSAGE);
    }

    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(EMAIL_MESSAGE),
        FieldKind::Tel if !is_valid_phone(value) => Err(PHONE_MESSAGE),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_required() {
        assert_eq!(check_field(FieldKind::Text, "   "), Err(REQUIRED_MESSAGE));
        assert_eq!(check_field(FieldKind::Email, ""), Err(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_email_trimmed_before_check() {
        assert_eq!(check_field(FieldKind::Email, " raj@example.com "), Ok(()));
        assert_eq!(check_field(FieldKind::Email, "raj@example"), Err(EMAIL_MESSAGE));
    }

    #[test]
    fn test_tel() {
        assert_eq!(check_field(FieldKind::Tel, "+91 9876543210"), Ok(()));
        assert_eq!(check_field(FieldKind::Tel, "12345"), Err(PHONE_MESSAGE));
    }

    #[test]
    fn test_text_accepts_anything_non_blank() {
        assert_eq!(check_field(FieldKind::Text, "not-an-email"), Ok(()));
    }

    #[test]
    fn test_kind_for_field() {
        assert_eq!(FieldKind::for_field(BookingField::Email), FieldKind::Email);
        assert_eq!(FieldKind::for_field(BookingField::Phone), FieldKind::Tel);
        assert_eq!(FieldKind::for_field(BookingField::Guests), FieldKind::Text);
    }
}
