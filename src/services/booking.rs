use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{BookingField, BookingRequest, ConfirmationView, RawBookingForm};
use crate::services::notify::{BookingEvent, BookingNotifier};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(BookingField),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid phone number")]
    InvalidPhone,

    #[error("invalid date")]
    InvalidDate,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "missing_field",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::InvalidPhone => "invalid_phone",
            ValidationError::InvalidDate => "invalid_date",
        }
    }

    pub fn field(&self) -> BookingField {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidEmail => BookingField::Email,
            ValidationError::InvalidPhone => BookingField::Phone,
            ValidationError::InvalidDate => BookingField::Date,
        }
    }

    /// Message shown to the guest.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingField(field) => format!("Please fill in the {field} field."),
            ValidationError::InvalidEmail => "Please enter a valid email address.".to_string(),
            ValidationError::InvalidPhone => "Please enter a valid phone number.".to_string(),
            ValidationError::InvalidDate => "Please enter a valid date.".to_string(),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Runs the checks in fixed order: presence, email, phone, date. Returns the
/// parsed reservation date.
pub fn validate(request: &BookingRequest) -> Result<NaiveDate, ValidationError> {
    if let Some(field) = BookingField::REQUIRED
        .into_iter()
        .find(|field| request.value(*field).trim().is_empty())
    {
        return Err(ValidationError::MissingField(field));
    }

    if !is_valid_email(&request.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_phone(&request.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate)
}

pub fn submit(form: &RawBookingForm) -> Result<ConfirmationView, ValidationError> {
    let request = BookingRequest::from_form(form);
    let date = validate(&request)?;
    Ok(ConfirmationView::new(request, format_long_date(date)))
}

/// Like [`submit`], but also reports a successful booking to `notifier`.
/// A failing notifier is logged and does not affect the result.
pub async fn submit_and_notify(
    form: &RawBookingForm,
    notifier: Option<&dyn BookingNotifier>,
    acknowledgment: &str,
) -> Result<ConfirmationView, ValidationError> {
    let view = match submit(form) {
        Ok(view) => view,
        Err(e) => {
            tracing::info!(code = e.code(), field = %e.field(), "booking rejected");
            return Err(e);
        }
    };

    tracing::info!(
        guests = %view.guests,
        date = %view.date,
        time = %view.time,
        "booking confirmed"
    );

    if let Some(notifier) = notifier {
        let event = BookingEvent::confirmed(&view, acknowledgment);
        if let Err(e) = notifier.notify(event).await {
            tracing::warn!(error = %e, "failed to deliver booking acknowledgment");
        }
    }

    Ok(view)
}

/// e.g. "Saturday, June 14, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Earliest date the booking form offers, as used for the date input's `min`.
pub fn min_booking_date(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}
