use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Placeholder stored when the optional message is absent or empty.
pub const NO_MESSAGE: &str = "None";

/// Raw `field name -> value` mapping as captured from the booking form.
pub type RawBookingForm = HashMap<String, String>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Guests,
    Date,
    Time,
    Message,
}

impl BookingField {
    /// Required fields, in the order they are checked.
    pub const REQUIRED: [BookingField; 6] = [
        BookingField::Name,
        BookingField::Email,
        BookingField::Phone,
        BookingField::Guests,
        BookingField::Date,
        BookingField::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Email => "email",
            BookingField::Phone => "phone",
            BookingField::Guests => "guests",
            BookingField::Date => "date",
            BookingField::Time => "time",
            BookingField::Message => "message",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(BookingField::Name),
            "email" => Some(BookingField::Email),
            "phone" => Some(BookingField::Phone),
            "guests" => Some(BookingField::Guests),
            "date" => Some(BookingField::Date),
            "time" => Some(BookingField::Time),
            "message" => Some(BookingField::Message),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reservation as entered. Values are kept verbatim; only `message` is
/// normalized (absent or empty becomes [`NO_MESSAGE`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl BookingRequest {
    pub fn from_form(form: &RawBookingForm) -> Self {
        let get = |field: BookingField| form.get(field.as_str()).cloned().unwrap_or_default();

        let message = form
            .get(BookingField::Message.as_str())
            .filter(|m| !m.is_empty())
            .cloned()
            .unwrap_or_else(|| NO_MESSAGE.to_string());

        Self {
            name: get(BookingField::Name),
            email: get(BookingField::Email),
            phone: get(BookingField::Phone),
            guests: get(BookingField::Guests),
            date: get(BookingField::Date),
            time: get(BookingField::Time),
            message,
        }
    }

    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::Guests => &self.guests,
            BookingField::Date => &self.date,
            BookingField::Time => &self.time,
            BookingField::Message => &self.message,
        }
    }
}

/// Display-ready result of an accepted booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmationView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub date: String,
    pub formatted_date: String,
    pub time: String,
    pub message: String,
}

impl ConfirmationView {
    pub fn new(request: BookingRequest, formatted_date: String) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            guests: request.guests,
            date: request.date,
            formatted_date,
            time: request.time,
            message: request.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field {0} must be a string or a number")]
pub struct UnsupportedValue(pub String);

/// Flattens a JSON object into a [`RawBookingForm`]. Numbers are stringified,
/// `null` is treated as absent; booleans, arrays and objects are rejected.
pub fn form_from_json(
    object: HashMap<String, serde_json::Value>,
) -> Result<RawBookingForm, UnsupportedValue> {
    let mut form = RawBookingForm::with_capacity(object.len());
    for (key, value) in object {
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => {
                form.insert(key, s);
            }
            serde_json::Value::Number(n) => {
                form.insert(key, n.to_string());
            }
            _ => return Err(UnsupportedValue(key)),
        }
    }
    Ok(form)
}
