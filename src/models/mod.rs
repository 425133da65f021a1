pub mod booking;

pub use booking::{
    form_from_json, BookingField, BookingRequest, ConfirmationView, RawBookingForm, UnsupportedValue,
    NO_MESSAGE,
};
