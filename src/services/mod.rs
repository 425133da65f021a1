pub mod booking;
pub mod confirmation;
pub mod field_check;
pub mod notify;
