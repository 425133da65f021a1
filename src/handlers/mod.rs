pub mod booking;
pub mod events;
pub mod health;
pub mod page;
