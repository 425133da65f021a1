use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::services::notify::{BookingEvent, BookingNotifier};

pub struct AppState {
    pub config: AppConfig,
    pub notifier: Box<dyn BookingNotifier>,
    pub events_tx: broadcast::Sender<BookingEvent>,
}
