use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::models::ConfirmationView;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingEvent {
    Confirmed {
        name: String,
        guests: String,
        formatted_date: String,
        time: String,
        acknowledgment: String,
    },
}

impl BookingEvent {
    pub fn confirmed(view: &ConfirmationView, acknowledgment: &str) -> Self {
        BookingEvent::Confirmed {
            name: view.name.clone(),
            guests: view.guests.clone(),
            formatted_date: view.formatted_date.clone(),
            time: view.time.clone(),
            acknowledgment: acknowledgment.to_string(),
        }
    }

    /// SSE event name.
    pub fn name(&self) -> &'static str {
        match self {
            BookingEvent::Confirmed { .. } => "booking_confirmed",
        }
    }
}

#[async_trait]
pub trait BookingNotifier: Send + Sync {
    async fn notify(&self, event: BookingEvent) -> anyhow::Result<()>;
}

/// Publishes events to broadcast subscribers after a fixed delay.
pub struct BroadcastNotifier {
    tx: broadcast::Sender<BookingEvent>,
    delay: Duration,
}

impl BroadcastNotifier {
    pub fn new(tx: broadcast::Sender<BookingEvent>, delay: Duration) -> Self {
        Self { tx, delay }
    }
}

#[async_trait]
impl BookingNotifier for BroadcastNotifier {
    async fn notify(&self, event: BookingEvent) -> anyhow::Result<()> {
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            // No subscribers is fine
            if tx.send(event).is_err() {
                tracing::debug!("no listeners for booking acknowledgment");
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ConfirmationView {
        ConfirmationView {
            name: "Raj".to_string(),
            email: "raj@example.com".to_string(),
            phone: "+91 9876543210".to_string(),
            guests: "2".to_string(),
            date: "2025-06-14".to_string(),
            formatted_date: "Saturday, June 14, 2025".to_string(),
            time: "19:00".to_string(),
            message: "None".to_string(),
        }
    }

    #[test]
    fn test_event_serializes_with_kind_tag() {
        let event = BookingEvent::confirmed(&view(), "Booked!");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "confirmed");
        assert_eq!(json["name"], "Raj");
        assert_eq!(json["formatted_date"], "Saturday, June 14, 2025");
        assert_eq!(json["acknowledgment"], "Booked!");
        assert_eq!(event.name(), "booking_confirmed");
    }

    #[tokio::test]
    async fn test_broadcast_notifier_delivers() {
        let (tx, mut rx) = broadcast::channel(4);
        let notifier = BroadcastNotifier::new(tx, Duration::ZERO);
        let event = BookingEvent::confirmed(&view(), "Booked!");

        notifier.notify(event.clone()).await.unwrap();

        let received = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(received, event);
    }

    #[tokio::test(start_paused = true)]
    async fn test_broadcast_notifier_waits_for_delay() {
        let delay = Duration::from_millis(500);
        let (tx, mut rx) = broadcast::channel(4);
        let notifier = BroadcastNotifier::new(tx, delay);
        let event = BookingEvent::confirmed(&view(), "Booked!");

        notifier.notify(event.clone()).await.unwrap();
        tokio::task::yield_now().await;

        tokio::time::advance(delay - Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));

        tokio::time::advance(Duration::from_millis(10)).await;
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        assert_eq!(rx.try_recv().unwrap(), event);
    }

    #[tokio::test]
    async fn test_broadcast_notifier_without_subscribers() {
        let (tx, rx) = broadcast::channel(4);
        drop(rx);
        let notifier = BroadcastNotifier::new(tx, Duration::ZERO);
        assert!(notifier
            .notify(BookingEvent::confirmed(&view(), "Booked!"))
            .await
            .is_ok());
    }
}
