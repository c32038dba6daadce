use roamdb_core::{
    gateways::notify::{NotificationEvent, NotificationGateway},
    repositories::NotificationRepo,
};
use roamdb_entities::{id::Id, notification::Notification, time::Timestamp};

use crate::user_communication;

/// Stores one notification record per event through the underlying
/// repository.
///
/// Delivery is fire-and-forget: a failed store is logged and never
/// reaches the mutation that triggered the event.
pub struct Notify<R> {
    repo: R,
}

impl<R> Notify<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: NotificationRepo> NotificationGateway for Notify<R> {
    fn notify(&self, event: NotificationEvent) {
        let notification = Notification {
            id: Id::new(),
            user_id: event.recipient().clone(),
            message: user_communication::message(&event),
            read: false,
            created_at: Timestamp::now(),
        };
        log::debug!(
            "Notifying user {}: {}",
            notification.user_id,
            notification.message
        );
        if let Err(err) = self.repo.create_notification(notification) {
            log::warn!("Failed to store notification: {err}");
        }
    }
}
