use crate::notifications::Notification;
use std::time::Instant;

pub struct NotificationHandler {
    notifications: Vec<Notification>,
}

impl NotificationHandler {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }

    pub fn show_info(&mut self, title: &str, message: &str) {
        self.notifications.push(Notification {
            title: title.to_string(),
            message: message.to_string(),
            created_at: Instant::now(),
        });
    }

    pub(crate) fn get_all_notifications(&self) -> &Vec<Notification> {
        &self.notifications
    }

    pub fn cleanup_old_notifications(&mut self, max_age_secs: f32) {
        let now = Instant::now();
        self.notifications
            .retain(|n| now.duration_since(n.created_at).as_secs_f32() < max_age_secs);
    }
}

impl Default for NotificationHandler {
    fn default() -> Self {
        Self::new()
    }
}
