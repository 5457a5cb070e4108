use std::time::{Duration, Instant};

use crate::domain::Notification;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    shown_at: Instant,
}

/// Transient notifications, newest last. Older toasts are dropped once more
/// than [`MAX_VISIBLE`] are queued.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            lifetime,
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        tracing::debug!("Toast {}: {}", id, notification.title);
        self.toasts.push(Toast {
            id,
            notification,
            shown_at: now,
        });

        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drops toasts older than the lifetime, returning how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        let lifetime = self.lifetime;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < lifetime);
        before - self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> NotificationCenter {
        NotificationCenter::new(Duration::from_secs(5))
    }

    #[test]
    fn test_push_and_dismiss() {
        let mut center = center();
        let now = Instant::now();
        let first = center.push(Notification::conversion_complete(), now);
        let second = center.push(Notification::file_selected("a.mp3"), now);
        assert_ne!(first, second);

        center.dismiss(first);
        assert_eq!(center.toasts().len(), 1);
        assert_eq!(center.toasts()[0].id, second);
    }

    #[test]
    fn test_expire_after_lifetime() {
        let mut center = center();
        let start = Instant::now();
        center.push(Notification::conversion_complete(), start);
        center.push(
            Notification::file_selected("b.mp3"),
            start + Duration::from_secs(3),
        );

        assert_eq!(center.expire(start + Duration::from_secs(4)), 0);
        assert_eq!(center.expire(start + Duration::from_secs(5)), 1);
        assert_eq!(center.toasts().len(), 1);
        assert_eq!(center.expire(start + Duration::from_secs(8)), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn test_keeps_newest_when_full() {
        let mut center = center();
        let now = Instant::now();
        for name in ["1.mp3", "2.mp3", "3.mp3", "4.mp3"] {
            center.push(Notification::file_selected(name), now);
        }

        let descriptions: Vec<_> = center
            .toasts()
            .iter()
            .map(|t| t.notification.description.as_str())
            .collect();
        assert_eq!(descriptions.len(), MAX_VISIBLE);
        assert!(descriptions[0].starts_with("2.mp3"));
        assert!(descriptions[2].starts_with("4.mp3"));
    }
}
