//! Transient user-facing status messages.
//!
//! At most one notification is shown at a time. Each notification expires after
//! [`DISPLAY_DURATION`]; a newer notification replaces the current one immediately, and the
//! pending expiry of the replaced notification no longer has any effect.

use std::{cell::RefCell, rc::Rc, time::Duration};

use log::debug;
use strum::{AsRefStr, Display};

pub const DISPLAY_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NotificationID(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
pub enum Severity {
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "error")]
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationID,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Notifications {
    current: Option<Notification>,
    last_id: NotificationID,
}

impl Notifications {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(
        &mut self,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationID {
        self.last_id = NotificationID(self.last_id.0 + 1);
        self.current = Some(Notification {
            id: self.last_id,
            severity,
            title: title.into(),
            message: message.into(),
        });
        self.last_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationID {
        self.notify(Severity::Success, "Success", message)
    }

    pub fn error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationID {
        self.notify(Severity::Error, title, message)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Clears the notification if it is still the current one.
    pub fn expire(&mut self, id: NotificationID) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

/// Shared handle to the notifications of a page.
///
/// Every notification raised through the handle is expired after [`DISPLAY_DURATION`].
#[derive(Debug, Default, Clone)]
pub struct Notifier(Rc<RefCell<Notifications>>);

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationID {
        let id = self.0.borrow_mut().success(message);
        self.schedule_expiry(id);
        id
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationID {
        let id = self.0.borrow_mut().error(title, message);
        self.schedule_expiry(id);
        id
    }

    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.0.borrow().current().cloned()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.0.borrow().is_visible()
    }

    pub fn dismiss(&self) {
        self.0.borrow_mut().dismiss();
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_expiry(&self, id: NotificationID) {
        use gloo_timers::future::sleep;

        let notifications = Rc::clone(&self.0);
        wasm_bindgen_futures::spawn_local(async move {
            sleep(DISPLAY_DURATION).await;
            if !notifications.borrow_mut().expire(id) {
                debug!("notification {id:?} already replaced");
            }
        });
    }

    // Timers need the browser event loop.
    #[cfg(not(target_arch = "wasm32"))]
    #[allow(clippy::unused_self)]
    fn schedule_expiry(&self, id: NotificationID) {
        debug!("expiry of notification {id:?} not scheduled");
    }
}
