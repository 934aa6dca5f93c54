//! Notification Helper
//!
//! Permission handling and local notifications on top of [`Notifier`].
//! Sending never prompts: only [`NotificationHelper::request_permission`]
//! asks the user.

use std::rc::Rc;
use std::time::Duration;

use crate::platform::{Notice, NotificationPermission, Notifier, Scheduler};

/// Delay before the reminder scheduled by `schedule_daily_reminder` fires
pub const REMINDER_DELAY: Duration = Duration::from_secs(5);

pub const REMINDER_TITLE: &str = "📝 Time to write a post";
pub const REMINDER_BODY: &str = "How about writing a new post today?";

/// Answer of a permission request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    Denied,
    Unsupported,
}

pub struct NotificationHelper<P> {
    platform: Rc<P>,
}

impl<P> Clone for NotificationHelper<P> {
    fn clone(&self) -> Self {
        Self {
            platform: Rc::clone(&self.platform),
        }
    }
}

impl<P: Notifier + Scheduler + 'static> NotificationHelper<P> {
    pub fn new(platform: Rc<P>) -> Self {
        Self { platform }
    }

    /// Ask for permission unless the user already answered
    pub async fn request_permission(&self) -> PermissionOutcome {
        let current = match self.platform.permission() {
            NotificationPermission::Default => self.platform.request_permission().await,
            answered => answered,
        };

        match current {
            NotificationPermission::Granted => PermissionOutcome::Granted,
            NotificationPermission::Unsupported => {
                log::info!("This browser does not support notifications");
                PermissionOutcome::Unsupported
            }
            NotificationPermission::Denied | NotificationPermission::Default => {
                PermissionOutcome::Denied
            }
        }
    }

    /// Show a notification if permission is already granted, otherwise do
    /// nothing. Returns whether one was shown.
    pub fn send(&self, title: &str, body: &str, icon: Option<&str>) -> bool {
        send_with(self.platform.as_ref(), title, body, icon)
    }

    /// Like [`send`](Self::send), but prompts first when the user has not
    /// answered yet
    pub async fn announce(&self, title: &str, body: &str) -> bool {
        if self.platform.permission() == NotificationPermission::Default {
            self.platform.request_permission().await;
        }
        self.send(title, body, None)
    }

    /// [`announce`](Self::announce) on the platform's task queue. Returns
    /// at once, even while a permission prompt is open.
    pub fn announce_in_background(&self, title: impl Into<String>, body: impl Into<String>) {
        let helper = self.clone();
        let (title, body) = (title.into(), body.into());
        self.platform.spawn(Box::pin(async move {
            helper.announce(&title, &body).await;
        }));
    }

    /// Fire one reminder after [`REMINDER_DELAY`]. Needs service worker and
    /// notification support; returns whether the reminder was scheduled.
    ///
    /// Each call schedules exactly one notification. Nothing recurs and
    /// nothing survives a reload.
    pub fn schedule_daily_reminder(&self) -> bool {
        if !self.platform.supports_background()
            || self.platform.permission() == NotificationPermission::Unsupported
        {
            return false;
        }

        let platform = Rc::clone(&self.platform);
        self.platform.schedule(
            REMINDER_DELAY,
            Box::new(move || {
                send_with(platform.as_ref(), REMINDER_TITLE, REMINDER_BODY, None);
            }),
        );
        true
    }
}

fn send_with<P: Notifier + ?Sized>(platform: &P, title: &str, body: &str, icon: Option<&str>) -> bool {
    if platform.permission() != NotificationPermission::Granted {
        return false;
    }

    let mut notice = Notice::new(title, body);
    if let Some(icon) = icon {
        notice = notice.icon(icon);
    }

    match platform.show(&notice) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Could not show notification: {}", e);
            false
        }
    }
}
