//! Device Capabilities
//!
//! The browser features the app consumes (notifications, geolocation,
//! vibration, timers) behind small traits. [`WebPlatform`] talks to the
//! browser; tests substitute fakes.
//!
//! Every capability may be missing. Callers degrade instead of failing:
//! a missing capability is reported, never thrown.

pub mod battery;
pub mod files;
pub mod web;

pub use battery::{battery_percent, watch_battery};
pub use files::read_data_url;
pub use web::WebPlatform;

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;

use crate::model::GeoPoint;

/// Icon used for every local notification unless overridden
pub const DEFAULT_NOTIFICATION_ICON: &str = "/icons/icon-192x192.png";

/// Tag shared by the app's notifications, so a newer one replaces an older one
pub const NOTIFICATION_TAG: &str = "diary-reminder";

/// Errors raised by platform capabilities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// The browser does not offer the capability
    #[error("{0} is not supported")]
    Unsupported(&'static str),

    /// The user refused access
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// No answer in time
    #[error("Timed out")]
    Timeout,

    /// Any other failure reported by the browser
    #[error("{0}")]
    Failed(String),
}

/// Result type alias for platform operations
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Notification permission as the browser reports it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPermission {
    /// Not asked yet
    Default,
    Granted,
    Denied,
    /// No Notification API
    Unsupported,
}

/// A local notification to display
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub tag: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: DEFAULT_NOTIFICATION_ICON.to_string(),
            badge: DEFAULT_NOTIFICATION_ICON.to_string(),
            tag: NOTIFICATION_TAG.to_string(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Local notifications
#[async_trait(?Send)]
pub trait Notifier {
    /// Current permission, without prompting
    fn permission(&self) -> NotificationPermission;

    /// Prompt the user and return the resulting permission
    async fn request_permission(&self) -> NotificationPermission;

    /// Display a notification. Callers check permission first.
    fn show(&self, notice: &Notice) -> PlatformResult<()>;

    /// Whether work can outlive the page (a service worker is available)
    fn supports_background(&self) -> bool;
}

/// Single-shot position lookup
#[async_trait(?Send)]
pub trait Geolocator {
    async fn current_position(&self, timeout: Duration) -> PlatformResult<GeoPoint>;
}

/// Device vibration
pub trait Haptics {
    /// Vibrate once. Returns false when the device cannot vibrate.
    fn vibrate(&self, duration: Duration) -> bool;
}

/// Background work on the page's event loop
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Deferred callbacks
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);

    /// Run `task` without the caller waiting on it
    fn spawn(&self, task: LocalTask);
}

/// Everything the entry form and notification helper need from the device
pub trait Platform: Notifier + Geolocator + Haptics + Scheduler {}

impl<T: Notifier + Geolocator + Haptics + Scheduler> Platform for T {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_defaults() {
        let notice = Notice::new("Title", "Body");
        assert_eq!(notice.icon, DEFAULT_NOTIFICATION_ICON);
        assert_eq!(notice.badge, DEFAULT_NOTIFICATION_ICON);
        assert_eq!(notice.tag, NOTIFICATION_TAG);

        let notice = notice.icon("/icons/other.png");
        assert_eq!(notice.icon, "/icons/other.png");
        assert_eq!(notice.badge, DEFAULT_NOTIFICATION_ICON);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PlatformError::Unsupported("geolocation").to_string(),
            "geolocation is not supported"
        );
        assert_eq!(PlatformError::Timeout.to_string(), "Timed out");
    }
}
