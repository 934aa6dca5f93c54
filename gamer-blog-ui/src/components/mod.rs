//! UI Components
//!
//! Reusable Leptos components for the blog.

pub mod battery;
pub mod entry_card;
pub mod loading;
pub mod new_entry_form;
pub mod notification_button;
pub mod toast;

pub use battery::BatteryIndicator;
pub use entry_card::EntryCard;
pub use loading::{Loading, Splash};
pub use new_entry_form::NewEntryForm;
pub use notification_button::NotificationButton;
pub use toast::Toast;
