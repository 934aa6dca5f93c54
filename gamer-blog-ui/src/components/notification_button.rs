//! Notification Button Component
//!
//! Asks for notification permission and, once granted, schedules the
//! writing reminder.

use leptos::*;

use crate::notifications::PermissionOutcome;
use crate::platform::{NotificationPermission, Notifier};
use crate::state::use_global_state;

#[component]
pub fn NotificationButton() -> impl IntoView {
    let state = use_global_state();
    let (permission, set_permission) = create_signal(state.platform.permission());

    let on_click = move |_| {
        let state = state.clone();
        spawn_local(async move {
            let helper = state.notifications();
            match helper.request_permission().await {
                PermissionOutcome::Granted => {
                    set_permission.set(NotificationPermission::Granted);
                    if helper.schedule_daily_reminder() {
                        state.show_success("Reminder scheduled");
                    }
                }
                PermissionOutcome::Denied => {
                    set_permission.set(state.platform.permission());
                }
                PermissionOutcome::Unsupported => {
                    set_permission.set(NotificationPermission::Unsupported);
                    state.show_error("This browser does not support notifications");
                }
            }
        });
    };

    view! {
        <button
            type="button"
            on:click=on_click
            disabled=move || permission.get() == NotificationPermission::Unsupported
            class=move || format!(
                "w-full px-4 py-2 rounded-lg text-sm font-medium transition-colors \
                 disabled:opacity-50 disabled:cursor-not-allowed {}",
                button_class(permission.get())
            )
        >
            {move || button_label(permission.get())}
        </button>
    }
}

pub fn button_label(permission: NotificationPermission) -> &'static str {
    match permission {
        NotificationPermission::Granted => "🔔 Notifications on",
        NotificationPermission::Denied => "🔕 Notifications blocked",
        NotificationPermission::Default => "🔔 Enable notifications",
        NotificationPermission::Unsupported => "Notifications unavailable",
    }
}

fn button_class(permission: NotificationPermission) -> &'static str {
    match permission {
        NotificationPermission::Granted => "bg-green-700 hover:bg-green-600 text-white",
        NotificationPermission::Denied => "bg-gray-700 text-gray-300",
        _ => "bg-purple-600 hover:bg-purple-700 text-white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_label() {
        assert!(button_label(NotificationPermission::Default).contains("Enable notifications"));
        assert!(button_label(NotificationPermission::Granted).contains("Notifications on"));
        assert!(button_label(NotificationPermission::Denied).contains("Notifications blocked"));
    }
}
