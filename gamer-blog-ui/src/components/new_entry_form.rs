//! New Entry Form Component
//!
//! Title, content, optional quote and photo. Submission is handled by
//! [`submit_entry`]; this component owns the field state.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::form::{submit_entry, EntryDraft, SubmitOutcome};
use crate::platform::{read_data_url, NotificationPermission, Notifier};
use crate::state::use_global_state;

/// Form for writing a new post
#[component]
pub fn NewEntryForm(
    /// Called once a post has been saved
    #[prop(into)]
    on_entry_added: Callback<()>,
) -> impl IntoView {
    let state = use_global_state();

    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (quote, set_quote) = create_signal(String::new());
    let (photo, set_photo) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    // Ask for notification permission up front, once
    {
        let state = state.clone();
        if state.platform.permission() == NotificationPermission::Default {
            spawn_local(async move {
                state.notifications().request_permission().await;
            });
        }
    }

    let photo_input = create_node_ref::<html::Input>();

    let on_photo_picked = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        spawn_local(async move {
            match read_data_url(&file).await {
                Ok(data_url) => set_photo.set(Some(data_url)),
                Err(e) => log::error!("Could not read photo: {}", e),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let draft = EntryDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
            photo: photo.get_untracked(),
            quote: Some(quote.get_untracked()),
        };
        if draft.validate().is_none() {
            return;
        }

        set_submitting.set(true);
        let state = state.clone();
        spawn_local(async move {
            match submit_entry(&draft, &state.store, &state.platform).await {
                Ok(SubmitOutcome::Saved(_)) => {
                    set_title.set(String::new());
                    set_content.set(String::new());
                    set_quote.set(String::new());
                    set_photo.set(None);
                    on_entry_added.call(());
                }
                Ok(SubmitOutcome::Skipped) => {}
                Err(e) => {
                    log::error!("Error saving entry: {}", e);
                    state.show_error("Error saving the post");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="bg-gray-800 rounded-lg shadow-lg p-6">
            <h2 class="text-xl font-bold text-white mb-4">"New Post"</h2>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-300 mb-2">"Title"</label>
                    <input
                        type="text"
                        required=true
                        placeholder="Post title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class="w-full px-4 py-2 text-gray-700 border border-gray-300 rounded-lg
                               focus:ring-2 focus:ring-purple-500 focus:border-transparent"
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-300 mb-2">"Content"</label>
                    <textarea
                        rows=4
                        required=true
                        placeholder="News from the world of video games and pop culture..."
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                        class="w-full px-4 py-2 text-gray-700 border border-gray-300 rounded-lg
                               focus:ring-2 focus:ring-purple-500 focus:border-transparent"
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-300 mb-2">"Quote (optional)"</label>
                    <input
                        type="text"
                        placeholder="A line worth remembering"
                        prop:value=move || quote.get()
                        on:input=move |ev| set_quote.set(event_target_value(&ev))
                        class="w-full px-4 py-2 text-gray-700 border border-gray-300 rounded-lg
                               focus:ring-2 focus:ring-purple-500 focus:border-transparent"
                    />
                </div>

                <div class="flex gap-2">
                    <button
                        type="button"
                        on:click=move |_| {
                            if let Some(input) = photo_input.get() {
                                input.click();
                            }
                        }
                        class="flex-1 px-4 py-2 bg-blue-100 text-blue-700 rounded-lg hover:bg-blue-200
                               transition flex items-center justify-center gap-2"
                    >
                        "📷 "
                        {move || if photo.get().is_some() { "Change photo" } else { "Add photo" }}
                    </button>
                    <input
                        node_ref=photo_input
                        type="file"
                        accept="image/*"
                        capture="environment"
                        on:change=on_photo_picked
                        class="hidden"
                    />
                </div>

                {move || photo.get().map(|src| view! {
                    <div class="relative">
                        <img src=src alt="Preview" class="w-full h-48 object-cover rounded-lg" />
                        <button
                            type="button"
                            on:click=move |_| set_photo.set(None)
                            class="absolute top-2 right-2 bg-red-500 text-white p-2 rounded-full hover:bg-red-600"
                            title="Remove photo"
                        >
                            "✕"
                        </button>
                    </div>
                })}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition
                           font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {move || if submitting.get() { "Saving..." } else { "Publish post" }}
                </button>
            </form>
        </div>
    }
}
