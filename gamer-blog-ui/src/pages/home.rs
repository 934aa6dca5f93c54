//! Home Page
//!
//! Splash screen, then the post list with the new-post modal on top.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::{
    BatteryIndicator, EntryCard, Loading, NewEntryForm, NotificationButton, Splash,
};
use crate::platform::watch_battery;
use crate::shell::{ShellState, SPLASH_DURATION};
use crate::state::use_global_state;
use crate::store::EntryStore;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_global_state();
    let shell = create_rw_signal(ShellState::new());
    let store = store_value(state.store.clone());

    let reload = move || {
        let result = store.with_value(|s| s.list());
        shell.update(|s| s.apply_entries(result));
    };

    // Splash, then the first fetch. Leaving the page cancels the timer.
    let splash = Timeout::new(SPLASH_DURATION.as_millis() as u32, move || {
        shell.update(|s| s.finish_splash());
        reload();
    });
    on_cleanup(move || drop(splash));

    watch_battery(move |percent| shell.update(|s| s.set_battery(percent)));

    let battery = Signal::derive(move || shell.with(|s| s.battery));
    let open_form = move |_| shell.update(|s| s.open_form());

    view! {
        <Show when=move || !shell.with(|s| s.show_splash()) fallback=|| view! { <Splash /> }>
            <div class="min-h-screen bg-gray-900 text-white md:flex">
                // Sidebar (wide screens)
                <aside class="hidden md:flex md:flex-col md:w-64 bg-gray-800 border-r border-gray-700 p-6 space-y-6">
                    <div>
                        <h1 class="text-2xl font-bold">"🎮 Gamer Blog"</h1>
                        <p class="text-gray-400 text-sm mt-1">"Video games and pop culture"</p>
                    </div>
                    <NotificationButton />
                    <button
                        type="button"
                        on:click=open_form
                        class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                    >
                        "✏️ New post"
                    </button>
                    <BatteryIndicator level=battery />
                </aside>

                // Compact header (mobile)
                <header class="md:hidden sticky top-0 z-40 bg-gray-800 border-b border-gray-700 px-4 py-3 space-y-3">
                    <div class="flex items-center justify-between">
                        <h1 class="text-xl font-bold">"🎮 Gamer Blog"</h1>
                        <BatteryIndicator level=battery />
                    </div>
                    <div class="flex gap-2">
                        <div class="flex-1">
                            <NotificationButton />
                        </div>
                        <button
                            type="button"
                            on:click=open_form
                            class="flex-1 px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm font-medium transition-colors"
                        >
                            "✏️ New post"
                        </button>
                    </div>
                </header>

                <main class="flex-1 container mx-auto px-4 py-8">
                    {move || {
                        if shell.with(|s| s.is_loading()) {
                            view! { <Loading /> }.into_view()
                        } else if shell.with(|s| s.entries.is_empty()) {
                            view! {
                                <div class="flex flex-col items-center justify-center min-h-[50vh] text-center">
                                    <div class="text-6xl mb-4">"🕹️"</div>
                                    <h2 class="text-2xl font-bold mb-2">"No posts yet"</h2>
                                    <p class="text-gray-400">"Create your first post!"</p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-6">
                                    <For
                                        each=move || shell.with(|s| s.entries.clone())
                                        key=|entry| entry.id.clone()
                                        children=move |entry| view! {
                                            <EntryCard entry=entry on_delete=move |_| reload() />
                                        }
                                    />
                                </div>
                            }.into_view()
                        }
                    }}
                </main>

                // New post modal
                <Show when=move || shell.with(|s| s.modal_open)>
                    <div class="fixed inset-0 z-50 bg-black/70 flex items-center justify-center p-4">
                        <div class="w-full max-w-lg max-h-full overflow-y-auto space-y-3">
                            <NewEntryForm on_entry_added=move |_| {
                                shell.update(|s| s.entry_added());
                                reload();
                            } />
                            <button
                                type="button"
                                on:click=move |_| shell.update(|s| s.close_form())
                                class="w-full px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-white transition-colors"
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
