//! Loading Component
//!
//! Spinner for the first fetch and the splash screen.

use leptos::*;

/// Centered spinner with a caption
#[component]
pub fn Loading(
    #[prop(default = "Loading posts...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-400 text-sm">{message}</p>
        </div>
    }
}

/// Full-screen splash shown while the app starts
#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-gray-900 text-white">
            <div class="text-6xl mb-4 animate-bounce">"🎮"</div>
            <h1 class="text-3xl font-bold tracking-wide">"Gamer Blog"</h1>
            <p class="text-gray-400 mt-2">"Video games and pop culture"</p>
            <div class="loading-spinner w-8 h-8 mt-8" />
        </div>
    }
}
