//! App Root Component
//!
//! Routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::Home;
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/*any" view=NotFound />
                </Routes>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <div class="text-6xl mb-4">"👾"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"This level does not exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Back to the blog"
            </A>
        </div>
    }
}
