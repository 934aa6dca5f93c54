//! Entry Card Component
//!
//! Renders one saved post with a delete button.

use chrono::DateTime;
use leptos::*;

use crate::model::{DiaryEntry, GeoPoint};
use crate::state::use_global_state;
use crate::store::{DeleteOutcome, EntryStore, StoreResult};

/// Card for a single post
#[component]
pub fn EntryCard(
    entry: DiaryEntry,
    /// Called after the delete went through to the store
    #[prop(into)]
    on_delete: Callback<()>,
) -> impl IntoView {
    let state = use_global_state();
    let id = entry.id.clone();

    // Outcome is already logged; the list reload reflects it
    let delete = move |_| {
        let _ = delete_entry(state.store.as_ref(), &id, || on_delete.call(()));
    };

    let DiaryEntry {
        title,
        content,
        date,
        photo,
        quote,
        location,
        ..
    } = entry;

    view! {
        <article class="bg-gray-800 rounded-lg shadow-lg overflow-hidden border border-gray-700 flex flex-col">
            {photo.map(|src| view! {
                <img src=src alt="Post photo" class="w-full h-48 object-cover" />
            })}

            <div class="p-4 flex-1 flex flex-col">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="text-lg font-bold text-white break-words">{title}</h3>
                    <button
                        type="button"
                        on:click=delete
                        class="text-gray-400 hover:text-red-500 transition-colors"
                        title="Delete post"
                    >
                        "🗑"
                    </button>
                </div>

                <p class="text-xs text-gray-400 mt-1">{format_entry_date(&date)}</p>

                <p class="text-gray-300 mt-3 whitespace-pre-wrap break-words">{content}</p>

                {quote.map(|q| view! {
                    <blockquote class="mt-3 border-l-4 border-purple-500 pl-3 italic text-gray-400">
                        {q}
                    </blockquote>
                })}

                {location.map(|point| view! {
                    <p class="mt-3 text-xs text-gray-500">"📍 " {format_location(&point)}</p>
                })}
            </div>
        </article>
    }
}

/// Delete `id`, then run `reload` whatever the store answered. Failures are
/// only logged.
pub fn delete_entry<S>(store: &S, id: &str, reload: impl FnOnce()) -> StoreResult<DeleteOutcome>
where
    S: EntryStore + ?Sized,
{
    let result = store.delete(id);
    match &result {
        Ok(DeleteOutcome::Deleted) => {}
        Ok(DeleteOutcome::NotFound) => log::warn!("Entry {} was already gone", id),
        Err(e) => log::error!("Error deleting entry {}: {}", id, e),
    }
    reload();
    result
}

/// `dd/mm/yyyy hh:mm` in UTC, or the raw value when it does not parse
pub fn format_entry_date(date: &str) -> String {
    DateTime::parse_from_rfc3339(date)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub fn format_location(point: &GeoPoint) -> String {
    format!("{:.4}, {:.4}", point.latitude, point.longitude)
}
