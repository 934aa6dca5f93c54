//! New-entry submission.
//!
//! [`submit_entry`] runs the side effects of the form's submit button in a
//! fixed order: vibrate, locate, save, notify. Only the save can fail the
//! submission; every other step degrades silently. The notification is
//! handed to the platform's task queue, so the submit is done once the
//! entry is stored.

use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

use crate::model::{now_timestamp, DiaryEntry, NewEntry};
use crate::notifications::NotificationHelper;
use crate::platform::Platform;
use crate::store::{EntryStore, StoreError};

/// Vibration played when a post is submitted
pub const SUBMIT_VIBRATION: Duration = Duration::from_millis(300);

/// Upper bound for the single location attempt
pub const LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// What the user typed or picked
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    /// Data URL of the picked photo
    pub photo: Option<String>,
    pub quote: Option<String>,
}

/// Trimmed, non-empty form fields
#[derive(Clone, Debug, PartialEq)]
pub struct ValidDraft {
    pub title: String,
    pub content: String,
    pub photo: Option<String>,
    pub quote: Option<String>,
}

impl EntryDraft {
    /// `None` when the trimmed title or content is empty
    pub fn validate(&self) -> Option<ValidDraft> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return None;
        }

        Some(ValidDraft {
            title: title.to_string(),
            content: content.to_string(),
            photo: self.photo.clone().filter(|p| !p.is_empty()),
            quote: self
                .quote
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string),
        })
    }
}

/// Result of a submit that did not fail
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Invalid draft; nothing happened
    Skipped,
    Saved(DiaryEntry),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Could not save the post: {0}")]
    Save(#[from] StoreError),
}

/// Submit a draft. Invalid drafts are a no-op.
pub async fn submit_entry<S, P>(
    draft: &EntryDraft,
    store: &S,
    platform: &Rc<P>,
) -> Result<SubmitOutcome, SubmitError>
where
    S: EntryStore + ?Sized,
    P: Platform + 'static,
{
    let Some(valid) = draft.validate() else {
        return Ok(SubmitOutcome::Skipped);
    };

    platform.vibrate(SUBMIT_VIBRATION);

    let location = match platform.current_position(LOCATION_TIMEOUT).await {
        Ok(point) => Some(point),
        Err(e) => {
            log::warn!("Could not get location, saving without it: {}", e);
            None
        }
    };

    let entry = store.save(NewEntry {
        title: valid.title,
        content: valid.content,
        date: now_timestamp(),
        photo: valid.photo,
        quote: valid.quote,
        location,
    })?;

    // The prompt may stay open indefinitely; the submit does not wait on it
    NotificationHelper::new(Rc::clone(platform)).announce_in_background(
        "📢 Post created",
        format!("Your post \"{}\" was saved.", entry.title),
    );

    Ok(SubmitOutcome::Saved(entry))
}
