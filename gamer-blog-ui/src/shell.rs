//! Home shell state.
//!
//! `Splash -> Loading -> Ready`, with the new-post modal open or closed on
//! top of any phase after the splash. Reloads after the first load keep the
//! list on screen (no spinner).

use std::time::Duration;

use crate::model::DiaryEntry;
use crate::store::StoreResult;

/// How long the splash screen stays up
pub const SPLASH_DURATION: Duration = Duration::from_millis(2500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellPhase {
    Splash,
    /// First fetch in flight
    Loading,
    Ready,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShellState {
    pub phase: ShellPhase,
    pub entries: Vec<DiaryEntry>,
    pub modal_open: bool,
    /// Battery percentage; `None` hides the indicator
    pub battery: Option<u8>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            phase: ShellPhase::Splash,
            entries: Vec::new(),
            modal_open: false,
            battery: None,
        }
    }

    pub fn show_splash(&self) -> bool {
        self.phase == ShellPhase::Splash
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ShellPhase::Loading
    }

    /// Splash timer elapsed
    pub fn finish_splash(&mut self) {
        if self.phase == ShellPhase::Splash {
            self.phase = ShellPhase::Loading;
        }
    }

    /// Apply a fetch result. A failed fetch is logged and shows an empty list.
    pub fn apply_entries(&mut self, result: StoreResult<Vec<DiaryEntry>>) {
        self.entries = match result {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Error loading entries: {}", e);
                Vec::new()
            }
        };
        if self.phase == ShellPhase::Loading {
            self.phase = ShellPhase::Ready;
        }
    }

    pub fn open_form(&mut self) {
        self.modal_open = true;
    }

    pub fn close_form(&mut self) {
        self.modal_open = false;
    }

    /// The form saved a post; the caller reloads the list
    pub fn entry_added(&mut self) {
        self.modal_open = false;
    }

    pub fn set_battery(&mut self, percent: u8) {
        self.battery = Some(percent.min(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    fn entry(id: &str) -> DiaryEntry {
        DiaryEntry {
            id: id.to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            date: "2024-01-01T00:00:00.000Z".to_string(),
            photo: None,
            quote: None,
            location: None,
        }
    }

    #[test]
    fn test_starts_with_splash() {
        let state = ShellState::new();
        assert!(state.show_splash());
        assert!(!state.modal_open);
        assert_eq!(state.battery, None);
        assert_eq!(SPLASH_DURATION, Duration::from_millis(2500));
    }

    #[test]
    fn test_splash_then_loading_then_ready() {
        let mut state = ShellState::new();
        state.finish_splash();
        assert!(state.is_loading());

        state.apply_entries(Ok(vec![entry("a")]));
        assert_eq!(state.phase, ShellPhase::Ready);
        assert_eq!(state.entries.len(), 1);
    }

    #[test]
    fn test_finish_splash_is_idempotent() {
        let mut state = ShellState::new();
        state.finish_splash();
        state.apply_entries(Ok(Vec::new()));
        state.finish_splash();
        assert_eq!(state.phase, ShellPhase::Ready);
    }

    #[test]
    fn test_fetch_failure_falls_back_to_empty() {
        let mut state = ShellState::new();
        state.finish_splash();
        state.entries = vec![entry("stale")];

        state.apply_entries(Err(StoreError::Corrupt("bad".to_string())));

        assert_eq!(state.phase, ShellPhase::Ready);
        assert!(state.entries.is_empty());
    }

    #[test]
    fn test_reload_keeps_ready() {
        let mut state = ShellState::new();
        state.finish_splash();
        state.apply_entries(Ok(vec![entry("a")]));

        state.apply_entries(Ok(vec![entry("b"), entry("a")]));
        assert_eq!(state.phase, ShellPhase::Ready);
        assert_eq!(state.entries.len(), 2);
    }

    #[test]
    fn test_modal_toggles() {
        let mut state = ShellState::new();
        state.finish_splash();
        state.apply_entries(Ok(vec![entry("a")]));

        state.open_form();
        assert!(state.modal_open);
        assert_eq!(state.entries.len(), 1);

        state.close_form();
        assert!(!state.modal_open);

        state.open_form();
        state.entry_added();
        assert!(!state.modal_open);
    }

    #[test]
    fn test_battery_level() {
        let mut state = ShellState::new();
        state.set_battery(88);
        assert_eq!(state.battery, Some(88));

        state.set_battery(130);
        assert_eq!(state.battery, Some(100));
    }
}
