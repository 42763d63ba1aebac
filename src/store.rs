//! Screen State Store
//!
//! Draft text and task labels, with field-level reactivity from
//! reactive_stores.

use leptos::prelude::*;
use reactive_stores::Store;

/// State owned by the screen controller
#[derive(Clone, Debug, Default, Store)]
pub struct ScreenState {
    /// Text being typed, not yet committed
    pub draft: String,
    /// Committed task labels in insertion order (append-only)
    pub tasks: Vec<String>,
}

/// Result of a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// Draft was appended at `index`
    Added { index: usize },
    /// Draft was blank; nothing changed
    Ignored,
}

/// Blank drafts (empty or whitespace-only) are never committed.
///
/// Stricter than an empty-string check: `"   "` is rejected too, so the
/// task list never holds a label made only of whitespace.
pub fn is_submittable(draft: &str) -> bool {
    !draft.trim().is_empty()
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Append the draft as a new task and clear it.
    pub fn submit(&mut self) -> Submit {
        if !is_submittable(&self.draft) {
            return Submit::Ignored;
        }
        let label = std::mem::take(&mut self.draft);
        self.tasks.push(label);
        Submit::Added { index: self.tasks.len() - 1 }
    }
}

/// Type alias for the store
pub type ScreenStore = Store<ScreenState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the draft in the store
pub fn store_set_draft(store: &ScreenStore, text: String) {
    store.draft().set(text);
}

/// Commit the draft held in the store.
///
/// `dismiss_input` runs before any state is written and only when the
/// draft will actually be committed.
pub fn store_submit(store: &ScreenStore, dismiss_input: impl FnOnce()) -> Submit {
    if !store.draft().with_untracked(|draft| is_submittable(draft)) {
        return Submit::Ignored;
    }
    dismiss_input();

    let draft = store.draft();
    let label = std::mem::take(&mut *draft.write());

    let tasks_field = store.tasks();
    let mut tasks = tasks_field.write();
    tasks.push(label);
    Submit::Added { index: tasks.len() - 1 }
}
