//! Task Item Component
//!
//! One row of the to-do list with its own checked flag.

use leptos::prelude::*;

/// Local done-state of a rendered task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCheck {
    checked: bool,
}

/// Trailing decoration shown when markers are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// 🥳 once the task is done
    Celebration,
    /// Outlined circle while open
    EmptyCircle,
}

impl TaskCheck {
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub fn is_checked(self) -> bool {
        self.checked
    }

    /// Value for the label's `text-decoration-line`
    pub fn text_decoration(self) -> &'static str {
        if self.checked { "line-through" } else { "none" }
    }

    pub fn marker(self) -> Marker {
        if self.checked { Marker::Celebration } else { Marker::EmptyCircle }
    }
}

/// A single task row
///
/// # Arguments
/// * `label` - Task text, never changed by this component
/// * `show_marker` - Render the 🥳 / circle marker after the label
#[component]
pub fn TaskItem(
    #[prop(into)] label: String,
    #[prop(optional)] show_marker: bool,
) -> impl IntoView {
    // Owned by this instance only, never reported to the list
    let check = RwSignal::new(TaskCheck::default());

    let on_toggle = move |_| {
        check.update(TaskCheck::toggle);
        log::debug!("[TASK] checked={}", check.get_untracked().is_checked());
    };

    view! {
        <div class="task-item">
            <div class="task-item-left">
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=move || check.get().is_checked()
                    on:change=on_toggle
                />
                <span
                    class="task-text"
                    style=move || format!("text-decoration-line: {};", check.get().text_decoration())
                >
                    {label}
                </span>
            </div>

            {show_marker.then(|| view! {
                <span class="task-marker">
                    {move || match check.get().marker() {
                        Marker::Celebration => view! { <span class="task-marker-emoji">"🥳"</span> }.into_any(),
                        Marker::EmptyCircle => view! { <span class="task-marker-circle"></span> }.into_any(),
                    }}
                </span>
            })}
        </div>
    }
}
