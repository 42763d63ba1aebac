//! UI Components
//!
//! Leptos components rendered by the screen.

mod task_item;

pub use task_item::{Marker, TaskCheck, TaskItem};
