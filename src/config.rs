//! Screen Configuration
//!
//! Compile-time settings for the to-do screen.

use log::LevelFilter;

/// Text and behaviour knobs for the screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    /// Heading shown above the list
    pub title: String,
    /// Placeholder of the draft input
    pub placeholder: String,
    /// Label of the submit button
    pub submit_label: String,
    /// Show the trailing 🥳 / circle marker on each task
    pub show_marker: bool,
    pub log_level: LevelFilter,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title: "Today's To-Do List 📝".to_string(),
            placeholder: "Write a task".to_string(),
            submit_label: "+".to_string(),
            show_marker: true,
            log_level: default_log_level(),
        }
    }
}

impl ScreenConfig {
    /// Same screen without the decorative marker
    pub fn plain() -> Self {
        Self {
            show_marker: false,
            ..Default::default()
        }
    }
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
