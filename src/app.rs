//! To-Do Screen
//!
//! Screen controller: title, scrollable task list and the input row.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TaskItem;
use crate::config::ScreenConfig;
use crate::keyboard;
use crate::store::{store_set_draft, store_submit, ScreenState, ScreenStateStoreFields, Submit};

#[component]
pub fn App(#[prop(optional)] config: ScreenConfig) -> impl IntoView {
    let ScreenConfig { title, placeholder, submit_label, show_marker, .. } = config;

    // State (lives as long as the screen, nothing is persisted)
    let store = Store::new(ScreenState::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_submit(&store, keyboard::dismiss) {
            Submit::Added { index } => log::info!("[SCREEN] Added task #{}", index),
            Submit::Ignored => log::debug!("[SCREEN] Ignored blank draft"),
        }
    };

    view! {
        <div class="screen">
            <h1 class="screen-title">{title}</h1>

            // Tasks are keyed by position; labels never move
            <div class="task-scroll">
                <For
                    each=move || store.tasks().get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, label)| {
                        view! { <TaskItem label=label show_marker=show_marker /> }
                    }
                />
            </div>

            <form class="input-row" on:submit=on_submit>
                <input
                    type="text"
                    class="task-input"
                    placeholder=placeholder
                    prop:value=move || store.draft().get()
                    on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
                />
                <button type="submit" class="add-button">{submit_label}</button>
            </form>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Let render effects flush
    async fn tick() {
        TimeoutFuture::new(0).await;
    }

    fn mount(config: ScreenConfig) -> HtmlElement {
        let root = document().create_element("div").unwrap().unchecked_into::<HtmlElement>();
        document().body().unwrap().append_child(&root).unwrap();
        leptos::mount::mount_to(root.clone(), move || view! { <App config=config.clone() /> }).forget();
        root
    }

    fn find<T: JsCast>(root: &HtmlElement, selector: &str) -> T {
        root.query_selector(selector).unwrap().unwrap().unchecked_into::<T>()
    }

    fn find_all(root: &HtmlElement, selector: &str) -> Vec<Element> {
        let nodes = root.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .map(|node| node.unchecked_into::<Element>())
            .collect()
    }

    async fn type_draft(root: &HtmlElement, text: &str) {
        let input: HtmlInputElement = find(root, ".task-input");
        input.set_value(text);
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).unwrap();
        input.dispatch_event(&event).unwrap();
        tick().await;
    }

    async fn press_add(root: &HtmlElement) {
        find::<HtmlButtonElement>(root, ".add-button").click();
        tick().await;
    }

    async fn add_task(root: &HtmlElement, text: &str) {
        type_draft(root, text).await;
        press_add(root).await;
    }

    fn labels(root: &HtmlElement) -> Vec<String> {
        find_all(root, ".task-text")
            .into_iter()
            .map(|el| el.text_content().unwrap_or_default())
            .collect()
    }

    #[wasm_bindgen_test]
    async fn renders_title_and_empty_list() {
        let root = mount(ScreenConfig::default());
        tick().await;

        let title: HtmlElement = find(&root, ".screen-title");
        assert_eq!(title.text_content().unwrap(), "Today's To-Do List 📝");
        assert!(labels(&root).is_empty());
    }

    #[wasm_bindgen_test]
    async fn submit_adds_task_and_clears_input() {
        let root = mount(ScreenConfig::default());
        add_task(&root, "Buy milk").await;

        assert_eq!(labels(&root), vec!["Buy milk"]);
        let input: HtmlInputElement = find(&root, ".task-input");
        assert_eq!(input.value(), "");
    }

    #[wasm_bindgen_test]
    async fn blank_submit_adds_nothing() {
        let root = mount(ScreenConfig::default());
        press_add(&root).await;
        add_task(&root, "   ").await;

        assert!(labels(&root).is_empty());
    }

    #[wasm_bindgen_test]
    async fn toggle_strikes_only_that_item() {
        let root = mount(ScreenConfig::default());
        add_task(&root, "A").await;
        add_task(&root, "B").await;

        let checkboxes = find_all(&root, ".task-checkbox");
        checkboxes[0].unchecked_ref::<HtmlElement>().click();
        tick().await;

        let texts = find_all(&root, ".task-text");
        let style_of = |el: &Element| el.get_attribute("style").unwrap_or_default();
        assert!(style_of(&texts[0]).contains("line-through"));
        assert!(style_of(&texts[1]).contains("none"));
        assert_eq!(find_all(&root, ".task-marker-emoji").len(), 1);
        assert_eq!(find_all(&root, ".task-marker-circle").len(), 1);
    }

    #[wasm_bindgen_test]
    async fn plain_config_has_no_marker() {
        let root = mount(ScreenConfig::plain());
        add_task(&root, "A").await;

        assert_eq!(labels(&root), vec!["A"]);
        assert!(find_all(&root, ".task-marker").is_empty());
    }
}
