//! Loading indicators

use dioxus::prelude::*;

/// Spinner with a label, shown inside a busy button
#[component]
pub fn ButtonSpinner(label: String) -> Element {
    rsx! {
        div {
            class: "flex items-center",
            div { class: "animate-spin rounded-full h-5 w-5 border-2 border-white border-t-transparent" }
            span { class: "ml-2", "{label}" }
        }
    }
}

/// Inline loading indicator
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div {
            class: "inline-flex space-x-1",
            div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce" }
            div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
