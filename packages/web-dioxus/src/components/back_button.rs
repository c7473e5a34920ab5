use dioxus::prelude::*;

/// Top-left arrow that returns to the previous screen
#[component]
pub fn BackButton() -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "absolute top-0 left-0 p-4",
            button {
                r#type: "button",
                class: "p-2 -ml-2 rounded-full hover:bg-gray-100 active:bg-gray-200 transition-colors text-gray-700",
                aria_label: "Go back",
                onclick: move |_| navigator.go_back(),
                "\u{2190}"
            }
        }
    }
}
