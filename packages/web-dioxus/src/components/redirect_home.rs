use dioxus::prelude::*;

use crate::routes::Route;

/// Replace the current history entry with the landing screen
#[component]
pub fn RedirectHome() -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(Route::Welcome {});
    });

    rsx! {}
}
