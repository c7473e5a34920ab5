//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::PendingVerification;

/// Root application component
#[component]
pub fn App() -> Element {
    // Shared between phone entry and code entry for the life of the tab
    use_context_provider(PendingVerification::new);

    rsx! {
        // Utility classes used by every screen
        document::Script { src: "https://cdn.tailwindcss.com" }

        div {
            class: "mobile-app",
            Router::<Route> {}
        }
    }
}
