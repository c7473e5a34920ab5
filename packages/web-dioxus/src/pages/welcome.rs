//! Landing screen: pick a role, then log in

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::Role;

#[component]
pub fn Welcome() -> Element {
    let navigator = use_navigator();
    let mut selected = use_signal(|| None::<Role>);

    let mut choose = move |role: Role| {
        selected.set(Some(role));
        navigator.push(Route::Login {
            role: role.as_str().to_string(),
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex flex-col justify-center items-center p-6 bg-gray-50 font-sans",

            div {
                class: "w-full max-w-sm mx-auto text-center",

                div {
                    class: "mb-12",
                    h1 { class: "text-6xl font-extrabold text-gray-900 tracking-tight", "Karm" }
                    p { class: "mt-3 text-lg text-gray-600", "Welcome! Please choose your role." }
                }

                div {
                    class: "space-y-6",
                    RoleButton {
                        label: "I'm an Employer",
                        selected: selected() == Some(Role::Employer),
                        onclick: move |_| choose(Role::Employer),
                    }
                    RoleButton {
                        label: "I'm an Employee",
                        selected: selected() == Some(Role::Employee),
                        onclick: move |_| choose(Role::Employee),
                    }
                }
            }
        }
    }
}

#[component]
fn RoleButton(label: String, selected: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let (ring, text) = if selected {
        ("bg-blue-50 ring-2 ring-blue-500", "text-blue-700")
    } else {
        ("bg-white hover:shadow-xl", "text-gray-900")
    };

    rsx! {
        button {
            r#type: "button",
            class: "w-full p-6 rounded-xl shadow-lg flex flex-col items-center justify-center text-center transition-all duration-200 {ring}",
            aria_pressed: "{selected}",
            onclick: move |e| onclick.call(e),
            span { class: "text-xl font-bold transition-colors {text}", "{label}" }
        }
    }
}
