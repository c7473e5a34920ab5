//! Phone entry screen

use dioxus::prelude::*;

use crate::components::{BackButton, ButtonSpinner};
use crate::otp::VerificationGateway;
use crate::routes::Route;
use crate::state::{
    full_phone_number, sanitize_phone_input, use_pending_verification, validate_national_number,
};
use crate::types::{Channel, Role};

#[component]
pub fn Login(role: String) -> Element {
    let navigator = use_navigator();
    let mut pending = use_pending_verification();
    let gateway = use_signal(VerificationGateway::from_env);

    let mut user_role = use_signal(|| Role::from_query(&role));
    let mut phone = use_signal(String::new);
    let mut phone_error = use_signal(|| None::<String>);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Keep in sync when only the query string changes
    use_effect(use_reactive!(|role| user_role.set(Role::from_query(&role))));

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let digits = phone();
        if let Err(err) = validate_national_number(&digits) {
            phone_error.set(Some(err.to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            phone_error.set(None);
            submit_error.set(None);

            let full = full_phone_number(&digits);
            let gateway = gateway.peek().clone();
            match gateway.send_otp(&full, Channel::Sms).await {
                Ok(()) => {
                    tracing::info!(role = %user_role.peek(), "code sent, moving to verification");
                    pending.start(full.clone());
                    navigator.push(Route::OtpVerification { phone: full });
                }
                Err(message) => submit_error.set(Some(message)),
            }

            is_pending.set(false);
        });
    };

    let input_border = if phone_error().is_some() {
        "border-red-500 focus:border-red-500"
    } else {
        "border-transparent focus:border-blue-500"
    };
    let submit_disabled = is_pending() || phone().is_empty();
    let submit_style = if submit_disabled {
        "bg-gray-300 text-gray-500 cursor-not-allowed"
    } else {
        "bg-blue-500 text-white hover:bg-blue-600 active:scale-95"
    };

    rsx! {
        div {
            class: "flex flex-col min-h-screen items-center justify-center px-4 py-8 bg-gray-50 font-sans",

            div {
                class: "w-full max-w-sm text-center",

                BackButton {}

                header {
                    class: "mb-8",
                    h1 { class: "text-3xl font-bold text-gray-900", "Welcome" }
                    p { class: "text-gray-500 mt-2", "Enter your phone number to log in or sign up." }
                }

                div {
                    class: "mb-6 p-1 bg-gray-200 rounded-xl flex",
                    for role in Role::variants().iter().copied() {
                        RoleOption {
                            key: "{role}",
                            role,
                            selected: user_role() == role,
                            onselect: move |r| user_role.set(r),
                        }
                    }
                }

                form {
                    class: "space-y-4",
                    onsubmit: handle_submit,

                    div {
                        class: "relative",
                        span {
                            class: "absolute inset-y-0 left-0 flex items-center pl-4 text-gray-500 font-medium",
                            "+91"
                        }
                        input {
                            r#type: "tel",
                            value: "{phone}",
                            placeholder: "Your mobile number",
                            class: "w-full bg-gray-100 border-2 rounded-xl h-14 pl-12 pr-4 text-base text-gray-900 placeholder-gray-400 transition-colors focus:outline-none focus:ring-0 {input_border}",
                            disabled: is_pending(),
                            oninput: move |e| {
                                phone.set(sanitize_phone_input(&e.value()));
                                if phone_error.peek().is_some() {
                                    phone_error.set(None);
                                }
                            },
                        }
                        if let Some(err) = phone_error() {
                            p { class: "text-red-500 text-sm text-left mt-1", "{err}" }
                        }
                    }

                    button {
                        r#type: "submit",
                        disabled: submit_disabled,
                        class: "w-full rounded-xl h-14 text-base font-bold flex items-center justify-center transition-all {submit_style}",
                        if is_pending() {
                            ButtonSpinner { label: "Sending OTP..." }
                        } else {
                            "Send OTP"
                        }
                    }

                    if let Some(err) = submit_error() {
                        p { class: "text-red-500 text-sm text-center", "{err}" }
                    }
                }

                p {
                    class: "mt-6 text-center text-xs text-gray-400 px-4",
                    "By continuing, you agree to our Terms of Service & Privacy Policy."
                }
            }
        }
    }
}

#[component]
fn RoleOption(role: Role, selected: bool, onselect: EventHandler<Role>) -> Element {
    let style = if selected {
        "bg-white text-gray-900 shadow-sm"
    } else {
        "text-gray-500 hover:text-gray-700"
    };

    rsx! {
        label {
            class: "flex-1 cursor-pointer",
            input {
                r#type: "radio",
                name: "user_role",
                value: "{role}",
                checked: selected,
                class: "sr-only",
                onchange: move |_| onselect.call(role),
            }
            span {
                class: "w-full block text-center py-3 px-4 rounded-lg text-sm font-semibold transition-all duration-300 {style}",
                "{role.label()}"
            }
        }
    }
}
