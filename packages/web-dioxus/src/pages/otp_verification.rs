//! Code entry screen
//!
//! A thin view over [`CodeEntry`]: every DOM event is forwarded to the
//! controller, and the controller's state is rendered back. Focus follows
//! `focus_index` through the mounted input handles.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{BackButton, ButtonSpinner, LoadingDots, RedirectHome};
use crate::otp::{
    cancel_cooldown, restart_cooldown, start_cooldown, CodeEntry, VerificationGateway, CODE_LENGTH,
};
use crate::routes::Route;
use crate::state::{route_phone, use_pending_verification};
use crate::types::Channel;

/// Route entry: only opens for the number a code was just sent to
#[component]
pub fn OtpVerification(phone: String) -> Element {
    let pending = use_pending_verification();

    if !pending.allows(&phone) {
        tracing::warn!("code entry opened without a matching send, redirecting");
        return rsx! { RedirectHome {} };
    }

    let phone = route_phone(&phone);
    rsx! {
        CodeEntryScreen { key: "{phone}", phone }
    }
}

#[component]
fn CodeEntryScreen(phone: String) -> Element {
    let mut entry = use_signal(|| CodeEntry::<CODE_LENGTH>::new(phone.clone(), Channel::Sms));
    let gateway = use_signal(VerificationGateway::from_env);
    let ticker = use_signal(|| Some(start_cooldown(entry)));
    let mut slots = use_signal(|| vec![None::<Rc<MountedData>>; CODE_LENGTH]);
    let mut resending = use_signal(|| false);

    use_drop(move || {
        if let Ok(mut entry) = entry.try_write() {
            entry.dispose();
        }
        cancel_cooldown(ticker);
    });

    // Only controller-driven moves touch DOM focus; ticks leave it alone
    let focus_target = use_memo(move || {
        let entry = entry.read();
        (entry.focus_index(), entry.focus_request())
    });

    use_effect(move || {
        let (index, _) = focus_target();
        if let Some(Some(slot)) = slots.peek().get(index).cloned() {
            spawn(async move {
                let _ = slot.set_focus(true).await;
            });
        }
    });

    let mut submit = move || {
        let Some(command) = entry.write().submit() else {
            return;
        };
        let gateway = gateway.peek().clone();
        spawn(async move {
            let outcome = gateway.verify(&command).await;
            if let Ok(mut entry) = entry.try_write() {
                if let Some(verified) = entry.on_verify_result(command.epoch, outcome) {
                    tracing::info!(phone = %verified.phone_number, "phone verified");
                }
            }
        });
    };

    let resend = move |_: MouseEvent| {
        let Some(command) = entry.write().resend() else {
            return;
        };
        restart_cooldown(entry, ticker);

        let gateway = gateway.peek().clone();
        spawn(async move {
            resending.set(true);
            let result = gateway.resend(&command).await;
            if let Ok(mut entry) = entry.try_write() {
                entry.on_resend_result(command.epoch, result);
            }
            resending.set(false);
        });
    };

    let state = entry.read().clone();

    if state.is_verified() {
        return rsx! {
            VerifiedPanel { phone: state.phone_number().to_string() }
        };
    }

    let has_error = state.last_error().is_some();
    let submit_disabled = state.is_submitting() || !state.is_complete();
    let submit_style = if submit_disabled {
        "bg-gray-300 text-gray-500 cursor-not-allowed"
    } else {
        "bg-blue-500 text-white hover:bg-blue-600 active:scale-95"
    };
    let resend_style = if state.can_resend() {
        "text-blue-500 hover:underline cursor-pointer"
    } else {
        "text-gray-400 cursor-not-allowed"
    };

    rsx! {
        div {
            class: "flex flex-col min-h-screen items-center justify-center px-4 py-8 bg-gray-50 font-sans",

            div {
                class: "w-full max-w-sm text-center",

                BackButton {}

                header {
                    class: "mb-8",
                    h1 { class: "text-3xl font-bold text-gray-900", "Enter OTP" }
                    p { class: "text-gray-500 mt-2", "We've sent a one-time password to your mobile number." }
                    p { class: "text-sm text-gray-400 mt-1", "{state.phone_number()}" }
                }

                form {
                    class: "space-y-6",
                    onsubmit: move |e| {
                        e.prevent_default();
                        submit();
                    },

                    div {
                        class: "flex justify-center space-x-2",
                        for (index, digit) in state.digits().iter().enumerate() {
                            input {
                                key: "{index}",
                                r#type: "text",
                                inputmode: "numeric",
                                autocomplete: if index == 0 { "one-time-code" } else { "off" },
                                aria_label: format!("OTP digit {}", index + 1),
                                value: digit.map(|d| d.to_string()).unwrap_or_default(),
                                class: slot_class(has_error, digit.is_some()),
                                onmounted: move |e| {
                                    let mut slots = slots.write();
                                    if let Some(slot) = slots.get_mut(index) {
                                        *slot = Some(e.data());
                                    }
                                    if index == 0 {
                                        let first = e.data();
                                        spawn(async move {
                                            let _ = first.set_focus(true).await;
                                        });
                                    }
                                },
                                onfocus: move |_| entry.write().on_focus(index),
                                oninput: move |e| entry.write().on_input(index, &e.value()),
                                onkeydown: move |e| match e.key() {
                                    Key::Backspace => entry.write().on_backspace(index),
                                    Key::Enter => {
                                        e.prevent_default();
                                        submit();
                                    }
                                    _ => {}
                                },
                            }
                        }
                    }

                    if let Some(error) = state.last_error() {
                        p { class: "text-red-500 text-sm text-center", "{error.message()}" }
                    }

                    button {
                        r#type: "submit",
                        disabled: submit_disabled,
                        class: "w-full rounded-xl h-14 text-base font-bold flex items-center justify-center transition-all {submit_style}",
                        if state.is_submitting() {
                            ButtonSpinner { label: "Verifying..." }
                        } else {
                            "Verify"
                        }
                    }
                }

                div {
                    class: "mt-6 text-center",
                    p { class: "text-gray-500", "Didn't receive the OTP?" }
                    div {
                        class: "mt-2",
                        button {
                            r#type: "button",
                            disabled: !state.can_resend(),
                            class: "font-medium transition-colors {resend_style}",
                            onclick: resend,
                            "Resend OTP"
                        }
                        if resending() {
                            span { class: "ml-2", LoadingDots {} }
                        } else if !state.can_resend() {
                            span { class: "text-gray-400 ml-2", "({state.cooldown().display()})" }
                        }
                    }
                }
            }
        }
    }
}

fn slot_class(has_error: bool, filled: bool) -> String {
    let state = if has_error {
        "bg-red-50 border-red-500 focus:border-red-500"
    } else if filled {
        "bg-blue-50 border-blue-500 text-gray-900"
    } else {
        "bg-gray-100 border-transparent focus:border-blue-500 text-gray-900"
    };
    format!(
        "w-14 h-16 text-center text-3xl font-bold rounded-xl border-2 transition-colors focus:outline-none focus:ring-0 {}",
        state
    )
}

#[component]
fn VerifiedPanel(phone: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col min-h-screen items-center justify-center px-4 py-8 bg-gray-50 font-sans",
            div {
                class: "w-full max-w-sm text-center",
                h1 { class: "text-3xl font-bold text-gray-900", "OTP verified successfully!" }
                p { class: "text-gray-500 mt-2", "{phone} is confirmed." }
                Link {
                    to: Route::Welcome {},
                    class: "mt-6 inline-block font-medium text-blue-500 hover:underline",
                    "Back to start"
                }
            }
        }
    }
}
