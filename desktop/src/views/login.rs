use client::storage::STORAGE;
use dioxus::{logger::tracing::info, prelude::*};
use shared::AccessToken;

use crate::Route;

/// Stores an access token issued elsewhere and returns to the home view.
#[component]
pub fn Login() -> Element {
    let mut access_token = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    rsx! {
        div {
            class: "centered-column",

            div {
                class: "card",

                h3 { "Sign in" }
                p { "Paste the access token issued by the identity service." }
                input {
                    value: "{access_token}",
                    placeholder: "Access token",
                    oninput: move |event| access_token.set(event.value()),
                }
                if let Some(error) = error() {
                    p { class: "error", "{error}" }
                }
                button {
                    onclick: move |_| {
                        let Some(token) = AccessToken::new(access_token().trim()) else {
                            error.set(Some("Access token can't be empty".to_owned()));
                            return;
                        };
                        if !STORAGE.store_access_token(&token) {
                            error.set(Some("Couldn't save the access token".to_owned()));
                            return;
                        }
                        info!("Access token stored");
                        navigator().replace(Route::Home {});
                    },
                    "Continue"
                }
            }
        }
    }
}
