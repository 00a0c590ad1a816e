use dioxus::prelude::*;
use shared::{ProfileError, ProfileState, UserProfile};

const NOT_PROVIDED: &str = "Not provided";

/// Renders one [`ProfileState`].
#[component]
pub fn ProfileView(state: ProfileState, on_retry: EventHandler<()>) -> Element {
    match state {
        ProfileState::Loading => rsx! { LoadingIndicator {} },
        ProfileState::Loaded(profile) => rsx! { ProfileCard { profile } },
        ProfileState::Failed(error) => rsx! { ErrorPanel { error, on_retry } },
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "centered-column",

            div { class: "spinner", role: "progressbar" }
            p { "Loading ..." }
        }
    }
}

#[component]
pub fn ProfileCard(profile: UserProfile) -> Element {
    let UserProfile {
        id,
        username,
        first_name,
        last_name,
        date_of_birth,
    } = profile;
    let or_placeholder = |value: Option<String>| value.unwrap_or_else(|| NOT_PROVIDED.to_owned());
    rsx! {
        div {
            class: "centered-column",

            div {
                class: "card",

                p { class: "card-title", "Welcome back to JB, {username} !" }
                ProfileRow { label: "User Id", value: id }
                ProfileRow { label: "First Name", value: or_placeholder(first_name) }
                ProfileRow { label: "Last Name", value: or_placeholder(last_name) }
                ProfileRow { label: "Date of birth", value: or_placeholder(date_of_birth) }
            }
        }
    }
}

#[component]
fn ProfileRow(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "card-row",

            span { class: "card-label", {label} }
            span { {value} }
        }
    }
}

#[component]
pub fn ErrorPanel(error: ProfileError, on_retry: EventHandler<()>) -> Element {
    let title = match &error {
        ProfileError::FetchFailed { .. } => "Couldn't reach the identity service",
        ProfileError::MalformedResponse { .. } => "Couldn't read your profile",
        ProfileError::Unauthenticated | ProfileError::Unauthorized { .. } => "You are signed out",
    };
    let retryable = error.is_retryable();
    rsx! {
        div {
            class: "centered-column",

            div {
                class: "card card-error",

                h3 { {title} }
                p { "{error}" }
                if retryable {
                    button {
                        onclick: move |_| on_retry.call(()),
                        "Retry"
                    }
                }
            }
        }
    }
}
