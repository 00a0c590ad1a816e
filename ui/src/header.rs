use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "app-header",

            span { class: "app-title", "JB" }
        }
    }
}
