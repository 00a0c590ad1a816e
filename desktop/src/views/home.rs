use dioxus::prelude::*;
use ui::ProfileGate;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = navigator();
    rsx! {
        ProfileGate {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            }
        }
    }
}
