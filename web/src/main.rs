use client::IdentityClient;
use dioxus::{
    logger::tracing::{Level, error, warn},
    prelude::*,
};
use shared::{IdentityConfig, config::BASE_URL_VAR};
use storage::BrowserStorage;
use ui::{Header, IdentityContext};
use views::{Home, Login};

mod storage;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The browser has no process environment, so the base url is baked in at
/// build time.
fn identity_config() -> IdentityConfig {
    IdentityConfig::from_lookup(|name| match name {
        BASE_URL_VAR => option_env!("IDENTITY_BASE_URL").map(str::to_owned),
        _ => None,
    })
    .unwrap_or_else(|err| {
        warn!("Ignoring identity configuration: {err}");
        IdentityConfig::default()
    })
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {err}");
    }

    let client = match IdentityClient::new(identity_config()) {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build HTTP client: {err}");
            return;
        }
    };

    dioxus::LaunchBuilder::new().with_context(client).launch(App);
}

#[component]
fn App() -> Element {
    let client = use_context::<IdentityClient>();
    use_context_provider(|| IdentityContext::new(BrowserStorage, client));
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn WebLayout() -> Element {
    rsx! {
        Header {}
        Outlet::<Route> {}
    }
}
