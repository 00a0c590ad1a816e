use client::{IdentityClient, storage::STORAGE};
use dioxus::{
    logger::tracing::{Level, error, warn},
    prelude::*,
};
use shared::IdentityConfig;
use ui::{Header, IdentityContext};
use views::{Home, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {err}");
    }

    let config = IdentityConfig::from_env().unwrap_or_else(|err| {
        warn!("Ignoring identity configuration from environment: {err}");
        IdentityConfig::default()
    });
    let client = match IdentityClient::new(config) {
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
    use_context_provider(|| IdentityContext::new(&*STORAGE, client));
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn DesktopLayout() -> Element {
    rsx! {
        Header {}
        Outlet::<Route> {}
    }
}
