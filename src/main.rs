#![allow(non_snake_case)]

use components::toast::Toast;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use route::Route;

mod api;
mod components;
mod models;
mod pages;
mod route;

/// Proxy origin for the admin API. Empty means the page's own origin, which
/// is the case when the proxy serves this app under /latios/.
pub static BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(x) => x,
    None => "",
};

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting app");
    launch(App);
}

fn App() -> Element {
    rsx! {
        document::Stylesheet {
            href: asset!("/assets/tailwind.css")
        }
        Toast {}
        Router::<Route> {}
    }
}
