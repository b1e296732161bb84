use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "flex flex-col items-center gap-4 mt-10",
            h5 {
                class: "text-2xl font-bold tracking-tight text-white",
                "Page not found"
            }
            p {
                class: "text-gray-400 font-mono",
                "{path}"
            }
            Link {
                class: "text-white underline",
                to: Route::Home,
                "Back to routes"
            }
        }
    }
}
