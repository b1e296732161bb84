use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use crate::{
    api,
    components::{
        request_log::{has_next_page, RequestLogTable},
        route_row::RouteRow,
    },
    models::{ProxyRoute, Stats},
    pages::report,
    route::Route,
};

#[component]
fn StatCard(title: String, value: String) -> Element {
    rsx! {
        div {
            class: "p-4 rounded-lg bg-gray-800 border border-gray-700",
            p {
                class: "text-sm text-gray-400",
                "{title}"
            }
            p {
                class: "text-2xl font-bold text-white",
                "{value}"
            }
        }
    }
}

fn stat_cards(stats: &Stats) -> Vec<(&'static str, String)> {
    vec![
        ("Requests (30d)", stats.total_requests.to_string()),
        ("Resolved", stats.total_requests_resolved.to_string()),
        ("Server errors", stats.server_error_count.to_string()),
        ("Client errors", stats.client_error_count.to_string()),
        ("Not found", stats.not_found_count.to_string()),
        ("Avg latency", format!("{:.1} ms", stats.avg_latency)),
    ]
}

pub fn Home() -> Element {
    let navigator = use_navigator();

    let mut routes = use_resource(move || async move {
        match api::fetch_routes().await {
            Ok(routes) => {
                info!("fetched {} routes", routes.len());
                routes
            }
            Err(e) => {
                report(navigator, e);
                Vec::<ProxyRoute>::new()
            }
        }
    });

    let stats = use_resource(|| async move {
        match api::fetch_stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                // the routes request already reports auth and network failures
                warn!("stats unavailable: {:#}", e);
                None
            }
        }
    });

    let mut page = use_signal(|| 1u32);
    let logs = use_resource(move || async move {
        match api::fetch_logs(page()).await {
            Ok(logs) => Some(logs),
            Err(e) => {
                warn!("request log unavailable: {:#}", e);
                None
            }
        }
    });

    let on_delete = move |domain: String| {
        spawn(async move {
            match api::delete_route(&domain).await {
                Ok(()) => routes.restart(),
                Err(e) => report(navigator, e),
            }
        });
    };

    let cards = stats
        .read()
        .clone()
        .flatten()
        .map(|stats| stat_cards(&stats))
        .unwrap_or_default();

    let routes = routes.read().clone();
    let logs = logs.read().clone();
    let current_page = page();
    let has_next = matches!(&logs, Some(Some(logs)) if has_next_page(logs.len()));

    rsx! {
        div {
            class: "p-6 flex flex-col gap-6",
            div {
                class: "grid grid-cols-2 md:grid-cols-6 gap-4",
                for (title, value) in cards {
                    StatCard {
                        key: "{title}",
                        title: title.to_string(),
                        value: value
                    }
                }
            }
            div {
                class: "flex justify-between items-center",
                h5 {
                    class: "text-2xl font-bold tracking-tight text-white",
                    "Routes"
                }
                Link {
                    class: "text-white bg-blue-600 hover:bg-blue-700 font-medium rounded-lg text-sm px-4 py-2",
                    to: Route::AddRoute,
                    "Add route"
                }
            }
            {match routes {
                None => rsx! {
                    p {
                        class: "text-gray-400",
                        "Loading..."
                    }
                },
                Some(routes) if routes.is_empty() => rsx! {
                    p {
                        class: "text-gray-400",
                        "No routes configured"
                    }
                },
                Some(routes) => rsx! {
                    table {
                        class: "w-full text-left",
                        thead {
                            tr {
                                class: "text-gray-400 text-sm border-b border-gray-700",
                                th { class: "px-4 py-2", "Domain" }
                                th { class: "px-4 py-2", "Target" }
                                th { class: "px-4 py-2", "Static" }
                                th { class: "px-4 py-2", "Auth" }
                                th {}
                            }
                        }
                        tbody {
                            for route in routes {
                                RouteRow {
                                    key: "{route.id}",
                                    route: route,
                                    on_delete: on_delete
                                }
                            }
                        }
                    }
                },
            }}
            div {
                class: "flex justify-between items-center",
                h5 {
                    class: "text-2xl font-bold tracking-tight text-white",
                    "Recent requests"
                }
                div {
                    class: "flex items-center gap-2 text-sm text-white",
                    button {
                        r#type: "button",
                        class: "px-3 py-1 rounded-lg bg-gray-700 hover:bg-gray-600 disabled:opacity-50",
                        disabled: current_page <= 1,
                        onclick: move |_| page.set(current_page.saturating_sub(1).max(1)),
                        "Newer"
                    }
                    span {
                        "Page {current_page}"
                    }
                    button {
                        r#type: "button",
                        class: "px-3 py-1 rounded-lg bg-gray-700 hover:bg-gray-600 disabled:opacity-50",
                        disabled: !has_next,
                        onclick: move |_| page.set(current_page + 1),
                        "Older"
                    }
                }
            }
            {match logs {
                None => rsx! {
                    p {
                        class: "text-gray-400",
                        "Loading..."
                    }
                },
                Some(None) => rsx! {
                    p {
                        class: "text-gray-400",
                        "Request log unavailable"
                    }
                },
                Some(Some(logs)) => rsx! {
                    RequestLogTable {
                        logs: logs
                    }
                },
            }}
        }
    }
}
