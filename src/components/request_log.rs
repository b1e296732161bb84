use dioxus::prelude::*;

use crate::models::{RequestLog, LOGS_PAGE_SIZE};

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        200..=299 => "text-green-400",
        300..=399 => "text-blue-400",
        400..=499 => "text-yellow-400",
        _ => "text-red-400",
    }
}

fn timestamp(log: &RequestLog) -> String {
    log.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// A short page means the log ran out.
pub fn has_next_page(entries: usize) -> bool {
    entries >= LOGS_PAGE_SIZE
}

#[component]
pub fn RequestLogTable(logs: Vec<RequestLog>) -> Element {
    if logs.is_empty() {
        return rsx! {
            p {
                class: "text-gray-400",
                "No requests recorded"
            }
        };
    }

    rsx! {
        table {
            class: "w-full text-left text-sm",
            thead {
                tr {
                    class: "text-gray-400 border-b border-gray-700",
                    th { class: "px-4 py-2", "Time" }
                    th { class: "px-4 py-2", "Method" }
                    th { class: "px-4 py-2", "Host" }
                    th { class: "px-4 py-2", "Path" }
                    th { class: "px-4 py-2", "Status" }
                    th { class: "px-4 py-2", "Latency" }
                    th { class: "px-4 py-2", "Client" }
                }
            }
            tbody {
                for log in logs {
                    tr {
                        key: "{log.id}",
                        class: "border-b border-gray-700 text-gray-300",
                        td { class: "px-4 py-1 whitespace-nowrap", "{timestamp(&log)}" }
                        td { class: "px-4 py-1", "{log.method}" }
                        td { class: "px-4 py-1 text-white", "{log.host}" }
                        td { class: "px-4 py-1 font-mono", "{log.path}" }
                        td { class: "px-4 py-1 {status_class(log.status_code)}", "{log.status_code}" }
                        td { class: "px-4 py-1", "{log.latency_ms} ms" }
                        td { class: "px-4 py-1 font-mono", "{log.remote_addr}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_offers_next() {
        assert!(has_next_page(LOGS_PAGE_SIZE));
        assert!(!has_next_page(LOGS_PAGE_SIZE - 1));
        assert!(!has_next_page(0));
    }

    #[test]
    fn status_colors_by_class() {
        assert_eq!(status_class(204), "text-green-400");
        assert_eq!(status_class(302), "text-blue-400");
        assert_eq!(status_class(404), "text-yellow-400");
        assert_eq!(status_class(502), "text-red-400");
    }
}
