use anyhow::Context;
use dioxus_logger::tracing::{info, warn};
use reqwest::{Response, StatusCode, Url};
use thiserror::Error;

use crate::{
    models::{DeleteRouteRequest, LoginRequest, NewProxyRoute, ProxyRoute, RequestLog, Stats},
    BACKEND_URL,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("not authorized")]
    Unauthorized,
    #[error("request failed with {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    pub fn is_unauthorized(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized))
    }
}

fn base_url() -> String {
    if !BACKEND_URL.is_empty() {
        return BACKEND_URL.to_string();
    }

    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/latios-api/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn status_error(status: StatusCode, body: &str) -> Option<ApiError> {
    if status.is_success() {
        return None;
    }

    if status == StatusCode::UNAUTHORIZED {
        return Some(ApiError::Unauthorized);
    }

    let message = match body.trim() {
        "" => status.canonical_reason().unwrap_or("unknown error").to_string(),
        body => body.to_string(),
    };

    Some(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn check(res: Response) -> anyhow::Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    let err = status_error(status, &body).unwrap_or_else(|| ApiError::Status {
        status: status.as_u16(),
        message: body.trim().to_string(),
    });

    warn!("api error {}", err);
    Err(err.into())
}

/// The proxy answers a good login with a redirect that fetch follows, so a
/// final URL other than the login endpoint means the credentials were taken.
fn answered_by_login_endpoint(url: &Url) -> bool {
    url.path().ends_with("/latios-api/login")
}

async fn login_outcome(res: Response) -> anyhow::Result<()> {
    if answered_by_login_endpoint(res.url()) {
        check(res).await?;
    }

    Ok(())
}

pub async fn fetch_routes() -> anyhow::Result<Vec<ProxyRoute>> {
    info!("GET routes");

    let res = reqwest::Client::new()
        .get(endpoint(&base_url(), "routes"))
        .send()
        .await
        .context("failed to reach proxy")?;

    check(res)
        .await?
        .json::<Vec<ProxyRoute>>()
        .await
        .context("failed to decode routes")
}

pub async fn create_route(route: &NewProxyRoute) -> anyhow::Result<()> {
    info!("POST routes {}", route.domain);

    let res = reqwest::Client::new()
        .post(endpoint(&base_url(), "routes"))
        .json(route)
        .send()
        .await
        .context("failed to reach proxy")?;

    check(res).await?;

    Ok(())
}

pub async fn delete_route(domain: &str) -> anyhow::Result<()> {
    info!("DELETE routes {}", domain);

    let res = reqwest::Client::new()
        .delete(endpoint(&base_url(), "routes"))
        .json(&DeleteRouteRequest { domain })
        .send()
        .await
        .context("failed to reach proxy")?;

    check(res).await?;

    Ok(())
}

/// On success the proxy sets an HttpOnly session cookie.
pub async fn login(req: &LoginRequest) -> anyhow::Result<()> {
    info!("POST login {}", req.username);

    let res = reqwest::Client::new()
        .post(endpoint(&base_url(), "login"))
        .json(req)
        .send()
        .await
        .context("failed to reach proxy")?;

    login_outcome(res).await
}

pub async fn fetch_stats() -> anyhow::Result<Stats> {
    info!("GET stats");

    let res = reqwest::Client::new()
        .get(endpoint(&base_url(), "stats"))
        .send()
        .await
        .context("failed to reach proxy")?;

    check(res)
        .await?
        .json::<Stats>()
        .await
        .context("failed to decode stats")
}

/// One page of the request log, newest first, `LOGS_PAGE_SIZE` entries at most.
pub async fn fetch_logs(page: u32) -> anyhow::Result<Vec<RequestLog>> {
    info!("GET logs page {}", page);

    let res = reqwest::Client::new()
        .get(endpoint(&base_url(), "logs"))
        .query(&[("page", page.max(1))])
        .send()
        .await
        .context("failed to reach proxy")?;

    check(res)
        .await?
        .json::<Vec<RequestLog>>()
        .await
        .context("failed to decode request logs")
}

#[cfg(test)]
mod tests {
    use reqwest::ResponseBuilderExt;

    use super::*;

    fn response(status: u16, url: &str, body: &str) -> Response {
        http::Response::builder()
            .status(status)
            .url(Url::parse(url).unwrap())
            .body(body.to_string())
            .unwrap()
            .into()
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        assert_eq!(
            endpoint("https://proxy.example.com", "routes"),
            "https://proxy.example.com/latios-api/routes"
        );
        assert_eq!(
            endpoint("http://localhost:8080/", "/login"),
            "http://localhost:8080/latios-api/login"
        );
    }

    #[test]
    fn success_is_not_an_error() {
        assert_eq!(status_error(StatusCode::CREATED, ""), None);
        assert_eq!(status_error(StatusCode::OK, "ignored"), None);
    }

    #[test]
    fn unauthorized_is_detected_through_anyhow() {
        let err: anyhow::Error = status_error(StatusCode::UNAUTHORIZED, "Unatuhorized")
            .unwrap()
            .into();

        assert!(ApiError::is_unauthorized(&err));
        assert!(!ApiError::is_unauthorized(&anyhow::anyhow!("offline")));
    }

    #[test]
    fn status_error_keeps_server_message() {
        assert_eq!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "UNIQUE constraint failed\n"),
            Some(ApiError::Status {
                status: 500,
                message: "UNIQUE constraint failed".to_string()
            })
        );
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            Some(ApiError::Status {
                status: 429,
                message: "Too Many Requests".to_string()
            })
        );
    }

    #[tokio::test]
    async fn check_passes_success_through() {
        let res = check(response(201, "https://p.example.com/latios-api/routes", ""))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn check_turns_failures_into_api_errors() {
        let err = check(response(401, "https://p.example.com/latios-api/routes", "Unatuhorized\n"))
            .await
            .unwrap_err();
        assert!(ApiError::is_unauthorized(&err));

        let err = check(response(500, "https://p.example.com/latios-api/routes", "db locked\n"))
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ApiError>(),
            Some(&ApiError::Status {
                status: 500,
                message: "db locked".to_string()
            })
        );
    }

    #[test]
    fn login_endpoint_detection() {
        let login = Url::parse("https://p.example.com/latios-api/login").unwrap();
        let followed = Url::parse("https://p.example.com/latios/").unwrap();

        assert!(answered_by_login_endpoint(&login));
        assert!(!answered_by_login_endpoint(&followed));
    }

    #[tokio::test]
    async fn login_rejected_credentials() {
        let err = login_outcome(response(
            401,
            "https://p.example.com/latios-api/login",
            "Invalid credentials",
        ))
        .await
        .unwrap_err();

        assert!(ApiError::is_unauthorized(&err));
    }

    #[tokio::test]
    async fn login_followed_redirect_counts_as_success() {
        // whatever the redirect target answers is not the login's concern
        let res = response(404, "https://app.example.com/dashboard?x=1", "not found");

        assert!(login_outcome(res).await.is_ok());
    }
}
