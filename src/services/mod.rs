// Services are stateless: HTTP communication only, no business logic.

pub mod booking_service;
pub mod fleet_service;
pub mod route_service;

pub use booking_service::*;
pub use fleet_service::*;
pub use route_service::*;

use gloo_net::http::Response;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Error text for a non-success response: the backend's `error` field when
/// the body carries one, otherwise the bare status code.
pub(crate) async fn error_message(response: Response) -> String {
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody { error: Some(message) }) => message,
        _ => format!("HTTP {}", response.status()),
    }
}
