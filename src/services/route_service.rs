use gloo_net::http::Request;

use crate::models::{NewRoute, Route, RouteUpdate, RoutesResponse};
use crate::services::error_message;
use crate::utils::ROUTES_API_URL;

/// Fetch the route catalog. `all` bypasses the backend's active-only filter
/// (the admin needs deactivated rows too).
pub async fn fetch_routes(all: bool) -> Result<Vec<Route>, String> {
    let url = if all {
        format!("{}?all=true", ROUTES_API_URL)
    } else {
        ROUTES_API_URL.to_string()
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body = response
        .json::<RoutesResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(body.routes)
}

pub async fn create_route(route: &NewRoute) -> Result<(), String> {
    let response = Request::post(ROUTES_API_URL)
        .json(route)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

pub async fn update_route(update: &RouteUpdate) -> Result<(), String> {
    let response = Request::put(ROUTES_API_URL)
        .json(update)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}
