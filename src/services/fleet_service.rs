use gloo_net::http::Request;

use crate::models::{FleetItem, FleetResponse, FleetUpdate, NewFleetItem};
use crate::services::error_message;
use crate::utils::FLEET_API_URL;

/// Fetch the vehicle catalog. `all` includes deactivated vehicles.
pub async fn fetch_fleet(all: bool) -> Result<Vec<FleetItem>, String> {
    let url = if all {
        format!("{}?all=true", FLEET_API_URL)
    } else {
        FLEET_API_URL.to_string()
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body = response
        .json::<FleetResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(body.fleet)
}

pub async fn create_fleet_item(item: &NewFleetItem) -> Result<(), String> {
    let response = Request::post(FLEET_API_URL)
        .json(item)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

pub async fn update_fleet_item(update: &FleetUpdate) -> Result<(), String> {
    let response = Request::put(FLEET_API_URL)
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
