use gloo_net::http::Request;

use crate::models::{
    Booking, BookingStatusUpdate, BookingsResponse, CreateBookingResponse, NewBooking,
};
use crate::services::error_message;
use crate::utils::BOOKINGS_API_URL;

/// Fetch bookings. The public form never lists bookings, so in practice this
/// is always called with `all = true` from the admin.
pub async fn fetch_bookings(all: bool) -> Result<Vec<Booking>, String> {
    let url = if all {
        format!("{}?all=true", BOOKINGS_API_URL)
    } else {
        BOOKINGS_API_URL.to_string()
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body = response
        .json::<BookingsResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(body.bookings)
}

/// Submit a booking. The response carries the server-confirmed id and the
/// authoritative total price.
pub async fn create_booking(booking: &NewBooking) -> Result<CreateBookingResponse, String> {
    let response = Request::post(BOOKINGS_API_URL)
        .json(booking)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<CreateBookingResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn update_booking_status(id: i64, status: &str) -> Result<(), String> {
    let update = BookingStatusUpdate {
        id,
        status: status.to_string(),
    };
    let response = Request::put(BOOKINGS_API_URL)
        .json(&update)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}
