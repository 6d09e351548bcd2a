use serde::{Deserialize, Serialize};

/// Booking statuses, in the order the admin select offers them.
pub const BOOKING_STATUSES: [&str; 4] = ["pending", "confirmed", "completed", "cancelled"];

/// A customer's transfer request as returned by the bookings endpoint.
/// The backend joins in `fleet_name`/`fleet_category` and the route's
/// `base_price` for display, so those come back denormalized and optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub from_location: String,
    pub to_location: String,
    pub pickup_date: String,
    pub pickup_time: String,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    #[serde(default)]
    pub fleet_id: Option<i64>,
    #[serde(default)]
    pub route_id: Option<i64>,
    #[serde(default)]
    pub total_price: f64,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub fleet_name: Option<String>,
    #[serde(default)]
    pub fleet_category: Option<String>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_passengers() -> u32 {
    1
}

/// GET response envelope, `{"bookings": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingsResponse {
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// POST body for creating a booking. Contact fields the customer left blank
/// travel as empty strings; the fleet selection is already coerced to an id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBooking {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub from_location: String,
    pub to_location: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub flight_number: String,
    pub passengers: u32,
    pub fleet_id: Option<i64>,
}

/// Create-booking response: the server-confirmed id and authoritative total.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateBookingResponse {
    #[serde(default)]
    pub success: bool,
    pub booking_id: i64,
    pub total_price: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// PUT body for a status transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingStatusUpdate {
    pub id: i64,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookings_row_parses_with_joined_fields_missing() {
        let json = r#"{
            "id": 12,
            "customer_name": "Иван Иванов",
            "customer_phone": "+7 (900) 123-45-67",
            "from_location": "Сочи",
            "to_location": "Гагра",
            "pickup_date": "2024-07-01",
            "pickup_time": "14:30:00",
            "total_price": 4200.0,
            "status": "pending"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.passengers, 1);
        assert_eq!(booking.fleet_name, None);
        assert_eq!(booking.total_price, 4200.0);
    }

    #[test]
    fn unselected_fleet_serializes_as_null() {
        let request = NewBooking {
            customer_name: "Иван".into(),
            customer_phone: "+79001234567".into(),
            customer_email: String::new(),
            from_location: "Сочи".into(),
            to_location: "Гагра".into(),
            pickup_date: "2024-07-01".into(),
            pickup_time: "14:30".into(),
            flight_number: String::new(),
            passengers: 1,
            fleet_id: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fleet_id"], serde_json::Value::Null);
    }
}
