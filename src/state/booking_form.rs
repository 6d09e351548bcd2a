use crate::models::{FleetItem, NewBooking, Route};

/// The booking form before submission. Field values mirror the inputs, so
/// everything is a string except the passenger count; the fleet `<select>`
/// value is coerced to a numeric id only when the payload is built.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub from_location: String,
    pub to_location: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub flight_number: String,
    pub passengers: u32,
    pub fleet_id: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: String::new(),
            from_location: String::new(),
            to_location: String::new(),
            pickup_date: String::new(),
            pickup_time: String::new(),
            flight_number: String::new(),
            passengers: 1,
            fleet_id: String::new(),
        }
    }
}

impl BookingDraft {
    /// Selecting an origin invalidates the destination: the destination list
    /// is always filtered by origin, so the old value may no longer be
    /// offered. Clearing it here keeps that rule in one place.
    pub fn set_origin(&mut self, from_location: String) {
        self.from_location = from_location;
        self.to_location.clear();
    }

    pub fn set_destination(&mut self, to_location: String) {
        self.to_location = to_location;
    }

    pub fn set_fleet(&mut self, fleet_id: String) {
        self.fleet_id = fleet_id;
    }

    /// The fleet `<select>` value as a numeric id. Empty or garbage → None.
    pub fn fleet_id_number(&self) -> Option<i64> {
        self.fleet_id.parse().ok()
    }

    /// Client-side estimate for the current selection, unrounded.
    pub fn estimate(&self, routes: &[Route], fleet: &[FleetItem]) -> Option<f64> {
        estimate_price(
            routes,
            fleet,
            &self.from_location,
            &self.to_location,
            self.fleet_id_number(),
        )
    }

    pub fn to_request(&self) -> NewBooking {
        NewBooking {
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            customer_email: self.customer_email.clone(),
            from_location: self.from_location.clone(),
            to_location: self.to_location.clone(),
            pickup_date: self.pickup_date.clone(),
            pickup_time: self.pickup_time.clone(),
            flight_number: self.flight_number.clone(),
            passengers: self.passengers,
            fleet_id: self.fleet_id_number(),
        }
    }

    /// Back to empty defaults, after a confirmed submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `base_price × price_multiplier` for the matching route/fleet pair, or
/// None when either half of the pair is missing from the catalogs.
pub fn estimate_price(
    routes: &[Route],
    fleet: &[FleetItem],
    from_location: &str,
    to_location: &str,
    fleet_id: Option<i64>,
) -> Option<f64> {
    let route = routes
        .iter()
        .find(|r| r.from_location == from_location && r.to_location == to_location)?;
    let vehicle = fleet.iter().find(|f| Some(f.id) == fleet_id)?;
    Some(route.base_price * vehicle.price_multiplier)
}

/// Unique departure points, in catalog order.
pub fn origins(routes: &[Route]) -> Vec<String> {
    let mut seen = Vec::new();
    for route in routes {
        if !seen.contains(&route.from_location) {
            seen.push(route.from_location.clone());
        }
    }
    seen
}

/// Destinations served from the given origin, in catalog order.
pub fn destinations_from(routes: &[Route], from_location: &str) -> Vec<String> {
    routes
        .iter()
        .filter(|r| r.from_location == from_location)
        .map(|r| r.to_location.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: i64, from: &str, to: &str, base_price: f64) -> Route {
        Route {
            id,
            from_location: from.to_string(),
            to_location: to.to_string(),
            base_price,
            distance_km: None,
            duration_minutes: None,
            active: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn vehicle(id: i64, multiplier: f64) -> FleetItem {
        FleetItem {
            id,
            name: format!("Vehicle {}", id),
            category: "Бизнес".to_string(),
            seats: 3,
            features: vec![],
            price_multiplier: multiplier,
            image_url: None,
            active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn estimate_is_base_price_times_multiplier() {
        let routes = vec![route(1, "Сочи", "Гагра", 3500.0)];
        let fleet = vec![vehicle(1, 1.2)];
        let estimate = estimate_price(&routes, &fleet, "Сочи", "Гагра", Some(1));
        assert_eq!(estimate, Some(4200.0));
    }

    #[test]
    fn no_estimate_without_matching_route() {
        let routes = vec![route(1, "Сочи", "Гагра", 3500.0)];
        let fleet = vec![vehicle(1, 1.2)];
        assert_eq!(estimate_price(&routes, &fleet, "Сочи", "Сухум", Some(1)), None);
    }

    #[test]
    fn no_estimate_without_matching_vehicle() {
        let routes = vec![route(1, "Сочи", "Гагра", 3500.0)];
        let fleet = vec![vehicle(1, 1.2)];
        assert_eq!(estimate_price(&routes, &fleet, "Сочи", "Гагра", Some(9)), None);
        assert_eq!(estimate_price(&routes, &fleet, "Сочи", "Гагра", None), None);
    }

    #[test]
    fn changing_origin_clears_destination() {
        let mut draft = BookingDraft::default();
        draft.set_origin("Сочи".to_string());
        draft.set_destination("Гагра".to_string());
        draft.set_origin("Аэропорт Адлер".to_string());
        assert_eq!(draft.from_location, "Аэропорт Адлер");
        assert_eq!(draft.to_location, "");
    }

    #[test]
    fn destinations_are_filtered_by_origin() {
        let routes = vec![
            route(1, "Сочи", "Гагра", 3500.0),
            route(2, "Сочи", "Сухум", 6000.0),
            route(3, "Аэропорт Адлер", "Гагра", 4000.0),
        ];
        assert_eq!(destinations_from(&routes, "Сочи"), vec!["Гагра", "Сухум"]);
        assert_eq!(destinations_from(&routes, "Аэропорт Адлер"), vec!["Гагра"]);
        assert!(destinations_from(&routes, "Пицунда").is_empty());
    }

    #[test]
    fn origins_are_unique_in_catalog_order() {
        let routes = vec![
            route(1, "Сочи", "Гагра", 3500.0),
            route(2, "Сочи", "Сухум", 6000.0),
            route(3, "Аэропорт Адлер", "Гагра", 4000.0),
        ];
        assert_eq!(origins(&routes), vec!["Сочи", "Аэропорт Адлер"]);
    }

    #[test]
    fn fleet_selection_coerces_to_number_or_none() {
        let mut draft = BookingDraft::default();
        assert_eq!(draft.fleet_id_number(), None);
        draft.set_fleet("2".to_string());
        assert_eq!(draft.fleet_id_number(), Some(2));
        draft.set_fleet("not-a-number".to_string());
        assert_eq!(draft.fleet_id_number(), None);
    }

    #[test]
    fn reset_restores_empty_defaults() {
        let mut draft = BookingDraft {
            customer_name: "Иван".into(),
            customer_phone: "+79001234567".into(),
            customer_email: "ivan@example.com".into(),
            from_location: "Сочи".into(),
            to_location: "Гагра".into(),
            pickup_date: "2024-07-01".into(),
            pickup_time: "14:30".into(),
            flight_number: "SU 1234".into(),
            passengers: 4,
            fleet_id: "2".into(),
        };
        draft.reset();
        assert_eq!(draft, BookingDraft::default());
        assert_eq!(draft.passengers, 1);
    }

    #[test]
    fn request_carries_the_coerced_fleet_id() {
        let mut draft = BookingDraft::default();
        draft.customer_name = "Иван".into();
        draft.set_origin("Сочи".into());
        draft.set_destination("Гагра".into());
        draft.set_fleet("1".into());
        let request = draft.to_request();
        assert_eq!(request.fleet_id, Some(1));
        assert_eq!(request.from_location, "Сочи");
        assert_eq!(request.passengers, 1);
    }
}
