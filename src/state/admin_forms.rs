use crate::models::{NewFleetItem, NewRoute};

/// The "add route" form. Inputs are kept as raw strings; parsing happens
/// once, when the payload is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteDraft {
    pub from_location: String,
    pub to_location: String,
    pub base_price: String,
    pub distance_km: String,
    pub duration_minutes: String,
}

impl RouteDraft {
    /// POST payload, or None when the price does not parse. Blank optional
    /// numerics become null on the wire.
    pub fn to_request(&self) -> Option<NewRoute> {
        let base_price = self.base_price.trim().parse().ok()?;
        Some(NewRoute {
            from_location: self.from_location.clone(),
            to_location: self.to_location.clone(),
            base_price,
            distance_km: self.distance_km.trim().parse().ok(),
            duration_minutes: self.duration_minutes.trim().parse().ok(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The "add vehicle" form. `features` is one comma-separated input;
/// `image_base64`/`image_type` are filled in by the file reader.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetDraft {
    pub name: String,
    pub category: String,
    pub seats: String,
    pub features: String,
    pub price_multiplier: String,
    pub image_base64: String,
    pub image_type: String,
}

impl Default for FleetDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            seats: String::new(),
            features: String::new(),
            price_multiplier: "1.0".to_string(),
            image_base64: String::new(),
            image_type: "image/jpeg".to_string(),
        }
    }
}

impl FleetDraft {
    /// POST payload, or None when seats or the multiplier do not parse.
    pub fn to_request(&self) -> Option<NewFleetItem> {
        let seats = self.seats.trim().parse().ok()?;
        let price_multiplier = self.price_multiplier.trim().parse().ok()?;
        Some(NewFleetItem {
            name: self.name.clone(),
            category: self.category.clone(),
            seats,
            features: split_features(&self.features),
            price_multiplier,
            image_base64: if self.image_base64.is_empty() {
                None
            } else {
                Some(self.image_base64.clone())
            },
            image_type: self.image_type.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// "Кожаный салон, Wi-Fi, Климат-контроль" → trimmed entries, empties dropped.
pub fn split_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_draft_parses_numeric_fields() {
        let draft = RouteDraft {
            from_location: "Сочи".into(),
            to_location: "Гагра".into(),
            base_price: "3500".into(),
            distance_km: "110".into(),
            duration_minutes: "".into(),
        };
        let request = draft.to_request().unwrap();
        assert_eq!(request.base_price, 3500.0);
        assert_eq!(request.distance_km, Some(110));
        assert_eq!(request.duration_minutes, None);
    }

    #[test]
    fn route_draft_without_price_builds_nothing() {
        let draft = RouteDraft {
            from_location: "Сочи".into(),
            to_location: "Гагра".into(),
            ..Default::default()
        };
        assert_eq!(draft.to_request(), None);
    }

    #[test]
    fn features_are_split_and_trimmed() {
        assert_eq!(
            split_features("Кожаный салон, Wi-Fi ,Климат-контроль"),
            vec!["Кожаный салон", "Wi-Fi", "Климат-контроль"]
        );
        assert!(split_features("  ,").is_empty());
    }

    #[test]
    fn fleet_draft_defaults_to_neutral_multiplier() {
        let draft = FleetDraft {
            name: "Mercedes-Benz V-Class".into(),
            category: "Минивэн".into(),
            seats: "6".into(),
            features: "Просторный салон".into(),
            ..Default::default()
        };
        let request = draft.to_request().unwrap();
        assert_eq!(request.price_multiplier, 1.0);
        assert_eq!(request.seats, 6);
        assert_eq!(request.image_base64, None);
        assert_eq!(request.image_type, "image/jpeg");
    }

    #[test]
    fn attached_image_travels_in_the_payload() {
        let draft = FleetDraft {
            name: "Mercedes-Benz S-Class".into(),
            category: "Премиум".into(),
            seats: "3".into(),
            image_base64: "aGVsbG8=".into(),
            image_type: "image/png".into(),
            ..Default::default()
        };
        let request = draft.to_request().unwrap();
        assert_eq!(request.image_base64.as_deref(), Some("aGVsbG8="));
        assert_eq!(request.image_type, "image/png");
    }
}
