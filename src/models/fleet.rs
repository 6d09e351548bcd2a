use serde::{Deserialize, Serialize};

/// A bookable vehicle class. `price_multiplier` scales the route base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub seats: u32,
    #[serde(default)]
    pub features: Vec<String>,
    pub price_multiplier: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// GET response envelope, `{"fleet": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetResponse {
    #[serde(default)]
    pub fleet: Vec<FleetItem>,
}

/// POST body for adding a vehicle. The image travels inline as base64 plus
/// its MIME type; the backend stores it and responds with a CDN URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFleetItem {
    pub name: String,
    pub category: String,
    pub seats: u32,
    pub features: Vec<String>,
    pub price_multiplier: f64,
    pub image_base64: Option<String>,
    pub image_type: String,
}

/// PUT body, partial by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetUpdate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_default_to_empty_list() {
        let json = r#"{"id": 1, "name": "Mercedes-Benz E-Class", "category": "Бизнес",
                       "seats": 3, "price_multiplier": 1.2, "active": true}"#;
        let item: FleetItem = serde_json::from_str(json).unwrap();
        assert!(item.features.is_empty());
        assert_eq!(item.image_url, None);
    }

    #[test]
    fn activation_toggle_serializes_without_multiplier() {
        let update = FleetUpdate {
            id: 3,
            price_multiplier: None,
            active: Some(true),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "active": true}));
    }
}
