use serde::{Deserialize, Serialize};

/// A priced origin–destination pair from the route catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: i64,
    pub from_location: String,
    pub to_location: String,
    pub base_price: f64,
    #[serde(default)]
    pub distance_km: Option<i64>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// GET response envelope, `{"routes": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// POST body for creating a route. Blank optional numerics go out as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRoute {
    pub from_location: String,
    pub to_location: String,
    pub base_price: f64,
    pub distance_km: Option<i64>,
    pub duration_minutes: Option<i64>,
}

/// PUT body, partial by id. Only the fields being changed are serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteUpdate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_when_routes_key_missing() {
        let parsed: RoutesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.routes.is_empty());
    }

    #[test]
    fn partial_update_serializes_only_set_fields() {
        let update = RouteUpdate {
            id: 7,
            base_price: None,
            active: Some(false),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "active": false}));
    }
}
