use serde::{Deserialize, Deserializer, Serialize};

/// Brand filter for the car listing
///
/// `All` maps to an empty `brand` query value, which the backend treats
/// as "no filter".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Brand {
    #[default]
    All,
    Fiat,
    Citroen,
    Renault,
    Opel,
    Toyota,
}

impl Brand {
    /// Every selectable filter value, in tab order
    pub const ALL: [Brand; 6] = [
        Brand::All,
        Brand::Fiat,
        Brand::Citroen,
        Brand::Renault,
        Brand::Opel,
        Brand::Toyota,
    ];

    /// Value sent as the `brand` query parameter (empty for no filter)
    pub fn query_value(&self) -> &'static str {
        match self {
            Brand::All => "",
            Brand::Fiat => "Fiat",
            Brand::Citroen => "Citroen",
            Brand::Renault => "Renault",
            Brand::Opel => "Opel",
            Brand::Toyota => "Toyota",
        }
    }

    /// Label for the brand selector tab row
    pub fn label(&self) -> &'static str {
        match self {
            Brand::All => "All cars",
            other => other.query_value(),
        }
    }

    /// Name shown in the heading ("Cars - all brands" when unfiltered)
    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::All => "all brands",
            other => other.query_value(),
        }
    }

    pub fn next(&self) -> Brand {
        match self {
            Brand::All => Brand::Fiat,
            Brand::Fiat => Brand::Citroen,
            Brand::Citroen => Brand::Renault,
            Brand::Renault => Brand::Opel,
            Brand::Opel => Brand::Toyota,
            Brand::Toyota => Brand::All,
        }
    }

    pub fn prev(&self) -> Brand {
        match self {
            Brand::All => Brand::Toyota,
            Brand::Fiat => Brand::All,
            Brand::Citroen => Brand::Fiat,
            Brand::Renault => Brand::Citroen,
            Brand::Opel => Brand::Renault,
            Brand::Toyota => Brand::Opel,
        }
    }

    /// Tab index lookup, for direct selection with the number keys
    pub fn from_index(index: usize) -> Option<Brand> {
        Brand::ALL.get(index).copied()
    }
}

/// A single car listing as returned by the backend
///
/// Only `id` is guaranteed; the remaining fields default when absent so a
/// partially-shaped record still renders as a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(alias = "_id", deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub km: i64,
    #[serde(default)]
    pub cm3: i32,
}

/// The backend serializes ObjectIds as strings, but fixtures and other
/// servers use plain integers. Accept both.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "car id must be a string or number, got {other}"
        ))),
    }
}

/// Response body of `GET /cars`: `{ "cars": [...] }`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CarPage {
    pub cars: Vec<Car>,
}

/// Outcome of one completed fetch, for the activity log
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Loaded(usize),
    Failed(String),
    Cancelled,
}

/// One entry in the in-memory fetch log
#[derive(Clone, Debug)]
pub struct FetchLogEntry {
    pub brand: Brand,
    pub outcome: FetchOutcome,
    pub time_ms: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_match_backend_filter_set() {
        let values: Vec<&str> = Brand::ALL.iter().map(|b| b.query_value()).collect();
        assert_eq!(values, ["", "Fiat", "Citroen", "Renault", "Opel", "Toyota"]);
    }

    #[test]
    fn brand_cycle_is_closed() {
        let mut brand = Brand::All;
        for _ in 0..Brand::ALL.len() {
            brand = brand.next();
        }
        assert_eq!(brand, Brand::All);
        assert_eq!(Brand::All.prev(), Brand::Toyota);
        assert_eq!(Brand::Fiat.prev(), Brand::All);
    }

    #[test]
    fn heading_uses_all_brands_literal() {
        assert_eq!(Brand::All.display_name(), "all brands");
        assert_eq!(Brand::Opel.display_name(), "Opel");
    }

    #[test]
    fn car_page_decodes_in_order() {
        let body = r#"{"cars":[
            {"id":"abc123","brand":"Fiat","make":"500","year":2019,"price":9500,"km":42000,"cm3":900},
            {"id":"def456","brand":"Opel","make":"Corsa","year":2016,"price":7200,"km":88000,"cm3":1200}
        ]}"#;
        let page: CarPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.cars.len(), 2);
        assert_eq!(page.cars[0].id, "abc123");
        assert_eq!(page.cars[1].make, "Corsa");
    }

    #[test]
    fn car_accepts_numeric_id_and_missing_fields() {
        let page: CarPage = serde_json::from_str(r#"{"cars":[{"id":1},{"id":2}]}"#).unwrap();
        assert_eq!(page.cars[0].id, "1");
        assert_eq!(page.cars[1].id, "2");
        assert_eq!(page.cars[0].make, "");
        assert_eq!(page.cars[0].price, 0);
    }

    #[test]
    fn car_accepts_mongo_style_id_alias() {
        let car: Car = serde_json::from_str(r#"{"_id":"64a0","brand":"Toyota"}"#).unwrap();
        assert_eq!(car.id, "64a0");
    }

    #[test]
    fn empty_car_page_is_valid() {
        let page: CarPage = serde_json::from_str(r#"{"cars":[]}"#).unwrap();
        assert!(page.cars.is_empty());
    }
}
