//! Domain types for the remote plant catalog, plus the wire records they are
//! decoded from.
//!
//! The wire format is loose: any plant field can be missing, `price` is
//! sometimes absent or zero, and the display category lives in either
//! `category_name` or `category`. Decoding substitutes placeholders for
//! missing fields so one bad record never blocks the rest of the list.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Price used when a plant has no usable price.
pub const DEFAULT_PRICE: u64 = 100;

pub const UNNAMED_PLANT: &str = "Unnamed plant";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const UNCATEGORIZED: &str = "Uncategorized";

pub type PlantId = u64;

/// A plant category as listed by the catalog. Identity is the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single plant listing. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub image: String,
    pub description: Option<String>,
    /// Category used for filtering.
    pub category: Option<String>,
    /// Preferred display label for the category, when the API sends one.
    pub category_name: Option<String>,
    pub price: u64,
}

impl Plant {
    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION)
    }

    /// Category label shown on cards: `category_name`, then `category`.
    pub fn display_category(&self) -> &str {
        self.category_name
            .as_deref()
            .or(self.category.as_deref())
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(UNCATEGORIZED)
    }

    /// First `max_chars` characters of the description followed by `...`.
    pub fn summary(&self, max_chars: usize) -> String {
        let short: String = self.description().chars().take(max_chars).collect();
        format!("{short}...")
    }
}

/// A plant record that could not be turned into a [`Plant`].
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedPlant {
    /// Position of the record in the `plants` array.
    pub index: usize,
    pub reason: String,
}

impl fmt::Display for MalformedPlant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed plant record #{}: {}", self.index, self.reason)
    }
}

impl std::error::Error for MalformedPlant {}

// ============================================================================
// Wire Records
// ============================================================================

#[derive(Deserialize, Debug)]
pub(crate) struct CategoriesResponse {
    pub categories: Vec<CategoryRecord>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct CategoryRecord {
    pub category_name: String,
}

/// Plants are kept as raw values so each record can be decoded on its own.
#[derive(Deserialize, Debug)]
pub(crate) struct PlantsResponse {
    pub plants: Vec<Value>,
}

/// Every field is optional and decoded leniently: a field of the wrong type
/// reads as absent and gets a placeholder instead of failing the record.
#[derive(Deserialize, Debug)]
struct PlantRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<PlantId>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    category_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    price: Option<u64>,
}

/// Strings only; anything else means "absent".
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Non-negative integers or numeric strings.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<PlantId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accepts integers, floats (rounded) and numeric strings. Anything else,
/// including zero, means "no price".
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let price = match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f.round() as u64)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| *f > 0.0)
            .map(|f| f.round() as u64),
        _ => None,
    };
    Ok(price.filter(|p| *p > 0))
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Category::new(record.category_name)
    }
}

/// Decode a single plant record, filling placeholders for missing fields.
pub fn decode_plant(index: usize, value: Value) -> Result<Plant, MalformedPlant> {
    let record: PlantRecord = serde_json::from_value(value).map_err(|e| MalformedPlant {
        index,
        reason: e.to_string(),
    })?;

    let id = record.id.ok_or_else(|| MalformedPlant {
        index,
        reason: "missing or invalid id".to_string(),
    })?;

    Ok(Plant {
        id,
        name: record
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNNAMED_PLANT.to_string()),
        image: record.image.unwrap_or_default(),
        description: record.description,
        category: record.category,
        category_name: record.category_name,
        price: record.price.unwrap_or(DEFAULT_PRICE),
    })
}

/// Decode every record, splitting usable plants from malformed ones.
pub fn decode_plants(values: Vec<Value>) -> (Vec<Plant>, Vec<MalformedPlant>) {
    let mut plants = Vec::with_capacity(values.len());
    let mut malformed = Vec::new();
    for (index, value) in values.into_iter().enumerate() {
        match decode_plant(index, value) {
            Ok(plant) => plants.push(plant),
            Err(bad) => malformed.push(bad),
        }
    }
    (plants, malformed)
}
