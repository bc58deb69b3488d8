use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Resource families exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Blogs,
    Events,
    Galleries,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Blogs => "blogs",
            Family::Events => "events",
            Family::Galleries => "galleries",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque backend identifier. The API sends numbers for MySQL keys but
/// nothing stops it from sending strings, so both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accepts any non-blank string or any number.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Self(s.trim().to_string())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    /// Like [`ItemId::from_value`] but a numeric `0` counts as "no reference",
    /// matching how the backend leaves unset foreign keys.
    pub fn reference_from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Self::from_value(other),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ItemId::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid id: {}", value)))
    }
}

fn reference<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ItemId>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(ItemId::reference_from_value))
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !matches!(s.trim(), "" | "0" | "false"),
        _ => false,
    })
}

/// One row of a `GET /{family}` listing, or the entity part of a detail
/// response. Event-only columns stay `None` for other families.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListRow {
    pub id: ItemId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "reference")]
    pub cover_image_id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub images_count: u64,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_published: bool,

    // events
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_timezone: Option<String>,
    #[serde(default)]
    pub hosted_by: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ListRow {
    pub fn title(&self) -> String {
        self.title.clone().unwrap_or_default()
    }
}

/// A `GET /{family}/{id}` response after normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailRecord {
    /// `None` when the payload carried no parseable entity.
    pub entity: Option<ListRow>,
    /// Image ids in backend order.
    pub images: Vec<ItemId>,
}

/// Empty or whitespace-only strings are treated as missing.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_accept_numbers_and_strings() {
        let row: ListRow = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(row.id.as_str(), "7");

        let row: ListRow = serde_json::from_value(json!({ "id": "abc" })).unwrap();
        assert_eq!(row.id.as_str(), "abc");

        assert!(serde_json::from_value::<ListRow>(json!({ "id": null })).is_err());
    }

    #[test]
    fn unset_cover_references_are_absent() {
        for cover in [json!(null), json!(""), json!(0)] {
            let row: ListRow =
                serde_json::from_value(json!({ "id": 1, "cover_image_id": cover })).unwrap();
            assert_eq!(row.cover_image_id, None);
        }
        let row: ListRow =
            serde_json::from_value(json!({ "id": 1, "cover_image_id": 12 })).unwrap();
        assert_eq!(row.cover_image_id, Some(ItemId::new("12")));
    }

    #[test]
    fn mysql_style_columns_are_coerced() {
        let row: ListRow = serde_json::from_value(json!({
            "id": 3,
            "images_count": "4",
            "is_published": 1
        }))
        .unwrap();
        assert_eq!(row.images_count, 4);
        assert!(row.is_published);

        let row: ListRow = serde_json::from_value(json!({
            "id": 3,
            "images_count": null,
            "is_published": "0"
        }))
        .unwrap();
        assert_eq!(row.images_count, 0);
        assert!(!row.is_published);
    }
}
