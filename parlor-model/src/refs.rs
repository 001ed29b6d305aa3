//! Lightweight value types embedded in catalog rows as JSONB.
//!
//! The catalog deliberately stores list-valued attributes inline on their
//! owning row instead of through join tables, so these types only need to
//! round-trip through serde.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRef {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRef {
    pub name: String,
    #[serde(default)]
    pub origin_country: String,
}

/// Doubles as a language reference; the upstream catalog treats languages
/// and countries as the same code/name pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRef {
    #[serde(default)]
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRef {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub path: String,
}

/// An externally hosted clip (trailer, blooper, behind the scenes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub source: String,
    pub url: String,
}

/// Where the watchable stream for an entry actually lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub source: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_under_the_wire_name() {
        let image = ImageRef {
            kind: "banner".to_string(),
            path: "https://cdn.example/banner.jpg".to_string(),
        };
        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value["type"], "banner");
        assert!(value.get("kind").is_none());

        let back: ImageRef = serde_json::from_value(value).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let person: PersonRef = serde_json::from_str(r#"{"name": "Keanu Reeves"}"#).unwrap();
        assert_eq!(person.name, "Keanu Reeves");
        assert!(person.picture.is_none());
    }
}
