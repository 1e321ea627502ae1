//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer that accepts any scalar and keeps it as a string
///
/// YAML and TOML hand dates and numbers back as typed values, but the
/// known keys are plain text to consumers. Sequences and maps are
/// skipped rather than failing the whole block.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ScalarString)
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(None)
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Front-matter data from an article
///
/// Every field is optional: the block is never validated and absent
/// keys stay `None` for the consumer to handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        rename = "publishedAt",
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_at: Option<String>,
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Additional custom fields, in file order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// Format of a front-matter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    ///
    /// Never fails: an unterminated or malformed block is logged and the
    /// whole input is returned as the body.
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();

        let block = if trimmed.starts_with("---") {
            split_block(trimmed, "---")
        } else if trimmed.starts_with("+++") {
            split_block(trimmed, "+++")
                .map(|(_, block, body)| ("toml", block, body))
        } else if trimmed.starts_with(";;;") {
            split_block(trimmed, ";;;")
                .map(|(_, block, body)| ("json", block, body))
        } else {
            // No front-matter found
            return (FrontMatter::default(), trimmed);
        };

        let Some((lang, raw, body)) = block else {
            tracing::debug!("Unterminated front-matter block, treating as content");
            return (FrontMatter::default(), trimmed);
        };

        let format = match lang {
            "" | "yaml" | "yml" => Format::Yaml,
            "json" => Format::Json,
            "toml" => Format::Toml,
            other => {
                tracing::warn!("Unsupported front-matter language {:?}, treating as content", other);
                return (FrontMatter::default(), trimmed);
            }
        };

        // If the block is empty or whitespace-only, return default
        if raw.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        // A leading thematic break followed by prose is not front-matter
        if format == Format::Yaml && !looks_like_yaml(raw) {
            return (FrontMatter::default(), trimmed);
        }

        match Self::from_block(format, raw) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse {:?} front-matter, treating as content: {}",
                    format,
                    e
                );
                (FrontMatter::default(), trimmed)
            }
        }
    }

    /// Deserialize a raw block in the given format
    pub fn from_block(format: Format, raw: &str) -> anyhow::Result<Self> {
        let value: serde_yaml::Value = match format {
            Format::Yaml => serde_yaml::from_str(raw)?,
            Format::Json => serde_json::from_str(raw)?,
            Format::Toml => toml_to_yaml(toml::Value::Table(raw.parse::<toml::Table>()?)),
        };

        if value.is_null() {
            return Ok(FrontMatter::default());
        }

        Ok(serde_yaml::from_value(value)?)
    }
}

/// Split `<fence><lang>\n<block>\n<fence>\n<body>` into its parts
fn split_block<'a>(content: &'a str, fence: &str) -> Option<(&'a str, &'a str, &'a str)> {
    let first_end = content.find('\n').unwrap_or(content.len());
    let lang = content[..first_end].trim_end().strip_prefix(fence)?.trim();
    let rest = content.get(first_end + 1..).unwrap_or("");

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == fence {
            let block = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
            return Some((lang, block, body));
        }
        offset += line.len();
    }

    None
}

/// Valid YAML front-matter should have at least one line with 'key: value' pattern
fn looks_like_yaml(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = trimmed[..colon_pos].trim_matches(|c| c == '"' || c == '\'');
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        let after_colon = &trimmed[colon_pos + 1..];
        is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
    })
}

/// Convert a TOML value, rendering datetimes as their string form
fn toml_to_yaml(value: toml::Value) -> serde_yaml::Value {
    use serde_yaml::Value;

    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(f.into()),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(toml_to_yaml).collect()),
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (Value::String(k), toml_to_yaml(v)))
                .collect(),
        ),
    }
}
