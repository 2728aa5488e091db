use framed_theme::color::{from_argb_i64, parse_hex_color};
use indexmap::IndexMap;
use vello::peniko::Color;

/// A single declarative attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Explicitly unset.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer. Colors may be given as packed `0xAARRGGBB` integers.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
}

/// A set of declarative attributes, as read from a layout resource.
///
/// Typed getters never fail: missing keys, explicit nulls and values that do not
/// convert all yield [None], so callers fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    values: IndexMap<String, AttributeValue>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an attribute set from a TOML table.
    ///
    /// Arrays, tables and datetimes have no attribute form and are skipped.
    pub fn from_toml(table: &toml::Table) -> Self {
        let mut attrs = Self::new();

        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => AttributeValue::String(s.clone()),
                toml::Value::Integer(i) => AttributeValue::Int(*i),
                toml::Value::Float(f) => AttributeValue::Float(*f),
                toml::Value::Boolean(b) => AttributeValue::Bool(*b),
                other => {
                    log::debug!("Skipping attribute '{}' of type {}", key, other.type_str());
                    continue;
                },
            };
            attrs.set(key.clone(), value);
        }

        attrs
    }

    /// Set an attribute and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the raw value of an attribute.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    /// Returns if the attribute is present (even if null).
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get an attribute as a string. Scalars are converted to their textual form.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            AttributeValue::String(s) => Some(s.clone()),
            AttributeValue::Int(i) => Some(i.to_string()),
            AttributeValue::Float(f) => Some(f.to_string()),
            AttributeValue::Bool(b) => Some(b.to_string()),
            AttributeValue::Null => None,
        }
    }

    /// Get an attribute as a float.
    pub fn float(&self, key: &str) -> Option<f32> {
        let value = match self.get(key)? {
            AttributeValue::Float(f) => Some(*f as f32),
            AttributeValue::Int(i) => Some(*i as f32),
            AttributeValue::String(s) => s.trim().parse::<f32>().ok(),
            AttributeValue::Bool(_) | AttributeValue::Null => None,
        };

        if value.is_none() {
            log::debug!("Attribute '{}' is not a number: {:?}", key, self.get(key));
        }

        value
    }

    /// Get an attribute as a color, from a hex string or a packed integer.
    pub fn color(&self, key: &str) -> Option<Color> {
        let value = match self.get(key)? {
            AttributeValue::Int(i) => from_argb_i64(*i),
            AttributeValue::String(s) => parse_hex_color(s).ok(),
            _ => None,
        };

        if value.is_none() {
            log::debug!("Attribute '{}' is not a color: {:?}", key, self.get(key));
        }

        value
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let table: toml::Table = toml::from_str(
            r##"
            text = "Marco"
            textSize = 30
            borderRadius = 4.5
            borderColor = "#ff0000"
            nested = { a = 1 }
            "##,
        )
        .unwrap();

        let attrs = AttributeSet::from_toml(&table);
        assert_eq!(attrs.len(), 4);
        assert_eq!(attrs.string("text").as_deref(), Some("Marco"));
        assert_eq!(attrs.float("textSize"), Some(30.0));
        assert_eq!(attrs.float("borderRadius"), Some(4.5));
        assert_eq!(attrs.color("borderColor").unwrap().to_rgba8().r, 255);
        assert!(!attrs.contains("nested"));
    }

    #[test]
    fn test_null_and_garbage_fall_through() {
        let attrs = AttributeSet::new()
            .with("text", None::<String>)
            .with("textSize", "big")
            .with("borderColor", true)
            .with("borderRadius", "12.5");

        assert!(attrs.contains("text"));
        assert_eq!(attrs.string("text"), None);
        assert_eq!(attrs.float("textSize"), None);
        assert!(attrs.color("borderColor").is_none());
        assert_eq!(attrs.float("borderRadius"), Some(12.5));
        assert_eq!(attrs.float("missing"), None);
    }

    #[test]
    fn test_integer_color() {
        let attrs = AttributeSet::new().with("borderColor", 0xFF00_FF00_i64);
        let color = attrs.color("borderColor").unwrap().to_rgba8();
        assert_eq!((color.r, color.g, color.b, color.a), (0, 255, 0, 255));
    }
}
