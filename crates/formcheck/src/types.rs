//! Core types for field validation
//!
//! This module defines the runtime value model for form fields, the field
//! type discriminator, the closed set of error keys, and the open property
//! bag that carries both constraint keys and template variables.

use std::collections::HashMap;
use std::fmt;

// ============================================================================
// FieldValue - Runtime values under validation
// ============================================================================

/// Current content of a form field
///
/// Values are passed by the caller per validation call and never retained.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value (unset field)
    Null,
    /// Boolean value (checkbox-like fields)
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value
    String(String),
}

impl FieldValue {
    /// Get human-readable type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }

    /// Check if the value is absent
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the value counts as blank for the generic `required` rule
    ///
    /// Blank means absent, `false`, or a string that is empty or contains
    /// only whitespace. Numbers are never blank (zero included); `true` is
    /// not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Number(_) => false,
            Self::String(s) => s.trim().is_empty(),
        }
    }

    /// Coerce the value to a number for range comparison
    ///
    /// Numbers pass through; strings are trimmed and parsed as `f64`.
    /// Booleans, absent values, and unparsable strings yield `None`, which
    /// range validators treat as "no operand, no check".
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(s) => s.trim().parse().ok(),
            Self::Null | Self::Bool(_) => None,
        }
    }

    /// Borrow the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// String form used for template substitution and pattern matching
    ///
    /// Absent values render empty; integral floats print without a trailing
    /// fraction (`4`, not `4.0`).
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

// ============================================================================
// FieldType - Discriminator for type-qualified validators
// ============================================================================

/// Field type discriminator
///
/// Selects which type-qualified validators take precedence over generic
/// ones. Unrecognized type strings parse to no type, leaving only the
/// generic validators in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Numeric input
    Number,
    /// ISO-8601 date input (YYYY-MM-DD)
    Date,
    /// ISO-8601 time input (HH:MM)
    Time,
    /// E-mail input
    Email,
    /// URL input
    Url,
    /// Free text input
    Text,
}

impl FieldType {
    /// Parse a declared `type` property value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "number" => Some(Self::Number),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "email" => Some(Self::Email),
            "url" => Some(Self::Url),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Canonical property value for this type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Email => "email",
            Self::Url => "url",
            Self::Text => "text",
        }
    }
}

// ============================================================================
// ErrorKey - Closed set of rule failure identifiers
// ============================================================================

/// Identifies which constraint failed
///
/// Keys carry no message text; the [`MessageCatalog`](crate::MessageCatalog)
/// maps them to templates. Numeric, date, and time range failures share the
/// `Min`/`Max` keys — presentation distinguishes them purely through which
/// template variables are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    /// Blank value on a required field
    Required,
    /// Value below the declared minimum
    Min,
    /// Value above the declared maximum
    Max,
    /// Value is not a web URL
    Url,
    /// Value is not an e-mail address
    Email,
    /// Value does not match the declared pattern
    Pattern,
    /// Value exceeds the declared maximum length
    MaxLength,
}

impl ErrorKey {
    /// All error keys, in no significant order
    pub const ALL: [ErrorKey; 7] = [
        Self::Required,
        Self::Min,
        Self::Max,
        Self::Url,
        Self::Email,
        Self::Pattern,
        Self::MaxLength,
    ];

    /// Canonical identifier for this key
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::Url => "url",
            Self::Email => "email",
            Self::Pattern => "pattern",
            Self::MaxLength => "maxLength",
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FieldProps - Open property bag
// ============================================================================

/// Open property bag supplied per field
///
/// Carries the recognized constraint keys together with arbitrary template
/// variables such as a display `name`. Validators never read this directly;
/// [`FieldConstraints`](crate::FieldConstraints) narrows it first, and the
/// full bag is consulted again only at message render time.
#[derive(Debug, Clone, Default)]
pub struct FieldProps {
    entries: HashMap<String, FieldValue>,
}

impl FieldProps {
    /// Create an empty property bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Insert a property, chaining style
    ///
    /// # Example
    /// ```
    /// use formcheck::FieldProps;
    ///
    /// let props = FieldProps::new()
    ///     .with("type", "number")
    ///     .with("min", 0i64)
    ///     .with("name", "Quantity");
    /// assert!(props.contains("min"));
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a property by name
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// Check whether a property is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of properties in the bag
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the properties
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ============================================================================
// JSON interop (feature-gated)
// ============================================================================

#[cfg(feature = "serde")]
impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(b),
            FieldValue::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::String(s) => serde_json::Value::String(s),
        }
    }
}

#[cfg(feature = "serde")]
impl FieldValue {
    /// Convert a scalar JSON value
    ///
    /// Arrays and objects have no field-value counterpart and yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Self::Null),
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(Self::Number),
            serde_json::Value::String(s) => Some(Self::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

#[cfg(feature = "serde")]
impl FieldProps {
    /// Build a property bag from a JSON object, keeping scalar members only
    ///
    /// Returns `None` if the value is not an object.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut props = Self::new();
        for (key, member) in object {
            if let Some(field_value) = FieldValue::from_json(member) {
                props.insert(key.clone(), field_value);
            }
        }
        Some(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(FieldValue::Null.is_blank());
        assert!(FieldValue::Bool(false).is_blank());
        assert!(FieldValue::String(String::new()).is_blank());
        assert!(FieldValue::String(" \t".to_string()).is_blank());

        assert!(!FieldValue::Bool(true).is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
        assert!(!FieldValue::String("foo".to_string()).is_blank());
    }

    #[test]
    fn test_as_number_coercion() {
        assert_eq!(FieldValue::Number(4.5).as_number(), Some(4.5));
        assert_eq!(FieldValue::String("1".to_string()).as_number(), Some(1.0));
        assert_eq!(FieldValue::String(" 2.5 ".to_string()).as_number(), Some(2.5));

        assert_eq!(FieldValue::String("abc".to_string()).as_number(), None);
        assert_eq!(FieldValue::Bool(true).as_number(), None);
        assert_eq!(FieldValue::Null.as_number(), None);
    }

    #[test]
    fn test_to_display_string() {
        assert_eq!(FieldValue::Null.to_display_string(), "");
        assert_eq!(FieldValue::Bool(true).to_display_string(), "true");
        assert_eq!(FieldValue::Number(4.0).to_display_string(), "4");
        assert_eq!(FieldValue::Number(4.5).to_display_string(), "4.5");
        assert_eq!(FieldValue::String("x".to_string()).to_display_string(), "x");
    }

    #[test]
    fn test_field_type_parse() {
        assert_eq!(FieldType::parse("number"), Some(FieldType::Number));
        assert_eq!(FieldType::parse("date"), Some(FieldType::Date));
        assert_eq!(FieldType::parse("time"), Some(FieldType::Time));
        assert_eq!(FieldType::parse("email"), Some(FieldType::Email));
        assert_eq!(FieldType::parse("url"), Some(FieldType::Url));
        assert_eq!(FieldType::parse("text"), Some(FieldType::Text));
        assert_eq!(FieldType::parse("checkbox"), None);
        assert_eq!(FieldType::parse("Number"), None);
    }

    #[test]
    fn test_error_key_identifiers() {
        assert_eq!(ErrorKey::Required.as_str(), "required");
        assert_eq!(ErrorKey::MaxLength.as_str(), "maxLength");
        assert_eq!(ErrorKey::Min.to_string(), "min");
        assert_eq!(ErrorKey::ALL.len(), 7);
    }

    #[test]
    fn test_props_bag() {
        let props = FieldProps::new()
            .with("type", "number")
            .with("min", 0i64)
            .with("name", "Quantity");

        assert_eq!(props.len(), 3);
        assert_eq!(props.get("type"), Some(&FieldValue::String("number".to_string())));
        assert_eq!(props.get("min"), Some(&FieldValue::Number(0.0)));
        assert!(props.get("max").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_props_from_json() {
        let json = serde_json::json!({
            "type": "number",
            "min": 1,
            "required": false,
            "tags": ["ignored"],
        });
        let props = FieldProps::from_json(&json).unwrap();
        assert_eq!(props.len(), 3);
        assert_eq!(props.get("required"), Some(&FieldValue::Bool(false)));
        assert!(props.get("tags").is_none());

        assert!(FieldProps::from_json(&serde_json::json!("not an object")).is_none());
    }
}
