//! Typed constraint record and the constraint filter
//!
//! [`FieldConstraints`] is the narrow, typed view of a property bag that
//! validators are allowed to see. The filter keeps only the recognized
//! constraint keys, so unrelated caller-side metadata never leaks into rule
//! evaluation.

use crate::types::{FieldProps, FieldType, FieldValue};

// ============================================================================
// Constraint names
// ============================================================================

/// Names of the checkable constraint slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintName {
    /// `required`
    Required,
    /// `min`
    Min,
    /// `max`
    Max,
    /// `pattern`
    Pattern,
    /// `maxLength`
    MaxLength,
}

/// Canonical evaluation order of the constraint slots
///
/// The order is load-bearing: it decides which failure a first-error caller
/// reports when several rules fail at once.
pub const CONSTRAINT_ORDER: [ConstraintName; 5] = [
    ConstraintName::Required,
    ConstraintName::Min,
    ConstraintName::Max,
    ConstraintName::Pattern,
    ConstraintName::MaxLength,
];

impl ConstraintName {
    /// Property key carrying this constraint
    pub fn key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::Pattern => "pattern",
            Self::MaxLength => "maxLength",
        }
    }
}

// ============================================================================
// FieldConstraints
// ============================================================================

/// Structured declaration of a field's checkable rules
///
/// Constructed fresh from a property bag per validation pass via
/// [`FieldConstraints::from_props`]. Bound values are preserved exactly as
/// supplied (a string `"1"` min stays a string); coercion happens inside the
/// individual validators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConstraints {
    /// Parsed `type` discriminator, if recognized
    pub field_type: Option<FieldType>,
    /// `required` as declared; only a literal `false` disables the check
    pub required: Option<FieldValue>,
    /// Lower bound (numeric or ISO-8601 string, depending on the type)
    pub min: Option<FieldValue>,
    /// Upper bound (numeric or ISO-8601 string, depending on the type)
    pub max: Option<FieldValue>,
    /// Regular-expression fragment for the `pattern` rule
    pub pattern: Option<String>,
    /// Maximum character count
    pub max_length: Option<FieldValue>,
}

impl FieldConstraints {
    /// Extract the recognized validation constraints from a property bag
    ///
    /// Keeps only the keys `type`, `required`, `min`, `max`, `pattern`, and
    /// `maxLength` whose value is present and non-null. A `false` or `0`
    /// value IS kept — only absence and null are excluded.
    ///
    /// # Example
    /// ```
    /// use formcheck::{FieldConstraints, FieldProps};
    ///
    /// let props = FieldProps::new()
    ///     .with("min", "1")
    ///     .with("foo", "bar")
    ///     .with("required", false);
    /// let constraints = FieldConstraints::from_props(&props);
    /// assert_eq!(constraints.defined_len(), 2);
    /// ```
    pub fn from_props(props: &FieldProps) -> Self {
        let defined = |key: &str| props.get(key).filter(|value| !value.is_null());

        Self {
            field_type: defined("type")
                .and_then(FieldValue::as_str)
                .and_then(FieldType::parse),
            required: defined("required").cloned(),
            min: defined("min").cloned(),
            max: defined("max").cloned(),
            pattern: defined("pattern")
                .and_then(FieldValue::as_str)
                .map(str::to_string),
            max_length: defined("maxLength").cloned(),
        }
    }

    /// Number of constraint slots that are declared
    pub fn defined_len(&self) -> usize {
        usize::from(self.field_type.is_some())
            + usize::from(self.required.is_some())
            + usize::from(self.min.is_some())
            + usize::from(self.max.is_some())
            + usize::from(self.pattern.is_some())
            + usize::from(self.max_length.is_some())
    }

    /// Whether the caller explicitly opted out of the required check
    ///
    /// Matches only a literal boolean `false`; an absent `required` still
    /// leaves the check armed once selected.
    pub(crate) fn required_disabled(&self) -> bool {
        matches!(self.required, Some(FieldValue::Bool(false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_defined_falsy_values() {
        let props = FieldProps::new()
            .with("min", "1")
            .with("foo", "bar")
            .with("required", false);
        let constraints = FieldConstraints::from_props(&props);

        assert_eq!(constraints.defined_len(), 2);
        assert_eq!(constraints.min, Some(FieldValue::String("1".to_string())));
        assert_eq!(constraints.required, Some(FieldValue::Bool(false)));
        assert!(constraints.pattern.is_none());
    }

    #[test]
    fn test_filter_drops_null() {
        let props = FieldProps::new()
            .with("min", FieldValue::Null)
            .with("max", 10i64);
        let constraints = FieldConstraints::from_props(&props);

        assert!(constraints.min.is_none());
        assert_eq!(constraints.max, Some(FieldValue::Number(10.0)));
    }

    #[test]
    fn test_filter_parses_type() {
        let props = FieldProps::new().with("type", "date");
        assert_eq!(
            FieldConstraints::from_props(&props).field_type,
            Some(FieldType::Date)
        );

        let props = FieldProps::new().with("type", "carousel");
        assert_eq!(FieldConstraints::from_props(&props).field_type, None);
    }

    #[test]
    fn test_required_disabled() {
        let explicit_off = FieldConstraints {
            required: Some(FieldValue::Bool(false)),
            ..Default::default()
        };
        assert!(explicit_off.required_disabled());

        // Absent and truthy declarations leave the check armed
        assert!(!FieldConstraints::default().required_disabled());
        let truthy = FieldConstraints {
            required: Some(FieldValue::String("yes".to_string())),
            ..Default::default()
        };
        assert!(!truthy.required_disabled());
    }

    #[test]
    fn test_constraint_order() {
        assert_eq!(CONSTRAINT_ORDER[0], ConstraintName::Required);
        assert_eq!(CONSTRAINT_ORDER[4], ConstraintName::MaxLength);
        assert_eq!(ConstraintName::MaxLength.key(), "maxLength");
    }
}
