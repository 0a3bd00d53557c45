//! Validation engine
//!
//! Ties the constraint filter, selector, validators, and message catalog
//! together behind an owning handle. The message-returning surface is
//! exactly the code-returning surface composed with
//! [`MessageCatalog::get`] — there is one rule set, rendered or not.

use crate::constraints::FieldConstraints;
use crate::errors::FaultResult;
use crate::messages::MessageCatalog;
use crate::selector;
use crate::types::{ErrorKey, FieldProps, FieldValue};

/// Form-field validator owning its message catalog
///
/// There is no ambient global catalog: whoever renders messages holds a
/// handle. Catalog overrides follow the single-writer discipline described
/// on [`MessageCatalog`] — configure first, validate after.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    catalog: MessageCatalog,
}

impl FormValidator {
    /// Create a validator with the default message catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator around an existing catalog
    pub fn with_catalog(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    /// Borrow the message catalog
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Mutably borrow the message catalog
    pub fn catalog_mut(&mut self) -> &mut MessageCatalog {
        &mut self.catalog
    }

    /// Merge message template overrides into the catalog
    pub fn set_messages(&mut self, overrides: impl IntoIterator<Item = (ErrorKey, String)>) {
        self.catalog.set(overrides);
    }

    /// Code-returning surface: the first failing rule's key
    ///
    /// Filters the property bag into typed constraints, resolves the
    /// applicable validators in canonical order, and runs them until one
    /// fails. `Ok(None)` means the value is valid.
    pub fn check(
        &self,
        value: &FieldValue,
        props: &FieldProps,
    ) -> FaultResult<Option<ErrorKey>> {
        let constraints = FieldConstraints::from_props(props);
        for action in selector::validators_for(&constraints) {
            if let Some(key) = action(value, &constraints)? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    /// Code-returning surface, collect-all policy
    ///
    /// Runs every applicable validator and returns the failing keys in
    /// canonical order. Same rule set and order as [`check`](Self::check);
    /// only the multiplicity policy differs.
    pub fn check_all(
        &self,
        value: &FieldValue,
        props: &FieldProps,
    ) -> FaultResult<Vec<ErrorKey>> {
        let constraints = FieldConstraints::from_props(props);
        let mut failures = Vec::new();
        for action in selector::validators_for(&constraints) {
            if let Some(key) = action(value, &constraints)? {
                failures.push(key);
            }
        }
        Ok(failures)
    }

    /// Message-returning surface: the first failing rule, rendered
    ///
    /// The failing key's template is rendered against the FULL property
    /// bag, so display-only extras like `name` are available to templates
    /// alongside the constraint values.
    ///
    /// # Example
    /// ```
    /// use formcheck::{FieldProps, FieldValue, FormValidator};
    ///
    /// let validator = FormValidator::new();
    /// let props = FieldProps::new()
    ///     .with("type", "number")
    ///     .with("required", true)
    ///     .with("min", 0i64);
    ///
    /// let message = validator.validate(&FieldValue::Number(-1.0), &props).unwrap();
    /// assert_eq!(message.as_deref(), Some("Value must be greater than or equal to 0"));
    ///
    /// assert!(validator.validate(&FieldValue::Number(3.0), &props).unwrap().is_none());
    /// ```
    pub fn validate(
        &self,
        value: &FieldValue,
        props: &FieldProps,
    ) -> FaultResult<Option<String>> {
        match self.check(value, props)? {
            Some(key) => Ok(Some(self.catalog.get(key, props)?)),
            None => Ok(None),
        }
    }
}
