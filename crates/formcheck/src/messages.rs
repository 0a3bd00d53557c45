//! Message catalog and template rendering
//!
//! Maps error keys to parameterized templates and renders them against a
//! property bag. Placeholders use the `${identifier}` form; substituted
//! values are HTML-escaped so the result is safe to embed in markup.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::{FaultResult, ValidationFault};
use crate::types::{ErrorKey, FieldProps};

/// `${identifier}` placeholder scanner
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]*)\}").unwrap());

// ============================================================================
// MessageCatalog
// ============================================================================

/// Catalog of error-kind → message-template mappings
///
/// [`MessageCatalog::new`] registers a default template for every built-in
/// [`ErrorKey`]; entries change only through explicit [`set`](Self::set)
/// merges and live for the catalog's lifetime. The catalog has no internal
/// locking — overrides belong to configuration time, before steady-state
/// validation traffic begins, and a writer racing in-flight renders gets
/// last-write-wins with readers observing either template.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<ErrorKey, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(ErrorKey::Required, "Please fill out this field".to_string());
        templates.insert(
            ErrorKey::Min,
            "Value must be greater than or equal to ${min}".to_string(),
        );
        templates.insert(
            ErrorKey::Max,
            "Value must be less than or equal to ${max}".to_string(),
        );
        templates.insert(ErrorKey::Url, "Please enter a URL".to_string());
        templates.insert(
            ErrorKey::Email,
            "Please include a valid e-mail address".to_string(),
        );
        templates.insert(
            ErrorKey::Pattern,
            "Please match the requested format".to_string(),
        );
        templates.insert(
            ErrorKey::MaxLength,
            "Value must have no more than ${maxLength} characters".to_string(),
        );
        Self { templates }
    }
}

impl MessageCatalog {
    /// Create a catalog with the default template for every error key
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a caller-supplied table
    ///
    /// The caller owns completeness: [`get`](Self::get) fails loudly for
    /// any key the table leaves out.
    pub fn from_templates(templates: impl IntoIterator<Item = (ErrorKey, String)>) -> Self {
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    /// Render the template registered for an error key
    ///
    /// Each `${identifier}` placeholder (identifier trimmed of surrounding
    /// whitespace) substitutes the HTML-escaped display form of the matching
    /// property; identifiers with no matching property render as the empty
    /// string, the escape hatch for optional parameters. A key with no
    /// registered template is a configuration bug and fails with
    /// [`ValidationFault::MissingTemplate`] rather than rendering empty
    /// text.
    ///
    /// # Example
    /// ```
    /// use formcheck::{ErrorKey, FieldProps, MessageCatalog};
    ///
    /// let catalog = MessageCatalog::new();
    /// let props = FieldProps::new().with("min", 5i64);
    /// let message = catalog.get(ErrorKey::Min, &props).unwrap();
    /// assert_eq!(message, "Value must be greater than or equal to 5");
    /// ```
    pub fn get(&self, key: ErrorKey, props: &FieldProps) -> FaultResult<String> {
        let template = self
            .templates
            .get(&key)
            .ok_or(ValidationFault::MissingTemplate(key))?;
        Ok(render(template, props))
    }

    /// Look up the raw template for a key
    pub fn template(&self, key: ErrorKey) -> Option<&str> {
        self.templates.get(&key).map(String::as_str)
    }

    /// Shallow-merge template overrides into the catalog
    ///
    /// Per key, later calls win; keys absent from `overrides` keep their
    /// prior templates. No versioning, no rollback.
    ///
    /// # Example
    /// ```
    /// use formcheck::{ErrorKey, FieldProps, MessageCatalog};
    ///
    /// let mut catalog = MessageCatalog::new();
    /// catalog.set([(ErrorKey::Required, "Please fill out ${name}".to_string())]);
    ///
    /// let props = FieldProps::new().with("name", "Foo");
    /// assert_eq!(catalog.get(ErrorKey::Required, &props).unwrap(), "Please fill out Foo");
    /// ```
    pub fn set(&mut self, overrides: impl IntoIterator<Item = (ErrorKey, String)>) {
        let mut merged = 0usize;
        for (key, template) in overrides {
            self.templates.insert(key, template);
            merged += 1;
        }
        tracing::debug!(merged, "message catalog overrides applied");
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn render(template: &str, props: &FieldProps) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let identifier = caps[1].trim();
            match props.get(identifier) {
                Some(value) => html_escape(&value.to_display_string()),
                None => String::new(),
            }
        })
        .into_owned()
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_covers_every_key() {
        let catalog = MessageCatalog::new();
        for key in ErrorKey::ALL {
            assert!(catalog.template(key).is_some(), "no default for {key}");
        }
    }

    #[test]
    fn test_render_substitutes_variables() {
        let catalog = MessageCatalog::new();
        let props = FieldProps::new().with("maxLength", 4i64);
        assert_eq!(
            catalog.get(ErrorKey::MaxLength, &props).unwrap(),
            "Value must have no more than 4 characters"
        );
    }

    #[test]
    fn test_render_missing_variable_is_empty() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.get(ErrorKey::Min, &FieldProps::new()).unwrap(),
            "Value must be greater than or equal to "
        );
    }

    #[test]
    fn test_render_trims_identifier_whitespace() {
        let mut catalog = MessageCatalog::new();
        catalog.set([(ErrorKey::Min, "at least ${ min }".to_string())]);
        let props = FieldProps::new().with("min", 3i64);
        assert_eq!(catalog.get(ErrorKey::Min, &props).unwrap(), "at least 3");
    }

    #[test]
    fn test_render_escapes_html() {
        let mut catalog = MessageCatalog::new();
        catalog.set([(ErrorKey::Required, "Please fill out ${name}".to_string())]);
        let props = FieldProps::new().with("name", "<b>Foo & \"Bar\"</b>");
        assert_eq!(
            catalog.get(ErrorKey::Required, &props).unwrap(),
            "Please fill out &lt;b&gt;Foo &amp; &quot;Bar&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_set_merges_and_keeps_other_keys() {
        let mut catalog = MessageCatalog::new();
        catalog.set([(ErrorKey::Required, "Please fill out ${name}".to_string())]);

        let props = FieldProps::new().with("name", "Foo");
        assert_eq!(
            catalog.get(ErrorKey::Required, &props).unwrap(),
            "Please fill out Foo"
        );
        // Untouched keys retain their defaults
        assert_eq!(
            catalog.get(ErrorKey::Url, &props).unwrap(),
            "Please enter a URL"
        );

        // Later calls win per key
        catalog.set([(ErrorKey::Required, "${name} is required".to_string())]);
        assert_eq!(
            catalog.get(ErrorKey::Required, &props).unwrap(),
            "Foo is required"
        );
    }

    #[test]
    fn test_missing_template_fails_loudly() {
        let catalog = MessageCatalog::from_templates([(
            ErrorKey::Required,
            "Required".to_string(),
        )]);
        let fault = catalog.get(ErrorKey::Min, &FieldProps::new()).unwrap_err();
        assert!(matches!(fault, ValidationFault::MissingTemplate(ErrorKey::Min)));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("it's"), "it&#x27;s");
    }
}
