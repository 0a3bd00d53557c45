//! Formcheck
//!
//! Form-field validation rule engine with templated, escaped error
//! messages.
//!
//! A field's current value is checked against its declared constraints by a
//! fixed library of pure rule functions. A deterministic selector decides
//! which rules apply — type-qualified variants first, generic fallbacks
//! second — in an order that is load-bearing for first-failure UX. Failures
//! are symbolic [`ErrorKey`]s; a [`MessageCatalog`] turns them into
//! human-readable strings by rendering `${identifier}` templates against
//! the field's property bag, HTML-escaping every substituted value.
//!
//! The engine is synchronous, single-threaded, and I/O-free. Invalid input
//! is a normal return value; only programmer and configuration errors (a
//! malformed pattern fragment, a missing template) surface as faults.
//!
//! # Example
//!
//! ```rust
//! use formcheck::{ErrorKey, FieldProps, FieldValue, FormValidator};
//!
//! let mut validator = FormValidator::new();
//! let props = FieldProps::new()
//!     .with("type", "number")
//!     .with("required", true)
//!     .with("min", 0i64)
//!     .with("name", "Quantity");
//!
//! // Message-returning surface
//! let message = validator.validate(&FieldValue::Number(-1.0), &props).unwrap();
//! assert_eq!(message.as_deref(), Some("Value must be greater than or equal to 0"));
//!
//! // Code-returning surface, same rules and order
//! let key = validator.check(&FieldValue::Number(-1.0), &props).unwrap();
//! assert_eq!(key, Some(ErrorKey::Min));
//!
//! // Configuration-time template overrides
//! validator.set_messages([(ErrorKey::Min, "${name} is too small".to_string())]);
//! let message = validator.validate(&FieldValue::Number(-1.0), &props).unwrap();
//! assert_eq!(message.as_deref(), Some("Quantity is too small"));
//! ```
//!
//! # Features
//!
//! - **Default**: the core engine, no serialization
//! - **serde**: JSON property bags via `serde_json`

// Public modules
pub mod constraints;
pub mod engine;
pub mod errors;
pub mod messages;
pub mod selector;
pub mod types;
pub mod validators;

// Re-export commonly used types
pub use constraints::{ConstraintName, FieldConstraints, CONSTRAINT_ORDER};
pub use engine::FormValidator;
pub use errors::{FaultResult, ValidationFault};
pub use messages::MessageCatalog;
pub use selector::{validators_for, validators_for_props};
pub use types::{ErrorKey, FieldProps, FieldType, FieldValue};
pub use validators::ValidatorFn;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
