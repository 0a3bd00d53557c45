//! Fault types for programmer and configuration errors
//!
//! Invalid field input is never an error in this crate: validators report it
//! as an [`ErrorKey`](crate::types::ErrorKey) and the engine renders it as a
//! message. Faults are reserved for mistakes in the calling code or its
//! configuration, and propagate as `Err` through both call surfaces.

use thiserror::Error;

use crate::types::ErrorKey;

/// Result type alias for operations that can hit a fault
pub type FaultResult<T> = std::result::Result<T, ValidationFault>;

/// Programmer or configuration errors surfaced by the engine
#[derive(Error, Debug)]
pub enum ValidationFault {
    /// The `pattern` constraint carried a fragment that does not compile
    #[error("invalid pattern fragment {pattern:?}: {source}")]
    InvalidPattern {
        /// The fragment as supplied by the caller, before anchoring
        pattern: String,
        /// The underlying regex compile error
        #[source]
        source: regex::Error,
    },

    /// No template registered for an error key
    ///
    /// The default catalog covers every built-in key; this fault can only be
    /// reached through a catalog built from a caller-supplied table.
    #[error("no message template registered for error key \"{0}\"")]
    MissingTemplate(ErrorKey),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_template_display() {
        let fault = ValidationFault::MissingTemplate(ErrorKey::Required);
        assert_eq!(
            fault.to_string(),
            "no message template registered for error key \"required\""
        );
    }

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("[").unwrap_err();
        let fault = ValidationFault::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };
        assert!(fault.to_string().starts_with("invalid pattern fragment \"[\""));
    }
}
