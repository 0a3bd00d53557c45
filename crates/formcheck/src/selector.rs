//! Deterministic validator selection
//!
//! Resolves the ordered list of validators that apply to a field, given its
//! type and constraints. The original dynamic `"{type}_{constraint}"` key
//! dispatch is expressed here as two explicit match tables — qualified by
//! `(FieldType, ConstraintName)`, then generic by name — so the fallback
//! rule is an ordered pair of lookups instead of string concatenation.

use crate::constraints::{ConstraintName, FieldConstraints, CONSTRAINT_ORDER};
use crate::types::{FieldProps, FieldType};
use crate::validators::{self, ValidatorFn};

// ============================================================================
// Lookup tables
// ============================================================================

/// Base validator implied by the field type itself
fn base_validator(field_type: FieldType) -> Option<ValidatorFn> {
    match field_type {
        FieldType::Email => Some(validators::email),
        FieldType::Url => Some(validators::url),
        _ => None,
    }
}

/// Type-qualified validator for a constraint slot
fn qualified_validator(field_type: FieldType, name: ConstraintName) -> Option<ValidatorFn> {
    match (field_type, name) {
        (FieldType::Number, ConstraintName::Required) => Some(validators::number_required),
        (FieldType::Number, ConstraintName::Min) => Some(validators::number_min),
        (FieldType::Number, ConstraintName::Max) => Some(validators::number_max),
        (FieldType::Date | FieldType::Time, ConstraintName::Min) => Some(validators::timestamp_min),
        (FieldType::Date | FieldType::Time, ConstraintName::Max) => Some(validators::timestamp_max),
        _ => None,
    }
}

/// Generic, type-independent validator for a constraint slot
///
/// There are no generic range validators: `min`/`max` only make sense once
/// a type says how to compare.
fn generic_validator(name: ConstraintName) -> Option<ValidatorFn> {
    match name {
        ConstraintName::Required => Some(validators::required),
        ConstraintName::Pattern => Some(validators::pattern),
        ConstraintName::MaxLength => Some(validators::max_length),
        ConstraintName::Min | ConstraintName::Max => None,
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Resolve the validators that apply to a field, in canonical order
///
/// The type's base validator (if any) comes first, then one validator per
/// constraint slot in `[required, min, max, pattern, maxLength]` order —
/// the type-qualified variant when one exists, the generic one otherwise,
/// nothing when neither exists. Unrecognized combinations never error.
///
/// Selection depends only on the field type: validators for constraints the
/// field does not declare are included and no-op at run time. The returned
/// order is reproduced identically on every call; whether to stop at the
/// first failure or collect all of them is the caller's policy.
pub fn validators_for(constraints: &FieldConstraints) -> Vec<ValidatorFn> {
    let mut actions = Vec::with_capacity(1 + CONSTRAINT_ORDER.len());

    if let Some(field_type) = constraints.field_type {
        if let Some(action) = base_validator(field_type) {
            actions.push(action);
        }
    }

    for name in CONSTRAINT_ORDER {
        let resolved = constraints
            .field_type
            .and_then(|field_type| qualified_validator(field_type, name))
            .or_else(|| generic_validator(name));
        if let Some(action) = resolved {
            tracing::trace!(slot = name.key(), "validator resolved");
            actions.push(action);
        }
    }

    actions
}

/// Convenience entry point resolving straight from a property bag
pub fn validators_for_props(props: &FieldProps) -> Vec<ValidatorFn> {
    validators_for(&FieldConstraints::from_props(props))
}
