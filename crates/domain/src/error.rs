//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`LabdotError`]
//! via `#[from]`. Probe failures are never errors: they are classifications.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum LabdotError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced indicator does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Violations of domain invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An indicator id was empty or whitespace only.
    #[error("indicator id must not be empty")]
    EmptyId,

    /// An endpoint was empty or whitespace only.
    #[error("endpoint must not be empty")]
    EmptyEndpoint,

    /// Two indicators were registered under the same id.
    #[error("indicator `{0}` is already registered")]
    DuplicateId(String),
}

/// Lookup of a named resource failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    /// Kind of resource (e.g. `"Indicator"`).
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_duplicate_id_with_the_id() {
        let err = ValidationError::DuplicateId("nas".to_string());
        assert_eq!(err.to_string(), "indicator `nas` is already registered");
    }

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Indicator",
            id: "router".to_string(),
        };
        assert_eq!(err.to_string(), "Indicator `router` not found");
    }

    #[test]
    fn should_convert_validation_error_into_labdot_error() {
        let err: LabdotError = ValidationError::EmptyId.into();
        assert!(matches!(err, LabdotError::Validation(ValidationError::EmptyId)));
    }

    #[test]
    fn should_convert_not_found_error_into_labdot_error() {
        let err: LabdotError = NotFoundError {
            entity: "Indicator",
            id: "x".to_string(),
        }
        .into();
        assert!(matches!(err, LabdotError::NotFound(_)));
    }
}
