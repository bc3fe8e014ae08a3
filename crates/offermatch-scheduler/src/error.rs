// Allow unused assignments for diagnostic fields - they're used by the macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// A constraint did not hold against an offer
///
/// This is an ordinary, expected outcome of a scheduling cycle — it means
/// "try the next offer", never that the cycle should abort.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ConstraintError {
    /// The offer has less of a scalar resource than the task requires
    #[error("Insufficient {resource}: required {required}, available {available}")]
    #[diagnostic(
        code(offermatch::insufficient_resource),
        help("The task stays pending until the cluster manager offers a larger bundle")
    )]
    InsufficientResource {
        resource: String,
        required: f64,
        available: f64,
    },

    /// The offer does not carry the required attribute value
    ///
    /// Covers both a present-but-different value and a missing attribute;
    /// the caller treats them identically.
    #[error(
        "Attribute {attribute} does not match: expected {expected}, offer has {}",
        .found.as_deref().unwrap_or("no such attribute")
    )]
    #[diagnostic(
        code(offermatch::attribute_mismatch),
        help("Check the task's placement requirements against the agent's advertised attributes")
    )]
    AttributeMismatch {
        attribute: String,
        expected: String,
        found: Option<String>,
    },
}

impl ConstraintError {
    /// Create an InsufficientResource error
    pub fn insufficient_resource(
        resource: impl Into<String>,
        required: f64,
        available: f64,
    ) -> Self {
        Self::InsufficientResource {
            resource: resource.into(),
            required,
            available,
        }
    }

    /// Create an AttributeMismatch error
    pub fn attribute_mismatch(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        found: Option<String>,
    ) -> Self {
        Self::AttributeMismatch {
            attribute: attribute.into(),
            expected: expected.into(),
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_distinguishes_absent_attribute() {
        let wrong_value = ConstraintError::attribute_mismatch(
            "rack",
            "rack-a",
            Some("rack-c".to_string()),
        );
        assert!(wrong_value.to_string().contains("rack-c"));

        let absent = ConstraintError::attribute_mismatch("region", "stockholm", None);
        assert!(absent.to_string().contains("no such attribute"));
    }
}
