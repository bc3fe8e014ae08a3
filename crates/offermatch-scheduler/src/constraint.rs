use crate::error::ConstraintError;
use offermatch_core::{Offer, TaskProfile, RESOURCE_CPUS, RESOURCE_MEM};

/// Constraint predicate trait
///
/// A constraint is a pure function of an offer: it holds no per-evaluation
/// state and never mutates the offer, so one instance is safe to reuse
/// across offers and cycles.
pub trait Constraint: Send + Sync {
    /// Check the constraint against an offer
    fn matches(&self, offer: &Offer) -> Result<(), ConstraintError>;

    /// Name of the constraint, for rejection logging
    fn name(&self) -> &str;
}

/// Requires at least a minimum quantity of one named scalar resource
///
/// One parameterized type covers every scalar resource the cluster manager
/// can advertise; CPU and memory are just the two standard instances.
pub struct ResourceThreshold {
    resource: String,
    minimum: f64,
}

impl Constraint for ResourceThreshold {
    fn matches(&self, offer: &Offer) -> Result<(), ConstraintError> {
        // Absent resource reads as zero availability, which still satisfies
        // a zero minimum. Direct comparison, exact equality passes.
        let available = offer.resource(&self.resource);

        if available < self.minimum {
            return Err(ConstraintError::insufficient_resource(
                &self.resource,
                self.minimum,
                available,
            ));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "ResourceThreshold"
    }
}

/// Requires an offer attribute to equal an expected value exactly
pub struct AttributeEquals {
    attribute: String,
    expected: String,
}

impl Constraint for AttributeEquals {
    fn matches(&self, offer: &Offer) -> Result<(), ConstraintError> {
        match offer.attribute(&self.attribute) {
            Some(value) if value == self.expected => Ok(()),
            found => Err(ConstraintError::attribute_mismatch(
                &self.attribute,
                &self.expected,
                found.map(str::to_string),
            )),
        }
    }

    fn name(&self) -> &str {
        "AttributeEquals"
    }
}

/// Constraint on any named scalar resource
pub fn resource_available(resource: impl Into<String>, minimum: f64) -> Box<dyn Constraint> {
    Box::new(ResourceThreshold {
        resource: resource.into(),
        minimum,
    })
}

/// Constraint on available CPU cores
pub fn cpu_available(minimum: f64) -> Box<dyn Constraint> {
    resource_available(RESOURCE_CPUS, minimum)
}

/// Constraint on available memory
pub fn memory_available(minimum: f64) -> Box<dyn Constraint> {
    resource_available(RESOURCE_MEM, minimum)
}

/// Constraint on an offer attribute value
pub fn has_attribute(
    attribute: impl Into<String>,
    expected: impl Into<String>,
) -> Box<dyn Constraint> {
    Box::new(AttributeEquals {
        attribute: attribute.into(),
        expected: expected.into(),
    })
}

/// The conjunction of every constraint derived from one task's profile
///
/// Cycle-scoped: built once per task per cycle and discarded afterwards.
pub struct ConstraintSet {
    constraints: Vec<Box<dyn Constraint>>,
}

impl ConstraintSet {
    /// Build the constraint set for a task's requirement profile
    ///
    /// Order is CPU, memory, then placement requirements in declaration
    /// order. AND semantics are order-independent, but the first failure in
    /// this order is the one reported.
    pub fn for_task(task: &TaskProfile) -> Self {
        let mut constraints = vec![
            cpu_available(task.task_cpus),
            memory_available(task.task_mem),
        ];

        for requirement in &task.placement {
            constraints.push(has_attribute(&requirement.name, &requirement.value));
        }

        Self { constraints }
    }

    /// Build a set from explicit constraints
    pub fn new(constraints: Vec<Box<dyn Constraint>>) -> Self {
        Self { constraints }
    }

    /// Evaluate every constraint against an offer
    ///
    /// Short-circuits on the first failure; an empty set trivially succeeds.
    pub fn evaluate(&self, offer: &Offer) -> Result<(), ConstraintError> {
        for constraint in &self.constraints {
            constraint.matches(offer)?;
        }
        Ok(())
    }

    /// Find the first failing constraint, if any, with its error
    pub fn first_failure(&self, offer: &Offer) -> Option<(&dyn Constraint, ConstraintError)> {
        for constraint in &self.constraints {
            if let Err(e) = constraint.matches(offer) {
                return Some((constraint.as_ref(), e));
            }
        }
        None
    }

    /// Number of constraints in the set
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the set has no constraints
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer_a() -> Offer {
        Offer::new("offer-a", "agent-1234", "localhost")
            .with_resource(RESOURCE_CPUS, 0.6)
            .with_resource(RESOURCE_MEM, 200.0)
            .with_attribute("rack", "rack-a")
    }

    #[test]
    fn test_cpu_available_above() {
        assert!(cpu_available(0.4).matches(&offer_a()).is_ok());
    }

    #[test]
    fn test_cpu_available_below() {
        let err = cpu_available(0.8).matches(&offer_a()).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::insufficient_resource(RESOURCE_CPUS, 0.8, 0.6)
        );
    }

    #[test]
    fn test_cpu_available_exact_boundary_passes() {
        assert!(cpu_available(0.6).matches(&offer_a()).is_ok());
    }

    #[test]
    fn test_memory_available_above() {
        assert!(memory_available(128.0).matches(&offer_a()).is_ok());
    }

    #[test]
    fn test_memory_available_below() {
        let err = memory_available(256.0).matches(&offer_a()).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::insufficient_resource(RESOURCE_MEM, 256.0, 200.0)
        );
    }

    #[test]
    fn test_absent_resource_counts_as_zero() {
        let err = resource_available("gpus", 1.0).matches(&offer_a()).unwrap_err();
        assert_eq!(err, ConstraintError::insufficient_resource("gpus", 1.0, 0.0));

        // Policy: a zero minimum is satisfied even when the key is absent.
        assert!(resource_available("gpus", 0.0).matches(&offer_a()).is_ok());
    }

    #[test]
    fn test_has_attribute_matches() {
        assert!(has_attribute("rack", "rack-a").matches(&offer_a()).is_ok());
    }

    #[test]
    fn test_has_attribute_wrong_value() {
        let err = has_attribute("rack", "rack-c").matches(&offer_a()).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::attribute_mismatch("rack", "rack-c", Some("rack-a".to_string()))
        );
    }

    #[test]
    fn test_has_attribute_missing() {
        let err = has_attribute("region", "stockholm")
            .matches(&offer_a())
            .unwrap_err();
        assert_eq!(
            err,
            ConstraintError::attribute_mismatch("region", "stockholm", None)
        );
    }

    #[test]
    fn test_constraint_set_for_task() {
        let task = TaskProfile::new(0.4, 128.0).with_placement("rack", "rack-a");
        let set = ConstraintSet::for_task(&task);

        assert_eq!(set.len(), 3);
        assert!(set.evaluate(&offer_a()).is_ok());
    }

    #[test]
    fn test_constraint_set_reports_first_failure_in_order() {
        // Both CPU and memory are short; CPU comes first in the set.
        let task = TaskProfile::new(2.0, 712.0);
        let set = ConstraintSet::for_task(&task);

        let err = set.evaluate(&offer_a()).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::insufficient_resource(RESOURCE_CPUS, 2.0, 0.6)
        );
    }

    #[test]
    fn test_constraint_set_placement_failure() {
        let task = TaskProfile::new(0.4, 128.0).with_placement("rack", "rack-c");
        let set = ConstraintSet::for_task(&task);

        let (constraint, err) = set.first_failure(&offer_a()).unwrap();
        assert_eq!(constraint.name(), "AttributeEquals");
        assert_eq!(
            err,
            ConstraintError::attribute_mismatch("rack", "rack-c", Some("rack-a".to_string()))
        );
    }

    #[test]
    fn test_empty_constraint_set_trivially_succeeds() {
        let set = ConstraintSet::new(Vec::new());
        assert!(set.is_empty());
        assert!(set.evaluate(&offer_a()).is_ok());
    }
}
