use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scalar resource name the cluster manager uses for CPU cores
pub const RESOURCE_CPUS: &str = "cpus";

/// Scalar resource name the cluster manager uses for memory (MiB)
pub const RESOURCE_MEM: &str = "mem";

/// A resource offer advertised by the cluster manager for one agent
///
/// Offers are cycle-scoped snapshots: the driver populates a fresh batch each
/// scheduling cycle and the matcher only ever reads them. Scalar quantities
/// are unit-less floats with caller-defined semantics (cores, MiB).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Offer identifier assigned by the cluster manager
    pub id: String,
    /// Identifier of the agent (machine) backing this offer
    pub agent_id: String,
    /// Hostname of the agent, for logging and launch bookkeeping
    pub hostname: String,
    /// Available scalar resources by name
    pub resources: HashMap<String, f64>,
    /// Machine attributes by name (string-valued only)
    pub attributes: HashMap<String, String>,
}

impl Offer {
    /// Create an offer with no resources or attributes
    pub fn new(
        id: impl Into<String>,
        agent_id: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            agent_id: agent_id.into(),
            hostname: hostname.into(),
            resources: HashMap::new(),
            attributes: HashMap::new(),
        }
    }

    /// Add an available scalar resource
    pub fn with_resource(mut self, name: impl Into<String>, quantity: f64) -> Self {
        self.resources.insert(name.into(), quantity);
        self
    }

    /// Add a machine attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Available quantity of a named resource
    ///
    /// A resource the offer does not advertise reads as zero availability,
    /// not as an error; an agent offering no CPU of a given kind is a valid
    /// real-world state.
    pub fn resource(&self, name: &str) -> f64 {
        self.resources.get(name).copied().unwrap_or(0.0)
    }

    /// Value of a named attribute, if the agent advertises it
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One placement requirement declared by a task: attribute name must equal value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRequirement {
    /// Attribute name to look up on the offer
    pub name: String,
    /// Required attribute value (exact string equality)
    pub value: String,
}

impl AttributeRequirement {
    /// Create a new placement requirement
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The matching-relevant subset of a pending task's declared fields
///
/// Derived from the task entity owned by the task queue; the matcher never
/// mutates the task itself. Placement requirements keep declaration order
/// because it determines which failure is reported first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskProfile {
    /// Required CPU quantity (cores)
    pub task_cpus: f64,
    /// Required memory quantity (MiB)
    pub task_mem: f64,
    /// Required machine attributes, in declaration order
    #[serde(default)]
    pub placement: Vec<AttributeRequirement>,
}

impl TaskProfile {
    /// Create a profile with resource requirements only
    pub fn new(task_cpus: f64, task_mem: f64) -> Self {
        Self {
            task_cpus,
            task_mem,
            placement: Vec::new(),
        }
    }

    /// Add a placement requirement
    pub fn with_placement(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.placement.push(AttributeRequirement::new(name, value));
        self
    }

    /// Check the profile is well-formed before it enters a scheduling cycle
    ///
    /// The matcher itself tolerates any profile; this is an admission check
    /// for the task queue to reject nonsense declarations early.
    pub fn validate(&self) -> crate::Result<()> {
        if self.task_cpus < 0.0 {
            return Err(crate::CoreError::invalid_profile(format!(
                "task_cpus must be non-negative, got {}",
                self.task_cpus
            )));
        }
        if self.task_mem < 0.0 {
            return Err(crate::CoreError::invalid_profile(format!(
                "task_mem must be non-negative, got {}",
                self.task_mem
            )));
        }
        for requirement in &self.placement {
            if requirement.name.is_empty() {
                return Err(crate::CoreError::invalid_profile(
                    "placement requirement has an empty attribute name",
                ));
            }
        }
        Ok(())
    }
}
