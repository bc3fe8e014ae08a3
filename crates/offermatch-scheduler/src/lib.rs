//! Offermatch Scheduler - Task to resource-offer matching
//!
//! This crate provides:
//! - Constraint predicates (resource thresholds, attribute equality)
//! - Constraint set construction from a task's requirement profile
//! - First-fit offer evaluation over an ordered offer batch
//!
//! The matching core is synchronous and side-effect-free; the surrounding
//! scheduling cycle driver owns offer subscription, launch and decline
//! calls, and task state transitions.

pub mod constraint;
pub mod error;
pub mod evaluator;

// Re-export commonly used types
pub use constraint::{
    cpu_available, has_attribute, memory_available, resource_available, Constraint, ConstraintSet,
};
pub use error::ConstraintError;
pub use evaluator::match_offer;
