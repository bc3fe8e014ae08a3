use crate::constraint::ConstraintSet;
use offermatch_core::{Offer, TaskProfile};
use tracing::{debug, info};

/// Find the first offer in the batch that satisfies a task's requirements
///
/// Scans `offers` in input order and selects the first one whose full
/// constraint set succeeds (first-fit; no attempt is made to find a tighter
/// fit later in the batch). Returns the selected offer, if any, together
/// with every unselected offer in original relative order, for the next
/// task's evaluation or for decline.
///
/// The call is a pure computation over its inputs: offers are never mutated
/// and no resource accounting is performed, so each call sees whole,
/// undiminished offers.
pub fn match_offer(task: &TaskProfile, offers: Vec<Offer>) -> (Option<Offer>, Vec<Offer>) {
    let constraints = ConstraintSet::for_task(task);

    let mut selected = None;
    let mut remaining = Vec::with_capacity(offers.len());

    for offer in offers {
        if selected.is_some() {
            remaining.push(offer);
            continue;
        }

        match constraints.first_failure(&offer) {
            None => {
                info!(
                    "Selected offer {} on agent {} ({})",
                    offer.id, offer.agent_id, offer.hostname
                );
                selected = Some(offer);
            }
            Some((constraint, reason)) => {
                debug!(
                    "Offer {} filtered out by {}: {}",
                    offer.id,
                    constraint.name(),
                    reason
                );
                remaining.push(offer);
            }
        }
    }

    if selected.is_none() {
        debug!(
            "No offer matched task requirements (cpus {}, mem {}, {} placement constraints)",
            task.task_cpus,
            task.task_mem,
            task.placement.len()
        );
    }

    (selected, remaining)
}
