//! Deduplicate and rank opportunity candidates.

use std::collections::hash_map::{Entry, HashMap};

use crate::opportunity::{Opportunity, OpportunityPolicy};

/// Collapse candidates that share a signature, keeping the best variant.
///
/// Output order is the order in which each signature was first seen, so the
/// result is deterministic for a given candidate sequence.
pub fn deduplicate(candidates: impl IntoIterator<Item = Opportunity>) -> Vec<Opportunity> {
    let mut unique: Vec<Opportunity> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        match seen.entry(candidate.signature()) {
            Entry::Occupied(slot) => {
                let kept = &mut unique[*slot.get()];
                if candidate.is_better_than(kept) {
                    *kept = candidate;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(unique.len());
                unique.push(candidate);
            }
        }
    }

    unique
}

/// Apply the leave budget, deduplicate, sort best first and keep the top
/// `policy.top_n`.
///
/// Ties under the ranking order keep their first-seen order.
pub fn rank_opportunities(candidates: Vec<Opportunity>, policy: &OpportunityPolicy) -> Vec<Opportunity> {
    let within_budget = candidates.into_iter().filter(|candidate| {
        policy
            .leave_budget
            .is_none_or(|budget| candidate.cost_vacation_days <= budget)
    });

    let mut ranked = deduplicate(within_budget);
    ranked.sort_by(Opportunity::rank_cmp);
    ranked.truncate(policy.top_n);
    ranked
}
