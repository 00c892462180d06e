use super::indexer::GroupPartition;
use super::refine::Contact;
use crate::core::models::record::InteractionRecord;

/// Turns the contacts of one target group into output records, preserving their order.
pub fn assemble(partition: &GroupPartition, target: usize, contacts: &[Contact]) -> Vec<InteractionRecord> {
    let target_name = partition.name(target);
    contacts
        .iter()
        .map(|contact| {
            InteractionRecord::new(target_name, partition.name(contact.partner), contact.distance)
        })
        .collect()
}
