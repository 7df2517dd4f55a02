//! Greedy Seat Allocator
//!
//! Walks tables in ascending table-number order and fills each one to its
//! declared capacity before moving to the next.

use shared::models::{Guest, SeatAssignment, Table};
use std::collections::HashMap;

/// Propose seats for every unassigned guest
///
/// Already-seated guests are left alone and do not appear in the output,
/// but the seats they occupy count against their table's capacity, so the
/// proposal never turns a table overfull. Tables already full (or overfull
/// from a manual override) receive nobody. Guests left over once the
/// tables run out stay unassigned.
///
/// Output keeps the input order of the guests it seats.
pub fn auto_distribute(guests: &[Guest], tables: &[Table]) -> Vec<SeatAssignment> {
    let mut ordered: Vec<&Table> = tables.iter().collect();
    ordered.sort_by_key(|t| t.table_number);

    // Seats already taken per table number, consumed as tables are visited
    let mut taken: HashMap<u32, u32> = HashMap::new();
    for table_number in guests.iter().filter_map(|g| g.table_number) {
        *taken.entry(table_number).or_default() += 1;
    }

    let mut unassigned = guests.iter().filter(|g| g.table_number.is_none());
    let mut assignments = Vec::new();

    'tables: for table in ordered {
        let existing = taken.entry(table.table_number).or_default();
        let already = (*existing).min(table.capacity);
        *existing -= already;

        let free = table.capacity - already;
        for _ in 0..free {
            let Some(guest) = unassigned.next() else {
                break 'tables;
            };
            assignments.push(SeatAssignment {
                guest_id: guest.id.clone(),
                table_number: table.table_number,
            });
        }
    }

    let leftover = unassigned.count();
    if leftover > 0 {
        tracing::debug!(
            seated = assignments.len(),
            leftover,
            "Tables exhausted before every guest was seated"
        );
    } else {
        tracing::debug!(seated = assignments.len(), "Auto distribution complete");
    }

    assignments
}

/// Clear every seat and distribute the whole guest list again
///
/// Manual seating choices are discarded. Callers that want to keep some of
/// them should drop those guests (and their seats) from the input first.
pub fn redistribute(guests: &[Guest], tables: &[Table]) -> Vec<SeatAssignment> {
    let cleared: Vec<Guest> = guests
        .iter()
        .cloned()
        .map(|mut guest| {
            guest.table_number = None;
            guest
        })
        .collect();

    auto_distribute(&cleared, tables)
}

/// Write a distribution onto the caller's guest list
///
/// Returns the number of guests whose table number changed. Proposals for
/// unknown guest ids are skipped.
pub fn apply_distribution(guests: &mut [Guest], distribution: &[SeatAssignment]) -> usize {
    let index: HashMap<&str, usize> = distribution
        .iter()
        .enumerate()
        .map(|(i, a)| (a.guest_id.as_str(), i))
        .collect();

    let mut changed = 0;
    let mut matched = 0;
    for guest in guests.iter_mut() {
        let Some(&i) = index.get(guest.id.as_str()) else {
            continue;
        };
        matched += 1;
        let target = Some(distribution[i].table_number);
        if guest.table_number != target {
            guest.table_number = target;
            changed += 1;
        }
    }

    if matched < distribution.len() {
        tracing::debug!(
            skipped = distribution.len() - matched,
            "Distribution referenced unknown guests"
        );
    }

    changed
}
